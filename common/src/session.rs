//! ページ状態マシン
//!
//! `Idle → FileSelected → Converting → Converted` の遷移を、UIフレームワークに
//! 依存しない純粋な関数として実装する。非同期処理（読み込み・タイマー）は
//! 開始時に発行される [`RunTicket`] を持ち回り、古いチケットの結果は破棄される。

use crate::error::{Error, Result};
use crate::filename::svg_file_name;
use crate::progress::{Progress, ProgressSchedule, Tick};
use crate::svg::{ConversionResult, PNG_MIME};

/// 選択ファイルの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionId(u64);

/// 変換実行のチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunTicket {
    selection: SelectionId,
    run: u64,
}

impl RunTicket {
    pub fn selection(&self) -> SelectionId {
        self.selection
    }
}

/// ユーザーが選択したファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub id: SelectionId,
    pub name: String,
    pub mime_type: String,
}

/// ページの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileSelected,
    Converting,
    Converted,
}

/// ダウンロード対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Download<'a> {
    pub file_name: &'a str,
    pub svg: &'a str,
}

impl Download<'_> {
    /// 保存時のファイル名
    pub fn output_name(&self) -> String {
        svg_file_name(self.file_name)
    }
}

/// MIMEタイプがPNGかどうか
pub fn is_png_mime(mime_type: &str) -> bool {
    mime_type == PNG_MIME
}

/// 変換セッション
#[derive(Debug, Clone, Default)]
pub struct Session {
    schedule: ProgressSchedule,
    selected: Option<SelectedFile>,
    converting: bool,
    progress: Progress,
    result: Option<ConversionResult>,
    active: Option<RunTicket>,
    next_selection: u64,
    next_run: u64,
}

impl Session {
    pub fn new(schedule: ProgressSchedule) -> Self {
        Self {
            schedule: schedule.normalized(),
            ..Self::default()
        }
    }

    pub fn schedule(&self) -> &ProgressSchedule {
        &self.schedule
    }

    pub fn phase(&self) -> Phase {
        match (&self.selected, self.converting, &self.result) {
            (None, _, _) => Phase::Idle,
            (Some(_), true, _) => Phase::Converting,
            (Some(_), false, Some(_)) => Phase::Converted,
            (Some(_), false, None) => Phase::FileSelected,
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn is_converting(&self) -> bool {
        self.converting
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    /// ファイルを受け付ける
    ///
    /// PNG以外は状態を変えずに `UnsupportedType` を返す。受け付けた場合は
    /// 以前の変換結果を破棄し、実行中の変換があればそれを無効にする。
    pub fn select(&mut self, name: impl Into<String>, mime_type: &str) -> Result<SelectionId> {
        if !is_png_mime(mime_type) {
            return Err(Error::UnsupportedType(mime_type.to_string()));
        }

        self.next_selection += 1;
        let id = SelectionId(self.next_selection);
        let name = name.into();
        log::debug!("selected {name} ({mime_type})");

        if let Some(stale) = self.active.take() {
            log::debug!("superseding run {} for a new selection", stale.run);
        }
        self.selected = Some(SelectedFile {
            id,
            name,
            mime_type: mime_type.to_string(),
        });
        self.converting = false;
        self.progress.reset();
        self.result = None;
        Ok(id)
    }

    /// 変換を開始する。`FileSelected` 以外では何もしない。
    pub fn begin(&mut self) -> Option<RunTicket> {
        if self.phase() != Phase::FileSelected {
            return None;
        }
        let selection = self.selected.as_ref()?.id;

        self.next_run += 1;
        let ticket = RunTicket {
            selection,
            run: self.next_run,
        };
        self.converting = true;
        self.progress.reset();
        self.active = Some(ticket);
        log::debug!("run {} started", ticket.run);
        Some(ticket)
    }

    fn is_active(&self, ticket: RunTicket) -> bool {
        self.active == Some(ticket)
    }

    /// タイマーの1ティック
    pub fn tick(&mut self, ticket: RunTicket) -> Tick {
        if !self.is_active(ticket) {
            return Tick::Stale;
        }
        self.progress.advance(&self.schedule)
    }

    /// 変換完了。古いチケットなら結果を破棄して `false` を返す。
    pub fn complete(&mut self, ticket: RunTicket, result: ConversionResult) -> bool {
        if !self.is_active(ticket) {
            log::warn!("discarding result of superseded run {}", ticket.run);
            return false;
        }
        self.active = None;
        self.converting = false;
        self.progress.complete();
        self.result = Some(result);
        log::debug!("run {} converted", ticket.run);
        true
    }

    /// 変換失敗。ファイル選択済みの状態に戻す。
    pub fn fail(&mut self, ticket: RunTicket) -> bool {
        if !self.is_active(ticket) {
            log::warn!("ignoring failure of superseded run {}", ticket.run);
            return false;
        }
        self.active = None;
        self.converting = false;
        self.progress.reset();
        log::debug!("run {} failed, back to file-selected", ticket.run);
        true
    }

    /// ダウンロード対象を取得
    pub fn download(&self) -> Result<Download<'_>> {
        match (&self.selected, &self.result) {
            (Some(file), Some(result)) => Ok(Download {
                file_name: &file.name,
                svg: &result.svg,
            }),
            (Some(file), None) => Err(Error::NotConverted(file.name.clone())),
            (None, _) => Err(Error::NotConverted("no file selected".to_string())),
        }
    }
}

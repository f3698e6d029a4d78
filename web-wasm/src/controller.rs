//! 変換コントローラ
//!
//! ブラウザイベント・FileReader・タイマーを `Session` の遷移に結びつける。
//! `File` とBlob URLはSend不可のため、シグナルではなくスレッドローカルに保持する。

use std::cell::RefCell;

use gloo::file::{futures::read_as_bytes, File, ObjectUrl};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use vectorizer_common::{is_png_mime, package_png, Error, RunTicket, Session};
use wasm_bindgen_futures::spawn_local;

use crate::download::{svg_object_url, trigger_download};

thread_local! {
    static SOURCE: RefCell<Option<File>> = const { RefCell::new(None) };
    static SVG_URL: RefCell<Option<ObjectUrl>> = const { RefCell::new(None) };
}

#[derive(Clone, Copy)]
pub struct Controller {
    session: RwSignal<Session>,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::default()),
        }
    }

    pub fn session(&self) -> RwSignal<Session> {
        self.session
    }

    /// ファイルを受け付ける（ドロップ/ファイル選択共通）
    ///
    /// PNG以外は何もせずに無視する。
    pub fn accept(&self, file: File) {
        let mime_type = file.raw_mime_type();
        if !is_png_mime(&mime_type) {
            log::debug!("ignored {} ({})", file.name(), mime_type);
            return;
        }

        let name = file.name();
        let selected = self
            .session
            .try_update(|s| s.select(name, &mime_type))
            .map(|r| r.is_ok())
            .unwrap_or(false);
        if selected {
            SOURCE.with(|source| *source.borrow_mut() = Some(file));
            // 古いBlob URLはここでrevokeされる
            SVG_URL.with(|url| *url.borrow_mut() = None);
        }
    }

    /// 変換を開始する
    pub fn convert(&self) {
        let Some(file) = SOURCE.with(|source| source.borrow().clone()) else {
            return;
        };
        let Some(ticket) = self.session.try_update(|s| s.begin()).flatten() else {
            return;
        };
        let interval_ms = self.session.with_untracked(|s| s.schedule().interval_ms);

        spawn_local(self.run_progress(ticket, interval_ms));
        spawn_local(self.run_read(ticket, file));
    }

    async fn run_progress(self, ticket: RunTicket, interval_ms: u32) {
        loop {
            TimeoutFuture::new(interval_ms).await;
            match self.session.try_update(|s| s.tick(ticket)) {
                Some(tick) if tick.keeps_running() => continue,
                _ => break,
            }
        }
    }

    async fn run_read(self, ticket: RunTicket, file: File) {
        match read_as_bytes(&file).await {
            Ok(bytes) => {
                let result = package_png(&bytes);
                let url = svg_object_url(&result.svg);
                let accepted = self
                    .session
                    .try_update(|s| s.complete(ticket, result))
                    .unwrap_or(false);
                if accepted {
                    SVG_URL.with(|slot| *slot.borrow_mut() = Some(url));
                }
            }
            Err(e) => {
                log::error!("Conversion failed: {}", Error::Read(e.to_string()));
                self.session.try_update(|s| s.fail(ticket));
            }
        }
    }

    /// 変換結果をダウンロードする。結果がなければ何もしない。
    pub fn download(&self) {
        let Ok(file_name) = self
            .session
            .with_untracked(|s| s.download().map(|d| d.output_name()))
        else {
            return;
        };

        SVG_URL.with(|slot| {
            if let Some(url) = slot.borrow().as_ref() {
                if let Err(e) = trigger_download(url, &file_name) {
                    log::error!("Download failed: {}", e);
                }
            }
        });
    }

    /// 現在のBlob URL（テスト・表示用）
    pub fn svg_url(&self) -> Option<String> {
        SVG_URL.with(|slot| slot.borrow().as_ref().map(|url| url.to_string()))
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

//! 疑似プログレス
//!
//! 実際の処理量とは無関係に、一定間隔で表示上の進捗を進める。
//! タイマーによる進捗は `hold_at` で止まり、変換完了時にのみ100%になる。

use serde::{Deserialize, Serialize};

/// 完了時の進捗値
pub const COMPLETE: u8 = 100;

/// タイマーの進め方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSchedule {
    /// ティック間隔（ミリ秒）
    pub interval_ms: u32,
    /// 1ティックあたりの増分
    pub step: u8,
    /// タイマーで到達できる上限
    pub hold_at: u8,
}

impl Default for ProgressSchedule {
    fn default() -> Self {
        Self {
            interval_ms: 200,
            step: 10,
            hold_at: 90,
        }
    }
}

impl ProgressSchedule {
    /// 範囲外の値を丸めたスケジュールを返す
    pub fn normalized(self) -> Self {
        Self {
            interval_ms: self.interval_ms.max(1),
            step: self.step.clamp(1, COMPLETE),
            hold_at: self.hold_at.min(COMPLETE - 1),
        }
    }
}

/// ティックの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// 進捗が進んだ
    Advanced(u8),
    /// 上限に達した（タイマーを止める）
    Holding(u8),
    /// 既に破棄された実行のティック
    Stale,
}

impl Tick {
    /// タイマーを続けるかどうか
    pub fn keeps_running(&self) -> bool {
        matches!(self, Tick::Advanced(_))
    }
}

/// 進捗値 (0..=100)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Progress(u8);

impl Progress {
    pub fn percent(&self) -> u8 {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0 == COMPLETE
    }

    pub(crate) fn reset(&mut self) {
        self.0 = 0;
    }

    pub(crate) fn complete(&mut self) {
        self.0 = COMPLETE;
    }

    /// 1ティック分進める。上限を超えることはない。
    pub(crate) fn advance(&mut self, schedule: &ProgressSchedule) -> Tick {
        let schedule = schedule.normalized();
        if self.0 >= schedule.hold_at {
            return Tick::Holding(self.0);
        }
        self.0 = self.0.saturating_add(schedule.step).min(schedule.hold_at);
        if self.0 >= schedule.hold_at {
            Tick::Holding(self.0)
        } else {
            Tick::Advanced(self.0)
        }
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

use crate::error::{Result, VectorizerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vectorizer_common::ProgressSchedule;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 疑似プログレスの進め方
    pub progress: ProgressSchedule,
    /// 既存の出力ファイルを常に上書きする
    pub overwrite: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VectorizerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("vectorizer").join("config.json"))
    }

    /// 疑似プログレスのスケジュール
    pub fn schedule(&self) -> ProgressSchedule {
        self.progress.normalized()
    }

    pub fn set_progress_interval(&mut self, interval_ms: u32) -> Result<()> {
        if interval_ms == 0 {
            return Err(VectorizerError::Config(
                "ティック間隔は1ミリ秒以上を指定してください".into(),
            ));
        }
        self.progress.interval_ms = interval_ms;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_matches_schedule() {
        let config = Config::default();
        assert_eq!(config.schedule(), ProgressSchedule::default());
        assert!(!config.overwrite);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_progress_interval(50).unwrap();
        config.overwrite = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.schedule().interval_ms, 50);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"overwrite": true}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.overwrite);
        assert_eq!(config.progress, ProgressSchedule::default());
    }

    #[test]
    fn test_partial_progress_keeps_other_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"progress": {"interval_ms": 50}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.overwrite);
        assert_eq!(config.schedule().interval_ms, 50);
        assert_eq!(config.schedule().step, 10);
        assert_eq!(config.schedule().hold_at, 90);
    }

    #[test]
    fn test_saved_file_uses_snake_case_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["progress"]["interval_ms"], 200);
        assert_eq!(value["progress"]["hold_at"], 90);
        assert_eq!(value["overwrite"], false);
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, VectorizerError::JsonParse(_)));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = Config::default();
        assert!(config.set_progress_interval(0).is_err());
        assert_eq!(config.progress.interval_ms, 200);
    }
}

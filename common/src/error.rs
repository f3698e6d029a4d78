//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported file type: {0} (expected image/png)")]
    UnsupportedType(String),

    #[error("Read error: {0}")]
    Read(String),

    #[error("Not converted: {0}")]
    NotConverted(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unsupported_type() {
        let error = Error::UnsupportedType("image/jpeg".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Unsupported file type: image/jpeg (expected image/png)");
    }

    #[test]
    fn test_error_display_read() {
        let error = Error::Read("読み込みに失敗しました".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Read error: 読み込みに失敗しました");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::NotConverted("photo.png".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("NotConverted"));
        assert!(debug.contains("photo.png"));
    }
}

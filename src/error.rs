use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorizerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("PNGファイルではありません: {0}")]
    UnsupportedType(String),

    #[error("PNGデータとして読み込めません: {0}")]
    NotPng(String),

    #[error("出力先が既に存在します: {}（上書きするには --force を指定してください）", .0.display())]
    OutputExists(PathBuf),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] vectorizer_common::Error),
}

pub type Result<T> = std::result::Result<T, VectorizerError>;

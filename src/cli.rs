use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vectorizer")]
#[command(about = "PNGをSVGラッパーに包んで出力するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// PNGファイルをSVGに変換
    Convert {
        /// 入力PNGファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力SVGファイル（デフォルト: 入力と同じ場所に .svg）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 既存ファイルを上書き
        #[arg(short, long)]
        force: bool,

        /// プログレスバーを表示しない
        #[arg(long)]
        no_progress: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 疑似プログレスのティック間隔（ミリ秒）を設定
        #[arg(long)]
        set_progress_interval: Option<u32>,

        /// 既定の設定に戻す
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

//! PNG → SVG変換（CLI版）
//!
//! ファイル読み込みと疑似プログレスを並行させ、読み込み完了時に
//! `Session` を完了させてSVGを書き出す。

use crate::error::{Result, VectorizerError};
use image::{ImageFormat, ImageReader};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use vectorizer_common::{package_png, svg_file_name, ConversionResult, ProgressSchedule, Session};

/// 変換オプション
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub output: Option<PathBuf>,
    pub force: bool,
    pub schedule: ProgressSchedule,
    pub show_progress: bool,
}

/// 変換結果の概要
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    pub output: PathBuf,
    pub source_len: usize,
    pub svg_len: usize,
    /// 元画像のピクセルサイズ（SVG側は常に100x100）
    pub dimensions: (u32, u32),
}

/// 拡張子からMIMEタイプを決める（ブラウザの `File.type` と同じ考え方）
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?;
    ImageFormat::from_extension(ext).map(|f| f.to_mime_type())
}

/// 出力先パス（指定がなければ入力と同じフォルダ）
pub fn default_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    input.with_file_name(svg_file_name(&file_name))
}

/// 読み込んだバイト列がPNGであることを確認してからパッケージする
pub fn package_checked(file_name: &str, bytes: &[u8]) -> Result<(ConversionResult, (u32, u32))> {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => {}
        _ => return Err(VectorizerError::NotPng(file_name.to_string())),
    }

    let dimensions = ImageReader::with_format(Cursor::new(bytes), ImageFormat::Png)
        .into_dimensions()
        .map_err(|e| VectorizerError::ImageLoad(format!("{}: {}", file_name, e)))?;

    Ok((package_png(bytes), dimensions))
}

fn progress_bar(show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(100);
    let style =
        ProgressStyle::with_template("{spinner:.magenta} [{bar:40.magenta/cyan}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
    bar.set_style(style);
    bar.set_message("Converting...");
    bar
}

/// PNGファイルを1つ変換してSVGを書き出す
pub async fn convert_file(input: &Path, options: &ConvertOptions) -> Result<ConvertOutcome> {
    if !input.is_file() {
        return Err(VectorizerError::FileNotFound(input.display().to_string()));
    }

    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let mime_type = mime_from_path(input).unwrap_or("application/octet-stream");

    let mut session = Session::new(options.schedule);
    if let Err(e) = session.select(file_name.as_str(), mime_type) {
        debug!("intake rejected: {}", e);
        return Err(VectorizerError::UnsupportedType(input.display().to_string()));
    }

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    if output.exists() && !options.force {
        return Err(VectorizerError::OutputExists(output));
    }

    let ticket = session
        .begin()
        .ok_or_else(|| vectorizer_common::Error::NotConverted(file_name.clone()))?;
    let bar = progress_bar(options.show_progress);

    let read = tokio::fs::read(input.to_path_buf());
    tokio::pin!(read);

    let interval = Duration::from_millis(u64::from(session.schedule().interval_ms));
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // 最初のティックは即座に完了するので読み捨てる
    ticker.tick().await;

    let mut ticking = true;
    let read_result = loop {
        tokio::select! {
            res = &mut read => break res,
            _ = ticker.tick(), if ticking => {
                let tick = session.tick(ticket);
                bar.set_position(u64::from(session.progress().percent()));
                ticking = tick.keeps_running();
            }
        }
    };

    let packaged = read_result
        .map_err(VectorizerError::from)
        .and_then(|bytes| package_checked(&file_name, &bytes));

    let dimensions = match packaged {
        Ok((result, dimensions)) => {
            session.complete(ticket, result);
            dimensions
        }
        Err(e) => {
            session.fail(ticket);
            bar.abandon_with_message("Conversion failed");
            warn!("conversion of {} failed: {}", input.display(), e);
            return Err(e);
        }
    };

    bar.set_position(u64::from(session.progress().percent()));
    bar.finish_with_message("Conversion Complete!");

    info!(
        "source {}x{} px embedded into fixed viewBox 0 0 100 100",
        dimensions.0, dimensions.1
    );

    let download = session.download()?;
    tokio::fs::write(&output, download.svg).await?;

    let result = session
        .result()
        .ok_or_else(|| vectorizer_common::Error::NotConverted(file_name.clone()))?;
    if let Some(uri) = result.data_uri() {
        debug!("embedded data URI: {} bytes", uri.len());
    }
    Ok(ConvertOutcome {
        output,
        source_len: result.source_len,
        svg_len: result.svg_len(),
        dimensions,
    })
}

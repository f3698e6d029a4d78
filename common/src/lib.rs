//! Vectorizer Common Library
//!
//! CLIとWeb(WASM)で共有される変換処理と状態マシン

pub mod error;
pub mod filename;
pub mod progress;
pub mod session;
pub mod svg;

pub use error::{Error, Result};
pub use filename::svg_file_name;
pub use progress::{Progress, ProgressSchedule, Tick};
pub use session::{is_png_mime, Download, Phase, RunTicket, SelectedFile, SelectionId, Session};
pub use svg::{package_png, ConversionResult, PNG_MIME, SVG_MIME};

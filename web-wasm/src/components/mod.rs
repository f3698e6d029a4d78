pub mod header;
pub mod footer;
pub mod upload_area;
pub mod convert_button;
pub mod progress_bar;
pub mod download_card;

pub mod download;
pub mod format;
pub mod geolocation;
pub mod lifecycle;
pub mod navigation;
pub mod report_pdf;
pub mod storage;
pub mod time;

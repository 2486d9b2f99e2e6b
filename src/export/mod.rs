//! Báo cáo thuế document export.
//!
//! Fetches the generated `.docx` VAT report from the reporting service
//! and delivers it through a pluggable [`FileSink`]. Transport, remote
//! rejection, and delivery failures all surface as a single
//! [`ExportError`] whose message is safe to display.
//!
//! # Example
//!
//! ```ignore
//! use thue::export::*;
//!
//! let client = ReportClient::new("http://localhost:8080/api/vat-report")
//!     .expect("client")
//!     .with_token(access_token);
//! let sink = DirectorySink::new("./downloads");
//! let outcome = client.export_report(&request, &sink).await?;
//! println!("{} ({} bytes)", outcome.file_name, outcome.bytes_written);
//! ```

mod client;
mod error;
mod filename;
mod sink;

pub use client::{
    DOCX_MIME, EXPORT_SUCCESS_MESSAGE, ExportOutcome, ReportClient, ReportRequest,
};
pub use error::{EXPORT_ERROR_PREFIX, ExportError};
pub use sink::{BufferSink, DeliveredFile, DirectorySink, FileSink};

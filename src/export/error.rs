use thiserror::Error;

/// User-facing prefix attached to every export failure message.
pub const EXPORT_ERROR_PREFIX: &str = "Lỗi khi xuất báo cáo thuế";

/// Errors that can occur while exporting a báo cáo thuế document.
///
/// All variants render with the same user-facing prefix followed by the
/// best available detail, so the message is safe to display directly.
/// Nothing is retried and nothing is swallowed; the original detail is
/// always preserved as the suffix.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// Network failure before a usable response was received.
    #[error("Lỗi khi xuất báo cáo thuế: {0}")]
    Transport(String),

    /// The reporting service rejected the request (non-2xx status).
    /// Carries the service's own `message` field when the body is
    /// structured, otherwise a generic `HTTP <status>` fallback.
    #[error("Lỗi khi xuất báo cáo thuế: {0}")]
    Remote(String),

    /// The document arrived but could not be handed to the file sink.
    #[error("Lỗi khi xuất báo cáo thuế: {0}")]
    Delivery(String),
}

//! HTTP client for the report-export endpoint.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_DISPOSITION};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ExportError;
use super::filename::{default_report_name, from_content_disposition};
use super::sink::FileSink;

/// MIME type of the generated report (a Word-processor document).
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Confirmation message returned on a successful export.
pub const EXPORT_SUCCESS_MESSAGE: &str = "Xuất báo cáo thuế thành công";

/// Parameters for one report export.
///
/// No local validation is performed — date ordering and amount sign are
/// forwarded as-is; the reporting service is the authority on validity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// First day of the period, inclusive.
    pub start_date: NaiveDate,
    /// Last day of the period, inclusive.
    pub end_date: NaiveDate,
    /// User-entered expense amount (khoản chi).
    pub khoanchi: Decimal,
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Name the document was delivered under.
    pub file_name: String,
    /// Size of the delivered document in bytes.
    pub bytes_written: usize,
    /// Human-readable confirmation, safe to display.
    pub message: String,
}

/// Client for the báo cáo thuế export service.
///
/// Holds no mutable state; concurrent exports on one client are
/// independent (no de-duplication, no cancellation). Timeouts beyond the
/// built-in 30 s are the transport's concern.
#[derive(Debug, Clone)]
pub struct ReportClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ReportClient {
    /// Create a client for the given service base URL
    /// (e.g. `http://localhost:8080/api/vat-report`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ExportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ExportError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer credential. Without one no `Authorization` header
    /// is sent; the service decides whether to reject the request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Export the report for a period via `GET /export` and deliver the
    /// resulting document through `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Transport`] on network failure,
    /// [`ExportError::Remote`] on a non-2xx response (carrying the
    /// service's own message when available), and
    /// [`ExportError::Delivery`] when the sink rejects the document.
    pub async fn export_report(
        &self,
        request: &ReportRequest,
        sink: &dyn FileSink,
    ) -> Result<ExportOutcome, ExportError> {
        let mut req = self
            .http
            .get(format!("{}/export", self.base_url))
            .query(request)
            .header(ACCEPT, "application/octet-stream");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ExportError::Transport(e.to_string()))?;
        self.deliver_response(request, resp, sink).await
    }

    /// Export via `POST /export` with a JSON body. The service accepts
    /// both forms; the response handling is identical.
    pub async fn export_report_post(
        &self,
        request: &ReportRequest,
        sink: &dyn FileSink,
    ) -> Result<ExportOutcome, ExportError> {
        let mut req = self
            .http
            .post(format!("{}/export", self.base_url))
            .json(request)
            .header(ACCEPT, "application/octet-stream");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ExportError::Transport(e.to_string()))?;
        self.deliver_response(request, resp, sink).await
    }

    async fn deliver_response(
        &self,
        request: &ReportRequest,
        resp: reqwest::Response,
        sink: &dyn FileSink,
    ) -> Result<ExportOutcome, ExportError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ExportError::Remote(remote_message(status, &body)));
        }

        // Header must be read before the body consumes the response.
        let header_name = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(from_content_disposition);

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ExportError::Transport(e.to_string()))?;

        let file_name = header_name
            .unwrap_or_else(|| default_report_name(request.start_date, request.end_date));

        sink.deliver(&bytes, DOCX_MIME, &file_name)
            .map_err(|e| ExportError::Delivery(e.to_string()))?;

        Ok(ExportOutcome {
            file_name,
            bytes_written: bytes.len(),
            message: EXPORT_SUCCESS_MESSAGE.to_string(),
        })
    }
}

/// Error body shape the reporting service uses for failures.
#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    message: Option<String>,
}

fn remote_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<RemoteErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"))
}

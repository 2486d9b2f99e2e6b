//! Download file-name derivation.

use chrono::NaiveDate;

/// Extract the suggested file name from a `Content-Disposition` header.
///
/// Takes the `filename=` parameter up to the next `;`, trimming quotes
/// and surrounding whitespace. Returns `None` when the header carries no
/// usable name, in which case the caller falls back to
/// [`default_report_name`].
pub(crate) fn from_content_disposition(header: &str) -> Option<String> {
    let idx = header.find("filename=")?;
    let rest = &header[idx + "filename=".len()..];
    let value = rest.split(';').next()?;
    let name = value.trim().trim_matches('"').trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Synthesize the default report name for a period:
/// `BaoCaoThue_<start>_den_<end>.docx` with ISO dates.
pub(crate) fn default_report_name(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "BaoCaoThue_{}_den_{}.docx",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}

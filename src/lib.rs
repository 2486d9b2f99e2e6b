//! # thue
//!
//! Client library for a hotel-management VAT reporting service: exports
//! the generated báo cáo thuế (`.docx` tax report) and computes a fixed
//! 10% VAT preview from raw dashboard figures.
//!
//! Monetary request amounts use [`rust_decimal::Decimal`]; the preview
//! computation intentionally uses `f64` because its contract is lenient
//! coercion of possibly-malformed UI input, never accounting arithmetic.
//!
//! ## Quick Start
//!
//! ```rust
//! use thue::preview::*;
//!
//! let input = PreviewInput {
//!     kithue: Some("2024-Q1".into()),
//!     khoanchi: Some("1000".into()),
//!     doanhthudichvu: Some(2000.0.into()),
//!     doanhthu: Some(500.0.into()),
//! };
//! let p = compute_preview(&input);
//! assert_eq!(p.vatkhoanchi, 100.0);
//! assert_eq!(p.tongdoanhthudichvu, 2200.0);
//! assert_eq!(p.vatdoanhthu, 50.0);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `preview` (default) | Pure 10% VAT preview computation |
//! | `export` | Async report export client (reqwest) |
//! | `all` | Everything |

#[cfg(feature = "preview")]
pub mod preview;

#[cfg(feature = "export")]
pub mod export;

// Re-export preview types at crate root for convenience
#[cfg(feature = "preview")]
pub use crate::preview::*;

//! 10% VAT preview computation for dashboard figures.
//!
//! Mirrors the reporting service's fixed 10% rate so the dashboard can show
//! the breakdown before submission. Input values come straight from UI form
//! state: every amount may arrive as a number, a numeric string, or be
//! missing entirely, and anything unparseable counts as zero.
//!
//! Wire field names are kept verbatim: `khoanchi` = expenses,
//! `doanhthudichvu` = service revenue, `doanhthu` = room revenue,
//! `kithue` = tax period.

use serde::{Deserialize, Serialize};

/// Fixed VAT rate applied uniformly to every monetary base.
pub const VAT_RATE: f64 = 0.10;

/// A raw monetary input: either already numeric or a string still to parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn as_f64(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

impl From<f64> for RawAmount {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Raw dashboard figures for one tax period (kỳ thuế).
///
/// All fields are optional; an empty input is valid and yields an
/// all-zero preview.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreviewInput {
    pub kithue: Option<String>,
    pub khoanchi: Option<RawAmount>,
    pub doanhthudichvu: Option<RawAmount>,
    pub doanhthu: Option<RawAmount>,
}

/// Computed VAT breakdown for one tax period.
///
/// For each base the derived pair satisfies `tong = base + base * VAT_RATE`
/// exactly as computed. Room revenue (`doanhthu`) carries no VAT-inclusive
/// total; the dashboard shows only the VAT share for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatPreview {
    /// Tax period label, passed through unchanged.
    pub kithue: String,
    pub khoanchi: f64,
    pub vatkhoanchi: f64,
    pub tongkhoanchi: f64,
    pub doanhthudichvu: f64,
    pub vatdoanhthudichvu: f64,
    pub tongdoanhthudichvu: f64,
    pub doanhthu: f64,
    pub vatdoanhthu: f64,
}

fn amount(raw: &Option<RawAmount>) -> f64 {
    raw.as_ref().map(RawAmount::as_f64).unwrap_or(0.0)
}

/// Compute the VAT preview for raw dashboard figures.
///
/// Pure and infallible: malformed or absent amounts degrade to zero
/// instead of erroring, and identical input always produces
/// bit-identical output.
pub fn compute_preview(input: &PreviewInput) -> VatPreview {
    let khoanchi = amount(&input.khoanchi);
    let vatkhoanchi = khoanchi * VAT_RATE;
    let tongkhoanchi = khoanchi + vatkhoanchi;

    let doanhthudichvu = amount(&input.doanhthudichvu);
    let vatdoanhthudichvu = doanhthudichvu * VAT_RATE;
    let tongdoanhthudichvu = doanhthudichvu + vatdoanhthudichvu;

    let doanhthu = amount(&input.doanhthu);
    let vatdoanhthu = doanhthu * VAT_RATE;

    VatPreview {
        kithue: input.kithue.clone().unwrap_or_default(),
        khoanchi,
        vatkhoanchi,
        tongkhoanchi,
        doanhthudichvu,
        vatdoanhthudichvu,
        tongdoanhthudichvu,
        doanhthu,
        vatdoanhthu,
    }
}

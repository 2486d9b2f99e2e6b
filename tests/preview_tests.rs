#![cfg(feature = "preview")]

use proptest::prelude::*;
use thue::preview::*;

// ---------------------------------------------------------------------------
// Worked example — dashboard figures for one quarter
// ---------------------------------------------------------------------------

#[test]
fn quarter_preview_worked_example() {
    let input = PreviewInput {
        kithue: Some("Q1".into()),
        khoanchi: Some("1000".into()),
        doanhthudichvu: Some("2000".into()),
        doanhthu: Some("500".into()),
    };
    let p = compute_preview(&input);

    assert_eq!(p.kithue, "Q1");
    assert_eq!(p.khoanchi, 1000.0);
    assert_eq!(p.vatkhoanchi, 100.0);
    assert_eq!(p.tongkhoanchi, 1100.0);
    assert_eq!(p.doanhthudichvu, 2000.0);
    assert_eq!(p.vatdoanhthudichvu, 200.0);
    assert_eq!(p.tongdoanhthudichvu, 2200.0);
    assert_eq!(p.doanhthu, 500.0);
    assert_eq!(p.vatdoanhthu, 50.0);
}

#[test]
fn empty_input_yields_all_zeros() {
    let p = compute_preview(&PreviewInput::default());
    assert_eq!(p.kithue, "");
    assert_eq!(p.khoanchi, 0.0);
    assert_eq!(p.vatkhoanchi, 0.0);
    assert_eq!(p.tongkhoanchi, 0.0);
    assert_eq!(p.doanhthudichvu, 0.0);
    assert_eq!(p.vatdoanhthudichvu, 0.0);
    assert_eq!(p.tongdoanhthudichvu, 0.0);
    assert_eq!(p.doanhthu, 0.0);
    assert_eq!(p.vatdoanhthu, 0.0);
}

#[test]
fn empty_json_object_deserializes_and_computes() {
    let input: PreviewInput = serde_json::from_str("{}").unwrap();
    let p = compute_preview(&input);
    assert_eq!(p.kithue, "");
    assert_eq!(p.tongkhoanchi, 0.0);
}

// ---------------------------------------------------------------------------
// Coercion edge cases
// ---------------------------------------------------------------------------

#[test]
fn malformed_amounts_degrade_to_zero() {
    let input = PreviewInput {
        khoanchi: Some("not a number".into()),
        doanhthudichvu: Some("".into()),
        doanhthu: Some("1.2.3".into()),
        ..Default::default()
    };
    let p = compute_preview(&input);
    assert_eq!(p.khoanchi, 0.0);
    assert_eq!(p.doanhthudichvu, 0.0);
    assert_eq!(p.doanhthu, 0.0);
}

#[test]
fn negative_amounts_pass_through() {
    // No local validation; sign handling is the service's concern.
    let input = PreviewInput {
        khoanchi: Some((-100.0).into()),
        ..Default::default()
    };
    let p = compute_preview(&input);
    assert_eq!(p.vatkhoanchi, -10.0);
    assert_eq!(p.tongkhoanchi, -110.0);
}

#[test]
fn rate_is_ten_percent() {
    assert_eq!(VAT_RATE, 0.10);
}

// ---------------------------------------------------------------------------
// Purity
// ---------------------------------------------------------------------------

#[test]
fn identical_input_gives_bitwise_identical_output() {
    let input = PreviewInput {
        kithue: Some("2024-Q1".into()),
        khoanchi: Some("1234.56".into()),
        doanhthudichvu: Some(7890.12.into()),
        doanhthu: Some("0.1".into()),
    };
    let a = compute_preview(&input);
    let b = compute_preview(&input);
    assert_eq!(a, b);
    assert_eq!(a.vatkhoanchi.to_bits(), b.vatkhoanchi.to_bits());
    assert_eq!(a.tongkhoanchi.to_bits(), b.tongkhoanchi.to_bits());
    assert_eq!(a.vatdoanhthu.to_bits(), b.vatdoanhthu.to_bits());
}

// ---------------------------------------------------------------------------
// Arithmetic invariants
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn total_equals_base_plus_vat(base in -1.0e12f64..1.0e12) {
        let input = PreviewInput {
            khoanchi: Some(base.into()),
            doanhthudichvu: Some(base.into()),
            ..Default::default()
        };
        let p = compute_preview(&input);
        prop_assert_eq!(p.vatkhoanchi, base * VAT_RATE);
        prop_assert_eq!(p.tongkhoanchi, base + base * VAT_RATE);
        prop_assert_eq!(p.tongdoanhthudichvu, p.doanhthudichvu + p.vatdoanhthudichvu);
    }

    #[test]
    fn numeric_strings_round_trip(n in 0u32..1_000_000) {
        let input = PreviewInput {
            doanhthu: Some(n.to_string().into()),
            ..Default::default()
        };
        let p = compute_preview(&input);
        prop_assert_eq!(p.doanhthu, f64::from(n));
        prop_assert_eq!(p.vatdoanhthu, f64::from(n) * VAT_RATE);
    }
}

//! Worked examples against the public library API

use gstc::core::jurisdiction::{indian_locations, state_codes};
use gstc::{
    calculate_gst, calculate_gst_from_gstin, calculate_tds, GstDirection, GstError, GstRegime,
    TdsError, DEFAULT_GST_RATE, DEFAULT_TDS_PERCENT,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tamil Nadu supplier selling to a Chandigarh buyer
#[test]
fn tamil_nadu_to_chandigarh_as_supplier() {
    let result = calculate_gst_from_gstin(
        "33ABCDE1234F1Z5",
        "04ABCDE5678K1Z1",
        dec!(1500),
        DEFAULT_GST_RATE,
        GstDirection::default(),
    )
    .unwrap();

    assert_eq!(result.gst.regime.label(), "IGST (Inter-State)");
    assert_eq!(result.gst.taxable_value, dec!(1500));
    assert_eq!(result.gst.rate, dec!(18));
    assert_eq!(result.gst.igst, dec!(270));
    assert_eq!(result.gst.cgst, Decimal::ZERO);
    assert_eq!(result.gst.sgst, Decimal::ZERO);
    assert_eq!(result.gst.ugst, Decimal::ZERO);
    assert_eq!(result.gst.total_gst, dec!(270));
    assert_eq!(result.gst.gross_amount, dec!(1770));
    assert_eq!(result.gst_type.label(), "Output GST");
}

/// Chandigarh supplier, booked by the Tamil Nadu buyer
#[test]
fn chandigarh_to_tamil_nadu_as_buyer() {
    let result = calculate_gst_from_gstin(
        "04ABCDE5678K1Z1",
        "33ABCDE1234F1Z5",
        dec!(1500),
        DEFAULT_GST_RATE,
        GstDirection::from_supplier(false),
    )
    .unwrap();

    assert_eq!(result.gst.regime, GstRegime::InterState);
    assert_eq!(result.gst.igst, dec!(270));
    assert_eq!(result.gst.gross_amount, dec!(1770));
    assert_eq!(result.gst_type.label(), "Input GST");
}

#[test]
fn delhi_intra_state() {
    let result = calculate_gst("Delhi", "Delhi", dec!(1000), dec!(18)).unwrap();
    assert_eq!(result.regime.label(), "CGST + SGST (Intra-State)");
    assert_eq!(result.cgst, dec!(90));
    assert_eq!(result.sgst, dec!(90));
    assert_eq!(result.igst, Decimal::ZERO);
    assert_eq!(result.ugst, Decimal::ZERO);
    assert_eq!(result.total_gst, dec!(180));
}

#[test]
fn ladakh_intra_ut() {
    let result = calculate_gst("Ladakh", "Ladakh", dec!(1000), dec!(18)).unwrap();
    assert_eq!(result.regime.label(), "CGST + UGST (Intra-UT)");
    assert_eq!(result.cgst, dec!(90));
    assert_eq!(result.ugst, dec!(90));
    assert_eq!(result.sgst, Decimal::ZERO);
}

#[test]
fn every_recognised_location_pairs_with_itself() {
    for location in indian_locations() {
        let result = calculate_gst(location, location, dec!(100), dec!(18)).unwrap();
        assert_ne!(result.regime, GstRegime::InterState, "{location}");
        assert_eq!(result.total_gst, dec!(18));
    }
}

#[test]
fn every_state_code_resolves_through_gstin() {
    for (code, _) in state_codes() {
        let gstin = format!("{code}ABCDE1234F1Z5");
        let result =
            calculate_gst_from_gstin(&gstin, &gstin, dec!(100), dec!(18), GstDirection::Output);
        assert!(result.is_ok(), "{gstin}: {result:?}");
    }
}

#[test]
fn andhra_pradesh_codes_are_the_same_state() {
    let result = calculate_gst_from_gstin(
        "28ABCDE1234F1Z5",
        "37ABCDE1234F1Z5",
        dec!(100),
        dec!(18),
        GstDirection::Output,
    )
    .unwrap();
    assert_eq!(result.gst.regime, GstRegime::IntraState);
}

#[test]
fn invalid_gstins_are_rejected() {
    for bad in ["33abcde1234f1z5", "33ABCDE1234F1Z", "", "33ABCDE1234F1Z5X"] {
        let result = calculate_gst_from_gstin(
            bad,
            "04ABCDE5678K1Z1",
            dec!(1),
            dec!(18),
            GstDirection::Output,
        );
        assert_eq!(
            result,
            Err(GstError::InvalidFormat {
                gstin: bad.to_string()
            })
        );
    }
}

#[test]
fn unknown_state_code_is_rejected() {
    let result = calculate_gst_from_gstin(
        "04ABCDE5678K1Z1",
        "00ABCDE1234F1Z5",
        dec!(1),
        dec!(18),
        GstDirection::Output,
    );
    assert_eq!(
        result,
        Err(GstError::UnknownJurisdictionCode {
            code: "00".to_string(),
            gstin: "00ABCDE1234F1Z5".to_string()
        })
    );
}

#[test]
fn tds_examples() {
    let default = calculate_tds(dec!(9800), DEFAULT_TDS_PERCENT).unwrap();
    assert_eq!(default.gross, dec!(10000));
    assert_eq!(default.tds, dec!(200));

    let ten = calculate_tds(dec!(9000), dec!(10)).unwrap();
    assert_eq!(ten.gross, dec!(10000));
    assert_eq!(ten.tds, dec!(1000));
}

#[test]
fn tds_rejects_bad_input() {
    assert_eq!(
        calculate_tds(dec!(0), DEFAULT_TDS_PERCENT),
        Err(TdsError::InvalidAmount(dec!(0)))
    );
    assert_eq!(
        calculate_tds(dec!(100), dec!(100)),
        Err(TdsError::InvalidRate(dec!(100)))
    );
}

use crate::core::gstin::state_from_gstin;
use crate::core::jurisdiction::{is_indian_location, is_ut_with_ugst, normalize_state_name};
use crate::core::GstError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard GST rate, in percent.
pub const DEFAULT_GST_RATE: Decimal = dec!(18);

/// Which levy applies to a supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum GstRegime {
    /// Supplier and buyer are in different states.
    #[serde(rename = "IGST (Inter-State)")]
    InterState,
    /// Both parties in the same state, or a UT that levies SGST.
    #[serde(rename = "CGST + SGST (Intra-State)")]
    IntraState,
    /// Both parties in the same union territory without a legislature.
    #[serde(rename = "CGST + UGST (Intra-UT)")]
    IntraUt,
}

impl GstRegime {
    pub const ALL: [GstRegime; 3] = [
        GstRegime::InterState,
        GstRegime::IntraState,
        GstRegime::IntraUt,
    ];

    /// Same text as the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            GstRegime::InterState => "IGST (Inter-State)",
            GstRegime::IntraState => "CGST + SGST (Intra-State)",
            GstRegime::IntraUt => "CGST + UGST (Intra-UT)",
        }
    }

    /// Classify a supply between two (already normalised) locations.
    fn classify(supplier: &str, buyer: &str) -> Self {
        if supplier != buyer {
            GstRegime::InterState
        } else if is_ut_with_ugst(supplier) {
            GstRegime::IntraUt
        } else {
            GstRegime::IntraState
        }
    }
}

impl fmt::Display for GstRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// GST breakdown for a single supply.
///
/// Components are unrounded. At most one of IGST, CGST+SGST or CGST+UGST is
/// non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GstResult {
    #[serde(rename = "type")]
    pub regime: GstRegime,
    #[serde(rename = "Taxable_value")]
    #[schemars(with = "String")]
    pub taxable_value: Decimal,
    /// Rate in percent
    #[serde(rename = "GST_rate")]
    #[schemars(with = "String")]
    pub rate: Decimal,
    #[serde(rename = "IGST")]
    #[schemars(with = "String")]
    pub igst: Decimal,
    #[serde(rename = "CGST")]
    #[schemars(with = "String")]
    pub cgst: Decimal,
    #[serde(rename = "SGST")]
    #[schemars(with = "String")]
    pub sgst: Decimal,
    #[serde(rename = "UGST")]
    #[schemars(with = "String")]
    pub ugst: Decimal,
    #[serde(rename = "Total_GST")]
    #[schemars(with = "String")]
    pub total_gst: Decimal,
    #[serde(rename = "Gross_amount")]
    #[schemars(with = "String")]
    pub gross_amount: Decimal,
}

impl GstResult {
    /// `None` when a component or the gross amount overflows `Decimal`.
    fn new(regime: GstRegime, amount: Decimal, rate: Decimal) -> Option<Self> {
        let tax = amount.checked_mul(rate)?;
        let mut igst = Decimal::ZERO;
        let mut cgst = Decimal::ZERO;
        let mut sgst = Decimal::ZERO;
        let mut ugst = Decimal::ZERO;
        match regime {
            GstRegime::InterState => igst = tax.checked_div(dec!(100))?,
            GstRegime::IntraState => {
                cgst = tax.checked_div(dec!(200))?;
                sgst = cgst;
            }
            GstRegime::IntraUt => {
                cgst = tax.checked_div(dec!(200))?;
                ugst = cgst;
            }
        }
        let total_gst = igst
            .checked_add(cgst)?
            .checked_add(sgst)?
            .checked_add(ugst)?;
        Some(GstResult {
            regime,
            taxable_value: amount,
            rate,
            igst,
            cgst,
            sgst,
            ugst,
            total_gst,
            gross_amount: amount.checked_add(total_gst)?,
        })
    }
}

/// Which side of the supply the caller is booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum GstDirection {
    /// Caller is the supplier: tax collected on sales.
    #[default]
    #[serde(rename = "Output GST")]
    Output,
    /// Caller is the buyer: tax paid on purchases, claimable as credit.
    #[serde(rename = "Input GST")]
    Input,
}

impl GstDirection {
    pub const ALL: [GstDirection; 2] = [GstDirection::Output, GstDirection::Input];

    pub fn from_supplier(i_am_supplier: bool) -> Self {
        if i_am_supplier {
            GstDirection::Output
        } else {
            GstDirection::Input
        }
    }

    /// Same text as the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            GstDirection::Output => "Output GST",
            GstDirection::Input => "Input GST",
        }
    }
}

impl fmt::Display for GstDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// GST breakdown derived from a pair of GSTINs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GstinGstResult {
    #[serde(flatten)]
    pub gst: GstResult,
    #[serde(rename = "GST_type")]
    pub gst_type: GstDirection,
}

/// Calculate GST for a supply between two named states or union territories.
///
/// Names are matched loosely (see [`normalize_state_name`]). The amount is
/// taken as given, negative credit-note values included, and the rate is a
/// percentage with no upper bound.
pub fn calculate_gst(
    supplier_state: &str,
    buyer_state: &str,
    amount: Decimal,
    rate: Decimal,
) -> Result<GstResult, GstError> {
    let supplier = normalize_state_name(supplier_state);
    let buyer = normalize_state_name(buyer_state);

    for (location, raw) in [(&supplier, supplier_state), (&buyer, buyer_state)] {
        if !is_indian_location(location) {
            return Err(GstError::UnsupportedLocation {
                location: raw.to_string(),
            });
        }
    }

    let regime = GstRegime::classify(&supplier, &buyer);
    log::debug!(
        "{} -> {}: {} on {} at {}%",
        supplier,
        buyer,
        regime,
        amount,
        rate
    );
    GstResult::new(regime, amount, rate).ok_or(GstError::AmountOutOfRange { amount, rate })
}

/// Calculate GST for a supply between two GSTIN holders.
pub fn calculate_gst_from_gstin(
    supplier_gstin: &str,
    buyer_gstin: &str,
    amount: Decimal,
    rate: Decimal,
    direction: GstDirection,
) -> Result<GstinGstResult, GstError> {
    let supplier_state = state_from_gstin(supplier_gstin)?;
    let buyer_state = state_from_gstin(buyer_gstin)?;
    log::debug!(
        "Resolved {} to {}, {} to {}",
        supplier_gstin,
        supplier_state,
        buyer_gstin,
        buyer_state
    );

    let gst = calculate_gst(supplier_state, buyer_state, amount, rate)?;
    Ok(GstinGstResult {
        gst,
        gst_type: direction,
    })
}

use rust_decimal::Decimal;

/// Failures raised while classifying or calculating GST.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum GstError {
    #[error("invalid GSTIN: {gstin:?}")]
    InvalidFormat { gstin: String },
    #[error("unknown state code {code} in GSTIN {gstin}")]
    UnknownJurisdictionCode { code: String, gstin: String },
    #[error("only Indian locations are supported, no import/export: {location:?}")]
    UnsupportedLocation { location: String },
    #[error("GST on {amount} at {rate}% is out of range")]
    AmountOutOfRange { amount: Decimal, rate: Decimal },
}

/// Failures raised by the TDS gross-up.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TdsError {
    #[error("net amount must be positive and small enough to gross up, got {0}")]
    InvalidAmount(Decimal),
    #[error("TDS percent must be at least 0 and below 100, got {0}")]
    InvalidRate(Decimal),
}

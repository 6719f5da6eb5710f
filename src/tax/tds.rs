use crate::core::TdsError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default withholding rate, in percent.
pub const DEFAULT_TDS_PERCENT: Decimal = dec!(2);

/// Gross-up of a net receipt. Both values are rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TdsResult {
    /// Invoice amount before withholding
    #[schemars(with = "String")]
    pub gross: Decimal,
    /// Amount withheld by the payer
    #[schemars(with = "String")]
    pub tds: Decimal,
}

/// Work back from the amount actually received to the invoiced amount and
/// the tax the payer withheld from it.
///
/// `gross = net / (1 - percent / 100)` and `tds = gross - net`, each rounded
/// half away from zero to paise.
pub fn calculate_tds(net_amount: Decimal, tds_percent: Decimal) -> Result<TdsResult, TdsError> {
    if net_amount <= Decimal::ZERO {
        return Err(TdsError::InvalidAmount(net_amount));
    }
    if tds_percent < Decimal::ZERO || tds_percent >= dec!(100) {
        return Err(TdsError::InvalidRate(tds_percent));
    }

    let out_of_range = || TdsError::InvalidAmount(net_amount);
    let gross = net_amount
        .checked_div(Decimal::ONE - tds_percent / dec!(100))
        .ok_or_else(out_of_range)?;
    let tds = gross.checked_sub(net_amount).ok_or_else(out_of_range)?;
    log::debug!(
        "TDS at {}% on net {}: gross {}, withheld {}",
        tds_percent,
        net_amount,
        gross,
        tds
    );

    Ok(TdsResult {
        gross: round_paise(gross),
        tds: round_paise(tds),
    })
}

fn round_paise(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

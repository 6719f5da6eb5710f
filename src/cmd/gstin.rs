//! Gstin command - split GST for a supply between two registered taxpayers

use super::{print_gst_breakdown, print_json};
use clap::Args;
use gstc::{calculate_gst_from_gstin, GstDirection};
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct GstinCommand {
    /// Supplier's GSTIN
    #[arg(short, long)]
    supplier_gstin: String,

    /// Buyer's GSTIN
    #[arg(short, long)]
    buyer_gstin: String,

    /// Taxable value
    #[arg(short, long, allow_hyphen_values = true)]
    amount: Decimal,

    /// GST rate in percent
    #[arg(short, long, default_value = "18")]
    rate: Decimal,

    /// Book as the buyer (Input GST) rather than the supplier (Output GST)
    #[arg(long)]
    input: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl GstinCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let result = calculate_gst_from_gstin(
            &self.supplier_gstin,
            &self.buyer_gstin,
            self.amount,
            self.rate,
            GstDirection::from_supplier(!self.input),
        )?;
        if self.json {
            print_json(&result)
        } else {
            print_gst_breakdown(&result.gst, Some(result.gst_type.label()));
            Ok(())
        }
    }
}

//! Gst command - split GST between two named states or union territories

use super::{print_gst_breakdown, print_json};
use clap::Args;
use gstc::calculate_gst;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct GstCommand {
    /// Supplier's state or union territory (e.g. "Tamil Nadu")
    #[arg(short, long)]
    supplier: String,

    /// Buyer's state or union territory
    #[arg(short, long)]
    buyer: String,

    /// Taxable value
    #[arg(short, long, allow_hyphen_values = true)]
    amount: Decimal,

    /// GST rate in percent
    #[arg(short, long, default_value = "18")]
    rate: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl GstCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let result = calculate_gst(&self.supplier, &self.buyer, self.amount, self.rate)?;
        if self.json {
            print_json(&result)
        } else {
            print_gst_breakdown(&result, None);
            Ok(())
        }
    }
}

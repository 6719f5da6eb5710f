//! Tds command - gross up a net receipt

use super::{print_json, print_table};
use clap::Args;
use gstc::calculate_tds;
use rust_decimal::Decimal;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct TdsCommand {
    /// Net amount received after deduction
    #[arg(short, long, allow_hyphen_values = true)]
    net: Decimal,

    /// TDS percent withheld by the payer
    #[arg(short, long, default_value = "2")]
    percent: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Tabled)]
struct TdsRow {
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "TDS %")]
    percent: String,
    #[tabled(rename = "TDS")]
    tds: String,
    #[tabled(rename = "Gross")]
    gross: String,
}

impl TdsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let result = calculate_tds(self.net, self.percent)?;
        if self.json {
            return print_json(&result);
        }

        print_table(&[TdsRow {
            net: format!("₹{:.2}", self.net),
            percent: super::format_percent(self.percent),
            tds: format!("₹{:.2}", result.tds),
            gross: format!("₹{:.2}", result.gross),
        }]);
        Ok(())
    }
}

pub mod batch;
pub mod gst;
pub mod gstin;
pub mod schema;
pub mod states;
pub mod tds;
pub mod validate;

use gstc::GstResult;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Render rows as a rounded table with right-aligned cells.
pub fn print_table<T: Tabled>(rows: &[T]) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Full precision, without trailing zeros.
pub fn format_inr(amount: Decimal) -> String {
    format!("₹{}", amount.normalize())
}

pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

#[derive(Debug, Clone, Tabled)]
struct ComponentRow {
    #[tabled(rename = "Component")]
    component: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Print a GST breakdown, one row per component.
pub fn print_gst_breakdown(result: &GstResult, gst_type: Option<&str>) {
    println!();
    println!("{} at {}", result.regime, format_percent(result.rate));
    if let Some(gst_type) = gst_type {
        println!("{}", gst_type);
    }
    println!();

    let rows = [
        ("Taxable value", result.taxable_value),
        ("IGST", result.igst),
        ("CGST", result.cgst),
        ("SGST", result.sgst),
        ("UGST", result.ugst),
        ("Total GST", result.total_gst),
        ("Gross amount", result.gross_amount),
    ]
    .into_iter()
    .map(|(component, amount)| ComponentRow {
        component,
        amount: format_inr(amount),
    })
    .collect::<Vec<_>>();
    print_table(&rows);
}

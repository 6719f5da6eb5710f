//! Schema command - print the batch input format and result shapes

use super::batch::InvoiceRow;
use super::print_json;
use clap::Args;
use gstc::{GstinGstResult, TdsResult};
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// What to describe
    #[arg(value_enum, default_value = "invoice")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for a batch invoice row
    Invoice,
    /// CSV header row for batch input
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
    /// JSON Schema for a GSTIN-based GST result
    GstResult,
    /// JSON Schema for a TDS result
    TdsResult,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::Invoice => print_json(&schema_for!(InvoiceRow)),
            SchemaFormat::CsvHeader => {
                println!("{}", csv_columns().join(","));
                Ok(())
            }
            SchemaFormat::CsvFields => {
                print_csv_fields();
                Ok(())
            }
            SchemaFormat::GstResult => print_json(&schema_for!(GstinGstResult)),
            SchemaFormat::TdsResult => print_json(&schema_for!(TdsResult)),
        }
    }
}

fn csv_columns() -> Vec<&'static str> {
    CSV_FIELD_DESCRIPTIONS.iter().map(|(name, _, _)| *name).collect()
}

fn print_csv_fields() {
    println!("CSV Input Format");
    println!("================");
    println!();
    for (name, required, description) in CSV_FIELD_DESCRIPTIONS {
        let req = if *required { "required" } else { "optional" };
        println!("{:16} ({:8})  {}", name, req, description);
    }
    println!();
    println!("Amounts are in rupees; rates are percentages.");
}

const CSV_FIELD_DESCRIPTIONS: &[(&str, bool, &str)] = &[
    ("supplier_gstin", true, "GSTIN of the supplier"),
    ("buyer_gstin", true, "GSTIN of the buyer"),
    ("amount", true, "Taxable value of the supply"),
    ("rate", false, "GST rate in percent (default 18)"),
    ("side", false, "supplier (Output GST, default) or buyer (Input GST)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_header_matches_invoice_schema() {
        let schema = serde_json::to_value(schema_for!(InvoiceRow)).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        let columns = csv_columns();
        assert_eq!(properties.len(), columns.len());
        for column in columns {
            assert!(properties.contains_key(column), "{column} missing from schema");
        }
    }

    #[test]
    fn required_columns_match_schema() {
        let schema = serde_json::to_value(schema_for!(InvoiceRow)).unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        for (name, is_required, _) in CSV_FIELD_DESCRIPTIONS {
            assert_eq!(required.contains(name), *is_required, "{name}");
        }
    }
}

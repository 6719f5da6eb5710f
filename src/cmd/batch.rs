//! Batch command - GST for every invoice in a CSV file (or stdin with "-")

use super::{format_inr, print_json, print_table};
use clap::Args;
use gstc::{calculate_gst_from_gstin, GstDirection, GstinGstResult, DEFAULT_GST_RATE};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// CSV file of invoices, or "-" for stdin
    #[arg(short, long)]
    file: PathBuf,

    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

/// Which party the invoice is booked by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Supplier,
    Buyer,
}

impl From<Side> for GstDirection {
    fn from(side: Side) -> Self {
        match side {
            Side::Supplier => GstDirection::Output,
            Side::Buyer => GstDirection::Input,
        }
    }
}

/// One invoice in the batch input
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InvoiceRow {
    /// GSTIN of the supplier
    pub supplier_gstin: String,
    /// GSTIN of the buyer
    pub buyer_gstin: String,
    /// Taxable value of the supply
    #[serde(with = "rust_decimal::serde::str")]
    #[schemars(with = "String")]
    pub amount: Decimal,
    /// GST rate in percent (defaults to 18)
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[schemars(with = "Option<String>")]
    pub rate: Option<Decimal>,
    /// Side the invoice is booked by: supplier (Output GST) or buyer (Input GST)
    pub side: Option<Side>,
}

/// Outcome of one invoice; failures are reported in place
#[derive(Debug, Clone, Serialize)]
struct BatchOutcome {
    row: usize,
    supplier_gstin: String,
    buyer_gstin: String,
    #[serde(flatten)]
    result: Option<GstinGstResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Flat record for table and CSV output
#[derive(Debug, Clone, Tabled, Serialize)]
struct BatchRow {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "Supplier")]
    supplier_gstin: String,
    #[tabled(rename = "Buyer")]
    buyer_gstin: String,
    #[tabled(rename = "Type")]
    regime: String,
    #[tabled(rename = "Taxable")]
    taxable_value: String,
    #[tabled(rename = "IGST")]
    igst: String,
    #[tabled(rename = "CGST")]
    cgst: String,
    #[tabled(rename = "SGST")]
    sgst: String,
    #[tabled(rename = "UGST")]
    ugst: String,
    #[tabled(rename = "Total GST")]
    total_gst: String,
    #[tabled(rename = "Gross")]
    gross_amount: String,
    #[tabled(rename = "Book")]
    gst_type: String,
    #[tabled(rename = "Error")]
    error: String,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let invoices = read_invoices(&self.file)?;
        log::info!("Read {} invoices", invoices.len());

        let outcomes = calculate_all(&invoices);
        let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
        if failed > 0 {
            log::warn!("{} of {} invoices failed", failed, outcomes.len());
        }

        if self.json {
            return print_json(&outcomes);
        }

        let rows: Vec<BatchRow> = outcomes.iter().map(BatchRow::from).collect();
        if self.csv {
            write_csv(&rows)
        } else {
            print_table(&rows);
            Ok(())
        }
    }
}

fn calculate_all(invoices: &[InvoiceRow]) -> Vec<BatchOutcome> {
    invoices
        .iter()
        .enumerate()
        .map(|(i, invoice)| {
            let calculated = calculate_gst_from_gstin(
                &invoice.supplier_gstin,
                &invoice.buyer_gstin,
                invoice.amount,
                invoice.rate.unwrap_or(DEFAULT_GST_RATE),
                invoice.side.unwrap_or_default().into(),
            );
            let (result, error) = match calculated {
                Ok(result) => (Some(result), None),
                Err(err) => {
                    log::debug!("Invoice {} rejected: {}", i + 1, err);
                    (None, Some(err.to_string()))
                }
            };
            BatchOutcome {
                row: i + 1,
                supplier_gstin: invoice.supplier_gstin.clone(),
                buyer_gstin: invoice.buyer_gstin.clone(),
                result,
                error,
            }
        })
        .collect()
}

impl From<&BatchOutcome> for BatchRow {
    fn from(outcome: &BatchOutcome) -> Self {
        let amount = |f: fn(&GstinGstResult) -> Decimal| {
            outcome
                .result
                .as_ref()
                .map_or(String::new(), |r| format_inr(f(r)))
        };
        BatchRow {
            row: outcome.row,
            supplier_gstin: outcome.supplier_gstin.clone(),
            buyer_gstin: outcome.buyer_gstin.clone(),
            regime: outcome
                .result
                .as_ref()
                .map_or(String::new(), |r| r.gst.regime.to_string()),
            taxable_value: amount(|r| r.gst.taxable_value),
            igst: amount(|r| r.gst.igst),
            cgst: amount(|r| r.gst.cgst),
            sgst: amount(|r| r.gst.sgst),
            ugst: amount(|r| r.gst.ugst),
            total_gst: amount(|r| r.gst.total_gst),
            gross_amount: amount(|r| r.gst.gross_amount),
            gst_type: outcome
                .result
                .as_ref()
                .map_or(String::new(), |r| r.gst_type.to_string()),
            error: outcome.error.clone().unwrap_or_default(),
        }
    }
}

fn write_csv(rows: &[BatchRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_invoices(path: &Path) -> anyhow::Result<Vec<InvoiceRow>> {
    if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        if buffer.is_empty() {
            anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
        }
        parse_invoices(buffer.as_slice())
    } else {
        parse_invoices(BufReader::new(File::open(path)?))
    }
}

fn parse_invoices<R: Read>(reader: R) -> anyhow::Result<Vec<InvoiceRow>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let invoices = rdr.deserialize().collect::<Result<Vec<InvoiceRow>, _>>()?;
    Ok(invoices)
}

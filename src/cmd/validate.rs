//! Validate command - check GSTINs without calculating anything

use super::print_json;
use clap::Args;
use gstc::Gstin;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// GSTINs to check
    #[arg(required = true)]
    gstins: Vec<String>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Validation outcome for a single GSTIN
#[derive(Debug, Clone, Serialize)]
struct GstinReport {
    gstin: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    check_digit_ok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ValidationOutput {
    checked: usize,
    invalid: usize,
    results: Vec<GstinReport>,
}

impl ValidateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let reports: Vec<GstinReport> = self.gstins.iter().map(|g| check(g)).collect();
        let invalid = reports.iter().filter(|r| !r.valid).count();

        if self.json {
            print_json(&ValidationOutput {
                checked: reports.len(),
                invalid,
                results: reports,
            })?;
        } else {
            print_text(&reports);
        }

        // Exit with code 1 if any GSTIN is unusable
        if invalid > 0 {
            std::process::exit(1);
        }
        Ok(())
    }
}

fn check(candidate: &str) -> GstinReport {
    let mut report = GstinReport {
        gstin: candidate.to_string(),
        valid: false,
        state: None,
        pan: None,
        check_digit_ok: None,
        error: None,
    };

    let gstin = match Gstin::parse(candidate) {
        Ok(gstin) => gstin,
        Err(err) => {
            report.error = Some(err.to_string());
            return report;
        }
    };
    report.pan = Some(gstin.pan().to_string());
    report.check_digit_ok = Some(gstin.has_valid_check_digit());

    match gstin.state() {
        Ok(state) => {
            report.valid = true;
            report.state = Some(state);
        }
        Err(err) => report.error = Some(err.to_string()),
    }
    report
}

fn print_text(reports: &[GstinReport]) {
    println!();
    for report in reports {
        if report.valid {
            let check = match report.check_digit_ok {
                Some(true) => "check digit ok",
                _ => "\u{26A0} check digit mismatch",
            };
            println!(
                "\u{2713} {}  {}  PAN {}  ({})",
                report.gstin,
                report.state.unwrap_or_default(),
                report.pan.as_deref().unwrap_or_default(),
                check
            );
        } else {
            println!(
                "\u{2717} {}  {}",
                report.gstin,
                report.error.as_deref().unwrap_or_default()
            );
        }
    }
    println!();
}

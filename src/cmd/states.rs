//! States command - list GST state codes

use super::{print_json, print_table};
use clap::Args;
use gstc::core::jurisdiction::{is_ut_with_ugst, state_codes};
use serde::Serialize;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct StatesCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct StateRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "State / UT")]
    name: &'static str,
    #[tabled(rename = "Intra-state levy")]
    levy: &'static str,
}

impl StatesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rows: Vec<StateRow> = state_codes()
            .map(|(code, name)| StateRow {
                code,
                name,
                levy: if is_ut_with_ugst(name) {
                    "CGST + UGST"
                } else {
                    "CGST + SGST"
                },
            })
            .collect();

        if self.json {
            print_json(&rows)
        } else {
            print_table(&rows);
            Ok(())
        }
    }
}

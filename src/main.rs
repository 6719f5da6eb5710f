use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser, Debug)]
#[command(
    name = "gstc",
    version,
    about = "Indian GST split and TDS gross-up calculator"
)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split GST between two named states or union territories
    Gst(cmd::gst::GstCommand),
    /// Split GST for a supply between two GSTIN holders
    Gstin(cmd::gstin::GstinCommand),
    /// Gross up a net receipt for TDS
    Tds(cmd::tds::TdsCommand),
    /// List GST state codes
    States(cmd::states::StatesCommand),
    /// Check GSTINs for structure, state code and check digit
    Validate(cmd::validate::ValidateCommand),
    /// Calculate GST for every invoice in a CSV file
    Batch(cmd::batch::BatchCommand),
    /// Print the batch input format and result schemas
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.command {
        Command::Gst(gst) => gst.exec(),
        Command::Gstin(gstin) => gstin.exec(),
        Command::Tds(tds) => tds.exec(),
        Command::States(states) => states.exec(),
        Command::Validate(validate) => validate.exec(),
        Command::Batch(batch) => batch.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}

use clap::Parser;
use std::path::PathBuf;

/// One-shot spreadsheet to SQLite ingestion for the Sales API.
#[derive(Parser)]
#[command(version, about, long_about=None)]
pub struct CliOpts {
    #[arg(
        short,
        long,
        env = "SALES_DATA_DIR",
        default_value = ".",
        help = "Directory holding the spreadsheet; sales.db is written next to it"
    )]
    pub data_dir: PathBuf,
}

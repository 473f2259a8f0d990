use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about=None)]
pub struct CliOpts {
    #[arg(
        short,
        long,
        env = "SALES_DATA_DIR",
        default_value = ".",
        help = "Directory holding the spreadsheet and SQLite files"
    )]
    pub data_dir: PathBuf,

    #[arg(
        long,
        env = "SALES_HOST",
        default_value = "localhost",
        help = "Host to bind to"
    )]
    pub host: Option<String>,

    #[arg(
        long,
        env = "SALES_PORT",
        default_value = "5001",
        help = "Port to bind to"
    )]
    pub port: Option<u16>,

    #[arg(
        long,
        env = "CORS_ENABLED",
        help = "Enable CORS",
        default_value = "true"
    )]
    pub cors_enabled: Option<bool>,

    #[arg(long, env = "CORS_ALLOW_ORIGIN", help = "Allowed CORS origin")]
    pub cors_allow_origin: Option<String>,
}

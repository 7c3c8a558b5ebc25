use clap::Parser;
use std::path::PathBuf;

/// feedbridge: forwards feed items to a UI runtime over JSON lines
#[derive(Parser, Debug)]
#[command(name = "feedbridge")]
#[command(
    about = "Forward a realtime feed to a UI runtime over stdin/stdout",
    long_about = None
)]
pub struct Cli {
    /// TOML configuration file (built-in defaults when omitted)
    #[arg(long, env = "FEEDBRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON object of `{key: record}` loaded into the collection before start
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

impl Cli {
    /// Parse CLI arguments from the environment
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

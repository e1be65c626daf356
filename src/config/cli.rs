use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "record-directory")]
#[command(version)]
#[command(about = "In-memory record directory with id lookup and address validation")]
pub struct CliConfig {
    /// Path to a JSON object used as the directory configuration
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

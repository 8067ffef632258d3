use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrub")]
#[command(about = "Redact PII and secrets from text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "SCRUB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "SCRUB_HOST")]
        host: Option<String>,

        #[arg(long, env = "SCRUB_PORT")]
        port: Option<u16>,
    },

    /// Redact a file (or stdin) and print the result
    Redact {
        /// Input file; stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Print the full JSON report instead of the redacted text
        #[arg(long)]
        json: bool,

        /// Skip the configured size limits
        #[arg(long)]
        no_limits: bool,
    },

    /// Print the PII risk score of a file (or stdin)
    Score {
        /// Input file; stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Skip the configured size limits
        #[arg(long)]
        no_limits: bool,
    },

    /// List detection categories in priority order
    Categories,
}

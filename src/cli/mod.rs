//! CLI argument parsing

mod common;
mod get;
mod schema;

use clap::{Parser, Subcommand};

use crate::config::{defaults, endpoint};

pub use common::OutputFormat;
pub use get::{GetResource, PoliciesArgs, RecoveriesArgs};
pub use schema::{SchemaArgs, SchemaResource};

/// Backup and recovery data source CLI
#[derive(Parser, Debug)]
#[command(name = "brctl")]
#[command(version)]
#[command(
    about = "List protection policies and recoveries of a backup and recovery service",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Service endpoint URL (overrides env var and credentials file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// IAM bearer token (overrides env vars, API key and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// IBM Cloud API key, exchanged for a bearer token
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Tenant id sent with every request
    #[arg(long, global = true, env = endpoint::TENANT_ENV_VAR)]
    pub tenant_id: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode (no spinners, no interactive output)
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit table headers and totals
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read a data source and print its state
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Show the argument schema of a data source
    Schema(SchemaArgs),
}

impl Command {
    /// Whether the command needs an API client
    pub fn needs_client(&self) -> bool {
        matches!(self, Command::Get { .. })
    }
}

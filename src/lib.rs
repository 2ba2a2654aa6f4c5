//! brctl - List protection policies and recoveries of a backup and recovery service
//!
//! Each list is exposed as a data source: optional filter arguments go in,
//! the matching records come out as nested maps under a computed attribute,
//! stamped with a synthetic point-in-time id.
//!
//! # Example
//!
//! ```bash
//! # List all protection policies
//! brctl get policies --endpoint https://br.example.com
//!
//! # Running recoveries of physical servers, as JSON state
//! brctl get recoveries --status Running --snapshot-environments kPhysical -o json
//!
//! # Arguments accepted by the recoveries data source
//! brctl schema recoveries
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod datasource;
pub mod error;
pub mod interrupt;
pub mod output;
pub mod ui;

pub use backup::{
    run_policies_command, run_recoveries_command, BackupClient, EndpointResolver,
    ProtectionPolicy, Recovery, TokenResolver,
};
pub use cli::{Cli, Command, GetResource, OutputFormat, PoliciesArgs, RecoveriesArgs};
pub use datasource::{ResourceData, Schema};
pub use error::{BrError, Result};
pub use interrupt::run_interruptible;
pub use output::output_schema;

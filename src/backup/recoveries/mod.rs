//! Recoveries data source

mod api;
mod commands;
mod data_source;
pub mod models;

pub use api::{GetRecoveriesOptions, OPERATION};
pub use commands::run_recoveries_command;
pub use data_source::{read, RECOVERIES_KEY};
pub use models::Recovery;

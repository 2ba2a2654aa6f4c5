//! Protection policies data source: typed models, list API and read entry point

mod api;
mod commands;
mod data_source;
pub mod models;

pub use api::{GetProtectionPoliciesOptions, OPERATION};
pub use commands::run_policies_command;
pub use data_source::{read, POLICIES_KEY};
pub use models::{ProtectionPolicy, RemoteTarget, TargetsConfiguration};

//! Backup-and-recovery API client module
//!
//! This module talks to the data-protect REST API and exposes one list data
//! source per resource.

mod client;
mod credentials;
mod endpoint;
pub mod models;
pub mod policies;
pub mod recoveries;
pub mod traits;

pub use client::BackupClient;
pub use credentials::TokenResolver;
pub use endpoint::EndpointResolver;
pub use policies::{run_policies_command, ProtectionPolicy};
pub use recoveries::{run_recoveries_command, Recovery};
pub use traits::ListResponse;

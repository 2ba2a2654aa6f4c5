//! Data source plumbing shared by the list readers
//!
//! A read takes a [`ResourceData`] carrying the explicit arguments, calls the
//! API, projects the typed records and publishes them with a synthetic id.

mod arguments;
mod projection;
mod resource_data;
pub mod schema;

use chrono::Utc;

pub use arguments::{load_arguments, merge_arguments};
pub use projection::{project, project_all, Record};
pub use resource_data::ResourceData;
pub use schema::{Argument, ArgumentKind, Schema};

/// Identifier of a point-in-time list result (current UTC time)
pub fn synthetic_id() -> String {
    Utc::now().to_string()
}

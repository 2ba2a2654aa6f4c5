//! Output formatting module
//!
//! JSON and YAML print the full data source state; the table format prints
//! a summary of the typed records.

mod common;
mod policies;
mod recoveries;
mod schema;

pub use common::{format_usecs, print_structured, render_structured};
pub use policies::output_policies;
pub use recoveries::output_recoveries;
pub use schema::output_schema;

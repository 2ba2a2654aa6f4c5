//! Schema command arguments

use clap::{Parser, ValueEnum};

use super::common::OutputFormat;
use crate::datasource::{schema, Schema};

/// Data sources whose schema can be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaResource {
    /// Protection policies data source
    #[value(alias = "policy")]
    Policies,
    /// Recoveries data source
    #[value(alias = "recovery")]
    Recoveries,
}

impl SchemaResource {
    pub fn schema(&self) -> Schema {
        match self {
            SchemaResource::Policies => schema::protection_policies(),
            SchemaResource::Recoveries => schema::recoveries(),
        }
    }
}

/// Arguments for 'schema' command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Data source to describe
    #[arg(value_enum)]
    pub resource: SchemaResource,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

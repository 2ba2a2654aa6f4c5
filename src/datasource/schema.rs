//! Argument schemas for the list data sources

use serde::Serialize;
use serde_json::Value;

use crate::error::{BrError, Result};

/// Value kind accepted by a data source argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentKind {
    String,
    StringList,
    Bool,
    Int,
}

impl ArgumentKind {
    /// Check a JSON value against this kind
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ArgumentKind::String => value.is_string(),
            ArgumentKind::StringList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            ArgumentKind::Bool => value.is_boolean(),
            ArgumentKind::Int => value.is_i64(),
        }
    }
}

impl std::fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgumentKind::String => write!(f, "string"),
            ArgumentKind::StringList => write!(f, "list(string)"),
            ArgumentKind::Bool => write!(f, "bool"),
            ArgumentKind::Int => write!(f, "number"),
        }
    }
}

/// Optional input argument of a data source
#[derive(Debug, Clone, Serialize)]
pub struct Argument {
    pub name: &'static str,
    pub kind: ArgumentKind,
    pub description: &'static str,
}

/// Declared shape of a data source: its inputs and its computed outputs
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    pub name: &'static str,
    pub arguments: Vec<Argument>,
    pub computed: Vec<&'static str>,
}

impl Schema {
    /// Look up an argument by name
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// Check whether a computed attribute is declared
    pub fn is_computed(&self, name: &str) -> bool {
        self.computed.contains(&name)
    }

    /// Validate a single argument value
    pub fn validate(&self, name: &str, value: &Value) -> Result<()> {
        let argument = self.argument(name).ok_or_else(|| {
            BrError::Config(format!(
                "{}: unsupported argument '{}' (expected one of: {})",
                self.name,
                name,
                self.arguments
                    .iter()
                    .map(|a| a.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;

        if !argument.kind.accepts(value) {
            return Err(BrError::Config(format!(
                "{}: argument '{}' must be {}, got {}",
                self.name, name, argument.kind, value
            )));
        }

        Ok(())
    }
}

fn arg(name: &'static str, kind: ArgumentKind, description: &'static str) -> Argument {
    Argument {
        name,
        kind,
        description,
    }
}

/// Schema of the protection policies data source
pub fn protection_policies() -> Schema {
    use ArgumentKind::{Bool, StringList};

    Schema {
        name: "backup_recovery_protection_policies",
        arguments: vec![
            arg(
                "request_initiator_type",
                ArgumentKind::String,
                "Type of the request initiator (UIUser, UIAuto or Helios)",
            ),
            arg("ids", StringList, "Filter policies by a list of policy ids"),
            arg(
                "policy_names",
                StringList,
                "Filter policies by a list of policy names",
            ),
            arg(
                "tenant_ids",
                StringList,
                "Tenant ids whose objects are being accessed",
            ),
            arg(
                "include_tenants",
                Bool,
                "Include objects belonging to all tenants the current user has permission to see",
            ),
            arg(
                "types",
                StringList,
                "Policy types to return (Regular, Internal)",
            ),
            arg(
                "exclude_linked_policies",
                Bool,
                "Exclude linked policies that are created from policy templates",
            ),
            arg(
                "include_replicated_policies",
                Bool,
                "Include policies created on a remote cluster and replicated here",
            ),
            arg(
                "include_stats",
                Bool,
                "Include protection group and protected object counts",
            ),
        ],
        computed: vec!["policies"],
    }
}

/// Schema of the recoveries data source
pub fn recoveries() -> Schema {
    use ArgumentKind::{Bool, Int, StringList};

    Schema {
        name: "backup_recovery_recoveries",
        arguments: vec![
            arg("ids", StringList, "Filter recoveries by a list of recovery ids"),
            arg(
                "return_only_child_recoveries",
                Bool,
                "Return only child recoveries of the recoveries given in ids",
            ),
            arg(
                "tenant_ids",
                StringList,
                "Tenant ids whose objects are being accessed",
            ),
            arg(
                "include_tenants",
                Bool,
                "Include objects belonging to all tenants the current user has permission to see",
            ),
            arg(
                "start_time_usecs",
                Int,
                "Return recoveries started after this Unix epoch timestamp in microseconds",
            ),
            arg(
                "end_time_usecs",
                Int,
                "Return recoveries started before this Unix epoch timestamp in microseconds",
            ),
            arg(
                "storage_domain_id",
                Int,
                "Return recoveries whose snapshots are in this storage domain",
            ),
            arg(
                "snapshot_target_type",
                StringList,
                "Snapshot target types (Local, Archival, RpaasArchival, StorageArraySnapshot, Remote)",
            ),
            arg(
                "archival_target_type",
                StringList,
                "Archival target types (Tape, Cloud, Nas)",
            ),
            arg(
                "snapshot_environments",
                StringList,
                "Snapshot environments (kPhysical, kSQL, kOracle, ...)",
            ),
            arg(
                "status",
                StringList,
                "Recovery status (Accepted, Running, Canceled, Failed, Succeeded, ...)",
            ),
            arg(
                "recovery_actions",
                StringList,
                "Recovery actions (RecoverVMs, RecoverFiles, RecoverApps, ...)",
            ),
        ],
        computed: vec!["recoveries"],
    }
}

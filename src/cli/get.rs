//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get protection policies
    #[command(
        visible_alias = "policy",
        visible_alias = "pol",
        visible_alias = "protection-policies"
    )]
    Policies(PoliciesArgs),

    /// Get recoveries
    #[command(visible_alias = "recovery", visible_alias = "rec")]
    Recoveries(RecoveriesArgs),
}

/// Arguments for 'get policies' subcommand
#[derive(Parser, Debug)]
pub struct PoliciesArgs {
    /// Filter by policy ids (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ids: Option<Vec<String>>,

    /// Filter by policy names (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub policy_names: Option<Vec<String>>,

    /// Tenant ids whose objects are being accessed (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tenant_ids: Option<Vec<String>>,

    /// Include objects of all tenants the caller can see
    #[arg(long, value_name = "BOOL")]
    pub include_tenants: Option<bool>,

    /// Filter by policy types (comma-separated, e.g. Regular,Internal)
    #[arg(long, value_delimiter = ',')]
    pub types: Option<Vec<String>>,

    /// Exclude policies linked to a policy template
    #[arg(long, value_name = "BOOL")]
    pub exclude_linked_policies: Option<bool>,

    /// Include policies replicated from other clusters
    #[arg(long, value_name = "BOOL")]
    pub include_replicated_policies: Option<bool>,

    /// Include protection group and object statistics
    #[arg(long, value_name = "BOOL")]
    pub include_stats: Option<bool>,

    /// Type of the request initiator (UIUser, UIAuto, Helios)
    #[arg(long)]
    pub request_initiator_type: Option<String>,

    /// JSON or YAML file with data source arguments (flags take precedence)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

impl PoliciesArgs {
    /// Data source arguments given as flags
    pub fn arguments(&self) -> Vec<(&'static str, Value)> {
        Arguments::default()
            .add("request_initiator_type", &self.request_initiator_type)
            .add("ids", &self.ids)
            .add("policy_names", &self.policy_names)
            .add("tenant_ids", &self.tenant_ids)
            .add("include_tenants", &self.include_tenants)
            .add("types", &self.types)
            .add("exclude_linked_policies", &self.exclude_linked_policies)
            .add("include_replicated_policies", &self.include_replicated_policies)
            .add("include_stats", &self.include_stats)
            .into_inner()
    }
}

/// Arguments for 'get recoveries' subcommand
#[derive(Parser, Debug)]
pub struct RecoveriesArgs {
    /// Filter by recovery ids (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ids: Option<Vec<String>>,

    /// Only return child recoveries
    #[arg(long, value_name = "BOOL")]
    pub return_only_child_recoveries: Option<bool>,

    /// Tenant ids whose objects are being accessed (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tenant_ids: Option<Vec<String>>,

    /// Include objects of all tenants the caller can see
    #[arg(long, value_name = "BOOL")]
    pub include_tenants: Option<bool>,

    /// Recoveries started after this time (Unix epoch microseconds)
    #[arg(long, value_name = "USECS")]
    pub start_time_usecs: Option<i64>,

    /// Recoveries started before this time (Unix epoch microseconds)
    #[arg(long, value_name = "USECS")]
    pub end_time_usecs: Option<i64>,

    /// Filter by storage domain id
    #[arg(long)]
    pub storage_domain_id: Option<i64>,

    /// Filter by snapshot target types (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub snapshot_target_type: Option<Vec<String>>,

    /// Filter by archival target types (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub archival_target_type: Option<Vec<String>>,

    /// Filter by snapshot environments (comma-separated, e.g. kPhysical,kOracle)
    #[arg(long, value_delimiter = ',')]
    pub snapshot_environments: Option<Vec<String>>,

    /// Filter by recovery status (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub status: Option<Vec<String>>,

    /// Filter by recovery actions (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub recovery_actions: Option<Vec<String>>,

    /// JSON or YAML file with data source arguments (flags take precedence)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

impl RecoveriesArgs {
    /// Data source arguments given as flags
    pub fn arguments(&self) -> Vec<(&'static str, Value)> {
        Arguments::default()
            .add("ids", &self.ids)
            .add("return_only_child_recoveries", &self.return_only_child_recoveries)
            .add("tenant_ids", &self.tenant_ids)
            .add("include_tenants", &self.include_tenants)
            .add("start_time_usecs", &self.start_time_usecs)
            .add("end_time_usecs", &self.end_time_usecs)
            .add("storage_domain_id", &self.storage_domain_id)
            .add("snapshot_target_type", &self.snapshot_target_type)
            .add("archival_target_type", &self.archival_target_type)
            .add("snapshot_environments", &self.snapshot_environments)
            .add("status", &self.status)
            .add("recovery_actions", &self.recovery_actions)
            .into_inner()
    }
}

/// Collects the flags that were given
#[derive(Default)]
struct Arguments(Vec<(&'static str, Value)>);

impl Arguments {
    fn add<T>(mut self, name: &'static str, value: &Option<T>) -> Self
    where
        T: Clone + Into<Value>,
    {
        if let Some(value) = value {
            self.0.push((name, value.clone().into()));
        }
        self
    }

    fn into_inner(self) -> Vec<(&'static str, Value)> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use serde_json::json;

    fn policies_args(args: &[&str]) -> PoliciesArgs {
        let mut argv = vec!["brctl", "get", "policies"];
        argv.extend_from_slice(args);
        let cli = Cli::parse_from(argv);
        match cli.command {
            Command::Get {
                resource: GetResource::Policies(args),
            } => args,
            _ => unreachable!(),
        }
    }

    fn recoveries_args(args: &[&str]) -> RecoveriesArgs {
        let mut argv = vec!["brctl", "get", "recoveries"];
        argv.extend_from_slice(args);
        let cli = Cli::parse_from(argv);
        match cli.command {
            Command::Get {
                resource: GetResource::Recoveries(args),
            } => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_policies_no_flags() {
        let args = policies_args(&[]);
        assert!(args.arguments().is_empty());
        assert_eq!(args.output, OutputFormat::Table);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_policies_flags_to_arguments() {
        let args = policies_args(&[
            "--ids",
            "p1,p2",
            "--include-stats",
            "false",
            "--request-initiator-type",
            "UIUser",
            "-o",
            "json",
        ]);
        assert_eq!(
            args.arguments(),
            vec![
                ("request_initiator_type", json!("UIUser")),
                ("ids", json!(["p1", "p2"])),
                ("include_stats", json!(false)),
            ]
        );
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_policies_bool_requires_value() {
        let result = Cli::try_parse_from(["brctl", "get", "policies", "--include-tenants"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_recoveries_flags_to_arguments() {
        let args = recoveries_args(&[
            "--status",
            "Running,Failed",
            "--start-time-usecs",
            "0",
            "--storage-domain-id",
            "8",
            "--return-only-child-recoveries",
            "true",
        ]);
        assert_eq!(
            args.arguments(),
            vec![
                ("return_only_child_recoveries", json!(true)),
                ("start_time_usecs", json!(0)),
                ("storage_domain_id", json!(8)),
                ("status", json!(["Running", "Failed"])),
            ]
        );
    }

    #[test]
    fn test_recoveries_alias_and_config() {
        let cli = Cli::parse_from(["brctl", "get", "rec", "-c", "args.yaml", "-o", "yaml"]);
        let Command::Get {
            resource: GetResource::Recoveries(args),
        } = cli.command
        else {
            panic!("expected recoveries");
        };
        assert_eq!(args.config, Some(PathBuf::from("args.yaml")));
        assert_eq!(args.output, OutputFormat::Yaml);
    }
}

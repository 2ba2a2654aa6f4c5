//! Protection policy output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::print_structured;
use crate::backup::ProtectionPolicy;
use crate::cli::{Cli, Command, GetResource, OutputFormat};
use crate::datasource::ResourceData;
use crate::error::Result;

/// Output protection policies in the requested format
pub fn output_policies(policies: &[ProtectionPolicy], data: &ResourceData, cli: &Cli) -> Result<()> {
    let Command::Get {
        resource: GetResource::Policies(args),
    } = &cli.command
    else {
        unreachable!()
    };

    match args.output {
        OutputFormat::Table => {
            println!();
            println!("{}", build_table(policies, cli.no_header));
            if !cli.no_header {
                println!("\nTotal: {} policies", policies.len());
            }
            Ok(())
        }
        format => print_structured(&data.to_state(), format),
    }
}

fn build_table(policies: &[ProtectionPolicy], no_header: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec![
            "ID",
            "Name",
            "Incremental",
            "Retention",
            "Targets",
            "Data Lock",
        ]);
    }

    for policy in policies {
        table.add_row(vec![
            policy.id.clone().unwrap_or_default(),
            policy.name.clone(),
            policy.incremental_unit().unwrap_or("-").to_string(),
            policy.retention_summary().unwrap_or_else(|| "-".to_string()),
            target_cell(policy),
            policy.data_lock.clone().unwrap_or_default(),
        ]);
    }

    table
}

fn target_cell(policy: &ProtectionPolicy) -> String {
    let targets = policy.target_summary();
    if targets.is_empty() {
        "-".to_string()
    } else {
        targets.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_policy() -> ProtectionPolicy {
        serde_json::from_value(json!({
            "id": "123:456:7",
            "name": "Gold",
            "dataLock": "Compliance",
            "backupPolicy": {
                "regular": {
                    "incremental": {"schedule": {"unit": "Hours"}},
                    "retention": {"unit": "Days", "duration": 30}
                }
            },
            "remoteTargetPolicy": {
                "archivalTargets": [{
                    "schedule": {"unit": "Runs"},
                    "retention": {"unit": "Weeks", "duration": 4},
                    "targetId": 9
                }]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_build_table() {
        let rendered = build_table(&[test_policy()], false).to_string();
        assert!(rendered.contains("Incremental"));
        assert!(rendered.contains("Gold"));
        assert!(rendered.contains("Hours"));
        assert!(rendered.contains("30 Days"));
        assert!(rendered.contains("Compliance"));
        assert!(rendered.contains("archival 4 Weeks"));
    }

    #[test]
    fn test_build_table_no_header() {
        let rendered = build_table(&[test_policy()], true).to_string();
        assert!(!rendered.contains("Incremental"));
        assert!(rendered.contains("Gold"));
    }

    #[test]
    fn test_target_cell_without_targets() {
        let policy: ProtectionPolicy = serde_json::from_value(json!({
            "name": "Local",
            "backupPolicy": {"regular": {}}
        }))
        .unwrap();
        assert_eq!(target_cell(&policy), "-");
        assert_eq!(target_cell(&test_policy()), "archival 4 Weeks");
    }

    #[test]
    fn test_build_table_empty() {
        let rendered = build_table(&[], true).to_string();
        assert!(rendered.trim().is_empty());
    }
}

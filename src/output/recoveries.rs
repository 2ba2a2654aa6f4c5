//! Recovery output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{format_usecs, print_structured};
use crate::backup::Recovery;
use crate::cli::{Cli, Command, GetResource, OutputFormat};
use crate::datasource::ResourceData;
use crate::error::Result;

/// Output recoveries in the requested format
pub fn output_recoveries(recoveries: &[Recovery], data: &ResourceData, cli: &Cli) -> Result<()> {
    let Command::Get {
        resource: GetResource::Recoveries(args),
    } = &cli.command
    else {
        unreachable!()
    };

    match args.output {
        OutputFormat::Table => {
            println!();
            println!("{}", build_table(recoveries, cli.no_header));
            if !cli.no_header {
                println!("\nTotal: {} recoveries", recoveries.len());
            }
            Ok(())
        }
        format => print_structured(&data.to_state(), format),
    }
}

fn build_table(recoveries: &[Recovery], no_header: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec![
            "ID",
            "Name",
            "Status",
            "Action",
            "Environment",
            "Started",
            "Ended",
        ]);
    }

    for recovery in recoveries {
        table.add_row(vec![
            recovery.id.clone().unwrap_or_default(),
            recovery.name.clone().unwrap_or_default(),
            recovery.status.clone().unwrap_or_default(),
            recovery.recovery_action.clone().unwrap_or_default(),
            recovery.snapshot_environment.clone().unwrap_or_default(),
            format_usecs(recovery.start_time_usecs),
            format_usecs(recovery.end_time_usecs),
        ]);
    }

    table
}

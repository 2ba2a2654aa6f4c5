//! Data source schema output

use comfy_table::{presets::NOTHING, Table};

use super::common::print_structured;
use crate::cli::{Cli, Command, OutputFormat};
use crate::datasource::Schema;
use crate::error::Result;

/// Output the schema selected by the 'schema' command
pub fn output_schema(cli: &Cli) -> Result<()> {
    let Command::Schema(args) = &cli.command else {
        unreachable!()
    };

    let schema = args.resource.schema();
    match args.output {
        OutputFormat::Table => {
            println!("{}", build_table(&schema, cli.no_header));
            if !cli.no_header {
                println!("\nComputed: {}", schema.computed.join(", "));
            }
            Ok(())
        }
        format => print_structured(&schema, format),
    }
}

fn build_table(schema: &Schema, no_header: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["Argument", "Type", "Description"]);
    }

    for argument in &schema.arguments {
        table.add_row(vec![
            argument.name.to_string(),
            argument.kind.to_string(),
            argument.description.to_string(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::schema;

    #[test]
    fn test_build_table_lists_arguments() {
        let rendered = build_table(&schema::recoveries(), false).to_string();
        assert!(rendered.contains("Argument"));
        assert!(rendered.contains("start_time_usecs"));
        assert!(rendered.contains("number"));
        assert!(rendered.contains("list(string)"));
    }

    #[test]
    fn test_build_table_no_header() {
        let rendered = build_table(&schema::protection_policies(), true).to_string();
        assert!(!rendered.contains("Argument"));
        assert!(rendered.contains("request_initiator_type"));
    }
}

//! Recovery command handlers

use log::debug;

use super::data_source::read;
use crate::backup::BackupClient;
use crate::cli::{Cli, Command, GetResource};
use crate::datasource::{merge_arguments, schema, ResourceData};
use crate::output::output_recoveries;
use crate::ui::{create_spinner, finish_spinner};

/// Run the get recoveries command
pub async fn run_recoveries_command(
    client: &BackupClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Recoveries(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let arguments = merge_arguments(args.config.as_deref(), args.arguments())?;
    debug!("Recovery arguments: {:?}", arguments);
    let mut data = ResourceData::from_config(schema::recoveries(), arguments)?;

    let spinner = create_spinner(
        &format!("Fetching recoveries from {}...", client.endpoint()),
        cli.batch,
    );
    let result = read(client, &mut data).await;
    finish_spinner(spinner);

    let recoveries = result?;
    output_recoveries(&recoveries, &data, cli)?;
    Ok(())
}

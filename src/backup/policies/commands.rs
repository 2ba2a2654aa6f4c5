//! Protection policy command handlers

use log::debug;

use super::data_source::read;
use crate::backup::BackupClient;
use crate::cli::{Cli, Command, GetResource};
use crate::datasource::{merge_arguments, schema, ResourceData};
use crate::output::output_policies;
use crate::ui::{create_spinner, finish_spinner};

/// Run the get policies command
pub async fn run_policies_command(
    client: &BackupClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Policies(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let arguments = merge_arguments(args.config.as_deref(), args.arguments())?;
    debug!("Policy arguments: {:?}", arguments);
    let mut data = ResourceData::from_config(schema::protection_policies(), arguments)?;

    let spinner = create_spinner(
        &format!("Fetching protection policies from {}...", client.endpoint()),
        cli.batch,
    );
    let result = read(client, &mut data).await;
    finish_spinner(spinner);

    let policies = result?;
    output_policies(&policies, &data, cli)?;
    Ok(())
}

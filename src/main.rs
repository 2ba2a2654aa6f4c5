//! brctl - Main entry point

use clap::Parser;
use log::{debug, info};

use brctl::{
    output_schema, run_interruptible, run_policies_command, run_recoveries_command, BackupClient,
    Cli, Command, EndpointResolver, GetResource, TokenResolver,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting brctl v{}", env!("CARGO_PKG_VERSION"));

    if !cli.command.needs_client() {
        output_schema(cli)?;
        return Ok(());
    }

    let endpoint = EndpointResolver::resolve(cli.endpoint.as_deref())?;
    let token = TokenResolver::new(&endpoint)
        .resolve(cli.token.as_deref(), cli.api_key.as_deref())
        .await?;

    let mut client = BackupClient::new(token, endpoint);
    client.set_tenant_id(cli.tenant_id.clone());
    debug!(
        "Using endpoint {} (tenant: {})",
        client.endpoint(),
        client.tenant_id().unwrap_or("none")
    );

    let command = async {
        match &cli.command {
            Command::Get {
                resource: GetResource::Policies(_),
            } => run_policies_command(&client, cli).await,
            Command::Get {
                resource: GetResource::Recoveries(_),
            } => run_recoveries_command(&client, cli).await,
            Command::Schema(_) => unreachable!(),
        }
    };

    let result = run_interruptible(command, tokio::signal::ctrl_c()).await;
    if result.is_ok() {
        info!("Completed successfully");
    }
    result
}

//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to the
//! shared check orchestrator.

use clap::Parser;

use syscheck_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging - verbose bumps the default filter to debug
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let ctx = bootstrap(CliConfig::with_defaults());

    let ok = match command {
        Commands::Quick { name } => handlers::quick::execute(&ctx, &name, cli.verbose),
        Commands::Test { name, detach } => {
            handlers::test::execute(&ctx, &name, detach, cli.verbose).await?
        }
        Commands::Status => {
            handlers::status::execute(&ctx);
            true
        }
        Commands::Web { port, allow_origin } => {
            handlers::web::execute(port, allow_origin).await?;
            true
        }
    };

    // A failing verdict exits non-zero so scripts can branch on it
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

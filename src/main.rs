use clap::Parser;
use stratgraph::cli::{Cli, Commands};
use stratgraph::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::example()?
        }
    };

    // Initialize telemetry
    stratgraph::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Catalog(args) => {
            args.execute().await?;
        }
        Commands::Quick(args) => {
            tracing::info!("Building quick strategy");
            args.execute().await?;
        }
        Commands::Check(args) => {
            args.execute().await?;
        }
        Commands::Demo(args) => {
            tracing::info!("Starting demo session");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Editor: connection policy {:?}",
                config.editor.connection_policy
            );
            println!(
                "  Session: ttl {}s, prune every {}s",
                config.session.ttl_secs, config.session.prune_interval_secs
            );
            println!("  Storage: seed demo user {}", config.storage.seed_demo_user);
            println!(
                "  Telemetry: level {}, format {:?}, metrics port {:?}",
                config.telemetry.log_level,
                config.telemetry.log_format,
                config.telemetry.metrics_port
            );
        }
    }

    Ok(())
}

mod config_commands;
mod exec_commands;

use std::path::PathBuf;

use {
    clap::{Parser, Subcommand},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "vidgraph", about = "vidgraph: GraphQL over users and videos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Config file (overrides discovery of ./vidgraph.toml and friends).
    #[arg(long, global = true, env = "VIDGRAPH_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the GraphQL schema in SDL form.
    Schema,
    /// Execute a GraphQL document against the in-memory store.
    Exec {
        /// File holding the query or mutation; `-` reads stdin.
        query: PathBuf,
        /// Variables as a JSON object.
        #[arg(long)]
        variables: Option<String>,
        /// Operation to run when the document holds several.
        #[arg(long)]
        operation: Option<String>,
        /// Seed file (overrides `store.seed_path`).
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Validate the configuration file and report errors/warnings.
    CheckConfig,
}

/// Initialise tracing with either a human-readable or a JSON formatter.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<vidgraph_config::VidgraphConfig> {
    match &cli.config {
        Some(path) => vidgraph_config::load_config(path),
        None => Ok(vidgraph_config::discover_and_load()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "vidgraph starting");

    match &cli.command {
        Commands::Schema => {
            let config = load_config(&cli)?;
            exec_commands::print_schema(&config);
            Ok(())
        },
        Commands::Exec {
            query,
            variables,
            operation,
            seed,
        } => {
            let mut config = load_config(&cli)?;
            if let Some(seed) = seed {
                config.store.seed_path = Some(seed.clone());
            }
            let ok = exec_commands::exec(&config, query, variables.as_deref(), operation.as_deref())
                .await?;
            if !ok {
                std::process::exit(1);
            }
            Ok(())
        },
        Commands::CheckConfig => config_commands::check(cli.config.as_deref()),
    }
}

use clap::Parser;
use metalingo::cli::{CacheCommand, Cli, Commands};
use metalingo::types::config::{Config, GeneralConfig};
use metalingo::{LingoError, LingoResult};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let loaded = Config::load(&cli.config);
    let general = loaded
        .as_ref()
        .map(|config| config.general.clone())
        .unwrap_or_default();

    init_logging(&cli, &general);

    if let Err(e) = run(cli, loaded).await {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("metalingo: {}: {}", e.kind(), e);
        std::process::exit(e.kind().exit_code());
    }
}

fn init_logging(cli: &Cli, general: &GeneralConfig) {
    // CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        general.log_level.as_str()
    };

    let filter = EnvFilter::from_default_env();
    let filter = match format!("metalingo={}", log_level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter.add_directive(LevelFilter::INFO.into()),
    };

    let json = general.log_format == "json";
    tracing_subscriber::registry()
        .with(filter)
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .init();
}

async fn run(cli: Cli, loaded: LingoResult<Config>) -> LingoResult<()> {
    match cli.command {
        Commands::Init { path } => {
            metalingo::cli::commands::init(path).await?;
        }
        Commands::Translate { no_cache } => {
            let config = loaded?;
            tracing::debug!("Configuration loaded from: {}", cli.config.display());
            metalingo::cli::commands::translate(&config, no_cache).await?;
        }
        Commands::Status => {
            let config = or_default(loaded)?;
            metalingo::cli::commands::status(&config).await?;
        }
        Commands::Config => {
            metalingo::cli::commands::config_cmd(&cli.config).await?;
        }
        Commands::Doctor => {
            let config = or_default(loaded)?;
            metalingo::cli::commands::doctor(&config).await?;
        }
        Commands::Cache { action } => {
            let config = loaded?;
            match action {
                CacheCommand::Stats => metalingo::cli::commands::cache_stats(&config).await?,
                CacheCommand::Clear { source, target } => {
                    metalingo::cli::commands::cache_clear(
                        &config,
                        source.as_deref(),
                        target.as_deref(),
                    )
                    .await?
                }
            }
        }
        Commands::Version => {
            metalingo::cli::commands::version();
        }
    }

    Ok(())
}

/// Missing file falls back to the defaults; a broken file is still an error.
fn or_default(loaded: LingoResult<Config>) -> LingoResult<Config> {
    match loaded {
        Ok(config) => Ok(config),
        Err(LingoError::ConfigNotFound(path)) => {
            tracing::debug!("No configuration at {}, using defaults", path);
            Ok(Config::default_config())
        }
        Err(e) => Err(e),
    }
}

//! vigild — entry point for the heartbeat background service.
//!
//! Control flow:
//!     parse CLI → load config → init tracing
//!     → build AppContext (composition root)
//!     → publish "starting" / "started" lifecycle phases
//!     → run loop (blocks until SIGTERM/SIGINT)
//!     → exit with the run loop's result code

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vigil::config::{resolve_config, ServiceConfig};
use vigil::lifecycle::signals::forward_os_signals;
use vigil::lifecycle::{run_service, AppContext, BootError, LifecycleHooks, StopSignal};

#[derive(Parser)]
#[command(name = "vigild")]
#[command(about = "Minimal heartbeat background service", long_about = None)]
struct Cli {
    /// Path to the TOML config file (defaults to ./vigil.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the service (the default when no subcommand is given)
    Run,
    /// Load and validate the configuration, then exit
    CheckConfig,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let code = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(config_path).await,
        Commands::CheckConfig => check_config(config_path),
    };
    std::process::exit(code);
}

async fn run(config_path: Option<&Path>) -> i32 {
    let config = match resolve_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&ServiceConfig::default());
            log_bootstrap_failure(&BootError::Config(e));
            return 1;
        }
    };
    init_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        service = %config.service.name,
        "vigil starting"
    );

    // Composition root: everything downstream receives the context by
    // argument. Setup hooks (config checks and the like) register here.
    let context = AppContext::new(config);
    let hooks = LifecycleHooks::new();

    let stop = StopSignal::new();
    forward_os_signals(stop.clone());

    match run_service(&context, &hooks, stop).await {
        Ok(code) => {
            tracing::info!(code, "Shutdown complete");
            code
        }
        Err(e) => {
            log_bootstrap_failure(&e);
            1
        }
    }
}

fn check_config(config_path: Option<&Path>) -> i32 {
    match resolve_config(config_path) {
        Ok(config) => {
            println!(
                "configuration ok: service '{}' ({}), heartbeat every {}ms",
                config.service.name, config.service.display_name, config.heartbeat.interval_ms
            );
            0
        }
        Err(e) => {
            eprintln!("configuration invalid: {}", e);
            1
        }
    }
}

fn init_logging(config: &ServiceConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.observability.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Fail-fast reporting: the top-level message and, when present, the
/// immediate cause.
fn log_bootstrap_failure(err: &dyn Error) {
    tracing::error!(error = %err, "Service bootstrap failed");
    if let Some(cause) = err.source() {
        tracing::error!(cause = %cause, "Caused by");
    }
}

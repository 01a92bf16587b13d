use std::sync::Arc;

use clap::Parser;
use tasklist_core::config::{self, ConfigOverrides};
use tasklist_core::{AppError, TaskStore};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve the task list over HTTP", long_about = None)]
struct Args {
    /// Address to listen on (overrides TASKLIST_BIND and the config file)
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Override configuration values (format KEY=VALUE)
    #[arg(long = "config-override", value_name = "KEY=VALUE")]
    config_override: Vec<String>,
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|value| matches!(value.trim(), "1" | "true" | "TRUE" | "yes" | "on"))
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("TASKLIST_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let loaded = config::load_config_with_fallback();
    if let Some(err) = loaded.error.as_ref() {
        tracing::warn!(error = %err, "using default configuration");
    }
    let overrides = ConfigOverrides::from_args(&args.config_override)?;
    let merged = config::merge_overrides(&loaded.config, &overrides);

    let store = TaskStore::open(&merged)?;
    tracing::info!(path = %store.backend().path().display(), "task store ready");

    let bind = args.bind.unwrap_or_else(|| merged.bind_address());
    tasklist_http::api::start_server(&bind, Arc::new(store))
        .await
        .map_err(|err| AppError::persistence(format!("server error on {bind}: {err}")))
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(err) = run(args).await {
        tracing::error!(code = err.code(), message = err.message(), "tasklist_http exited");
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use wordnik_client::{DictionaryApi, WordnikClient};
use wordnik_ui::{OutputFormat, UiOptions};

pub mod controller;
pub mod events;
pub mod logging;
pub mod search_context;
pub mod settings;
pub mod state;
pub mod ui;

use self::controller::AppController;
use self::state::AppState;

/// Look up synonyms, definitions and pronunciations on Wordnik
#[derive(Parser, Debug)]
#[command(name = "wordnik", version)]
struct Args {
    /// Look up one word, print the result and exit
    #[arg(short, long)]
    word: Option<String>,

    /// JSON config file (defaults to ./wordnik.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Tracing filter, overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let dotenv = dotenvy::dotenv();

    let (config, source) = settings::load_config(args.config.as_deref())?;
    logging::init_tracing(args.log_level.as_deref(), &config.log_level, args.log_json);

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    match source {
        Some(path) => tracing::info!("Config loaded from {}", path.display()),
        None => tracing::info!("Using default config"),
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(config, args));
    // stdin reads sit on a blocking thread that never returns on its own
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}

async fn run(config: wordnik_config::Config, args: Args) -> anyhow::Result<()> {
    if config.api.api_key.is_empty() {
        tracing::warn!("WORDNIK_API_KEY is not set, lookups will fail");
    }

    let api: Arc<dyn DictionaryApi> = Arc::new(WordnikClient::new(&config.api)?);
    let player = wordnik_player::from_config(&config.player);

    let ui_options = UiOptions {
        word: args.word,
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(api, player, ui_options);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            report_task(result);
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        report_task(result);
    }

    Ok(())
}

fn report_task(result: Result<anyhow::Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => tracing::debug!("task exited"),
        Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
        Err(e) => tracing::error!("task panicked: {e}"),
    }
}

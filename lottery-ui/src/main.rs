//! Lottery UI server - local web form for drawing today's meal.

mod routes;
mod sse;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lottery::config::{DEFAULT_SETTINGS_PATH, load_settings};
use lottery::select::session_rng;
use lottery::store::PreferenceStore;
use tracing::info;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "lottery-ui")]
#[command(about = "Local web form for the food lottery")]
struct Args {
    /// Address to bind the server to (overrides settings)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides settings)
    #[arg(long)]
    port: Option<u16>,

    /// Preferences JSON file (overrides settings)
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Settings TOML file
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lottery_ui=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let settings = load_settings(&args.settings)
        .context("load settings")?
        .with_overrides(args.preferences, args.seed);

    let preferences_path = settings
        .preferences_path
        .canonicalize()
        .unwrap_or(settings.preferences_path);
    let store = PreferenceStore::open(&preferences_path).context("load preferences")?;
    info!(preferences = %preferences_path.display(), people = store.people().len(), "starting lottery-ui");

    let state = AppState::new(store, session_rng(settings.seed));

    sse::start_file_watcher(state.clone());

    let app = routes::app(state);

    let bind = args.bind.unwrap_or(settings.ui.bind);
    let port = args.port.unwrap_or(settings.ui.port);
    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

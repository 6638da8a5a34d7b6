//! Outlay server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the JSON API over HTTP.
//!
//! Every setting can also be supplied through the environment with an
//! `OUTLAY_` prefix, e.g. `OUTLAY_PORT=9000`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use outlay_store_sqlite::SqliteStore;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Outlay expense tracker server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `OUTLAY_*` environment variables. Every field has a default so the server
/// starts with no config file at all.
#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host:    String,
  #[serde(default = "default_port")]
  port:    u16,
  #[serde(default = "default_db_path")]
  db_path: PathBuf,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  8000
}

fn default_db_path() -> PathBuf {
  PathBuf::from("data/expenses.db")
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("OUTLAY"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  ensure_parent_dir(&server_cfg.db_path)?;

  // Open the SQLite store; schema and category seeding run here, once,
  // before any request is served.
  let store = SqliteStore::open(&server_cfg.db_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.db_path)
    })?;

  // The dashboard is served from another origin, so the API answers
  // cross-origin requests unconditionally.
  let app = outlay_api::api_router(Arc::new(store))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Create the store file's parent directory if it doesn't exist yet.
fn ensure_parent_dir(db_path: &Path) -> anyhow::Result<()> {
  if let Some(parent) = db_path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {parent:?}"))?;
  }
  Ok(())
}

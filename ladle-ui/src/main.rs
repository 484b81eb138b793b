//! ladle-ui (User Interface) - recipe catalog service
//!
//! Serves the merged recipe catalog plus session, favorite, rating and
//! authoring operations over HTTP for the mobile client.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use ladle_common::config::{RootFolderResolver, RootFolderInitializer};
use ladle_common::db::{init_database, RecordStore};
use ladle_ui::catalog::fetcher::CatalogClient;
use ladle_ui::config::RuntimeSettings;
use ladle_ui::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "ladle-ui", version, about = "Ladle recipe catalog service")]
struct Args {
    /// Root folder holding the database (overrides env and config file)
    #[arg(long)]
    root_folder: Option<PathBuf>,

    /// HTTP listen port
    #[arg(long, default_value_t = 6230)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting Ladle User Interface (ladle-ui) v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let resolver = RootFolderResolver::new("ladle-ui").with_cli_override(args.root_folder);
    let root_folder = resolver.resolve();

    let initializer = RootFolderInitializer::new(root_folder);
    initializer.ensure_directory_exists()?;

    let db_path = initializer.database_path();
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path).await?;

    let settings = RuntimeSettings::load(&pool).await?;
    info!("Remote catalog endpoint: {}", settings.catalog_url);

    let catalog = CatalogClient::new(&settings.catalog_url, settings.catalog_timeout())?;
    let store = RecordStore::new(pool);

    let state = AppState::new(store, catalog, settings);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("ladle-ui listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}

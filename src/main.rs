//! Mimir service entry point
//!
//! Wires configuration, the intent catalog, the synthesis strategy, and the
//! PostgreSQL pool into the HTTP server.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mimir_api::{ApiConfig, ApiServer};
use mimir_core::{create_synthesizer, db, AppConfig, Catalog, IntentMatcher, QueryExecutor};

#[derive(Parser, Debug)]
#[command(
    name = "mimir",
    about = "Natural-language analytics over financial records",
    version
)]
struct Cli {
    /// Listen address, overriding MIMIR_BIND
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = AppConfig::from_env().context("loading configuration")?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }

    let catalog = Catalog::standard();
    catalog.validate().context("validating intent catalog")?;
    info!(rules = catalog.len(), "intent catalog loaded");

    let pool = db::connect(&config)
        .await
        .context("connecting to PostgreSQL")?;
    let synthesizer =
        create_synthesizer(&config.synthesis).context("building synthesizer")?;
    let executor = QueryExecutor::new(pool.clone());
    let matcher = IntentMatcher::new(catalog);

    let server = ApiServer::new(
        ApiConfig { bind: config.bind },
        matcher,
        synthesizer,
        executor,
        pool,
        config.api_key.clone(),
    );
    server.start().await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("mimir=info,mimir_core=info,mimir_api=info,tower_http=warn")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

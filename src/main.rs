use jaybeny_api::config::{load_config, Config};
use jaybeny_api::database::create_db_pool;
use jaybeny_api::{server, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let (mut config, config_err) = match load_config("config.yml").await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.apply_env_overrides();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("jaybeny_api={},rocket=warn", config.logging.level))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = config_err {
        warn!("failed to load config.yml: {}. Using defaults.", e);
    }

    info!("initializing document store at {}", config.database.path);
    let db_pool = create_db_pool(&config.database.path).await?;

    info!("starting server on port {}", config.server.port);
    let _rocket = server::build_rocket(config, db_pool).launch().await?;

    Ok(())
}

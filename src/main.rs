use std::sync::Arc;

use tracing::{error, info};

use learnhub::web::{AppState, WebServer};
use learnhub::{Config, Database};

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {CONFIG_PATH}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = learnhub::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        learnhub::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = run(config).await {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> learnhub::Result<()> {
    config.validate()?;

    info!("learnhub - learning management backend");

    let db = Database::open(&config.database.path).await?;
    info!(
        "Database ready at {} (schema v{})",
        config.database.path,
        db.schema_version().await?
    );

    let state = AppState::from_config(Arc::new(db), &config.files)?;
    let server = WebServer::new(&config.server, state)?;
    info!("Server configured on {}", server.addr());

    server.run().await?;
    Ok(())
}

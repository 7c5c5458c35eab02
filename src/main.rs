use std::sync::Arc;

use tracing::{error, info};

use corkboard::web::handlers::AppState;
use corkboard::web::WebServer;
use corkboard::{db, logging, BoardService, Config};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        logging::init_console_only(&config.logging.level);
    }

    info!("corkboard discussion board");

    if let Err(e) = run(config).await {
        error!("Server terminated: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> corkboard::Result<()> {
    let pool = db::connect(&config.database).await?;

    let service = BoardService::new(pool, config.board.clone());
    let app_state = Arc::new(AppState::new(service));

    let server = WebServer::new(&config.server, app_state)?;
    server.run().await
}

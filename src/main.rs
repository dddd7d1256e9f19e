use dotenv::dotenv;
use tracing::{info, warn};

use dreamnest_backend::app::app::App;
use dreamnest_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    // Console + rolling file logging; guards must outlive the server loop
    let _logger = Logger::new().expect("Failed to initialize logging");

    info!("🚀 Starting DreamNest Backend");

    // Load environment variables from .env file
    match dotenv() {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    // Create and start the App
    let app = App::new().await;
    app.start().await;
}

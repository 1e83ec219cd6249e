use std::sync::Arc;

use banking_terminal::app::App;
use banking_terminal::core::ClientConfig;
use banking_terminal::debug::{self, LogConfig};
use banking_terminal::services::api::ApiClient;
use banking_terminal::ui::BankingWindow;

const APP_TITLE: &str = "Banking Terminal";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the environment may already be set
    let _ = dotenvy::dotenv();

    let _log_guard = debug::init(&LogConfig::from_env());

    let config = ClientConfig::from_env()?;
    tracing::info!(api_base_url = %config.api_base_url, "Starting banking terminal");

    // Requests are spawned from the UI thread, so it must be inside the runtime
    let runtime = tokio::runtime::Runtime::new()?;
    let _runtime_guard = runtime.enter();

    let service = Arc::new(ApiClient::new(&config));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1024.0, 680.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(BankingWindow::new(cc, App::new(service))))),
    )?;

    tracing::info!("Banking terminal closed");
    Ok(())
}

use std::sync::Arc;

use settings::Settings;

use crate::adapter::dashboard::DashboardState;
use crate::card::StatusCard;

mod adapter;
mod card;
mod core;
mod infrastructure;
mod settings;

#[tokio::main(flavor = "multi_thread")]
pub async fn main() {
    let settings = Settings::new().expect("Error reading configuration");

    settings.monitoring.init().expect("Error initializing monitoring");

    if card::registry().register(StatusCard::definition()) {
        tracing::info!("Announced card type {} to the catalog", StatusCard::TYPE_NAME);
    }

    let status_card = StatusCard::new(settings.card.clone()).expect("Invalid card configuration");
    let state = Arc::new(DashboardState::new(status_card));

    tracing::info!("Starting dashboard endpoint on port {}", settings.http_server.port);

    settings
        .http_server
        .run_server(move || vec![adapter::dashboard::new_routes(state.clone())])
        .await
        .expect("HTTP server execution failed");
}

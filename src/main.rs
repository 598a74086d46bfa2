use crate::config::AppConfig;
use crate::lookup::HttpShipmentLookup;
use crate::router::{handle, AppState};
use astra::Server;
use std::sync::Arc;

mod config;
mod domain;
mod errors;
mod logging;
mod lookup;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    logging::init();

    // 1️⃣ Read configuration from the environment
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the order API client
    let lookup = match HttpShipmentLookup::new(&cfg.order_api_base_url, cfg.lookup_timeout) {
        Ok(lookup) => lookup,
        Err(e) => {
            tracing::error!("❌ Could not build order API client: {e}");
            std::process::exit(1);
        }
    };
    let app = AppState::new(Arc::new(lookup));

    // 3️⃣ Start the server
    tracing::info!(
        addr = %cfg.bind_addr,
        order_api = %cfg.order_api_base_url,
        workers = cfg.max_workers,
        "Starting server at http://{}",
        cfg.bind_addr
    );

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}

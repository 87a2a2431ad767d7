use crate::config::AppConfig;
use crate::data::load_campaigns;
use crate::domain::classify;
use crate::router::handle;
use crate::state::{AppState, Clock, FixedClock, SystemClock};
use astra::Server;
use clap::Parser;
use tracing::{error, info, warn};

mod config;
mod data;
mod domain;
mod errors;
mod locale;
mod responses;
mod router;
mod state;
mod templates;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_dashboard=info".into()),
        )
        .compact()
        .init();

    let config = AppConfig::parse();

    // 1️⃣ Read the campaign list once
    let source = config.data_source();
    let records = match load_campaigns(&source, config.fetch_timeout()) {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, ?source, "campaign data could not be loaded");
            std::process::exit(1);
        }
    };

    // 2️⃣ Bucket them against today
    let clock: Box<dyn Clock> = match config.today {
        Some(day) => {
            warn!(today = %day, "using a pinned date instead of the system clock");
            Box::new(FixedClock(day))
        }
        None => Box::new(SystemClock),
    };
    let board = classify(records, clock.now());
    if board.is_empty() {
        warn!(?source, "no campaigns in data source");
    }
    info!(campaigns = board.len(), "campaigns classified");
    let state = AppState::new(board, clock, config.locale);

    // 3️⃣ Start the server
    info!(addr = %config.addr, locale = %config.locale, "starting server");

    let server = Server::bind(&config.addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(error = %err, "request failed");
            responses::html_error_response(err, state.locale)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}

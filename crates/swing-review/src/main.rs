//! Swing-Review: record a short camera clip, loop it back and draw over it.

mod app;
mod app_command;
mod config;
mod console_handler;
mod error;
mod host;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    console_handler::ConsoleHandler,
    error::{AppError, Result as AppResult},
};

use crate::config::Config;

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "swing_review=info,swing_review_core=info";

/// Application entry point.
fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let console_handler = ConsoleHandler::new(command_tx.clone());
        let app = App::new(config, command_tx, command_rx, shutdown_tx);

        tokio::join!(
            async {
                if let Err(e) = console_handler.run(shutdown_rx).await {
                    error!(error = ?e, "Console handler error");
                }
            },
            async {
                if let Err(e) = app.run().await {
                    error!(error = ?e, "App error");
                }
            }
        );
    });

    // stdin reads park a blocking thread that never finishes on its own.
    rt.shutdown_timeout(Duration::from_millis(100));
}

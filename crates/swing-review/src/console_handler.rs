//! Operator console.
//!
//! Reads commands from stdin, one per line, and forwards them to the main
//! application over the command channel. End of input counts as `quit`.

use crate::{AppCommand, AppError, AppResult, app_command::USAGE};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, BufReader},
    sync::{mpsc, watch},
};
use tracing::{debug, info, instrument, warn};

/// Forwards parsed console lines to the app.
pub struct ConsoleHandler {
    command_tx: mpsc::Sender<AppCommand>,
}

impl ConsoleHandler {
    /// Create a handler feeding `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Run the console loop on stdin until `quit`, end of input or shutdown.
    pub async fn run(&self, shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        self.run_with(tokio::io::stdin(), shutdown_rx).await
    }

    /// Run the console loop on any line source.
    #[instrument(skip_all)]
    pub async fn run_with<R>(
        &self,
        input: R,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> AppResult<()>
    where
        R: AsyncRead + Unpin,
    {
        let mut lines = BufReader::new(input).lines();

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Console handler shutting down");
                    break;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Console input closed");
                        self.send(AppCommand::Shutdown, ErrorLocation::from(Location::caller()))
                            .await?;
                        break;
                    };

                    match AppCommand::parse_line(&line) {
                        Ok(Some(AppCommand::Shutdown)) => {
                            self.send(AppCommand::Shutdown, ErrorLocation::from(Location::caller()))
                                .await?;
                            break;
                        }
                        Ok(Some(command)) => {
                            self.send(command, ErrorLocation::from(Location::caller()))
                                .await?;
                        }
                        Ok(None) => {}
                        Err(e) => {
                            warn!(error = %e, "Ignoring console input");
                            println!("{e}");
                            println!("{USAGE}");
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// `location` is taken at the call site; async fns cannot track their caller.
    async fn send(&self, command: AppCommand, location: ErrorLocation) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send console command: {}", e),
                location,
            })
    }
}

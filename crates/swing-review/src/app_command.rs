use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use swing_review_core::{RecordingId, media::ClipChunk};

/// Console help, printed on `help` and after an unknown command.
pub(crate) const USAGE: &str = "\
commands:
  record        start recording, or stop if already recording
  stop          stop recording
  discard       throw the clip away and return to live preview
  down X Y      press the pointer at client coordinates
  move X Y      drag the pointer
  up            release the pointer
  status        show session state
  acquire       request the camera again
  reset         release everything and go idle
  quit          exit";

/// Commands delivered to the main application loop.
///
/// Operator commands come from the console; chunk and timer commands come
/// from the recorder and timer tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// The record button: start, or stop when already recording.
    RecordButton,
    /// Stop the current recording.
    Stop,
    /// The discard button.
    Discard,
    /// Request the camera.
    Acquire,
    /// Release everything and return to idle.
    Reset,
    /// Print the session state.
    Status,
    /// Print the command list.
    Help,
    /// Pointer pressed at client coordinates.
    PointerDown {
        /// Client x.
        x: f64,
        /// Client y.
        y: f64,
    },
    /// Pointer moved to client coordinates.
    PointerMove {
        /// Client x.
        x: f64,
        /// Client y.
        y: f64,
    },
    /// Pointer released.
    PointerUp,
    /// The recorder produced a chunk.
    ChunkAvailable {
        /// Recording the chunk belongs to.
        recording: RecordingId,
        /// Chunk payload.
        chunk: ClipChunk,
    },
    /// A fixed-duration timer fired.
    DurationElapsed {
        /// Recording the timer was armed for.
        recording: RecordingId,
    },
    /// Request application shutdown.
    Shutdown,
}

impl AppCommand {
    /// Parses one console line. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// `CommandParse` for unknown words, missing or extra arguments and
    /// non-numeric coordinates.
    #[track_caller]
    pub(crate) fn parse_line(line: &str) -> AppResult<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match word.to_ascii_lowercase().as_str() {
            "record" | "r" => no_args(AppCommand::RecordButton, word, &args)?,
            "stop" | "s" => no_args(AppCommand::Stop, word, &args)?,
            "discard" | "d" => no_args(AppCommand::Discard, word, &args)?,
            "acquire" => no_args(AppCommand::Acquire, word, &args)?,
            "reset" => no_args(AppCommand::Reset, word, &args)?,
            "status" => no_args(AppCommand::Status, word, &args)?,
            "help" | "?" => no_args(AppCommand::Help, word, &args)?,
            "up" => no_args(AppCommand::PointerUp, word, &args)?,
            "quit" | "exit" | "q" => no_args(AppCommand::Shutdown, word, &args)?,
            "down" => {
                let (x, y) = coordinates(word, &args)?;
                AppCommand::PointerDown { x, y }
            }
            "move" => {
                let (x, y) = coordinates(word, &args)?;
                AppCommand::PointerMove { x, y }
            }
            other => {
                return Err(AppError::CommandParse {
                    reason: format!("unknown command {other:?}"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(Some(command))
    }
}

#[track_caller]
fn no_args(command: AppCommand, word: &str, args: &[&str]) -> AppResult<AppCommand> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(AppError::CommandParse {
            reason: format!("{word} takes no arguments"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[track_caller]
fn coordinates(word: &str, args: &[&str]) -> AppResult<(f64, f64)> {
    let caller = Location::caller();
    let [x, y] = args else {
        return Err(AppError::CommandParse {
            reason: format!("{word} expects X Y"),
            location: ErrorLocation::from(caller),
        });
    };

    let parse = |raw: &str| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AppError::CommandParse {
                reason: format!("{word}: {raw:?} is not a number"),
                location: ErrorLocation::from(caller),
            })
    };

    Ok((parse(x)?, parse(y)?))
}

// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

mod error;
mod layers;

use crate::error::Result;
use layers::TracingLayers;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::{prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt};

pub use error::Error;
pub use layers::{LOG_ENV_VAR, LOG_FILE_NAME};
pub use tracing_appender::non_blocking::WorkerGuard;

// re-exporting the tracing crate's Level as it is used in our public API
pub use tracing_core::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutputDest {
    Stderr,
    Stdout,
    Path(PathBuf),
}

impl LogOutputDest {
    pub fn parse_from_str(val: &str) -> Result<Self> {
        match val {
            "stderr" => Ok(LogOutputDest::Stderr),
            "stdout" => Ok(LogOutputDest::Stdout),
            "" => Err(Error::LoggingConfiguration(
                "The log output destination cannot be empty".to_string(),
            )),
            // The path should be a directory, but it doesn't need to exist yet. We create it
            // when logging is initialised.
            value => Ok(LogOutputDest::Path(PathBuf::from(value))),
        }
    }
}

impl std::fmt::Display for LogOutputDest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LogOutputDest::Stderr => write!(f, "stderr"),
            LogOutputDest::Stdout => write!(f, "stdout"),
            LogOutputDest::Path(p) => write!(f, "{}", p.to_string_lossy()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogFormat {
    Default,
    Json,
}

impl LogFormat {
    pub fn parse_from_str(val: &str) -> Result<Self> {
        match val {
            "default" => Ok(LogFormat::Default),
            "json" => Ok(LogFormat::Json),
            _ => Err(Error::LoggingConfiguration(
                "The only valid values for this argument are \"default\" or \"json\"".to_string(),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Default => "default",
            LogFormat::Json => "json",
        }
    }
}

pub struct LogBuilder {
    default_logging_targets: Vec<(String, Level)>,
    output_dest: LogOutputDest,
    format: LogFormat,
}

impl LogBuilder {
    /// Create a new builder
    /// Provide the default_logging_targets that are used if the `VOWED_LOG` env variable is not set.
    ///
    /// By default, we log to stderr with the default format so stdout stays free for results.
    pub fn new(default_logging_targets: Vec<(String, Level)>) -> Self {
        Self {
            default_logging_targets,
            output_dest: LogOutputDest::Stderr,
            format: LogFormat::Default,
        }
    }

    /// Set the logging output destination
    pub fn output_dest(&mut self, output_dest: LogOutputDest) {
        self.output_dest = output_dest;
    }

    /// Set the logging format
    pub fn format(&mut self, format: LogFormat) {
        self.format = format
    }

    /// Inits logging, returning the NonBlocking guard if present.
    /// This guard should be held for the life of the program.
    ///
    /// Logging should be instantiated only once.
    pub fn initialize(self) -> Result<Option<WorkerGuard>> {
        let mut layers = TracingLayers::default();

        layers.fmt_layer(
            self.default_logging_targets,
            &self.output_dest,
            self.format,
        )?;

        if tracing_subscriber::registry()
            .with(layers.layers)
            .try_init()
            .is_err()
        {
            eprintln!("Tried to initialize and set global default subscriber more than once");
        }

        Ok(layers.log_appender_guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dest_parses_streams_and_paths() {
        assert_eq!(
            LogOutputDest::parse_from_str("stderr").ok(),
            Some(LogOutputDest::Stderr)
        );
        assert_eq!(
            LogOutputDest::parse_from_str("stdout").ok(),
            Some(LogOutputDest::Stdout)
        );
        assert_eq!(
            LogOutputDest::parse_from_str("logs/deploy").ok(),
            Some(LogOutputDest::Path(PathBuf::from("logs/deploy")))
        );
        assert!(LogOutputDest::parse_from_str("").is_err());
    }

    #[test]
    fn log_format_round_trips_through_its_name() {
        for format in [LogFormat::Default, LogFormat::Json] {
            assert_eq!(LogFormat::parse_from_str(format.as_str()).ok(), Some(format));
        }
        assert!(LogFormat::parse_from_str("yaml").is_err());
    }
}

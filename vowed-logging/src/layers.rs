// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::error::{Error, Result};
use crate::{LogFormat, LogOutputDest};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_core::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::{self as tracing_fmt, MakeWriter};
use tracing_subscriber::{Layer, Registry};

/// Overrides the default logging targets when set, e.g. `VOWED_LOG=vowed_evm=TRACE,alloy=DEBUG`.
pub const LOG_ENV_VAR: &str = "VOWED_LOG";

/// Name of the log file created inside a `LogOutputDest::Path` directory.
pub const LOG_FILE_NAME: &str = "vowed-deploy.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Default)]
pub(crate) struct TracingLayers {
    pub(crate) layers: Vec<BoxedLayer>,
    pub(crate) log_appender_guard: Option<WorkerGuard>,
}

impl TracingLayers {
    pub(crate) fn fmt_layer(
        &mut self,
        default_logging_targets: Vec<(String, Level)>,
        output_dest: &LogOutputDest,
        format: LogFormat,
    ) -> Result<()> {
        let targets = parse_logging_targets(
            std::env::var(LOG_ENV_VAR).ok().as_deref(),
            default_logging_targets,
        )?;

        let layer = match output_dest {
            LogOutputDest::Stderr => make_layer(std::io::stderr, format, true),
            LogOutputDest::Stdout => make_layer(std::io::stdout, format, true),
            LogOutputDest::Path(dir) => {
                std::fs::create_dir_all(dir)?;
                let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                self.log_appender_guard = Some(guard);
                make_layer(non_blocking, format, false)
            }
        };

        self.layers.push(layer.with_filter(targets).boxed());
        Ok(())
    }
}

fn make_layer<W>(writer: W, format: LogFormat, ansi: bool) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => tracing_fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Default => tracing_fmt::layer()
            .with_ansi(ansi)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
    }
}

/// Build the target filter, preferring an explicit filter string over the defaults.
pub(crate) fn parse_logging_targets(
    filter: Option<&str>,
    default_logging_targets: Vec<(String, Level)>,
) -> Result<Targets> {
    match filter {
        Some(filter) if !filter.trim().is_empty() => filter.parse::<Targets>().map_err(|err| {
            Error::LoggingConfiguration(format!("Invalid {LOG_ENV_VAR} value {filter:?}: {err}"))
        }),
        _ => Ok(Targets::new().with_targets(default_logging_targets)),
    }
}

// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

#[macro_use]
extern crate tracing;

mod actions;
mod exit_code;
mod opt;

use crate::exit_code::{DEPLOYMENT_FAILED_EXIT_CODE, SUCCESS_EXIT_CODE};
use crate::opt::Opt;
use clap::Parser;
use color_eyre::eyre::{Context, Result};
use vowed_logging::{Level, LogBuilder, LogFormat, WorkerGuard};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Help and version go to stdout with a zero exit code; usage errors count as failures.
    let opt = match Opt::try_parse() {
        Ok(opt) => opt,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            // The process exits with a failure code whether or not stderr is writable.
            let _ = err.print();
            std::process::exit(DEPLOYMENT_FAILED_EXIT_CODE);
        }
    };

    let exit_code = match run(opt).await {
        Ok(()) => SUCCESS_EXIT_CODE,
        Err(err) => {
            eprintln!("Error: {err:?}");
            DEPLOYMENT_FAILED_EXIT_CODE
        }
    };
    std::process::exit(exit_code);
}

async fn run(opt: Opt) -> Result<()> {
    color_eyre::install()?;

    // Missing `.env` files are fine, the variables may come from the shell.
    let dotenv_path = dotenvy::dotenv().ok();

    let _log_guard = init_logging(&opt)?;
    if let Some(path) = dotenv_path {
        debug!("Loaded environment from {}", path.display());
    }

    actions::deploy(opt).await.inspect_err(|err| {
        error!("Deployment failed: {err}");
    })
}

fn init_logging(opt: &Opt) -> Result<Option<WorkerGuard>> {
    let logging_targets = vec![
        ("vowed_deploy".to_string(), Level::INFO),
        ("vowed_evm".to_string(), Level::INFO),
    ];
    let mut log_builder = LogBuilder::new(logging_targets);
    log_builder.output_dest(opt.log_output_dest.clone());
    log_builder.format(opt.log_format.unwrap_or(LogFormat::Default));
    log_builder
        .initialize()
        .wrap_err("Failed to initialise logging")
}

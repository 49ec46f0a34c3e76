// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use clap::Parser;
use std::path::PathBuf;
use vowed_evm::{Network, DEFAULT_CONTRACT_NAME};
use vowed_logging::{LogFormat, LogOutputDest};

/// Where the front-end picks up the contract address and artifact.
pub(crate) const DEFAULT_OUT_DIR: &str = "../vowed-on-chain-ui/artifacts";

// Please do not remove the blank lines in these doc comments.
// They are used for inserting line breaks when the help menu is rendered.

/// Deploy the VowedOnChain contract and publish its address and artifact to the front-end.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Opt {
    /// The network to deploy to.
    ///
    /// Valid values are:
    ///  - hardhat: a throwaway dev node spawned for this run
    ///  - localhost: a dev node already listening on 127.0.0.1:8545
    ///  - mumbai: Polygon Mumbai, via POLYGON_MUMBAI_RPC_PROVIDER and PRIVATE_KEY
    ///  - custom: any network, via RPC_URL and PRIVATE_KEY
    #[clap(long, verbatim_doc_comment, default_value = "mumbai")]
    pub network: Network,

    /// Name of the contract to deploy.
    ///
    /// Use a fully qualified name such as `contracts/VowedOnChain.sol:VowedOnChain` if the
    /// bare name is ambiguous.
    #[clap(long, default_value = DEFAULT_CONTRACT_NAME)]
    pub contract: String,

    /// Directory holding the compiled contract artifacts.
    #[clap(long, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Directory the address and artifact files are written to. Created if missing.
    #[clap(long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Specify the logging format.
    ///
    /// Valid values are "default" or "json".
    ///
    /// If the argument is not used, the default format will be applied.
    #[clap(long, value_parser = LogFormat::parse_from_str, verbatim_doc_comment)]
    pub log_format: Option<LogFormat>,

    /// Specify the logging output destination.
    ///
    /// Valid values are "stderr", "stdout", or a custom directory path.
    ///
    /// `stderr` is the default value.
    #[clap(long, value_parser = LogOutputDest::parse_from_str, verbatim_doc_comment, default_value = "stderr")]
    pub log_output_dest: LogOutputDest,
}

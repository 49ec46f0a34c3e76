// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::Address;
use crate::testnet::DevNode;
use alloy::network::EthereumWallet;
use alloy::signers::local::PrivateKeySigner;
use std::sync::LazyLock;
use url::Url;

#[macro_use]
extern crate tracing;

pub mod artifact;
pub mod common;
pub mod deploy;
pub mod output;
pub mod testnet;
pub mod utils;

pub use artifact::ContractArtifact;
pub use deploy::{
    deploy_and_save, ContractDeployer, DeployRequest, DeployedContract, Deployment,
    ProviderDeployer,
};

/// The contract this tooling publishes unless told otherwise.
pub const DEFAULT_CONTRACT_NAME: &str = "VowedOnChain";

/// Solidity compiler version the artifacts are expected to be built with.
pub const SOLC_VERSION: &str = "0.8.19";

/// Chain ID used by local dev nodes (Anvil and Hardhat alike).
pub const DEV_CHAIN_ID: u64 = 31337;

/// Chain ID of the Polygon Mumbai testnet.
pub const MUMBAI_CHAIN_ID: u64 = 80001;

static LOCALHOST_HTTP_RPC_URL: LazyLock<Url> = LazyLock::new(|| {
    "http://127.0.0.1:8545"
        .parse()
        .expect("Invalid RPC URL")
});

/// Network to deploy to, selected with `--network`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Network {
    /// A throwaway dev node spawned for the duration of the run.
    Hardhat,
    /// A dev node that is already listening on `127.0.0.1:8545`.
    Localhost,
    /// Polygon Mumbai, configured through `POLYGON_MUMBAI_RPC_PROVIDER` and `PRIVATE_KEY`.
    #[default]
    Mumbai,
    /// Any other network, configured through `RPC_URL` and `PRIVATE_KEY`.
    Custom,
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown network {0:?}, expected one of: hardhat, localhost, mumbai, custom")]
pub struct UnknownNetwork(pub String);

impl std::str::FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hardhat" => Ok(Network::Hardhat),
            "localhost" => Ok(Network::Localhost),
            "mumbai" => Ok(Network::Mumbai),
            "custom" => Ok(Network::Custom),
            other => Err(UnknownNetwork(other.to_string())),
        }
    }
}

impl Network {
    pub fn identifier(&self) -> &'static str {
        match self {
            Network::Hardhat => "hardhat",
            Network::Localhost => "localhost",
            Network::Mumbai => "mumbai",
            Network::Custom => "custom",
        }
    }

    /// The chain ID this network is known to have, if any.
    pub fn expected_chain_id(&self) -> Option<u64> {
        match self {
            Network::Hardhat | Network::Localhost => Some(DEV_CHAIN_ID),
            Network::Mumbai => Some(MUMBAI_CHAIN_ID),
            Network::Custom => None,
        }
    }

    /// Environment variable holding the RPC URL, for networks that read one.
    pub fn rpc_url_env_var(&self) -> Option<&'static str> {
        match self {
            Network::Hardhat | Network::Localhost => None,
            Network::Mumbai => Some(utils::POLYGON_MUMBAI_RPC_PROVIDER),
            Network::Custom => Some(utils::RPC_URL),
        }
    }

    pub(crate) fn localhost_rpc_url() -> &'static Url {
        &LOCALHOST_HTTP_RPC_URL
    }
}

/// Everything needed to talk to the chosen network and sign the deployment.
///
/// Built once at start-up and never changed afterwards.
pub struct DeployTarget {
    pub network: Network,
    pub rpc_url: Url,
    signer: PrivateKeySigner,
    // Keeps a spawned dev node alive for as long as the target is.
    dev_node: Option<DevNode>,
}

impl DeployTarget {
    pub fn new(network: Network, rpc_url: Url, signer: PrivateKeySigner) -> Self {
        Self {
            network,
            rpc_url,
            signer,
            dev_node: None,
        }
    }

    pub(crate) fn with_dev_node(network: Network, dev_node: DevNode) -> Self {
        Self {
            network,
            rpc_url: dev_node.rpc_url(),
            signer: dev_node.default_signer(),
            dev_node: Some(dev_node),
        }
    }

    /// Address of the account paying for the deployment.
    pub fn deployer_address(&self) -> Address {
        self.signer.address()
    }

    pub fn wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }

    pub fn is_ephemeral(&self) -> bool {
        self.dev_node.is_some()
    }
}

impl std::fmt::Debug for DeployTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployTarget")
            .field("network", &self.network)
            .field("rpc_host", &self.rpc_url.host_str())
            .field("deployer", &self.deployer_address())
            .field("ephemeral", &self.is_ephemeral())
            .finish()
    }
}

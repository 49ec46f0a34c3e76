// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::ChainId;
use crate::testnet::DevNode;
use crate::{DeployTarget, Network};
use alloy::node_bindings::NodeError;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::{LocalSignerError, PrivateKeySigner};
use alloy::transports::{RpcError, TransportErrorKind};
use std::env;
use std::str::FromStr;
use url::Url;

/// environment variable holding the RPC endpoint of the Polygon Mumbai network
pub const POLYGON_MUMBAI_RPC_PROVIDER: &str = "POLYGON_MUMBAI_RPC_PROVIDER";
/// environment variable holding the RPC endpoint of a custom network
pub const RPC_URL: &str = "RPC_URL";
/// environment variable holding the hex encoded deployer key
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";

/// First well-known dev account of Anvil and Hardhat nodes. Never holds real funds.
const LOCALHOST_DEV_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcaae784d7bf4ff80";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Missing environment variable {0}")]
    MissingEnvVar(&'static str),
    #[error("Environment variable {var} is not a valid RPC URL: {source}")]
    InvalidRpcUrl {
        var: &'static str,
        source: url::ParseError,
    },
    // The key itself must never end up in the message.
    #[error("Environment variable PRIVATE_KEY is not a valid private key: {0}")]
    InvalidPrivateKey(#[source] LocalSignerError),
    #[error("Failed to spawn dev node: {0}")]
    DevNode(#[from] NodeError),
}

/// Resolve the deployment target for `network` from the process environment.
///
/// Load any `.env` file before calling this. For `Network::Hardhat` a dev node is spawned and
/// kept alive inside the returned target.
pub fn get_deploy_target(network: Network) -> Result<DeployTarget, Error> {
    if network == Network::Hardhat {
        let dev_node = DevNode::spawn()?;
        return Ok(DeployTarget::with_dev_node(network, dev_node));
    }

    deploy_target_from_vars(network, |key| env::var(key).ok())
}

/// Resolve the deployment target for a network that does not need a spawned node.
///
/// `lookup` returns the value of an environment variable, if set. Without a spawned node,
/// `Network::Hardhat` is treated like `Network::Localhost`.
pub fn deploy_target_from_vars<F>(network: Network, lookup: F) -> Result<DeployTarget, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let (rpc_url, private_key) = match network {
        Network::Localhost | Network::Hardhat => (
            Network::localhost_rpc_url().clone(),
            LOCALHOST_DEV_PRIVATE_KEY.to_string(),
        ),
        Network::Mumbai | Network::Custom => {
            let var = network.rpc_url_env_var().unwrap_or(RPC_URL);
            let rpc_url = required_var(&lookup, var)?;
            let rpc_url = Url::parse(rpc_url.trim())
                .map_err(|source| Error::InvalidRpcUrl { var, source })?;
            (rpc_url, required_var(&lookup, PRIVATE_KEY)?)
        }
    };

    let signer = parse_private_key(&private_key)?;
    info!(
        "Using {network} network at {} with deployer {}",
        rpc_url.host_str().unwrap_or("<no host>"),
        signer.address()
    );

    Ok(DeployTarget::new(network, rpc_url, signer))
}

fn required_var<F>(lookup: &F, var: &'static str) -> Result<String, Error>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            error!("{var} is not set");
            Err(Error::MissingEnvVar(var))
        }
    }
}

/// Parse a hex encoded private key. The `0x` prefix is optional.
pub fn parse_private_key(key: &str) -> Result<PrivateKeySigner, Error> {
    let key = key.trim();
    let key = key.strip_prefix("0x").unwrap_or(key);
    PrivateKeySigner::from_str(key).map_err(Error::InvalidPrivateKey)
}

/// Build an HTTP provider that signs with the target's deployer key.
pub fn wallet_provider(target: &DeployTarget) -> impl Provider + Clone {
    ProviderBuilder::new()
        .wallet(target.wallet())
        .connect_http(target.rpc_url.clone())
}

/// Compare the chain behind `provider` with the one `network` is known to have.
///
/// A mismatch is only logged: custom forks of a known network are legitimate.
pub async fn check_chain_id<P: Provider>(
    provider: &P,
    network: Network,
) -> Result<ChainId, RpcError<TransportErrorKind>> {
    let chain_id = provider.get_chain_id().await?;
    match network.expected_chain_id() {
        Some(expected) if expected != chain_id => {
            warn!("Network {network} usually has chain id {expected}, but the RPC reports {chain_id}");
        }
        _ => debug!("Connected to chain {chain_id}"),
    }
    Ok(chain_id)
}

// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use alloy::node_bindings::{Anvil, AnvilInstance, NodeError};
use alloy::signers::local::PrivateKeySigner;
use url::Url;

/// A local Anvil node that lives as long as this value.
///
/// Backs the `hardhat` network: every run gets a fresh chain with pre-funded dev accounts, and
/// the node is killed again on drop.
#[derive(Debug)]
pub struct DevNode {
    anvil: AnvilInstance,
    rpc_url: Url,
}

impl DevNode {
    /// Spawns an Anvil node on a free port.
    ///
    /// The `anvil` binary respects the `ANVIL_IP_ADDR` environment variable, but defaults to
    /// "localhost". `AnvilInstance::endpoint` always reports "localhost", so we build the RPC URL
    /// ourselves.
    pub fn spawn() -> Result<Self, NodeError> {
        let host = std::env::var("ANVIL_IP_ADDR").unwrap_or_else(|_| "localhost".to_string());
        let anvil = Anvil::new().try_spawn()?;

        let rpc_url = match Url::parse(&format!("http://{host}:{}", anvil.port())) {
            Ok(url) => url,
            Err(err) => {
                warn!("Ignoring ANVIL_IP_ADDR={host:?}: {err}");
                anvil.endpoint_url()
            }
        };

        info!("Spawned dev node at {rpc_url} (chain id {})", anvil.chain_id());
        Ok(Self { anvil, rpc_url })
    }

    pub fn rpc_url(&self) -> Url {
        self.rpc_url.clone()
    }

    /// Signer for the first default dev account.
    pub fn default_signer(&self) -> PrivateKeySigner {
        self.anvil.keys()[0].clone().into()
    }
}

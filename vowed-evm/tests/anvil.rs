// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

#![allow(clippy::expect_used)]

mod common;

use crate::common::{write_artifact, CONTRACT_NAME, REVERTING_BYTECODE, STOP_CONTRACT_BYTECODE};
use alloy::providers::Provider;
use color_eyre::Result;
use tempfile::TempDir;
use vowed_evm::deploy::Error;
use vowed_evm::output::ADDRESS_FILE;
use vowed_evm::utils::{check_chain_id, get_deploy_target, wallet_provider};
use vowed_evm::{deploy_and_save, DeployRequest, Network, ProviderDeployer, DEV_CHAIN_ID};

fn request(temp_dir: &TempDir) -> DeployRequest {
    DeployRequest {
        contract_name: CONTRACT_NAME.to_string(),
        artifacts_dir: temp_dir.path().join("artifacts"),
        out_dir: temp_dir.path().join("ui").join("artifacts"),
    }
}

#[tokio::test]
async fn deploys_to_a_spawned_dev_node() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let request = request(&temp_dir);
    write_artifact(&request.artifacts_dir, STOP_CONTRACT_BYTECODE);

    let target = get_deploy_target(Network::Hardhat)?;
    assert!(target.is_ephemeral());

    let provider = wallet_provider(&target);
    assert_eq!(check_chain_id(&provider, target.network).await?, DEV_CHAIN_ID);

    let deployer = ProviderDeployer::new(provider);
    let deployment = deploy_and_save(&deployer, &request).await?;

    let code = deployer
        .provider()
        .get_code_at(deployment.contract.address)
        .await?;
    assert_eq!(code.to_vec(), vec![0x00]);

    let addresses: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(request.out_dir.join(ADDRESS_FILE))?)?;
    assert_eq!(
        addresses["VowedOnChainAddress"],
        deployment.contract.address.to_checksum(None)
    );
    Ok(())
}

#[tokio::test]
async fn reverting_constructor_is_rejected_and_leaves_no_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let request = request(&temp_dir);
    write_artifact(&request.artifacts_dir, REVERTING_BYTECODE);

    let target = get_deploy_target(Network::Hardhat)?;
    let deployer = ProviderDeployer::new(wallet_provider(&target));

    let result = deploy_and_save(&deployer, &request).await;
    // Gas estimation already executes the constructor, so the node rejects the transaction.
    assert!(matches!(result, Err(Error::RpcError(_))), "got {result:?}");
    assert!(!request.out_dir.exists());
    Ok(())
}

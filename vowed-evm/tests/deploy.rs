// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

#![allow(clippy::expect_used)]

mod common;

use crate::common::{write_artifact, CONTRACT_NAME, STOP_CONTRACT_BYTECODE};
use alloy::primitives::{address, Address, B256};
use color_eyre::Result;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use vowed_evm::common::Bytecode;
use vowed_evm::deploy::Error;
use vowed_evm::output::ADDRESS_FILE;
use vowed_evm::{deploy_and_save, ContractDeployer, DeployRequest};

const DEPLOYED_ADDRESS: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

/// Pretends every deployment lands at `DEPLOYED_ADDRESS`.
#[derive(Default)]
struct FixedAddressDeployer {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl ContractDeployer for FixedAddressDeployer {
    async fn deploy(&self, bytecode: Bytecode) -> Result<Address, Error> {
        assert!(!bytecode.is_empty());
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(DEPLOYED_ADDRESS)
    }
}

/// Pretends every deployment transaction reverts.
struct RevertingDeployer;

#[async_trait::async_trait]
impl ContractDeployer for RevertingDeployer {
    async fn deploy(&self, _bytecode: Bytecode) -> Result<Address, Error> {
        Err(Error::Reverted(B256::ZERO))
    }
}

fn request(root: &Path) -> DeployRequest {
    DeployRequest {
        contract_name: CONTRACT_NAME.to_string(),
        artifacts_dir: root.join("artifacts"),
        out_dir: root.join("vowed-on-chain-ui").join("artifacts"),
    }
}

#[tokio::test]
async fn successful_deployment_writes_address_and_artifact() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let request = request(temp_dir.path());
    let artifact_path = write_artifact(&request.artifacts_dir, STOP_CONTRACT_BYTECODE);

    let deployer = FixedAddressDeployer::default();
    let deployment = deploy_and_save(&deployer, &request).await?;

    assert_eq!(deployer.calls.load(Ordering::SeqCst), 1);
    assert_eq!(deployment.contract.name, CONTRACT_NAME);
    assert_eq!(deployment.contract.address, DEPLOYED_ADDRESS);

    let addresses: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(request.out_dir.join(ADDRESS_FILE))?)?;
    assert_eq!(
        addresses,
        serde_json::json!({ "VowedOnChainAddress": "0x5FbDB2315678afecb367f032d93F642f64180aa3" })
    );

    // The artifact is copied byte for byte, key order included.
    let written = std::fs::read(request.out_dir.join(format!("{CONTRACT_NAME}.json")))?;
    assert_eq!(written, std::fs::read(&artifact_path)?);
    assert_eq!(deployment.files.artifact_file, request.out_dir.join("VowedOnChain.json"));
    Ok(())
}

#[tokio::test]
async fn missing_output_directory_is_created() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let request = request(temp_dir.path());
    write_artifact(&request.artifacts_dir, STOP_CONTRACT_BYTECODE);
    assert!(!request.out_dir.exists());

    deploy_and_save(&FixedAddressDeployer::default(), &request).await?;

    assert!(request.out_dir.join(ADDRESS_FILE).is_file());
    assert!(request.out_dir.join("VowedOnChain.json").is_file());
    Ok(())
}

#[tokio::test]
async fn previous_output_is_overwritten() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let request = request(temp_dir.path());
    write_artifact(&request.artifacts_dir, STOP_CONTRACT_BYTECODE);
    std::fs::create_dir_all(&request.out_dir)?;
    std::fs::write(
        request.out_dir.join(ADDRESS_FILE),
        r#"{ "VowedOnChainAddress": "0x0000000000000000000000000000000000000001", "stale": true }"#,
    )?;

    deploy_and_save(&FixedAddressDeployer::default(), &request).await?;

    let addresses: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(request.out_dir.join(ADDRESS_FILE))?)?;
    assert_eq!(addresses.as_object().map(|map| map.len()), Some(1));
    assert_eq!(
        addresses["VowedOnChainAddress"],
        "0x5FbDB2315678afecb367f032d93F642f64180aa3"
    );
    Ok(())
}

#[tokio::test]
async fn failed_deployment_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let request = request(temp_dir.path());
    write_artifact(&request.artifacts_dir, STOP_CONTRACT_BYTECODE);

    let result = deploy_and_save(&RevertingDeployer, &request).await;

    assert!(matches!(result, Err(Error::Reverted(_))));
    assert!(!request.out_dir.exists());
    Ok(())
}

#[tokio::test]
async fn missing_artifact_fails_before_deploying() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let request = request(temp_dir.path());

    let deployer = FixedAddressDeployer::default();
    let result = deploy_and_save(&deployer, &request).await;

    assert!(matches!(result, Err(Error::Artifact(_))));
    assert_eq!(deployer.calls.load(Ordering::SeqCst), 0);
    assert!(!request.out_dir.exists());
    Ok(())
}

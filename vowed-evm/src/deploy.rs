// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::artifact::{self, ContractArtifact};
use crate::common::{Address, Bytecode, TxHash};
use crate::output::{self, SavedFiles};
use crate::SOLC_VERSION;
use alloy::network::{ReceiptResponse, TransactionBuilder};
use alloy::providers::{PendingTransactionError, Provider};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::{RpcError, TransportErrorKind};
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to load contract artifact: {0}")]
    Artifact(#[from] artifact::Error),
    #[error(transparent)]
    RpcError(#[from] RpcError<TransportErrorKind>),
    #[error(transparent)]
    PendingTransactionError(#[from] PendingTransactionError),
    #[error("Deployment transaction {0} reverted")]
    Reverted(TxHash),
    #[error("Receipt of deployment transaction {0} has no contract address")]
    NoContractAddress(TxHash),
    #[error("Failed to save deployment output: {0}")]
    Output(#[from] output::Error),
}

/// Publishes creation bytecode and reports where the contract ended up.
#[async_trait::async_trait]
pub trait ContractDeployer {
    /// Send one contract creation transaction and wait until it is mined.
    async fn deploy(&self, bytecode: Bytecode) -> Result<Address, Error>;
}

/// Deploys through an alloy provider that can sign for the deployer account.
pub struct ProviderDeployer<P> {
    provider: P,
}

impl<P: Provider> ProviderDeployer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait::async_trait]
impl<P: Provider> ContractDeployer for ProviderDeployer<P> {
    async fn deploy(&self, bytecode: Bytecode) -> Result<Address, Error> {
        let transaction_request = TransactionRequest::default().with_deploy_code(bytecode);

        let pending_tx = self.provider.send_transaction(transaction_request).await?;
        let tx_hash = *pending_tx.tx_hash();
        debug!("Deployment transaction sent: {tx_hash}");

        let receipt = pending_tx.get_receipt().await?;
        deployed_address(&receipt)
    }
}

/// Address of the contract created by a mined deployment transaction.
pub fn deployed_address<R: ReceiptResponse>(receipt: &R) -> Result<Address, Error> {
    let tx_hash = receipt.transaction_hash();
    if !receipt.status() {
        error!("Deployment transaction {tx_hash} reverted");
        return Err(Error::Reverted(tx_hash));
    }

    receipt
        .contract_address()
        .ok_or(Error::NoContractAddress(tx_hash))
}

/// What to deploy and where to put the results.
#[derive(Clone, Debug)]
pub struct DeployRequest {
    /// Bare or fully qualified contract name.
    pub contract_name: String,
    pub artifacts_dir: PathBuf,
    pub out_dir: PathBuf,
}

/// A contract that made it on-chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployedContract {
    pub name: String,
    pub address: Address,
}

impl DeployedContract {
    /// Key of this contract in the address file, e.g. `VowedOnChainAddress`.
    pub fn address_key(&self) -> String {
        format!("{}Address", self.name)
    }
}

#[derive(Clone, Debug)]
pub struct Deployment {
    pub contract: DeployedContract,
    pub files: SavedFiles,
}

/// Deploy the requested contract once and save its address and artifact.
///
/// The artifact is loaded before anything is sent, and nothing is written unless the
/// deployment succeeded. There are no retries.
pub async fn deploy_and_save<D>(deployer: &D, request: &DeployRequest) -> Result<Deployment, Error>
where
    D: ContractDeployer + ?Sized,
{
    let artifact = ContractArtifact::from_file(&artifact::find_artifact(
        &request.artifacts_dir,
        &request.contract_name,
    )?)?;
    let bytecode = artifact.bytecode()?;
    check_compiler_version(&artifact);

    let name = artifact.contract_name().to_string();
    info!(
        "Deploying {name} from {} ({} bytes of creation code)",
        artifact.path().display(),
        bytecode.len()
    );

    let address = deployer.deploy(bytecode).await.inspect_err(|err| {
        error!("Deployment of {name} failed: {err}");
    })?;

    info!("{name} deployed to {address}");

    let contract = DeployedContract { name, address };
    let files = output::save_artifacts(&request.out_dir, &contract, &artifact)?;

    Ok(Deployment { contract, files })
}

fn check_compiler_version(artifact: &ContractArtifact) {
    match artifact.compiler_version() {
        Ok(Some(version)) if version == SOLC_VERSION => {
            debug!("{} was compiled with solc {version}", artifact.contract_name());
        }
        Ok(Some(version)) => warn!(
            "{} was compiled with solc {version}, expected {SOLC_VERSION}",
            artifact.contract_name()
        ),
        Ok(None) => debug!(
            "No build info found for {}, skipping compiler version check",
            artifact.contract_name()
        ),
        Err(err) => warn!("Could not read build info of {}: {err}", artifact.contract_name()),
    }
}

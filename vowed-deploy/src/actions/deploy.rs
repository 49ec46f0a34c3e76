// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::opt::Opt;
use color_eyre::eyre::{Context, Result};
use vowed_evm::utils::{check_chain_id, get_deploy_target, wallet_provider};
use vowed_evm::{deploy_and_save, DeployRequest, ProviderDeployer};

/// Deploy the contract once against the selected network and write the output files.
pub(crate) async fn deploy(opt: Opt) -> Result<()> {
    let network = opt.network;
    info!("Deploying {} to the {network} network", opt.contract);

    let target = get_deploy_target(network)
        .wrap_err_with(|| format!("Failed to configure the {network} network"))?;
    debug!("Deploy target: {target:?}");
    if target.is_ephemeral() {
        println!("Deploying to a throwaway dev node, the contract is gone once this process exits");
    }

    let provider = wallet_provider(&target);
    check_chain_id(&provider, network)
        .await
        .wrap_err_with(|| format!("Failed to reach the {network} RPC endpoint"))?;

    let request = DeployRequest {
        contract_name: opt.contract,
        artifacts_dir: opt.artifacts_dir,
        out_dir: opt.out_dir,
    };
    let deployer = ProviderDeployer::new(provider);
    let deployment = deploy_and_save(&deployer, &request)
        .await
        .wrap_err_with(|| format!("Failed to deploy {}", request.contract_name))?;

    println!(
        "Contract has been deployed to {}",
        deployment.contract.address
    );
    println!(
        "Address written to {}",
        deployment.files.address_file.display()
    );
    println!(
        "Artifact written to {}",
        deployment.files.artifact_file.display()
    );
    Ok(())
}

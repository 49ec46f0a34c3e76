// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::artifact::ContractArtifact;
use crate::deploy::DeployedContract;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// File holding the `{ "<Name>Address": "0x..." }` mapping the front-end reads.
pub const ADDRESS_FILE: &str = "contract-address.json";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Paths of the files written for one deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedFiles {
    pub address_file: PathBuf,
    pub artifact_file: PathBuf,
}

/// Write the deployed address and the contract artifact into `out_dir`.
///
/// The directory is created if needed and existing files are overwritten.
pub fn save_artifacts(
    out_dir: &Path,
    deployed: &DeployedContract,
    artifact: &ContractArtifact,
) -> Result<SavedFiles, Error> {
    // Serialise both files first so a bad artifact leaves the directory untouched.
    let addresses = address_file_contents(deployed)?;
    let artifact_json = artifact.to_pretty_json()?;

    std::fs::create_dir_all(out_dir).map_err(|source| Error::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let address_file = out_dir.join(ADDRESS_FILE);
    write_file(&address_file, &addresses)?;

    let artifact_file = out_dir.join(format!("{}.json", deployed.name));
    write_file(&artifact_file, &artifact_json)?;

    info!(
        "Saved address of {} to {} and its artifact to {}",
        deployed.name,
        address_file.display(),
        artifact_file.display()
    );

    Ok(SavedFiles {
        address_file,
        artifact_file,
    })
}

/// Contents of the address file, pretty printed with two space indentation.
pub fn address_file_contents(deployed: &DeployedContract) -> Result<String, serde_json::Error> {
    let mut addresses = Map::new();
    addresses.insert(
        deployed.address_key(),
        Value::String(deployed.address.to_checksum(None)),
    );
    serde_json::to_string_pretty(&Value::Object(addresses))
}

fn write_file(path: &Path, contents: &str) -> Result<(), Error> {
    debug!("Writing {}", path.display());
    std::fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Compiled contract artifacts as written by the Solidity toolchain.
//!
//! Artifacts live at `<artifacts>/<source path>/<ContractName>.json`, next to a
//! `<ContractName>.dbg.json` that points at the build-info file of the compilation.

use crate::common::Bytecode;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const BUILD_INFO_DIR: &str = "build-info";
const DBG_SUFFIX: &str = ".dbg.json";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No artifact for contract {name} found in {}", dir.display())]
    NotFound { name: String, dir: PathBuf },
    #[error(
        "There are multiple artifacts for contract {name}, use one of these fully qualified names instead: {}",
        candidates.join(", ")
    )]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("Artifact {} is not a JSON object", .0.display())]
    NotAnObject(PathBuf),
    #[error("Contract {0} has no creation bytecode, is it abstract or an interface?")]
    MissingBytecode(String),
    #[error("Contract {0} links against external libraries, which is not supported")]
    UnlinkedLibraries(String),
    #[error("Contract {0} has malformed bytecode: {1}")]
    InvalidBytecode(String, alloy::hex::FromHexError),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),
}

/// Locate the artifact file of a contract.
///
/// `name` is either a bare contract name (`VowedOnChain`) or a fully qualified one
/// (`contracts/VowedOnChain.sol:VowedOnChain`). Bare names must be unique across the
/// artifacts directory.
pub fn find_artifact(artifacts_dir: &Path, name: &str) -> Result<PathBuf, Error> {
    let not_found = || Error::NotFound {
        name: name.to_string(),
        dir: artifacts_dir.to_path_buf(),
    };

    if let Some((source_name, contract_name)) = name.rsplit_once(':') {
        let path = artifacts_dir
            .join(source_name)
            .join(format!("{contract_name}.json"));
        return if path.is_file() {
            Ok(path)
        } else {
            Err(not_found())
        };
    }

    if !artifacts_dir.is_dir() {
        return Err(not_found());
    }

    let file_name = format!("{name}.json");
    let mut candidates = Vec::new();
    for entry in WalkDir::new(artifacts_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != BUILD_INFO_DIR)
    {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name().to_str() == Some(file_name.as_str())
        {
            candidates.push(entry.into_path());
        }
    }

    match candidates.len() {
        0 => Err(not_found()),
        1 => Ok(candidates.remove(0)),
        _ => {
            let mut candidates: Vec<String> = candidates
                .iter()
                .map(|path| fully_qualified_name(artifacts_dir, path, name))
                .collect();
            candidates.sort();
            Err(Error::Ambiguous {
                name: name.to_string(),
                candidates,
            })
        }
    }
}

fn fully_qualified_name(artifacts_dir: &Path, path: &Path, name: &str) -> String {
    let source = path
        .parent()
        .and_then(|parent| parent.strip_prefix(artifacts_dir).ok())
        .unwrap_or_else(|| Path::new(""));
    let source: Vec<String> = source
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("{}:{name}", source.join("/"))
}

/// A compiled contract artifact.
///
/// The JSON is kept as read, key order included, so writing it back out reproduces the
/// compiler's output.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractArtifact {
    path: PathBuf,
    fallback_name: String,
    json: Map<String, Value>,
}

impl ContractArtifact {
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&contents).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let Value::Object(json) = value else {
            return Err(Error::NotAnObject(path.to_path_buf()));
        };

        let fallback_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("Loaded artifact {} from {}", fallback_name, path.display());

        Ok(Self {
            path: path.to_path_buf(),
            fallback_name,
            json,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The contract name recorded in the artifact, or the file stem if there is none.
    pub fn contract_name(&self) -> &str {
        self.json
            .get("contractName")
            .and_then(Value::as_str)
            .unwrap_or(&self.fallback_name)
    }

    pub fn source_name(&self) -> Option<&str> {
        self.json.get("sourceName").and_then(Value::as_str)
    }

    /// The creation bytecode to send in the deployment transaction.
    pub fn bytecode(&self) -> Result<Bytecode, Error> {
        let name = self.contract_name().to_string();
        let hex = self
            .json
            .get("bytecode")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default();
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        if hex.is_empty() {
            return Err(Error::MissingBytecode(name));
        }

        let has_link_references = self
            .json
            .get("linkReferences")
            .and_then(Value::as_object)
            .is_some_and(|references| !references.is_empty());
        if has_link_references {
            return Err(Error::UnlinkedLibraries(name));
        }

        alloy::hex::decode(hex)
            .map(Bytecode::from)
            .map_err(|err| Error::InvalidBytecode(name, err))
    }

    /// The artifact as pretty printed JSON with two space indentation.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.json)
    }

    /// Solidity compiler version recorded in the build-info of this artifact.
    ///
    /// Returns `None` if there is no debug file or build-info next to the artifact.
    pub fn compiler_version(&self) -> Result<Option<String>, Error> {
        let Some(dbg_path) = self.dbg_path() else {
            return Ok(None);
        };
        if !dbg_path.is_file() {
            return Ok(None);
        }

        let dbg: DebugFile = read_json(&dbg_path)?;
        let Some(parent) = dbg_path.parent() else {
            return Ok(None);
        };
        let build_info_path = parent.join(dbg.build_info);
        if !build_info_path.is_file() {
            return Ok(None);
        }

        let build_info: BuildInfo = read_json(&build_info_path)?;
        Ok(Some(build_info.solc_version))
    }

    fn dbg_path(&self) -> Option<PathBuf> {
        let stem = self.path.file_stem()?.to_string_lossy().into_owned();
        Some(self.path.with_file_name(format!("{stem}{DBG_SUFFIX}")))
    }
}

#[derive(Deserialize)]
struct DebugFile {
    #[serde(rename = "buildInfo")]
    build_info: PathBuf,
}

#[derive(Deserialize)]
struct BuildInfo {
    #[serde(rename = "solcVersion")]
    solc_version: String,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const CONTRACT_NAME: &str = "VowedOnChain";

/// Creation code that deploys a one byte runtime (`STOP`).
pub const STOP_CONTRACT_BYTECODE: &str = "0x6001600c60003960016000f300";

/// Creation code that always reverts.
pub const REVERTING_BYTECODE: &str = "0x60006000fd";

/// An artifact laid out the way the Solidity toolchain emits it. Keys are deliberately not in
/// alphabetical order.
pub fn artifact_json(bytecode: &str) -> String {
    format!(
        r#"{{
  "_format": "hh-sol-artifact-1",
  "contractName": "{CONTRACT_NAME}",
  "sourceName": "contracts/{CONTRACT_NAME}.sol",
  "abi": [
    {{
      "inputs": [
        {{
          "internalType": "string",
          "name": "vow",
          "type": "string"
        }}
      ],
      "name": "makeVow",
      "outputs": [],
      "stateMutability": "nonpayable",
      "type": "function"
    }},
    {{
      "inputs": [],
      "name": "vowCount",
      "outputs": [
        {{
          "internalType": "uint256",
          "name": "",
          "type": "uint256"
        }}
      ],
      "stateMutability": "view",
      "type": "function"
    }}
  ],
  "bytecode": "{bytecode}",
  "deployedBytecode": "0x00",
  "linkReferences": {{}},
  "deployedLinkReferences": {{}}
}}"#
    )
}

/// Write an artifact for `CONTRACT_NAME` under `artifacts_dir` and return its path.
pub fn write_artifact(artifacts_dir: &Path, bytecode: &str) -> PathBuf {
    let dir = artifacts_dir
        .join("contracts")
        .join(format!("{CONTRACT_NAME}.sol"));
    std::fs::create_dir_all(&dir).expect("Failed to create artifact directory");
    let path = dir.join(format!("{CONTRACT_NAME}.json"));
    std::fs::write(&path, artifact_json(bytecode)).expect("Failed to write artifact");
    path
}

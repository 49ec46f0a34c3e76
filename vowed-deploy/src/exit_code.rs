// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

/// Every failure maps to this code: bad configuration, an unreachable network, a missing
/// artifact, a failed transaction or a failed write.
pub(crate) const DEPLOYMENT_FAILED_EXIT_CODE: i32 = 1;

pub(crate) const SUCCESS_EXIT_CODE: i32 = 0;

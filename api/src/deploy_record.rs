//! The deployment record returned by the compiler service's history API.

use serde::Deserialize;
use serde::Serialize;

/// Metadata describing one deployed contract build.
///
/// Mirrors the wire shape of the `neutron-deploy-histories` response; fields
/// the service adds later are ignored. Identity is the contract address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub env_os_name: String,
    #[serde(default)]
    pub env_os_version: String,
    #[serde(default)]
    pub env_rustc_version: String,
    #[serde(default)]
    pub env_cargo_wasm_version: String,
}

//! This crate contains all shared fullstack server functions.

#[cfg(not(target_arch = "wasm32"))]
pub mod client;
pub mod deploy_record;
pub mod endpoints;
#[cfg(not(target_arch = "wasm32"))]
pub mod history_caching;
pub mod source_archive;
pub mod verification;

use dioxus::prelude::*;

use deploy_record::DeploymentRecord;
use endpoints::Endpoints;
use verification::VerificationReport;

pub type ApiError = anyhow::Error;

/// Retrieves the first page of deployment records for the configured chain.
///
/// The upstream response is cached server-side for a short window, so repeated
/// page loads reuse one upstream call. The client still fetches exactly once
/// per mount.
#[post("/api/deploy_histories")]
pub async fn deploy_histories() -> Result<Vec<DeploymentRecord>, ApiError> {
    let endpoints = Endpoints::from_env();
    history_caching::get_cached_deploy_histories(&endpoints).await
}

/// Runs the verification flow for one contract address.
///
/// Returns the verifier's verdict together with the unpacked source files when
/// the contract verified and its archive was reachable.
#[post("/api/verify_contract")]
pub async fn verify_contract(contract_address: String) -> Result<VerificationReport, ApiError> {
    let endpoints = Endpoints::from_env();
    client::verify_and_fetch_source(&endpoints, &contract_address).await
}

//! HTTP client layer for the remote compiler and verifier services.

use anyhow::anyhow;
use dioxus_logger::tracing;

use crate::deploy_record::DeploymentRecord;
use crate::endpoints::Endpoints;
use crate::source_archive;
use crate::source_archive::ExtractedFile;
use crate::verification::VerificationOutcome;
use crate::verification::VerificationParams;
use crate::verification::VerificationReport;

/// Fetches the first page of deployment records, in arrival order.
pub async fn fetch_deploy_histories(
    endpoints: &Endpoints,
) -> anyhow::Result<Vec<DeploymentRecord>> {
    let client = reqwest::Client::new();
    let records = client
        .get(endpoints.deploy_histories_url())
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<DeploymentRecord>>()
        .await?;
    Ok(records)
}

/// Asks the verifier service for its verdict on one contract.
pub async fn request_verification(
    endpoints: &Endpoints,
    contract_address: &str,
) -> anyhow::Result<VerificationOutcome> {
    let params = VerificationParams {
        contract_address: contract_address.to_string(),
        chain_id: endpoints.chain_id.clone(),
    };
    let client = reqwest::Client::new();
    let outcome = client
        .post(endpoints.verification_url())
        .json(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<VerificationOutcome>()
        .await?;
    Ok(outcome)
}

/// Downloads the source archive as raw bytes. A non-success status is an error.
pub async fn download_source_archive(src_url: &str) -> anyhow::Result<Vec<u8>> {
    let client = reqwest::Client::new();
    let bytes = client
        .get(src_url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(bytes.to_vec())
}

/// Runs the whole verification flow for one contract.
///
/// The verdict is always returned once the verifier answers. A failure while
/// downloading or unpacking the source archive is logged and leaves `files`
/// empty; it never masks the verdict.
pub async fn verify_and_fetch_source(
    endpoints: &Endpoints,
    contract_address: &str,
) -> anyhow::Result<VerificationReport> {
    let outcome = request_verification(endpoints, contract_address).await?;

    let files = if outcome.is_verified {
        match fetch_source_files(outcome.src_url.as_deref()).await {
            Ok(files) => Some(files),
            Err(e) => {
                tracing::warn!("source archive for {contract_address} unavailable: {e}");
                None
            }
        }
    } else {
        None
    };

    Ok(VerificationReport { outcome, files })
}

async fn fetch_source_files(src_url: Option<&str>) -> anyhow::Result<Vec<ExtractedFile>> {
    let src_url = src_url.ok_or_else(|| anyhow!("verifier reported success without a srcUrl"))?;
    let bytes = download_source_archive(src_url).await?;
    Ok(source_archive::unpack_source_archive(&bytes).await?)
}

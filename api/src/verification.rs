//! Request and response types for the remote verifier service.

use serde::Deserialize;
use serde::Serialize;

use crate::source_archive::ExtractedFile;

/// Body of the verification POST.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationParams {
    pub contract_address: String,
    pub chain_id: String,
}

/// The verifier's verdict for one contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub src_url: Option<String>,
    #[serde(default)]
    pub err_msg: Option<String>,
}

/// Combined result of one verification flow.
///
/// `files` is `Some` only when the contract verified and its source archive
/// downloaded and unpacked cleanly. A download or unpack failure leaves it
/// `None` while the verdict is still reported; the batch is never partial.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub outcome: VerificationOutcome,
    pub files: Option<Vec<ExtractedFile>>,
}

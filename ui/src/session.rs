//! Explicit session state for the deployment/verification page.
//!
//! All UI mutation flows through `begin_verification` and `apply`, so every
//! observable behavior of the page is a transition on this struct.

use api::deploy_record::DeploymentRecord;
use api::source_archive::ExtractedFile;
use api::verification::VerificationOutcome;
use api::verification::VerificationReport;

/// Messages dispatched into the session by the view layer.
#[derive(Clone, Debug)]
pub enum Msg {
    /// The history page arrived, records in arrival order.
    HistoryLoaded(Vec<DeploymentRecord>),
    /// A verification round trip finished.
    VerificationFinished { seq: u64, report: VerificationReport },
    /// The verification request itself failed (transport or server error).
    VerificationFailed { seq: u64, message: String },
    /// A file tab was clicked.
    FileTabSelected(usize),
}

/// State owned by the deployments screen.
///
/// Verification requests are sequenced: `begin_verification` hands out a
/// monotonically increasing number, and a completion carrying any other number
/// is dropped. A slow response can therefore never overwrite a newer row's
/// result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerifySession {
    records: Vec<DeploymentRecord>,
    selected: Option<DeploymentRecord>,
    verification: Option<VerificationOutcome>,
    request_error: Option<String>,
    files: Vec<ExtractedFile>,
    active_file: usize,
    issued: u64,
    in_flight: Option<u64>,
}

impl VerifySession {
    // --- Read APIs ---

    /// Records in display order, newest first.
    pub fn records(&self) -> &[DeploymentRecord] {
        &self.records
    }

    pub fn selected(&self) -> Option<&DeploymentRecord> {
        self.selected.as_ref()
    }

    pub fn verification(&self) -> Option<&VerificationOutcome> {
        self.verification.as_ref()
    }

    pub fn request_error(&self) -> Option<&str> {
        self.request_error.as_deref()
    }

    pub fn files(&self) -> &[ExtractedFile] {
        &self.files
    }

    pub fn active_file(&self) -> usize {
        self.active_file
    }

    pub fn current_file(&self) -> Option<&ExtractedFile> {
        self.files.get(self.active_file)
    }

    pub fn is_verifying(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True when `arrival` is the page already published into this session.
    pub fn has_history(&self, arrival: &[DeploymentRecord]) -> bool {
        self.records.len() == arrival.len() && self.records.iter().rev().eq(arrival.iter())
    }

    // --- Transitions ---

    /// Marks `record` as selected and allocates the sequence number its
    /// completion must carry.
    pub fn begin_verification(&mut self, record: DeploymentRecord) -> u64 {
        self.selected = Some(record);
        self.request_error = None;
        self.issued += 1;
        self.in_flight = Some(self.issued);
        self.issued
    }

    pub fn apply(&mut self, msg: Msg) {
        match msg {
            Msg::HistoryLoaded(mut records) => {
                // Newest first: pure reversal of arrival order, no re-sort.
                records.reverse();
                self.records = records;
            }
            Msg::VerificationFinished { seq, report } => {
                if seq != self.issued {
                    return; // stale completion, a newer request owns the screen
                }
                self.in_flight = None;
                if let Some(files) = report.files {
                    self.files = files;
                    self.active_file = 0;
                }
                self.verification = Some(report.outcome);
            }
            Msg::VerificationFailed { seq, message } => {
                if seq != self.issued {
                    return;
                }
                self.in_flight = None;
                self.request_error = Some(message);
            }
            Msg::FileTabSelected(index) => {
                if index < self.files.len() {
                    self.active_file = index;
                }
            }
        }
    }
}

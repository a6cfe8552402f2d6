//! Upload intake: which files an order may contain, and how page counts
//! are estimated.

use serde::{Deserialize, Serialize};

/// Accepted upload MIME type. Only PDF documents can be printed.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Upper bound for a single uploaded document.
pub const MAX_FILE_SIZE_BYTES: u64 = 20 * 1024 * 1024;

/// Bytes assumed per printed page when estimating page counts.
///
/// True page extraction would need PDF introspection; the estimate is
/// deliberately coarse and never below one page.
const BYTES_PER_PAGE: u64 = 40_000;

/// An accepted upload. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub size_bytes: u64,
    pub estimated_page_count: u32,
}

/// A file as presented by the upload surface, before intake rules run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// Per-file intake rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("only PDF files are accepted")]
    UnsupportedType,

    #[error("file size must be less than 20MB")]
    TooLarge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFile {
    pub name: String,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeOutcome {
    pub accepted: Vec<FileRecord>,
    pub rejected: Vec<RejectedFile>,
}

/// Partition upload candidates into accepted records and rejections.
///
/// Each candidate is judged on its own; one bad file never blocks the rest
/// of the batch. Produces no side effects — the caller decides what to do
/// with the accepted records.
pub fn accept(candidates: Vec<UploadCandidate>) -> IntakeOutcome {
    let mut outcome = IntakeOutcome::default();

    for candidate in candidates {
        if candidate.mime_type != PDF_MIME_TYPE {
            outcome.rejected.push(RejectedFile {
                name: candidate.name,
                reason: RejectReason::UnsupportedType,
            });
            continue;
        }
        if candidate.size_bytes > MAX_FILE_SIZE_BYTES {
            outcome.rejected.push(RejectedFile {
                name: candidate.name,
                reason: RejectReason::TooLarge,
            });
            continue;
        }

        outcome.accepted.push(FileRecord {
            estimated_page_count: estimate_page_count(candidate.size_bytes),
            name: candidate.name,
            size_bytes: candidate.size_bytes,
        });
    }

    outcome
}

/// `max(1, size / 40_000)` — an empty or tiny file still prints one page.
pub fn estimate_page_count(size_bytes: u64) -> u32 {
    (size_bytes / BYTES_PER_PAGE).max(1) as u32
}

//! Pending one-time codes, one per email address.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::otp::{OtpEntry, OTP_TTL_MINUTES};

/// Why a code did not verify.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("no code was requested for this email")]
    NoPendingRequest,

    #[error("the code has expired, please request a new one")]
    Expired,

    #[error("invalid code, please try again")]
    Mismatch,
}

/// The pending-code map. Per email the lifecycle is
/// `none -> pending -> none`; a newer request replaces the pending entry
/// and restarts its expiry window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpLedger {
    entries: HashMap<String, OtpEntry>,
}

impl OtpLedger {
    /// Record a freshly generated code, overwriting any pending entry for
    /// the same email.
    pub fn issue(&mut self, email: &str, code: String, now: DateTime<Utc>) -> &OtpEntry {
        let entry = OtpEntry {
            code,
            expires_at: now + Duration::minutes(OTP_TTL_MINUTES),
        };
        self.entries.insert(email.to_string(), entry);
        &self.entries[email]
    }

    /// Check a submitted code.
    ///
    /// One-time use: a match consumes the entry. An expired entry is purged
    /// as a side effect, so a retry reports `NoPendingRequest` rather than
    /// `Expired`. A mismatch keeps the entry — the user may retry until the
    /// window closes.
    pub fn verify(&mut self, email: &str, code: &str, now: DateTime<Utc>) -> Result<(), VerifyError> {
        let entry = self.entries.get(email).ok_or(VerifyError::NoPendingRequest)?;

        if entry.is_expired_at(now) {
            self.entries.remove(email);
            return Err(VerifyError::Expired);
        }
        if entry.code != code {
            return Err(VerifyError::Mismatch);
        }

        self.entries.remove(email);
        Ok(())
    }

    pub fn pending(&self, email: &str) -> Option<&OtpEntry> {
        self.entries.get(email)
    }

    /// Drop every expired entry. Expiry is checked lazily by `verify`; this
    /// exists for housekeeping and does not change observable behavior.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }
}

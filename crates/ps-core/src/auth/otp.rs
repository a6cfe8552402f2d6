use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Validity window for an issued sign-in code.
pub const OTP_TTL_MINUTES: i64 = 10;

/// A pending one-time code for a single email address.
///
/// Consumed on successful verification, purged on expiry detection, and
/// replaced wholesale by a newer request. Never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl OtpEntry {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Generate a uniform 6-digit numeric code.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(100_000..=999_999).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_six_digits() {
        for _ in 0..64 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let expires_at = Utc::now();
        let entry = OtpEntry {
            code: "123456".to_string(),
            expires_at,
        };
        assert!(!entry.is_expired_at(expires_at));
        assert!(entry.is_expired_at(expires_at + chrono::Duration::seconds(1)));
    }
}

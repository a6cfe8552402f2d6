//! Passwordless sign-in: one-time codes gated to the institutional email
//! domain, and the resulting session.

pub mod account;
pub mod ledger;
pub mod otp;
pub mod session;

pub use account::{UserAccount, UserDirectory};
pub use ledger::{OtpLedger, VerifyError};
pub use otp::{generate_code, OtpEntry};
pub use session::AuthSession;

/// Emails from any other domain are rejected before a code is generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("only {allowed_suffix} email addresses are allowed")]
pub struct DomainRejected {
    pub allowed_suffix: String,
}

/// Gate an email against the allowed institutional suffix
/// (e.g. `@sakec.ac.in`).
pub fn check_email_domain(email: &str, allowed_suffix: &str) -> Result<(), DomainRejected> {
    if email.ends_with(allowed_suffix) {
        Ok(())
    } else {
        Err(DomainRejected {
            allowed_suffix: allowed_suffix.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn institutional_addresses_pass_the_gate() {
        assert!(check_email_domain("student@sakec.ac.in", "@sakec.ac.in").is_ok());
    }

    #[test]
    fn other_domains_are_rejected() {
        let err = check_email_domain("student@notallowed.com", "@sakec.ac.in").unwrap_err();
        assert_eq!(err.allowed_suffix, "@sakec.ac.in");
    }
}

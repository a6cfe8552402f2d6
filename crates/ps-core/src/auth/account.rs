use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A known user of the print service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub email: String,
    pub name: String,
}

/// Every account that has ever signed in, keyed by email.
///
/// Accounts are created lazily on first successful verification; the
/// display name defaults to the email's local part and can change later
/// without affecting the lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDirectory {
    users: Vec<UserAccount>,
}

impl UserDirectory {
    pub fn find(&self, email: &str) -> Option<&UserAccount> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Look up the account for `email`, creating it on first sight.
    /// The boolean reports whether a new account was created.
    pub fn find_or_create(&mut self, email: &str) -> (UserAccount, bool) {
        if let Some(existing) = self.find(email) {
            return (existing.clone(), false);
        }

        let account = UserAccount {
            id: UserId::generate(),
            email: email.to_string(),
            name: local_part(email).to_string(),
        };
        self.users.push(account.clone());
        (account, true)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

use serde::{Deserialize, Serialize};

use crate::auth::account::UserAccount;

/// The process-wide authentication state.
///
/// `anonymous <-> authenticated`: verification signs in, sign-out clears.
/// Restored from the session store at startup without re-verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub current_user: Option<UserAccount>,
}

impl AuthSession {
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn sign_in(&mut self, user: UserAccount) {
        self.current_user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.current_user = None;
    }
}

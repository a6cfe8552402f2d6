//! Sign-in use cases: request a code, verify it, restore and end the
//! session.

pub mod request_sign_in_code;
pub mod restore_session;
pub mod sign_out;
pub mod verify_sign_in_code;

pub use request_sign_in_code::{RequestSignInCode, RequestSignInCodeError};
pub use restore_session::{RestoreSession, RestoreSessionError};
pub use sign_out::{SignOut, SignOutError};
pub use verify_sign_in_code::{VerifySignInCode, VerifySignInCodeError};

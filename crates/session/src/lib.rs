//! `shopmate-session` — authentication state and the local account record.
//!
//! The session store owns the `LoggedOut`/`LoggedIn` state machine and the
//! single locally-registered user record. Verification is local-only by
//! design: the account record lives in the durable key-value store and
//! there is no backing authentication server.

pub mod error;
pub mod store;
pub mod user;

pub use error::SessionError;
pub use store::{Session, SessionState, SessionStore, keys};
pub use user::{LocalUser, ProfileUpdate, Signup};

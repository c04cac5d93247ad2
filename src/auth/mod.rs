//! Accounts and sessions
//!
//! Password login issuing expiring in-memory session tokens

mod password;
mod service;
mod session;
mod types;

pub use password::{hash_password, verify_password};
pub use service::AuthService;
pub use session::{SessionStore, MAX_TTL_SECS};
pub use types::{AuthError, NewUser, Session, SessionToken, User, UserId, UserInsert};

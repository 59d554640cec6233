//! Domain model for gateway-owned accounts.
//!
//! Accounts carry three uniqueness-governed fields: the numeric identifier,
//! the display name, and the email address. Passwords are only ever held as
//! SHA-256 digests.

mod account;
mod email;
mod error;
mod ids;
mod name;
mod password;

pub use account::{Account, PersistedAccountData};
pub use email::{EmailAddress, MAX_EMAIL_LENGTH};
pub use error::AccountDomainError;
pub use ids::AccountId;
pub use name::{AccountName, MAX_NAME_LENGTH};
pub use password::PasswordDigest;

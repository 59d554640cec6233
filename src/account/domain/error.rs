//! Error types for account domain validation.

use thiserror::Error;

/// Errors returned while constructing account domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The account identifier is zero or negative.
    #[error("invalid account id {0}, expected a positive integer")]
    InvalidAccountId(i64),

    /// The account name is empty after trimming.
    #[error("account name must not be empty")]
    EmptyAccountName,

    /// The account name exceeds the 50-character storage limit.
    #[error("account name exceeds 50 character limit: {0}")]
    AccountNameTooLong(String),

    /// The email address is not a single `local@domain` token.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The email address exceeds the 100-character storage limit.
    #[error("email address exceeds 100 character limit: {0}")]
    EmailTooLong(String),

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

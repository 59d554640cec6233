//! Caller-facing messages for account operations.

/// The requested account identifier is taken.
pub const ID_IN_USE: &str = "This Account ID is already in use.";
/// The requested email address is taken.
pub const EMAIL_IN_USE: &str = "This email is already in use.";
/// The requested account name is taken.
pub const NAME_IN_USE: &str = "This account name is already in use.";
/// Account creation succeeded.
pub const ACCOUNT_CREATED: &str = "Account created.";

/// No account holds the supplied old name.
pub const OLD_NAME_NOT_FOUND: &str = "Old account name not found.";
/// Another account holds the requested new name.
pub const NEW_NAME_IN_USE: &str = "New account name is already in use.";
/// Name change succeeded.
pub const NAME_CHANGED: &str = "Account name changed.";

/// No account holds the supplied old email address.
pub const OLD_EMAIL_NOT_FOUND: &str = "Old email not found.";
/// Another account holds the requested new email address.
pub const NEW_EMAIL_IN_USE: &str = "New email is already in use.";
/// Email change succeeded.
pub const EMAIL_CHANGED: &str = "Email changed.";

/// The account is missing or the old password does not match.
pub const PASSWORD_REJECTED: &str = "Account not found or password incorrect.";
/// Password change succeeded.
pub const PASSWORD_CHANGED: &str = "Password changed.";

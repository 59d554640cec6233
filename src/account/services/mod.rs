//! Services for account creation and uniqueness-governed changes.

mod lifecycle;
pub mod messages;

pub use lifecycle::{
    AccountService, AccountServiceError, AccountServiceResult, ChangeEmailRequest,
    ChangeNameRequest, ChangePasswordRequest, CreateAccountRequest,
};

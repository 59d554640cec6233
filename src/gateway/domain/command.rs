//! Typed, validated requests handed to backing services.

use super::Operation;
use crate::account::services::{
    ChangeEmailRequest, ChangeNameRequest, ChangePasswordRequest, CreateAccountRequest,
};
use crate::order::services::PlaceOrderRequest;
use crate::validation::{ValidationOutcome, validate};
use serde_json::Value;

/// A request that passed validation for its operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCommand {
    /// Create an account.
    CreateAccount(CreateAccountRequest),
    /// Change an account name.
    ChangeAccountName(ChangeNameRequest),
    /// Change an account email address.
    ChangeAccountEmail(ChangeEmailRequest),
    /// Change an account password.
    ChangeAccountPassword(ChangePasswordRequest),
    /// Place an order.
    PlaceOrder(PlaceOrderRequest),
}

impl GatewayCommand {
    /// Validates `payload` against the schema of `operation` and builds the
    /// matching command.
    #[must_use]
    pub fn parse(operation: Operation, payload: &Value) -> ValidationOutcome<Self> {
        let schema = operation.schema();
        match operation {
            Operation::CreateAccount => validate(&schema, payload).map(Self::CreateAccount),
            Operation::ChangeAccountName => {
                validate(&schema, payload).map(Self::ChangeAccountName)
            }
            Operation::ChangeAccountEmail => {
                validate(&schema, payload).map(Self::ChangeAccountEmail)
            }
            Operation::ChangeAccountPassword => {
                validate(&schema, payload).map(Self::ChangeAccountPassword)
            }
            Operation::PlaceOrder => validate(&schema, payload).map(Self::PlaceOrder),
        }
    }

    /// Returns the operation this command belongs to.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::CreateAccount(_) => Operation::CreateAccount,
            Self::ChangeAccountName(_) => Operation::ChangeAccountName,
            Self::ChangeAccountEmail(_) => Operation::ChangeAccountEmail,
            Self::ChangeAccountPassword(_) => Operation::ChangeAccountPassword,
            Self::PlaceOrder(_) => Operation::PlaceOrder,
        }
    }
}

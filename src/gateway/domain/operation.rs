//! Logical operations exposed by the gateway.

use super::ParseOperationError;
use crate::account::domain::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};
use crate::order::domain::MAX_QUANTITY;
use crate::validation::{FieldDescriptor, FieldSchema};
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_PASSWORD_LENGTH: usize = 100;
const MAX_RECIPIENT_LENGTH: usize = 50;
const MAX_ADDRESS_LENGTH: usize = 200;

/// A routable gateway operation, bound to one method and path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `POST /accounts`
    CreateAccount,
    /// `PUT /accounts/name`
    ChangeAccountName,
    /// `PUT /accounts/email`
    ChangeAccountEmail,
    /// `PUT /accounts/password`
    ChangeAccountPassword,
    /// `POST /orders`
    PlaceOrder,
}

impl Operation {
    /// Every operation, in routing-table order.
    pub const ALL: [Self; 5] = [
        Self::CreateAccount,
        Self::ChangeAccountName,
        Self::ChangeAccountEmail,
        Self::ChangeAccountPassword,
        Self::PlaceOrder,
    ];

    /// Returns the configuration name of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateAccount => "create_account",
            Self::ChangeAccountName => "change_account_name",
            Self::ChangeAccountEmail => "change_account_email",
            Self::ChangeAccountPassword => "change_account_password",
            Self::PlaceOrder => "place_order",
        }
    }

    /// Returns the HTTP method the operation is bound to.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::CreateAccount | Self::PlaceOrder => "POST",
            Self::ChangeAccountName | Self::ChangeAccountEmail | Self::ChangeAccountPassword => {
                "PUT"
            }
        }
    }

    /// Returns the endpoint path the operation is bound to.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::CreateAccount => "/accounts",
            Self::ChangeAccountName => "/accounts/name",
            Self::ChangeAccountEmail => "/accounts/email",
            Self::ChangeAccountPassword => "/accounts/password",
            Self::PlaceOrder => "/orders",
        }
    }

    /// Resolves a method and path to an operation.
    ///
    /// Methods compare case-insensitively; a single trailing slash on the
    /// path is ignored.
    #[must_use]
    pub fn from_route(method: &str, path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ALL.into_iter().find(|operation| {
            operation.method().eq_ignore_ascii_case(method) && operation.path() == trimmed
        })
    }

    /// Returns the payload schema for the operation.
    ///
    /// Numeric identifiers form the first group so that an invalid id is
    /// reported before any string constraint.
    #[must_use]
    pub fn schema(self) -> FieldSchema {
        match self {
            Self::CreateAccount => FieldSchema::new()
                .group([FieldDescriptor::required("id").positive_integer()])
                .group([
                    account_name("name"),
                    account_email("email"),
                    password("password"),
                ]),
            Self::ChangeAccountName => {
                FieldSchema::new().group([account_name("old_name"), account_name("new_name")])
            }
            Self::ChangeAccountEmail => FieldSchema::new()
                .group([account_email("old_email"), account_email("new_email")]),
            Self::ChangeAccountPassword => FieldSchema::new()
                .group([FieldDescriptor::required("id").positive_integer()])
                .group([password("old_password"), password("new_password")]),
            Self::PlaceOrder => FieldSchema::new()
                .group([
                    FieldDescriptor::required("order_id").positive_integer(),
                    FieldDescriptor::required("account_id").positive_integer(),
                    FieldDescriptor::required("product_id").positive_integer(),
                    FieldDescriptor::required("quantity").integer_range(1, MAX_QUANTITY),
                ])
                .group([
                    FieldDescriptor::required("recipient")
                        .not_blank()
                        .max_length(MAX_RECIPIENT_LENGTH),
                    FieldDescriptor::required("address")
                        .not_blank()
                        .max_length(MAX_ADDRESS_LENGTH),
                    FieldDescriptor::required("phone").phone(),
                ]),
        }
    }
}

fn account_name(field: &str) -> FieldDescriptor {
    FieldDescriptor::required(field)
        .not_blank()
        .max_length(MAX_NAME_LENGTH)
}

fn account_email(field: &str) -> FieldDescriptor {
    FieldDescriptor::required(field)
        .max_length(MAX_EMAIL_LENGTH)
        .email()
}

fn password(field: &str) -> FieldDescriptor {
    FieldDescriptor::required(field)
        .not_blank()
        .max_length(MAX_PASSWORD_LENGTH)
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Operation {
    type Error = ParseOperationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.as_str() == value.trim())
            .ok_or_else(|| ParseOperationError(value.to_owned()))
    }
}

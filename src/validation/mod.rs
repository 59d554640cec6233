//! Declarative payload validation for inbound gateway requests.
//!
//! Every endpoint declares a static [`schema::FieldSchema`]: an ordered list
//! of field groups, each field carrying a name, a required flag, and a list
//! of [`schema::Constraint`]s. Validation runs two passes:
//!
//! 1. A structural pass that reports missing required fields and rejects
//!    fields the schema does not declare.
//! 2. A constraint pass, run only on structurally valid input, that walks
//!    the field groups in declaration order and stops after the first group
//!    that reports a violation.
//!
//! The outcome is either the typed request or an ordered list of
//! human-readable violation messages.
//!
//! # Example
//!
//! ```
//! use serde::Deserialize;
//! use serde_json::json;
//! use tollgate::validation::{FieldDescriptor, FieldSchema, ValidationOutcome, validate};
//!
//! #[derive(Debug, Deserialize)]
//! struct Subscribe {
//!     email: String,
//! }
//!
//! let schema = FieldSchema::new().group([FieldDescriptor::required("email").email()]);
//!
//! let rejected = validate::<Subscribe>(&schema, &json!({"email": "a@x.com", "extra": 1}));
//! assert_eq!(
//!     rejected.violations(),
//!     Some(&["Unexpected field: extra".to_owned()][..])
//! );
//!
//! let accepted = validate::<Subscribe>(&schema, &json!({"email": "a@x.com"}));
//! assert!(matches!(accepted, ValidationOutcome::Valid(_)));
//! ```

pub mod rules;
pub mod schema;
pub mod service;

pub use schema::{Constraint, FieldDescriptor, FieldSchema};
pub use service::{ValidationOutcome, validate};

#[cfg(test)]
mod tests;

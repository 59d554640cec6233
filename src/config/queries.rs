//! Statement texts for the relational store.
//!
//! Every statement the PostgreSQL adapters issue is configuration: the
//! defaults below match the bundled schema and can be overridden per
//! deployment. Placeholders are positional (`$1`, `$2`, ...) and always bound,
//! never interpolated.

use serde::Deserialize;

/// Parameterised statement texts keyed by logical statement name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryCatalog {
    /// `$1` account id; selects a boolean column named `present`.
    pub account_id_exists: String,
    /// `$1` account name; selects a boolean column named `present`.
    pub account_name_exists: String,
    /// `$1` email; selects a boolean column named `present`.
    pub account_email_exists: String,
    /// `$1` id, `$2` name, `$3` email, `$4` password digest, `$5` created at.
    pub account_insert: String,
    /// `$1` id; selects `id, name, email, password_digest, created_at`.
    pub account_find_by_id: String,
    /// `$1` old name, `$2` new name.
    pub account_update_name: String,
    /// `$1` old email, `$2` new email.
    pub account_update_email: String,
    /// `$1` id, `$2` old digest, `$3` new digest.
    pub account_update_password: String,
    /// `$1` order id; selects a boolean column named `present`.
    pub order_id_exists: String,
    /// `$1` id, `$2` account id, `$3` product id, `$4` quantity,
    /// `$5` recipient, `$6` address, `$7` phone, `$8` placed at.
    pub order_insert: String,
    /// `$1` id; selects every order column.
    pub order_find_by_id: String,
}

impl Default for QueryCatalog {
    fn default() -> Self {
        Self {
            account_id_exists: "SELECT EXISTS (SELECT 1 FROM accounts WHERE id = $1) AS present"
                .to_owned(),
            account_name_exists:
                "SELECT EXISTS (SELECT 1 FROM accounts WHERE name = $1) AS present".to_owned(),
            account_email_exists:
                "SELECT EXISTS (SELECT 1 FROM accounts WHERE email = $1) AS present".to_owned(),
            account_insert: "INSERT INTO accounts (id, name, email, password_digest, created_at) \
                             VALUES ($1, $2, $3, $4, $5)"
                .to_owned(),
            account_find_by_id: "SELECT id, name, email, password_digest, created_at \
                                 FROM accounts WHERE id = $1"
                .to_owned(),
            account_update_name: "UPDATE accounts SET name = $2 WHERE name = $1".to_owned(),
            account_update_email: "UPDATE accounts SET email = $2 WHERE email = $1".to_owned(),
            account_update_password: "UPDATE accounts SET password_digest = $3 \
                                      WHERE id = $1 AND password_digest = $2"
                .to_owned(),
            order_id_exists: "SELECT EXISTS (SELECT 1 FROM orders WHERE id = $1) AS present"
                .to_owned(),
            order_insert: "INSERT INTO orders \
                           (id, account_id, product_id, quantity, recipient, address, phone, placed_at) \
                           VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"
                .to_owned(),
            order_find_by_id: "SELECT id, account_id, product_id, quantity, recipient, address, \
                               phone, placed_at FROM orders WHERE id = $1"
                .to_owned(),
        }
    }
}

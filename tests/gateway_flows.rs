//! End-to-end gateway flows over in-memory stores.
//!
//! Tests are organized into modules by functionality:
//! - `account_tests`: Account creation and uniqueness-governed changes
//! - `order_tests`: Order placement and payload validation
//! - `http_front_tests`: The HTTP front and downstream relaying over sockets

mod gateway_flows {
    pub mod helpers;

    mod account_tests;
    mod http_front_tests;
    mod order_tests;
}

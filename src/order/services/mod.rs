//! Services for order placement.

mod placement;

pub use placement::{
    ORDER_ID_IN_USE, ORDER_PLACED, OrderService, OrderServiceError, OrderServiceResult,
    PlaceOrderRequest,
};

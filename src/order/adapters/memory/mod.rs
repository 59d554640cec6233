//! In-memory order repository.

mod repository;

pub use repository::InMemoryOrderRepository;

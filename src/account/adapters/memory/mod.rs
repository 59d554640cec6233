//! In-memory account repository.

mod repository;

pub use repository::InMemoryAccountRepository;

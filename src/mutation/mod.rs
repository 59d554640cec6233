//! Uniqueness-governed create and change protocols.
//!
//! A protocol is an explicit object built from closures over a store scope
//! `S`: presence lookups, conflict lookups and a final write. Executing a
//! protocol runs the lookups in a fixed order and performs the write only when
//! every check passes.
//!
//! Protocols do not lock anything themselves. Repositories execute them
//! inside a single transactional scope (a serializable transaction, or an
//! exclusive lock for in-memory stores) so the check-then-act window is
//! closed. Store-level unique constraints still back every write; a
//! violation raised there surfaces through the store error type `E`.
//!
//! | Protocol           | Steps                                             |
//! |--------------------|---------------------------------------------------|
//! | [`CreateProtocol`]  | each constraint lookup → insert                   |
//! | [`ChangeProtocol`]  | old value present → new value free or same → apply |
//! | [`ReplaceProtocol`] | guarded write; zero affected rows means not found |

mod constraint;
mod outcome;
mod protocol;

pub use constraint::{Lookup, UniquenessConstraint};
pub use outcome::MutationOutcome;
pub use protocol::{Apply, ChangeProtocol, CreateProtocol, Insert, ReplaceProtocol};

#[cfg(test)]
mod tests;

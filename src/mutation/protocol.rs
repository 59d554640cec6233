//! Protocol objects for uniqueness-governed writes.

use super::{Lookup, MutationOutcome, UniquenessConstraint};

/// Final insert step of a create protocol.
pub type Insert<'a, S, E> = Box<dyn FnOnce(&mut S) -> Result<(), E> + Send + 'a>;

/// Final update step returning the number of affected rows.
pub type Apply<'a, S, E> = Box<dyn FnOnce(&mut S) -> Result<u64, E> + Send + 'a>;

/// Check-unique-then-insert protocol for entity creation.
///
/// Constraints run in declaration order; the first taken value ends the run
/// with [`MutationOutcome::Conflict`] and the insert is never attempted.
/// Declare the primary identifier first so its conflict wins over secondary
/// fields.
pub struct CreateProtocol<'a, S: ?Sized, E> {
    constraints: Vec<UniquenessConstraint<'a, S, E>>,
    insert: Insert<'a, S, E>,
}

impl<'a, S: ?Sized, E> CreateProtocol<'a, S, E> {
    /// Creates a protocol around the insert step.
    #[must_use]
    pub fn new<F>(insert: F) -> Self
    where
        F: FnOnce(&mut S) -> Result<(), E> + Send + 'a,
    {
        Self {
            constraints: Vec::new(),
            insert: Box::new(insert),
        }
    }

    /// Appends a uniqueness constraint.
    #[must_use]
    pub fn require(mut self, constraint: UniquenessConstraint<'a, S, E>) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Appends a constraint from a conflict message and a lookup.
    #[must_use]
    pub fn require_unique<F>(self, conflict: impl Into<String>, lookup: F) -> Self
    where
        F: FnOnce(&mut S) -> Result<bool, E> + Send + 'a,
    {
        self.require(UniquenessConstraint::new(conflict, lookup))
    }

    /// Runs every constraint and, when all pass, the insert.
    ///
    /// # Errors
    ///
    /// Propagates store errors from any lookup or from the insert. A
    /// store-level unique violation raised by the insert arrives here too.
    pub fn execute(self, scope: &mut S) -> Result<MutationOutcome, E> {
        for constraint in self.constraints {
            if let Some(conflict) = constraint.evaluate(scope)? {
                return Ok(MutationOutcome::Conflict(conflict));
            }
        }
        (self.insert)(scope)?;
        Ok(MutationOutcome::Applied)
    }
}

/// Check-old, check-new, apply protocol for changing a unique value.
///
/// 1. The old value must exist, which both proves the caller knows the
///    current value and rules out changing a missing record.
/// 2. The new value must not be held by any row, unless it equals the old
///    value, in which case the change is a permitted no-op.
/// 3. The update is applied. Zero affected rows means the old value
///    vanished and is reported as not found.
pub struct ChangeProtocol<'a, S: ?Sized, E> {
    old_exists: Lookup<'a, S, E>,
    new_taken: Lookup<'a, S, E>,
    unchanged: bool,
    apply: Apply<'a, S, E>,
    not_found: String,
    conflict: String,
}

impl<'a, S: ?Sized, E> ChangeProtocol<'a, S, E> {
    /// Builds a change protocol.
    ///
    /// `unchanged` states whether the new value equals the old one.
    #[must_use]
    pub fn new<O, N, A>(unchanged: bool, old_exists: O, new_taken: N, apply: A) -> Self
    where
        O: FnOnce(&mut S) -> Result<bool, E> + Send + 'a,
        N: FnOnce(&mut S) -> Result<bool, E> + Send + 'a,
        A: FnOnce(&mut S) -> Result<u64, E> + Send + 'a,
    {
        Self {
            old_exists: Box::new(old_exists),
            new_taken: Box::new(new_taken),
            unchanged,
            apply: Box::new(apply),
            not_found: "old value not found".to_owned(),
            conflict: "new value already in use".to_owned(),
        }
    }

    /// Sets the message reported when the old value is absent.
    #[must_use]
    pub fn not_found_message(mut self, message: impl Into<String>) -> Self {
        self.not_found = message.into();
        self
    }

    /// Sets the message reported when the new value is taken.
    #[must_use]
    pub fn conflict_message(mut self, message: impl Into<String>) -> Self {
        self.conflict = message.into();
        self
    }

    /// Runs the three protocol steps in order.
    ///
    /// # Errors
    ///
    /// Propagates store errors from either lookup or from the update.
    pub fn execute(self, scope: &mut S) -> Result<MutationOutcome, E> {
        if !(self.old_exists)(scope)? {
            return Ok(MutationOutcome::NotFound(self.not_found));
        }
        if (self.new_taken)(scope)? && !self.unchanged {
            return Ok(MutationOutcome::Conflict(self.conflict));
        }
        if (self.apply)(scope)? == 0 {
            return Ok(MutationOutcome::NotFound(self.not_found));
        }
        Ok(MutationOutcome::Applied)
    }
}

/// Guarded single-write protocol for simple fields such as passwords.
///
/// The write itself carries the guard (for example `WHERE id = $1 AND
/// digest = $2`); zero affected rows is reported as not found.
pub struct ReplaceProtocol<'a, S: ?Sized, E> {
    apply: Apply<'a, S, E>,
    not_found: String,
}

impl<'a, S: ?Sized, E> ReplaceProtocol<'a, S, E> {
    /// Builds a replace protocol around the guarded write.
    #[must_use]
    pub fn new<A>(not_found: impl Into<String>, apply: A) -> Self
    where
        A: FnOnce(&mut S) -> Result<u64, E> + Send + 'a,
    {
        Self {
            apply: Box::new(apply),
            not_found: not_found.into(),
        }
    }

    /// Performs the guarded write.
    ///
    /// # Errors
    ///
    /// Propagates the store error raised by the write.
    pub fn execute(self, scope: &mut S) -> Result<MutationOutcome, E> {
        if (self.apply)(scope)? == 0 {
            return Ok(MutationOutcome::NotFound(self.not_found));
        }
        Ok(MutationOutcome::Applied)
    }
}

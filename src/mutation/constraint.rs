//! Declared uniqueness constraints evaluated by the create protocol.

/// Store lookup answering "is this value already held by a row?".
pub type Lookup<'a, S, E> = Box<dyn FnOnce(&mut S) -> Result<bool, E> + Send + 'a>;

/// A uniqueness rule attached to a field being created.
///
/// The lookup reports whether the value is already taken; a taken value
/// fails the protocol with the conflict message. Constraints are built per
/// mutation attempt and evaluated against fresh store state.
pub struct UniquenessConstraint<'a, S: ?Sized, E> {
    conflict: String,
    lookup: Lookup<'a, S, E>,
}

impl<'a, S: ?Sized, E> UniquenessConstraint<'a, S, E> {
    /// Declares a constraint from a conflict message and a lookup.
    #[must_use]
    pub fn new<F>(conflict: impl Into<String>, lookup: F) -> Self
    where
        F: FnOnce(&mut S) -> Result<bool, E> + Send + 'a,
    {
        Self {
            conflict: conflict.into(),
            lookup: Box::new(lookup),
        }
    }

    /// Returns the message reported when the value is taken.
    #[must_use]
    pub fn conflict_message(&self) -> &str {
        &self.conflict
    }

    /// Runs the lookup and returns the conflict message when the value is
    /// already held.
    ///
    /// # Errors
    ///
    /// Propagates the store error raised by the lookup.
    pub fn evaluate(self, scope: &mut S) -> Result<Option<String>, E> {
        let taken = (self.lookup)(scope)?;
        Ok(taken.then_some(self.conflict))
    }
}

//! Guard predicates for controlling state transitions.
//!
//! A guard decides whether a transition rule applies to the state an
//! entity is currently in. Transition tables pair each trigger with a guard.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can fire from a state.
///
/// # Example
///
/// ```rust
/// use teller::core::Guard;
/// use teller::AccountStatus;
///
/// let open = Guard::new(|s: &AccountStatus| !matches!(s, AccountStatus::Closed));
///
/// assert!(open.check(&AccountStatus::Suspended));
/// assert!(!open.check(&AccountStatus::Closed));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync),
    /// since standard transition tables are shared process-wide.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that only passes for one exact state.
    pub fn only(expected: S) -> Self
    where
        S: 'static,
    {
        Self::new(move |state: &S| *state == expected)
    }

    /// Guard that passes for every non-final state.
    pub fn not_final() -> Self
    where
        S: 'static,
    {
        Self::new(|state: &S| !state.is_final())
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

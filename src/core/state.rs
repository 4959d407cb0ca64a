//! Core State trait for state machine states.
//!
//! Every status an account can hold implements this trait, which exposes
//! pure methods for inspecting the status without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values describing where an
/// entity currently sits in its lifecycle.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: transition rules compare states
/// - `Debug`: diagnostics and log fields
/// - `Serialize` + `Deserialize`: projections and history are serializable
///
/// # Example
///
/// ```rust
/// use teller::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum CardState {
///     Issued,
///     Active,
///     Blocked,
///     Destroyed,
/// }
///
/// impl State for CardState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Issued => "Issued",
///             Self::Active => "Active",
///             Self::Blocked => "Blocked",
///             Self::Destroyed => "Destroyed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Destroyed)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Blocked)
///     }
/// }
///
/// assert!(CardState::Destroyed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// No transition leaves a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

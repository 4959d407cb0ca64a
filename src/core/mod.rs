//! Core state machine types.
//!
//! This module contains the generic, pure part of the account lifecycle:
//! - State definitions via the `State` trait
//! - Guard predicates for transition rules
//! - Immutable history of applied transitions
//!
//! Nothing here knows about balances or money; the `account` module builds
//! the banking rules on top of these pieces.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;

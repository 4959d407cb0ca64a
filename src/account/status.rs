//! Account status and its transition table.
//!
//! ```text
//! Unverified --verify--> Verified --suspend--> Suspended
//!                           ^                      |
//!                           +-------appeal---------+
//! any status except Closed --close--> Closed (terminal)
//! ```

use crate::core::{Guard, State};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

crate::state_enum! {
    /// Lifecycle status of an account. Governs which transactions are permitted.
    #[derive(Copy, Eq, Hash)]
    pub enum AccountStatus {
        /// Freshly opened, identity not yet confirmed.
        Unverified,
        Verified,
        Suspended,
        Closed,
    }
    final: [Closed]
}

/// Event that asks an account to change status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    Verify,
    Suspend,
    Appeal,
    Close,
}

impl Trigger {
    pub const ALL: [Trigger; 4] = [Self::Verify, Self::Suspend, Self::Appeal, Self::Close];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Suspend => "suspend",
            Self::Appeal => "appeal",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the transition table: `trigger` moves any status accepted by
/// `guard` to `to`.
#[derive(Debug)]
pub struct TransitionRule {
    pub trigger: Trigger,
    pub guard: Guard<AccountStatus>,
    pub to: AccountStatus,
}

/// Data-driven status machine: `(from, trigger) -> to | rejected`.
#[derive(Debug)]
pub struct TransitionTable {
    rules: Vec<TransitionRule>,
}

static STANDARD: LazyLock<TransitionTable> = LazyLock::new(|| {
    TransitionTable::new()
        .rule(
            Trigger::Verify,
            Guard::only(AccountStatus::Unverified),
            AccountStatus::Verified,
        )
        .rule(
            Trigger::Suspend,
            Guard::only(AccountStatus::Verified),
            AccountStatus::Suspended,
        )
        .rule(
            Trigger::Appeal,
            Guard::only(AccountStatus::Suspended),
            AccountStatus::Verified,
        )
        .rule(Trigger::Close, Guard::not_final(), AccountStatus::Closed)
});

impl TransitionTable {
    /// Empty table; every trigger is rejected until rules are added.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Shared table used by every account.
    pub fn standard() -> &'static TransitionTable {
        &STANDARD
    }

    pub fn rule(mut self, trigger: Trigger, guard: Guard<AccountStatus>, to: AccountStatus) -> Self {
        self.rules.push(TransitionRule { trigger, guard, to });
        self
    }

    /// Resolve the target status, or `None` when the trigger is not defined
    /// for `from`. The first matching rule wins.
    pub fn next(&self, from: &AccountStatus, trigger: Trigger) -> Option<AccountStatus> {
        self.rules
            .iter()
            .find(|rule| rule.trigger == trigger && rule.guard.check(from))
            .map(|rule| rule.to)
    }

    pub fn rules(&self) -> &[TransitionRule] {
        &self.rules
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 4] = [
        Self::Unverified,
        Self::Verified,
        Self::Suspended,
        Self::Closed,
    ];
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

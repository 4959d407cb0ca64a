//! Bank account with a status-gated lifecycle.
//!
//! An [`Account`] owns its balance and status. Transactions are checked
//! against the [`TransactionAuthorizer`] permission table before the balance
//! moves; status changes go through the shared [`TransitionTable`]. An
//! optional [`TransactionObserver`] is told about each outcome, which is how
//! [`CreditScoreAccount`](crate::CreditScoreAccount) keeps its score.
//!
//! # Example
//!
//! ```rust
//! use teller::{Account, AccountStatus};
//! use rust_decimal::Decimal;
//!
//! let mut account = Account::new(7, "Ada", Decimal::ZERO).unwrap();
//! assert_eq!(account.card_number(), "0007 0007 0007 0007");
//!
//! account.deposit(Decimal::from(200)).unwrap();
//! assert!(account.withdraw(Decimal::from(50)).is_err()); // still Unverified
//!
//! account.verify().unwrap();
//! account.withdraw(Decimal::from(50)).unwrap();
//! assert_eq!(account.balance(), Decimal::from(150));
//! assert_eq!(account.status(), AccountStatus::Verified);
//! ```

pub mod error;
pub mod observer;
pub mod status;
mod summary;

pub use error::{AccountError, ErrorKind};
pub use observer::{AccountSnapshot, NoObserver, TransactionObserver};
pub use status::{AccountStatus, TransitionRule, TransitionTable, Trigger};
pub use summary::AccountSummary;

use crate::authorizer::{Operation, TransactionAuthorizer};
use crate::core::{State, StateHistory, StateTransition};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Rules accounts apply to their own transactions. No ceiling.
const ACCOUNT_RULES: TransactionAuthorizer = TransactionAuthorizer::new();

/// Secondary key derived from the account id: four groups of the id,
/// zero-padded to four digits.
pub fn card_number_for(id: u32) -> String {
    format!("{id:04} {id:04} {id:04} {id:04}")
}

/// Store seam used by [`Account::transfer`] to resolve recipients.
pub trait AccountLookup {
    type Observer: TransactionObserver;

    fn find_by_card_number_mut(
        &mut self,
        card_number: &str,
    ) -> Option<&mut Account<Self::Observer>>;
}

#[derive(Debug, Clone)]
pub struct Account<O = NoObserver> {
    id: u32,
    client_name: String,
    card_number: String,
    balance: Decimal,
    status: AccountStatus,
    history: StateHistory<AccountStatus>,
    observer: O,
}

impl Account {
    /// Open a plain account in `Unverified` status.
    pub fn new(
        id: u32,
        client_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Self, AccountError> {
        Self::with_observer(id, client_name, initial_balance, NoObserver)
    }
}

impl<O: TransactionObserver> Account<O> {
    /// Open an account in `Unverified` status with `observer` attached.
    pub fn with_observer(
        id: u32,
        client_name: impl Into<String>,
        initial_balance: Decimal,
        observer: O,
    ) -> Result<Self, AccountError> {
        if initial_balance < Decimal::ZERO {
            return Err(AccountError::NegativeOpeningBalance {
                amount: initial_balance,
            });
        }

        Ok(Self {
            id,
            client_name: client_name.into(),
            card_number: card_number_for(id),
            balance: initial_balance,
            status: AccountStatus::Unverified,
            history: StateHistory::new(),
            observer,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn set_client_name(&mut self, client_name: impl Into<String>) {
        self.client_name = client_name.into();
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    /// Status transitions applied so far, oldest first.
    pub fn history(&self) -> &StateHistory<AccountStatus> {
        &self.history
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub(crate) fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id,
            balance: self.balance,
            status: self.status,
        }
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            client_name: self.client_name.clone(),
            card_number: self.card_number.clone(),
            balance: self.balance,
            status: self.status,
            credit_score: self.observer.credit_score(),
            transaction_limit: self.observer.withdrawal_limit(),
        }
    }

    /// Whether the current status allows `operation` at all.
    pub fn can(&self, operation: Operation) -> bool {
        TransactionAuthorizer::permits(self.status, operation)
    }

    /// Add funds. Allowed in every status except `Closed`.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let outcome = self.apply_deposit(amount);
        let snapshot = self.snapshot();
        self.observer.on_deposit(&snapshot, amount, &outcome);
        outcome
    }

    /// Remove funds. Only `Verified` accounts may withdraw, and never more
    /// than the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if let Some(limit) = self.observer.withdrawal_limit() {
            if amount > limit {
                debug!(account = self.id, %amount, %limit, "withdrawal above transaction limit");
                return Err(AccountError::LimitExceeded {
                    requested: amount,
                    limit,
                });
            }
        }

        let outcome = self.apply_withdraw(amount);
        let snapshot = self.snapshot();
        self.observer.on_withdraw_attempt(&snapshot, amount, &outcome);
        outcome
    }

    /// Move `amount` to the account whose card number is `recipient_card`.
    ///
    /// The sender must be `Verified` and hold at least `amount`; the
    /// recipient must exist in `accounts` and not be `Closed`. Both balances
    /// change together or not at all, so their sum is conserved. The
    /// description is carried into the log only.
    pub fn transfer<L>(
        &mut self,
        accounts: &mut L,
        recipient_card: &str,
        amount: Decimal,
        description: &str,
    ) -> Result<(), AccountError>
    where
        L: AccountLookup + ?Sized,
    {
        ACCOUNT_RULES.authorize(self.status, Operation::Transfer, amount, self.balance)?;

        if recipient_card == self.card_number {
            debug!(account = self.id, %amount, description, "self-transfer has no net effect");
            return Ok(());
        }

        let recipient = accounts
            .find_by_card_number_mut(recipient_card)
            .filter(|recipient| !recipient.status.is_final())
            .ok_or_else(|| AccountError::RecipientUnavailable {
                card_number: recipient_card.to_string(),
            })?;

        self.balance -= amount;
        recipient.balance += amount;

        debug!(
            from = self.id,
            to = recipient.id,
            %amount,
            description,
            "transfer applied"
        );
        Ok(())
    }

    pub fn verify(&mut self) -> Result<(), AccountError> {
        self.fire(Trigger::Verify)
    }

    pub fn suspend(&mut self) -> Result<(), AccountError> {
        let outcome = self.fire(Trigger::Suspend);
        let snapshot = self.snapshot();
        self.observer.on_suspend(&snapshot, &outcome);
        outcome
    }

    /// Return a suspended account to `Verified`.
    pub fn appeal(&mut self) -> Result<(), AccountError> {
        let outcome = self.fire(Trigger::Appeal);
        let snapshot = self.snapshot();
        self.observer.on_appeal(&snapshot, &outcome);
        outcome
    }

    /// Close the account. Fails if it is already closed.
    pub fn close(&mut self) -> Result<(), AccountError> {
        self.fire(Trigger::Close)
    }

    fn apply_deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        ACCOUNT_RULES.authorize(self.status, Operation::Deposit, amount, self.balance)?;
        self.balance += amount;
        debug!(account = self.id, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    fn apply_withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        ACCOUNT_RULES.authorize(self.status, Operation::Withdraw, amount, self.balance)?;
        self.balance -= amount;
        debug!(account = self.id, %amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    fn fire(&mut self, trigger: Trigger) -> Result<(), AccountError> {
        let from = self.status;
        let Some(to) = TransitionTable::standard().next(&from, trigger) else {
            debug!(account = self.id, %trigger, status = %from, "transition rejected");
            return Err(AccountError::TransitionRejected { trigger, from });
        };

        self.history = self.history.record(StateTransition {
            from,
            to,
            trigger: trigger.name().to_string(),
            timestamp: Utc::now(),
        });
        self.status = to;
        info!(account = self.id, %trigger, from = %from, to = %to, "status changed");
        Ok(())
    }
}

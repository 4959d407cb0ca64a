//! Hooks that let a policy react to account operations.

use crate::account::error::AccountError;
use crate::account::status::AccountStatus;
use rust_decimal::Decimal;
use serde::Serialize;

/// Read-only view of an account handed to observers.
///
/// Taken after the base operation ran, so on success it already reflects
/// the new balance or status, and on failure it equals the state before.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccountSnapshot {
    pub id: u32,
    pub balance: Decimal,
    pub status: AccountStatus,
}

/// Policy attached to an account.
///
/// The account consults `withdrawal_limit` before a withdrawal, runs its
/// own rules, then reports the outcome through the matching `on_*` hook.
/// Every method has a no-op default.
pub trait TransactionObserver: Send + Sync {
    /// Ceiling for a single withdrawal. Larger requests are refused before
    /// the account's own checks run and no hook is called.
    fn withdrawal_limit(&self) -> Option<Decimal> {
        None
    }

    fn credit_score(&self) -> Option<i32> {
        None
    }

    fn on_deposit(
        &mut self,
        _account: &AccountSnapshot,
        _amount: Decimal,
        _outcome: &Result<(), AccountError>,
    ) {
    }

    fn on_withdraw_attempt(
        &mut self,
        _account: &AccountSnapshot,
        _amount: Decimal,
        _outcome: &Result<(), AccountError>,
    ) {
    }

    fn on_suspend(&mut self, _account: &AccountSnapshot, _outcome: &Result<(), AccountError>) {}

    fn on_appeal(&mut self, _account: &AccountSnapshot, _outcome: &Result<(), AccountError>) {}
}

/// Observer for plain accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoObserver;

impl TransactionObserver for NoObserver {}

impl<T: TransactionObserver + ?Sized> TransactionObserver for Box<T> {
    fn withdrawal_limit(&self) -> Option<Decimal> {
        (**self).withdrawal_limit()
    }

    fn credit_score(&self) -> Option<i32> {
        (**self).credit_score()
    }

    fn on_deposit(
        &mut self,
        account: &AccountSnapshot,
        amount: Decimal,
        outcome: &Result<(), AccountError>,
    ) {
        (**self).on_deposit(account, amount, outcome)
    }

    fn on_withdraw_attempt(
        &mut self,
        account: &AccountSnapshot,
        amount: Decimal,
        outcome: &Result<(), AccountError>,
    ) {
        (**self).on_withdraw_attempt(account, amount, outcome)
    }

    fn on_suspend(&mut self, account: &AccountSnapshot, outcome: &Result<(), AccountError>) {
        (**self).on_suspend(account, outcome)
    }

    fn on_appeal(&mut self, account: &AccountSnapshot, outcome: &Result<(), AccountError>) {
        (**self).on_appeal(account, outcome)
    }
}

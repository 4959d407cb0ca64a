//! In-memory account store.
//!
//! The store is an ordinary value owned by the caller: accounts keyed by id
//! with a secondary index on card number. It supplies recipient lookup for
//! transfers and exposes the id-based service operations a front end needs.
//!
//! # Example
//!
//! ```rust
//! use teller::AccountStore;
//! use rust_decimal::Decimal;
//!
//! let mut store = AccountStore::new();
//! store.open_account(1, "Ada", Decimal::from(1000)).unwrap();
//! store.open_account(2, "Lin", Decimal::from(500)).unwrap();
//! store.verify_account(1).unwrap();
//!
//! store
//!     .transfer(1, "0002 0002 0002 0002", Decimal::from(300), "rent")
//!     .unwrap();
//! assert_eq!(store.find_by_id(2).unwrap().balance(), Decimal::from(800));
//! ```

pub mod error;

pub use error::StoreError;

use crate::account::{Account, AccountLookup, NoObserver, TransactionObserver};
use crate::authorizer::{Operation, TransactionAuthorizer};
use rust_decimal::Decimal;
use std::collections::HashMap;
use stillwater::validation::Validation;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct AccountStore<O = NoObserver> {
    accounts: HashMap<u32, Account<O>>,
    card_index: HashMap<String, u32>,
    authorizer: TransactionAuthorizer,
}

impl AccountStore {
    /// Empty store of plain accounts with the service ceiling applied by
    /// [`validate_transaction`](Self::validate_transaction).
    pub fn new() -> Self {
        Self::with_authorizer(TransactionAuthorizer::service())
    }

    /// Open a plain account and store it.
    pub fn open_account(
        &mut self,
        id: u32,
        client_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<&mut Account, StoreError> {
        let account = Account::new(id, client_name, initial_balance)?;
        self.insert(account)
    }
}

impl<O: TransactionObserver> Default for AccountStore<O> {
    fn default() -> Self {
        Self::with_authorizer(TransactionAuthorizer::service())
    }
}

impl<O: TransactionObserver> AccountStore<O> {
    pub fn with_authorizer(authorizer: TransactionAuthorizer) -> Self {
        Self {
            accounts: HashMap::new(),
            card_index: HashMap::new(),
            authorizer,
        }
    }

    pub fn authorizer(&self) -> &TransactionAuthorizer {
        &self.authorizer
    }

    /// Add an account. Its id must be unused; the card number is derived
    /// from the id, so it is unique too.
    pub fn insert(&mut self, account: Account<O>) -> Result<&mut Account<O>, StoreError> {
        let id = account.id();
        if self.accounts.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }

        self.card_index.insert(account.card_number().to_string(), id);
        debug!(account = id, "account stored");
        Ok(self.accounts.entry(id).or_insert(account))
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Account<O>> {
        self.accounts.get(&id)
    }

    pub fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Account<O>> {
        self.accounts.get_mut(&id)
    }

    pub fn find_by_card_number(&self, card_number: &str) -> Option<&Account<O>> {
        let id = self.card_index.get(card_number)?;
        self.accounts.get(id)
    }

    pub fn find_by_card_number_mut(&mut self, card_number: &str) -> Option<&mut Account<O>> {
        let id = *self.card_index.get(card_number)?;
        self.accounts.get_mut(&id)
    }

    pub fn remove(&mut self, id: u32) -> Option<Account<O>> {
        let account = self.accounts.remove(&id)?;
        self.card_index.remove(account.card_number());
        Some(account)
    }

    pub fn clear(&mut self) {
        self.accounts.clear();
        self.card_index.clear();
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account<O>> {
        self.accounts.values()
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut Account<O>, StoreError> {
        self.accounts
            .get_mut(&id)
            .ok_or(StoreError::AccountNotFound(id))
    }

    pub fn verify_account(&mut self, id: u32) -> Result<(), StoreError> {
        Ok(self.get_mut(id)?.verify()?)
    }

    pub fn suspend_account(&mut self, id: u32) -> Result<(), StoreError> {
        Ok(self.get_mut(id)?.suspend()?)
    }

    pub fn appeal_account(&mut self, id: u32) -> Result<(), StoreError> {
        Ok(self.get_mut(id)?.appeal()?)
    }

    pub fn close_account(&mut self, id: u32) -> Result<(), StoreError> {
        Ok(self.get_mut(id)?.close()?)
    }

    pub fn deposit(&mut self, id: u32, amount: Decimal) -> Result<(), StoreError> {
        Ok(self.get_mut(id)?.deposit(amount)?)
    }

    pub fn withdraw(&mut self, id: u32, amount: Decimal) -> Result<(), StoreError> {
        Ok(self.get_mut(id)?.withdraw(amount)?)
    }

    /// Transfer from the account with `sender_id` to the account holding
    /// `recipient_card`.
    ///
    /// The sender is taken out of the map for the duration of the call so
    /// both accounts can be borrowed mutably; it is always put back.
    pub fn transfer(
        &mut self,
        sender_id: u32,
        recipient_card: &str,
        amount: Decimal,
        description: &str,
    ) -> Result<(), StoreError> {
        let mut sender = self
            .accounts
            .remove(&sender_id)
            .ok_or(StoreError::AccountNotFound(sender_id))?;

        let outcome = sender.transfer(self, recipient_card, amount, description);
        self.accounts.insert(sender_id, sender);

        if outcome.is_ok() {
            info!(from = sender_id, to = recipient_card, %amount, "transfer completed");
        }
        Ok(outcome?)
    }

    /// Whether the account's status allows `operation`. Unknown ids are
    /// never allowed anything.
    pub fn is_operation_allowed(&self, id: u32, operation: Operation) -> bool {
        self.find_by_id(id)
            .is_some_and(|account| account.can(operation))
    }

    /// Service-level pre-check with the store's authorizer, reporting every
    /// violation at once. Nothing is applied.
    pub fn validate_transaction(
        &self,
        id: u32,
        operation: Operation,
        amount: Decimal,
    ) -> Result<(), StoreError> {
        let account = self.find_by_id(id).ok_or(StoreError::AccountNotFound(id))?;

        match self
            .authorizer
            .validate(account.status(), operation, amount, account.balance())
        {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(StoreError::Rejected {
                id,
                violations: violations.iter().cloned().collect(),
            }),
        }
    }
}

impl<O: TransactionObserver> AccountLookup for AccountStore<O> {
    type Observer = O;

    fn find_by_card_number_mut(&mut self, card_number: &str) -> Option<&mut Account<O>> {
        AccountStore::<O>::find_by_card_number_mut(self, card_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AccountError, AccountStatus, ErrorKind};
    use crate::credit::{CreditScore, CreditScoreAccount};
    use rust_decimal_macros::dec;

    fn store_with_two() -> AccountStore {
        let mut store = AccountStore::new();
        store.open_account(1, "Ada", dec!(1000)).unwrap();
        store.open_account(2, "Lin", dec!(500)).unwrap();
        store
    }

    #[test]
    fn lookups_by_id_and_card_number() {
        let store = store_with_two();

        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(1).unwrap().client_name(), "Ada");
        assert_eq!(
            store.find_by_card_number("0002 0002 0002 0002").unwrap().id(),
            2
        );
        assert!(store.find_by_card_number("0003 0003 0003 0003").is_none());
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut store = store_with_two();

        let err = store.open_account(1, "Again", dec!(0)).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(1).unwrap().client_name(), "Ada");
        assert_eq!(
            store
                .find_by_card_number("0001 0001 0001 0001")
                .unwrap()
                .client_name(),
            "Ada"
        );
    }

    #[test]
    fn negative_opening_balance_surfaces_as_account_error() {
        let mut store = AccountStore::new();
        let err = store.open_account(1, "x", dec!(-5)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Account(AccountError::NegativeOpeningBalance { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_drops_both_indexes() {
        let mut store = store_with_two();

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.id(), 1);
        assert!(store.find_by_card_number("0001 0001 0001 0001").is_none());
        assert!(store.remove(1).is_none());

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn service_transitions_by_id() {
        let mut store = store_with_two();

        store.verify_account(1).unwrap();
        store.suspend_account(1).unwrap();
        store.appeal_account(1).unwrap();
        store.close_account(1).unwrap();
        assert_eq!(store.find_by_id(1).unwrap().status(), AccountStatus::Closed);

        assert_eq!(
            store.close_account(1).unwrap_err(),
            StoreError::Account(AccountError::TransitionRejected {
                trigger: crate::account::Trigger::Close,
                from: AccountStatus::Closed,
            })
        );
        assert_eq!(
            store.verify_account(99).unwrap_err(),
            StoreError::AccountNotFound(99)
        );
    }

    #[test]
    fn transfer_conserves_total_balance() {
        let mut store = store_with_two();
        store.verify_account(1).unwrap();
        store.verify_account(2).unwrap();

        store
            .transfer(1, "0002 0002 0002 0002", dec!(300), "x")
            .unwrap();

        assert_eq!(store.find_by_id(1).unwrap().balance(), dec!(700));
        assert_eq!(store.find_by_id(2).unwrap().balance(), dec!(800));
        let total: Decimal = store.iter().map(|a| a.balance()).sum();
        assert_eq!(total, dec!(1500));
    }

    #[test]
    fn failed_transfer_restores_sender() {
        let mut store = store_with_two();
        store.verify_account(1).unwrap();
        store.close_account(2).unwrap();

        let err = store
            .transfer(1, "0002 0002 0002 0002", dec!(10), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Account(AccountError::RecipientUnavailable { .. })
        ));
        assert_eq!(store.find_by_id(1).unwrap().balance(), dec!(1000));
        assert!(store.find_by_card_number("0001 0001 0001 0001").is_some());

        assert_eq!(
            store.transfer(7, "0002 0002 0002 0002", dec!(1), "x"),
            Err(StoreError::AccountNotFound(7))
        );
    }

    #[test]
    fn self_transfer_through_store_keeps_balance() {
        let mut store = store_with_two();
        store.verify_account(1).unwrap();

        store
            .transfer(1, "0001 0001 0001 0001", dec!(100), "self")
            .unwrap();
        assert_eq!(store.find_by_id(1).unwrap().balance(), dec!(1000));
    }

    #[test]
    fn deposit_and_withdraw_by_id() {
        let mut store = store_with_two();

        store.deposit(2, dec!(25)).unwrap();
        let err = store.withdraw(2, dec!(25)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Account(ref e) if e.kind() == ErrorKind::InvalidState
        ));
        assert_eq!(store.find_by_id(2).unwrap().balance(), dec!(525));
    }

    #[test]
    fn operation_permissions_by_id() {
        let mut store = store_with_two();

        assert!(store.is_operation_allowed(1, Operation::Deposit));
        assert!(!store.is_operation_allowed(1, Operation::Withdraw));
        store.verify_account(1).unwrap();
        assert!(store.is_operation_allowed(1, Operation::Transfer));
        assert!(!store.is_operation_allowed(42, Operation::View));
    }

    #[test]
    fn validate_transaction_reports_every_violation() {
        let store = store_with_two();

        let err = store
            .validate_transaction(2, Operation::Withdraw, dec!(12000))
            .unwrap_err();
        match err {
            StoreError::Rejected { id, violations } => {
                assert_eq!(id, 2);
                assert_eq!(violations.len(), 3);
            }
            other => panic!("unexpected error {other:?}"),
        }

        assert!(store
            .validate_transaction(2, Operation::Deposit, dec!(10000))
            .is_ok());
        assert_eq!(
            store.validate_transaction(9, Operation::View, dec!(0)),
            Err(StoreError::AccountNotFound(9))
        );
    }

    #[test]
    fn validate_transaction_checks_view_amounts() {
        let mut store = store_with_two();
        store.close_account(2).unwrap();

        for amount in [dec!(0), dec!(-3), dec!(10000.01)] {
            assert!(matches!(
                store.validate_transaction(1, Operation::View, amount),
                Err(StoreError::Rejected { id: 1, ref violations }) if violations.len() == 1
            ));
        }
        assert!(store
            .validate_transaction(2, Operation::View, dec!(1))
            .is_ok());
        assert!(store.is_operation_allowed(2, Operation::View));
    }

    #[test]
    fn scored_accounts_can_be_stored() {
        let mut store: AccountStore<CreditScore> = AccountStore::default();
        store
            .insert(CreditScoreAccount::with_credit_score(1, "a", dec!(100)).unwrap())
            .unwrap();
        store
            .insert(CreditScoreAccount::with_credit_score(2, "b", dec!(0)).unwrap())
            .unwrap();
        store.verify_account(1).unwrap();

        let _ = store.withdraw(1, dec!(200));
        assert_eq!(store.find_by_id(1).unwrap().credit_score(), 680);

        store
            .transfer(1, "0002 0002 0002 0002", dec!(100), "x")
            .unwrap();
        assert_eq!(store.find_by_id(2).unwrap().balance(), dec!(100));
    }
}

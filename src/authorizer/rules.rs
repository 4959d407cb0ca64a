//! Authorization rules for account transactions.

use crate::account::{AccountError, AccountStatus};
use crate::authorizer::builder::AuthorizerBuilder;
use crate::authorizer::operation::Operation;
use rust_decimal::Decimal;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Per-transaction ceiling applied by service-level validation.
pub const SERVICE_CEILING: i64 = 10_000;

/// Stateless mapping of `(status, operation, amount, balance)` to a verdict.
///
/// Checks run in a fixed order: status, amount sign, ceiling, funds.
/// `authorize` stops at the first failure; `validate` runs them all and
/// reports every violation.
///
/// `authorize` skips the amount for `View`. `validate` is the service-level
/// pre-check where every request carries an amount, so the sign and ceiling
/// checks apply to `View` as well.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransactionAuthorizer {
    pub(crate) max_amount: Option<Decimal>,
}

impl TransactionAuthorizer {
    /// Authorizer without a ceiling. Accounts use this for their own checks.
    pub const fn new() -> Self {
        Self { max_amount: None }
    }

    /// Authorizer with the service ceiling of [`SERVICE_CEILING`].
    pub fn service() -> Self {
        AuthorizerBuilder::new()
            .max_amount(Decimal::from(SERVICE_CEILING))
            .build()
    }

    pub fn builder() -> AuthorizerBuilder {
        AuthorizerBuilder::new()
    }

    pub fn max_amount(&self) -> Option<Decimal> {
        self.max_amount
    }

    /// Status permission table.
    ///
    /// | status     | deposit | withdraw | transfer | view |
    /// |------------|---------|----------|----------|------|
    /// | Unverified | allow   | deny     | deny     | allow|
    /// | Verified   | allow   | allow    | allow    | allow|
    /// | Suspended  | allow   | deny     | deny     | allow|
    /// | Closed     | deny    | deny     | deny     | allow|
    pub fn permits(status: AccountStatus, operation: Operation) -> bool {
        match operation {
            Operation::View => true,
            Operation::Deposit => status != AccountStatus::Closed,
            Operation::Withdraw | Operation::Transfer => status == AccountStatus::Verified,
        }
    }

    /// Fail-fast check. Returns the first violation found.
    pub fn authorize(
        &self,
        status: AccountStatus,
        operation: Operation,
        amount: Decimal,
        balance: Decimal,
    ) -> Result<(), AccountError> {
        self.checks(status, operation, amount, balance, operation.is_monetary())
            .into_iter()
            .collect()
    }

    /// Run every check, accumulating ALL violations.
    pub fn validate(
        &self,
        status: AccountStatus,
        operation: Operation,
        amount: Decimal,
        balance: Decimal,
    ) -> Validation<(), NonEmptyVec<AccountError>> {
        let checks: Vec<Validation<(), NonEmptyVec<AccountError>>> = self
            .checks(status, operation, amount, balance, true)
            .into_iter()
            .map(|check| match check {
                Ok(()) => Validation::success(()),
                Err(violation) => Validation::fail(violation),
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    fn checks(
        &self,
        status: AccountStatus,
        operation: Operation,
        amount: Decimal,
        balance: Decimal,
        check_amount: bool,
    ) -> Vec<Result<(), AccountError>> {
        let mut checks = Vec::with_capacity(4);

        checks.push(if Self::permits(status, operation) {
            Ok(())
        } else {
            Err(AccountError::InvalidState { operation, status })
        });

        if !check_amount {
            return checks;
        }

        checks.push(if amount > Decimal::ZERO {
            Ok(())
        } else {
            Err(AccountError::InvalidAmount { amount })
        });

        if let Some(limit) = self.max_amount {
            checks.push(if amount > limit {
                Err(AccountError::LimitExceeded {
                    requested: amount,
                    limit,
                })
            } else {
                Ok(())
            });
        }

        if matches!(operation, Operation::Withdraw | Operation::Transfer) {
            checks.push(if amount > balance {
                Err(AccountError::InsufficientFunds {
                    requested: amount,
                    available: balance,
                })
            } else {
                Ok(())
            });
        }

        checks
    }
}

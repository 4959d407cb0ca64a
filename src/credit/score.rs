//! Credit score kept alongside an account.

use crate::account::{
    Account, AccountError, AccountSnapshot, AccountStatus, TransactionObserver,
};
use crate::credit::config::{ConfigError, ScoringRules};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Bounded score that caps withdrawals and reacts to account events.
///
/// Deserialization validates the rules and the stored score, so a loaded
/// observer upholds the same bounds as one built with [`CreditScore::with_rules`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CreditScoreRecord")]
pub struct CreditScore {
    score: i32,
    overdraft_attempts: u32,
    successful_transactions: u32,
    rules: ScoringRules,
}

#[derive(Deserialize)]
struct CreditScoreRecord {
    score: i32,
    #[serde(default)]
    overdraft_attempts: u32,
    #[serde(default)]
    successful_transactions: u32,
    #[serde(default)]
    rules: ScoringRules,
}

impl TryFrom<CreditScoreRecord> for CreditScore {
    type Error = ConfigError;

    fn try_from(record: CreditScoreRecord) -> Result<Self, Self::Error> {
        let rules = record.rules;
        rules.validate()?;
        if !(rules.min_score..=rules.max_score).contains(&record.score) {
            return Err(ConfigError::ScoreOutOfBounds {
                score: record.score,
                min: rules.min_score,
                max: rules.max_score,
            });
        }

        Ok(Self {
            score: record.score,
            overdraft_attempts: record.overdraft_attempts,
            successful_transactions: record.successful_transactions,
            rules,
        })
    }
}

impl Default for CreditScore {
    fn default() -> Self {
        Self::new()
    }
}

impl CreditScore {
    pub fn new() -> Self {
        let rules = ScoringRules::default();
        Self {
            score: rules.initial_score,
            overdraft_attempts: 0,
            successful_transactions: 0,
            rules,
        }
    }

    pub fn with_rules(rules: ScoringRules) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self {
            score: rules.initial_score,
            overdraft_attempts: 0,
            successful_transactions: 0,
            rules,
        })
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// `score * limit_per_point`
    pub fn transaction_limit(&self) -> Decimal {
        Decimal::from(self.score) * self.rules.limit_per_point
    }

    pub fn overdraft_attempts(&self) -> u32 {
        self.overdraft_attempts
    }

    pub fn successful_transactions(&self) -> u32 {
        self.successful_transactions
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    fn adjust(&mut self, delta: i32) {
        self.score = self.rules.clamp(self.score.saturating_add(delta));
    }

    /// Rebuild the score from the account's current factors, discarding
    /// event-driven adjustments.
    pub fn recalculate(&mut self, account: &AccountSnapshot) -> i32 {
        let weights = &self.rules.recalculation;

        let balance_factor = if account.balance > weights.high_balance {
            weights.high_balance_bonus
        } else if account.balance > weights.medium_balance {
            weights.medium_balance_bonus
        } else if account.balance < weights.low_balance {
            weights.low_balance_penalty.saturating_neg()
        } else {
            0
        };

        let status_factor = match account.status {
            AccountStatus::Verified => weights.verified_bonus,
            AccountStatus::Suspended => weights.suspended_penalty.saturating_neg(),
            AccountStatus::Closed => weights.closed_penalty.saturating_neg(),
            AccountStatus::Unverified => 0,
        };

        let score = self
            .rules
            .initial_score
            .saturating_add(balance_factor)
            .saturating_add(weights.per_successful_transaction.saturating_mul(
                i32::try_from(self.successful_transactions).unwrap_or(i32::MAX),
            ))
            .saturating_sub(weights.per_overdraft_attempt.saturating_mul(
                i32::try_from(self.overdraft_attempts).unwrap_or(i32::MAX),
            ))
            .saturating_add(status_factor);

        self.score = self.rules.clamp(score);
        debug!(account = account.id, score = self.score, "credit score recalculated");
        self.score
    }
}

impl TransactionObserver for CreditScore {
    fn withdrawal_limit(&self) -> Option<Decimal> {
        Some(self.transaction_limit())
    }

    fn credit_score(&self) -> Option<i32> {
        Some(self.score)
    }

    fn on_deposit(
        &mut self,
        _account: &AccountSnapshot,
        _amount: Decimal,
        outcome: &Result<(), AccountError>,
    ) {
        if outcome.is_err() {
            return;
        }
        self.successful_transactions = self.successful_transactions.saturating_add(1);
        if self.successful_transactions % self.rules.bonus_every == 0 {
            self.adjust(self.rules.deposit_bonus);
        }
    }

    fn on_withdraw_attempt(
        &mut self,
        account: &AccountSnapshot,
        amount: Decimal,
        outcome: &Result<(), AccountError>,
    ) {
        match outcome {
            Ok(()) => {
                self.successful_transactions = self.successful_transactions.saturating_add(1)
            }
            Err(_) if amount > account.balance => {
                self.overdraft_attempts = self.overdraft_attempts.saturating_add(1);
                self.adjust(self.rules.overdraft_penalty.saturating_neg());
                warn!(
                    account = account.id,
                    %amount,
                    balance = %account.balance,
                    score = self.score,
                    "overdraft attempt"
                );
            }
            Err(_) => {}
        }
    }

    fn on_suspend(&mut self, _account: &AccountSnapshot, outcome: &Result<(), AccountError>) {
        if outcome.is_ok() {
            self.adjust(self.rules.suspension_penalty.saturating_neg());
        }
    }

    fn on_appeal(&mut self, _account: &AccountSnapshot, outcome: &Result<(), AccountError>) {
        if outcome.is_ok() {
            self.adjust(self.rules.appeal_recovery);
        }
    }
}

/// Account whose withdrawals are capped by, and whose events feed, a credit score.
pub type CreditScoreAccount = Account<CreditScore>;

impl Account<CreditScore> {
    /// Open a scored account with the default rules (score starts at 700).
    pub fn with_credit_score(
        id: u32,
        client_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Self, AccountError> {
        Self::with_observer(id, client_name, initial_balance, CreditScore::new())
    }

    pub fn credit_score(&self) -> i32 {
        self.observer().score()
    }

    pub fn transaction_limit(&self) -> Decimal {
        self.observer().transaction_limit()
    }

    pub fn overdraft_attempts(&self) -> u32 {
        self.observer().overdraft_attempts()
    }

    pub fn successful_transactions(&self) -> u32 {
        self.observer().successful_transactions()
    }

    /// Recompute the score from balance, counters and status.
    pub fn recalculate_credit_score(&mut self) -> i32 {
        let snapshot = self.snapshot();
        self.observer_mut().recalculate(&snapshot)
    }
}

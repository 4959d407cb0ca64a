//! Builder API for authorization rules.

use crate::authorizer::rules::TransactionAuthorizer;
use rust_decimal::Decimal;

/// Builder for creating a [`TransactionAuthorizer`]
#[derive(Debug, Clone, Default)]
pub struct AuthorizerBuilder {
    max_amount: Option<Decimal>,
}

impl AuthorizerBuilder {
    pub fn new() -> Self {
        Self { max_amount: None }
    }

    /// Refuse any single transaction above `limit`
    pub fn max_amount(mut self, limit: Decimal) -> Self {
        self.max_amount = Some(limit);
        self
    }

    /// Remove a previously configured ceiling
    pub fn unbounded(mut self) -> Self {
        self.max_amount = None;
        self
    }

    pub fn build(self) -> TransactionAuthorizer {
        TransactionAuthorizer {
            max_amount: self.max_amount,
        }
    }
}

use crate::account::status::AccountStatus;
use rust_decimal::Decimal;
use serde::Serialize;

/// Read-only projection of an account for presentation layers.
///
/// Credit fields are only present for accounts carrying a scoring policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub id: u32,
    pub client_name: String,
    pub card_number: String,
    pub balance: Decimal,
    pub status: AccountStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_limit: Option<Decimal>,
}

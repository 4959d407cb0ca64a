//! Tunable constants for credit scoring.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid scoring rules JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Score bounds are inverted (min {min} > max {max})")]
    InvertedBounds { min: i32, max: i32 },

    #[error("Initial score {initial} lies outside [{min}, {max}]")]
    InitialOutOfBounds { initial: i32, min: i32, max: i32 },

    #[error("{field} must be positive")]
    NonPositive { field: &'static str },

    #[error("Credit score {score} lies outside [{min}, {max}]")]
    ScoreOutOfBounds { score: i32, min: i32, max: i32 },
}

/// Every constant the credit score uses.
///
/// Missing JSON fields fall back to the defaults, so overrides can be partial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub initial_score: i32,
    pub min_score: i32,
    pub max_score: i32,
    /// Monetary units of withdrawal limit per score point.
    pub limit_per_point: Decimal,

    /// Bonus granted on every `bonus_every`-th successful transaction,
    /// counted when a deposit lands on the multiple.
    pub deposit_bonus: i32,
    pub bonus_every: u32,
    pub overdraft_penalty: i32,
    pub suspension_penalty: i32,
    pub appeal_recovery: i32,

    pub recalculation: RecalculationWeights,
}

/// Weights used when the score is rebuilt from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecalculationWeights {
    pub high_balance: Decimal,
    pub high_balance_bonus: i32,
    pub medium_balance: Decimal,
    pub medium_balance_bonus: i32,
    pub low_balance: Decimal,
    pub low_balance_penalty: i32,
    pub per_successful_transaction: i32,
    pub per_overdraft_attempt: i32,
    pub verified_bonus: i32,
    pub suspended_penalty: i32,
    pub closed_penalty: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            initial_score: 700,
            min_score: 300,
            max_score: 850,
            limit_per_point: Decimal::from(10),
            deposit_bonus: 5,
            bonus_every: 3,
            overdraft_penalty: 20,
            suspension_penalty: 50,
            appeal_recovery: 25,
            recalculation: RecalculationWeights::default(),
        }
    }
}

impl Default for RecalculationWeights {
    fn default() -> Self {
        Self {
            high_balance: Decimal::from(5000),
            high_balance_bonus: 50,
            medium_balance: Decimal::from(1000),
            medium_balance_bonus: 25,
            low_balance: Decimal::from(100),
            low_balance_penalty: 25,
            per_successful_transaction: 2,
            per_overdraft_attempt: 10,
            verified_bonus: 10,
            suspended_penalty: 30,
            closed_penalty: 50,
        }
    }
}

impl ScoringRules {
    /// Parse overrides from JSON and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_score > self.max_score {
            return Err(ConfigError::InvertedBounds {
                min: self.min_score,
                max: self.max_score,
            });
        }
        if !(self.min_score..=self.max_score).contains(&self.initial_score) {
            return Err(ConfigError::InitialOutOfBounds {
                initial: self.initial_score,
                min: self.min_score,
                max: self.max_score,
            });
        }
        if self.bonus_every == 0 {
            return Err(ConfigError::NonPositive {
                field: "bonus_every",
            });
        }
        if self.limit_per_point <= Decimal::ZERO {
            return Err(ConfigError::NonPositive {
                field: "limit_per_point",
            });
        }
        Ok(())
    }

    /// `max(min_score, min(max_score, score))`
    pub fn clamp(&self, score: i32) -> i32 {
        score.min(self.max_score).max(self.min_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let rules = ScoringRules::default();
        assert!(rules.validate().is_ok());
        assert_eq!(rules.clamp(1000), 850);
        assert_eq!(rules.clamp(-5), 300);
        assert_eq!(rules.clamp(640), 640);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let rules = ScoringRules::from_json(r#"{"overdraft_penalty": 40}"#).unwrap();

        assert_eq!(rules.overdraft_penalty, 40);
        assert_eq!(rules.initial_score, 700);
        assert_eq!(rules.recalculation.verified_bonus, 10);
    }

    #[test]
    fn nested_weights_can_be_overridden() {
        let rules =
            ScoringRules::from_json(r#"{"recalculation": {"closed_penalty": 80}}"#).unwrap();

        assert_eq!(rules.recalculation.closed_penalty, 80);
        assert_eq!(rules.recalculation.suspended_penalty, 30);
    }

    #[test]
    fn inconsistent_bounds_are_rejected() {
        let err = ScoringRules::from_json(r#"{"min_score": 900}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvertedBounds { min: 900, max: 850 }));

        let err = ScoringRules::from_json(r#"{"initial_score": 200}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InitialOutOfBounds { .. }));

        let err = ScoringRules::from_json(r#"{"bonus_every": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "bonus_every"
            }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ScoringRules::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

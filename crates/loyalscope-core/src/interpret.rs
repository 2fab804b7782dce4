//! Interpretation of the classifier's three loyalty labels.
//!
//! The classifier predicts one level per loyalty dimension. The levels are
//! tallied and reduced to a [`RiskTier`]:
//!
//! | condition                                 | tier       |
//! |-------------------------------------------|------------|
//! | two or more `Low`                         | `Critical` |
//! | exactly one `Low`, or two or more `Neutral` | `Moderate` |
//! | otherwise                                 | `Secure`   |
//!
//! For `Moderate`, every dimension at `Low` or `Neutral` is a problem
//! dimension and gets its own advisory block.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::CoreError;

/// Predicted loyalty level for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LoyaltyLevel {
    Low,
    Neutral,
    High,
}

impl LoyaltyLevel {
    /// Map a classifier class index (0, 1, 2).
    pub fn from_class(index: i64) -> Result<Self, CoreError> {
        match index {
            0 => Ok(Self::Low),
            1 => Ok(Self::Neutral),
            2 => Ok(Self::High),
            other => Err(CoreError::UnknownClass(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Neutral => "Neutral",
            Self::High => "High",
        }
    }

    /// `Low` and `Neutral` both call for intervention.
    pub fn is_weak(&self) -> bool {
        !matches!(self, Self::High)
    }
}

impl fmt::Display for LoyaltyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loyalty dimension, in classifier output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dimension {
    /// Cognitive loyalty.
    Rational,
    /// Affective loyalty.
    Emotional,
    /// Action loyalty.
    Behavioral,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Self::Rational, Self::Emotional, Self::Behavioral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rational => "Rational",
            Self::Emotional => "Emotional",
            Self::Behavioral => "Behavioral",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three predicted levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    pub rational: LoyaltyLevel,
    pub emotional: LoyaltyLevel,
    pub behavioral: LoyaltyLevel,
}

impl PredictionResult {
    pub fn new(rational: LoyaltyLevel, emotional: LoyaltyLevel, behavioral: LoyaltyLevel) -> Self {
        Self {
            rational,
            emotional,
            behavioral,
        }
    }

    /// Map raw classifier output. Any index outside {0, 1, 2} is an error.
    pub fn from_classes(classes: [i64; 3]) -> Result<Self, CoreError> {
        Ok(Self {
            rational: LoyaltyLevel::from_class(classes[0])?,
            emotional: LoyaltyLevel::from_class(classes[1])?,
            behavioral: LoyaltyLevel::from_class(classes[2])?,
        })
    }

    pub fn level(&self, dimension: Dimension) -> LoyaltyLevel {
        match dimension {
            Dimension::Rational => self.rational,
            Dimension::Emotional => self.emotional,
            Dimension::Behavioral => self.behavioral,
        }
    }

    pub fn levels(&self) -> [LoyaltyLevel; 3] {
        [self.rational, self.emotional, self.behavioral]
    }
}

/// Tallies of each level across the three dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LevelCounts {
    pub low: usize,
    pub neutral: usize,
    pub high: usize,
}

impl LevelCounts {
    pub fn of(prediction: &PredictionResult) -> Self {
        let mut counts = Self::default();
        for level in prediction.levels() {
            match level {
                LoyaltyLevel::Low => counts.low += 1,
                LoyaltyLevel::Neutral => counts.neutral += 1,
                LoyaltyLevel::High => counts.high += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskTier {
    Critical,
    Moderate,
    Secure,
}

impl RiskTier {
    pub fn from_counts(counts: &LevelCounts) -> Self {
        if counts.low >= 2 {
            Self::Critical
        } else if counts.low == 1 || counts.neutral >= 2 {
            Self::Moderate
        } else {
            Self::Secure
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Moderate => "Moderate",
            Self::Secure => "Secure",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpretation of one prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub prediction: PredictionResult,
    pub counts: LevelCounts,
    pub tier: RiskTier,
    /// Dimensions at `Low` or `Neutral`. Only populated for `Moderate`.
    pub problem_dimensions: BTreeSet<Dimension>,
}

/// Reduce a prediction to its counts, tier and problem dimensions.
pub fn interpret(prediction: PredictionResult) -> Assessment {
    let counts = LevelCounts::of(&prediction);
    let tier = RiskTier::from_counts(&counts);

    let problem_dimensions = match tier {
        RiskTier::Moderate => Dimension::ALL
            .into_iter()
            .filter(|d| prediction.level(*d).is_weak())
            .collect(),
        RiskTier::Critical | RiskTier::Secure => BTreeSet::new(),
    };

    Assessment {
        prediction,
        counts,
        tier,
        problem_dimensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LoyaltyLevel::{High, Low, Neutral};

    fn tier_of(r: LoyaltyLevel, e: LoyaltyLevel, b: LoyaltyLevel) -> RiskTier {
        interpret(PredictionResult::new(r, e, b)).tier
    }

    #[test]
    fn two_lows_are_critical() {
        let a = interpret(PredictionResult::new(Low, Low, High));
        assert_eq!(a.counts.low, 2);
        assert_eq!(a.tier, RiskTier::Critical);
        assert!(a.problem_dimensions.is_empty());
    }

    #[test]
    fn three_lows_are_critical() {
        assert_eq!(tier_of(Low, Low, Low), RiskTier::Critical);
    }

    #[test]
    fn one_low_is_moderate() {
        let a = interpret(PredictionResult::new(Low, Neutral, High));
        assert_eq!(a.counts.low, 1);
        assert_eq!(a.tier, RiskTier::Moderate);
    }

    #[test]
    fn two_neutrals_are_moderate() {
        let a = interpret(PredictionResult::new(Neutral, Neutral, High));
        assert_eq!(a.counts.neutral, 2);
        assert_eq!(a.tier, RiskTier::Moderate);
        assert_eq!(
            a.problem_dimensions.into_iter().collect::<Vec<_>>(),
            vec![Dimension::Rational, Dimension::Emotional]
        );
    }

    #[test]
    fn all_high_is_secure() {
        let a = interpret(PredictionResult::new(High, High, High));
        assert_eq!(a.counts.high, 3);
        assert_eq!(a.tier, RiskTier::Secure);
    }

    #[test]
    fn single_neutral_falls_through_to_secure() {
        let a = interpret(PredictionResult::new(Neutral, High, High));
        assert_eq!(a.counts.low, 0);
        assert_eq!(a.counts.neutral, 1);
        assert_eq!(a.tier, RiskTier::Secure);
        assert!(a.problem_dimensions.is_empty());
    }

    #[test]
    fn moderate_problem_dimensions_skip_high() {
        let a = interpret(PredictionResult::new(Low, High, Neutral));
        assert_eq!(a.tier, RiskTier::Moderate);
        let expected: BTreeSet<Dimension> = [Dimension::Rational, Dimension::Behavioral].into();
        assert_eq!(a.problem_dimensions, expected);
    }

    #[test]
    fn every_combination_has_consistent_counts() {
        let levels = [Low, Neutral, High];
        for r in levels {
            for e in levels {
                for b in levels {
                    let a = interpret(PredictionResult::new(r, e, b));
                    assert_eq!(a.counts.low + a.counts.neutral + a.counts.high, 3);
                    if a.tier != RiskTier::Moderate {
                        assert!(a.problem_dimensions.is_empty());
                    } else {
                        assert!(!a.problem_dimensions.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn from_classes_maps_indices() {
        let p = PredictionResult::from_classes([0, 1, 2]).unwrap();
        assert_eq!(p.levels(), [Low, Neutral, High]);
        assert_eq!(p.level(Dimension::Behavioral), High);
    }

    #[test]
    fn from_classes_rejects_unknown_index() {
        assert!(matches!(
            PredictionResult::from_classes([0, 3, 1]),
            Err(CoreError::UnknownClass(3))
        ));
        assert!(PredictionResult::from_classes([-1, 0, 0]).is_err());
    }
}

//! Advisory selection: which narrative blocks to show for an assessment.
//!
//! This is a lookup only. The copy itself belongs to the presentation layer,
//! keyed by [`TemplateId`].

use serde::Serialize;

use crate::interpret::{Assessment, Dimension, RiskTier};

/// Identifier of one narrative block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemplateId {
    CriticalRecovery,
    ModeratePrevention,
    SecureGrowth,
    RationalFocus,
    EmotionalFocus,
    BehavioralFocus,
}

/// State of the Trust → Satisfaction → Loyalty chain shown for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChainState {
    Broken,
    Weakening,
    Intact,
}

/// Selected narrative for one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub tier_template: TemplateId,
    pub chain_state: ChainState,
    /// One block per problem dimension, in dimension order.
    pub dimension_blocks: Vec<TemplateId>,
}

fn tier_entry(tier: RiskTier) -> (TemplateId, ChainState) {
    match tier {
        RiskTier::Critical => (TemplateId::CriticalRecovery, ChainState::Broken),
        RiskTier::Moderate => (TemplateId::ModeratePrevention, ChainState::Weakening),
        RiskTier::Secure => (TemplateId::SecureGrowth, ChainState::Intact),
    }
}

/// Block for one problem dimension.
pub fn dimension_template(dimension: Dimension) -> TemplateId {
    match dimension {
        Dimension::Rational => TemplateId::RationalFocus,
        Dimension::Emotional => TemplateId::EmotionalFocus,
        Dimension::Behavioral => TemplateId::BehavioralFocus,
    }
}

/// Look up the narrative for an assessment.
///
/// Dimension blocks are only shown for `Moderate`; the interpreter leaves
/// `problem_dimensions` empty for the other tiers.
pub fn select(assessment: &Assessment) -> Advisory {
    let (tier_template, chain_state) = tier_entry(assessment.tier);
    let dimension_blocks = assessment
        .problem_dimensions
        .iter()
        .map(|d| dimension_template(*d))
        .collect();

    Advisory {
        tier_template,
        chain_state,
        dimension_blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::{LoyaltyLevel, PredictionResult, interpret};

    fn advise(r: LoyaltyLevel, e: LoyaltyLevel, b: LoyaltyLevel) -> Advisory {
        select(&interpret(PredictionResult::new(r, e, b)))
    }

    #[test]
    fn critical_has_no_dimension_blocks() {
        let a = advise(LoyaltyLevel::Low, LoyaltyLevel::Low, LoyaltyLevel::Neutral);
        assert_eq!(a.tier_template, TemplateId::CriticalRecovery);
        assert_eq!(a.chain_state, ChainState::Broken);
        assert!(a.dimension_blocks.is_empty());
    }

    #[test]
    fn moderate_blocks_follow_problem_dimensions() {
        let a = advise(LoyaltyLevel::Low, LoyaltyLevel::High, LoyaltyLevel::Neutral);
        assert_eq!(a.tier_template, TemplateId::ModeratePrevention);
        assert_eq!(a.chain_state, ChainState::Weakening);
        assert_eq!(
            a.dimension_blocks,
            vec![TemplateId::RationalFocus, TemplateId::BehavioralFocus]
        );
    }

    #[test]
    fn moderate_with_three_weak_dimensions() {
        let a = advise(LoyaltyLevel::Neutral, LoyaltyLevel::Low, LoyaltyLevel::Neutral);
        assert_eq!(a.tier_template, TemplateId::ModeratePrevention);
        assert_eq!(a.dimension_blocks.len(), 3);
    }

    #[test]
    fn secure_is_growth() {
        let a = advise(LoyaltyLevel::High, LoyaltyLevel::Neutral, LoyaltyLevel::High);
        assert_eq!(a.tier_template, TemplateId::SecureGrowth);
        assert_eq!(a.chain_state, ChainState::Intact);
        assert!(a.dimension_blocks.is_empty());
    }

    #[test]
    fn dimension_blocks_are_distinct() {
        let blocks: std::collections::HashSet<TemplateId> =
            Dimension::ALL.into_iter().map(dimension_template).collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(dimension_template(Dimension::Emotional), TemplateId::EmotionalFocus);
    }
}

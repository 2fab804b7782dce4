//! Narrative copy for each advisory template.
//!
//! Impact figures are the standardized effects on trust from the PLS-SEM
//! model the classifier was built alongside.

use loyalscope_core::{ChainState, TemplateId};

/// Path coefficient Trust → Satisfaction.
pub const TRUST_TO_SATISFACTION: u8 = 84;
/// Path coefficient Satisfaction → Loyalty.
pub const SATISFACTION_TO_LOYALTY: u8 = 68;

/// One recommended (or discouraged) action.
pub struct Action {
    pub title: &'static str,
    /// Effect on trust in percent, where the model measured one.
    pub impact: Option<i8>,
    pub detail: &'static str,
}

pub struct TierCopy {
    pub headline: &'static str,
    pub summary: &'static str,
    pub recommended_heading: &'static str,
    pub recommended: &'static [Action],
    pub avoid_heading: &'static str,
    pub avoid: &'static [Action],
}

pub struct DimensionCopy {
    pub heading: &'static str,
    pub focus: &'static str,
    pub steps: &'static [&'static str],
}

/// Stage labels for Trust, Satisfaction and Loyalty.
pub fn chain_stages(state: ChainState) -> [&'static str; 3] {
    match state {
        ChainState::Broken => ["Broken", "Damaged", "Lost"],
        ChainState::Weakening => ["Weakening", "At risk", "Unstable"],
        ChainState::Intact => ["Strong", "High", "Secure"],
    }
}

pub fn chain_note(state: ChainState) -> &'static str {
    match state {
        ChainState::Broken => {
            "Several loyalty dimensions failing means the chain broke early, most likely at Trust."
        }
        ChainState::Weakening => {
            "The chain still works but is under strain. Strengthen the weak link before it breaks."
        }
        ChainState::Intact => "The chain is fully intact and strong.",
    }
}

const SERVICE_QUALITY: Action = Action {
    title: "Service quality",
    impact: Some(37),
    detail: "The strongest lever: faster complaint resolution, fewer errors, personalised service.",
};

const COMPETENCE: Action = Action {
    title: "Staff competence",
    impact: Some(25),
    detail: "Put expert staff on the account. Competence rebuilds trust faster than friendliness.",
};

const ATTRACTIVENESS: Action = Action {
    title: "Attractiveness",
    impact: Some(22),
    detail: "Professional branch appearance, modern digital channels, visibly qualified staff.",
};

const LIKEABILITY: Action = Action {
    title: "Likeability",
    impact: Some(16),
    detail: "Emotional connection helps, but only once service quality is fixed.",
};

const CSR: Action = Action {
    title: "CSR / ethics",
    impact: Some(13),
    detail: "Signals honesty, but will not outweigh service failures.",
};

const FUTURE_PROMISES: Action = Action {
    title: "Performance and future promises",
    impact: Some(-10),
    detail: "Talk of growth or market leadership reads as over-promising and lowers trust. \
             Show current capability and immediate fixes instead.",
};

pub fn tier_copy(template: TemplateId) -> Option<&'static TierCopy> {
    match template {
        TemplateId::CriticalRecovery => Some(&CRITICAL),
        TemplateId::ModeratePrevention => Some(&MODERATE),
        TemplateId::SecureGrowth => Some(&SECURE),
        TemplateId::RationalFocus | TemplateId::EmotionalFocus | TemplateId::BehavioralFocus => {
            None
        }
    }
}

static CRITICAL: TierCopy = TierCopy {
    headline: "CRITICAL RISK: multiple loyalty failures",
    summary: "Severe relationship breakdown. Rebuild trust first.",
    recommended_heading: "Rebuild trust",
    recommended: &[SERVICE_QUALITY, COMPETENCE, ATTRACTIVENESS, LIKEABILITY, CSR],
    avoid_heading: "Avoid",
    avoid: &[FUTURE_PROMISES],
};

static MODERATE: TierCopy = TierCopy {
    headline: "MODERATE RISK: loyalty instability",
    summary: "The customer is wavering. Targeted intervention can prevent escalation.",
    recommended_heading: "Top trust drivers",
    recommended: &[SERVICE_QUALITY, COMPETENCE, ATTRACTIVENESS],
    avoid_heading: "What not to do",
    avoid: &[
        FUTURE_PROMISES,
        Action {
            title: "Ignoring current service issues",
            impact: None,
            detail: "Open problems erode trust faster than any campaign rebuilds it.",
        },
        Action {
            title: "Relying on marketing alone",
            impact: None,
            detail: "Messaging cannot stand in for the service experience.",
        },
    ],
};

static SECURE: TierCopy = TierCopy {
    headline: "SECURE LOYALTY: premium customer segment",
    summary: "All loyalty dimensions are high. Focus on growth, not retention.",
    recommended_heading: "Do this",
    recommended: &[
        Action {
            title: "Cross-selling",
            impact: None,
            detail: "High loyalty means high receptiveness to new products.",
        },
        Action {
            title: "Maintain service quality",
            impact: Some(37),
            detail: "Keep up the quality that built trust. Do not become complacent.",
        },
        Action {
            title: "Leverage as advocate",
            impact: None,
            detail: "Referrals, testimonials, case studies.",
        },
    ],
    avoid_heading: "Avoid this",
    avoid: &[
        Action {
            title: "Over-retention spending",
            impact: None,
            detail: "Retention budget is wasted on customers who are already loyal.",
        },
        Action {
            title: "Aggressive upselling",
            impact: None,
            detail: "Promote, but keep the quality relationship. Trust is the foundation.",
        },
        Action {
            title: "Neglecting communication",
            impact: None,
            detail: "High loyalty does not mean low maintenance.",
        },
    ],
};

pub fn dimension_copy(template: TemplateId) -> Option<&'static DimensionCopy> {
    match template {
        TemplateId::RationalFocus => Some(&RATIONAL),
        TemplateId::EmotionalFocus => Some(&EMOTIONAL),
        TemplateId::BehavioralFocus => Some(&BEHAVIORAL),
        TemplateId::CriticalRecovery | TemplateId::ModeratePrevention | TemplateId::SecureGrowth => {
            None
        }
    }
}

static RATIONAL: DimensionCopy = DimensionCopy {
    heading: "Rational loyalty (thinking)",
    focus: "Competence and quality",
    steps: &[
        "Demonstrate expertise in financial advice",
        "Highlight objective service quality metrics",
        "Emphasise competitive pricing and product features",
        "Provide data-driven performance reports",
    ],
};

static EMOTIONAL: DimensionCopy = DimensionCopy {
    heading: "Emotional loyalty (feeling)",
    focus: "Likeability and attractiveness",
    steps: &[
        "Strengthen personal relationships with account managers",
        "Improve branch and digital interface aesthetics",
        "Personalise communication",
        "Build brand affinity through shared values",
    ],
};

static BEHAVIORAL: DimensionCopy = DimensionCopy {
    heading: "Action loyalty (behavior)",
    focus: "Satisfaction drivers",
    steps: &[
        "Ensure consistently positive experiences",
        "Reduce friction in every transaction",
        "Meet expectations before issues arise",
        "Give reasons to engage more (new products, features)",
    ],
};

pub const METHODOLOGY: &str = "\
PLS-SEM on 675 banking customers. Trust → Satisfaction 0.84, \
Satisfaction → Loyalty 0.68, indirect Trust → Loyalty 0.57. \
Trust explains 65% of variance, Satisfaction 61%, Loyalty 67%.";

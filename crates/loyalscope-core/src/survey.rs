//! Likert-scale survey answers.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// One 1..=7 agreement answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Likert(u8);

impl Likert {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;
    pub const NEUTRAL: Likert = Likert(4);

    pub fn value(self) -> u8 {
        self.0
    }

    /// Validate a raw answer for `item`.
    pub fn for_item(item: SurveyItem, value: i64) -> Result<Self, CoreError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::LikertOutOfRange {
                item: item.id().to_string(),
                value,
            })
        }
    }
}

impl Default for Likert {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<u8> for Likert {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidLikert(i64::from(value)))
        }
    }
}

/// Survey items, grouped by construct.
///
/// `Qual3` does not exist: the item was dropped before training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SurveyItem {
    Qual1,
    Qual2,
    Qual4,
    Qual5,
    Qual6,
    Qual7,
    Perf1,
    Perf2,
    Perf3,
    Perf4,
    Perf5,
    Csor1,
    Csor2,
    Csor3,
    Csor4,
    Csor5,
    Attr1,
    Attr2,
    Attr3,
    Attr4,
    Like1,
    Like2,
    Comp1,
    Comp2,
    Comp3,
    Sat1,
    Sat2,
    Sat3,
    Trust1,
    Trust2,
    Trust3,
    Trust4,
}

impl SurveyItem {
    pub const ALL: [SurveyItem; 32] = [
        Self::Qual1,
        Self::Qual2,
        Self::Qual4,
        Self::Qual5,
        Self::Qual6,
        Self::Qual7,
        Self::Perf1,
        Self::Perf2,
        Self::Perf3,
        Self::Perf4,
        Self::Perf5,
        Self::Csor1,
        Self::Csor2,
        Self::Csor3,
        Self::Csor4,
        Self::Csor5,
        Self::Attr1,
        Self::Attr2,
        Self::Attr3,
        Self::Attr4,
        Self::Like1,
        Self::Like2,
        Self::Comp1,
        Self::Comp2,
        Self::Comp3,
        Self::Sat1,
        Self::Sat2,
        Self::Sat3,
        Self::Trust1,
        Self::Trust2,
        Self::Trust3,
        Self::Trust4,
    ];

    /// Form identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Qual1 => "QUAL_1",
            Self::Qual2 => "QUAL_2",
            Self::Qual4 => "QUAL_4",
            Self::Qual5 => "QUAL_5",
            Self::Qual6 => "QUAL_6",
            Self::Qual7 => "QUAL_7",
            Self::Perf1 => "PERF_1",
            Self::Perf2 => "PERF_2",
            Self::Perf3 => "PERF_3",
            Self::Perf4 => "PERF_4",
            Self::Perf5 => "PERF_5",
            Self::Csor1 => "CSOR_1",
            Self::Csor2 => "CSOR_2",
            Self::Csor3 => "CSOR_3",
            Self::Csor4 => "CSOR_4",
            Self::Csor5 => "CSOR_5",
            Self::Attr1 => "ATTR_1",
            Self::Attr2 => "ATTR_2",
            Self::Attr3 => "ATTR_3",
            Self::Attr4 => "ATTR_4",
            Self::Like1 => "LIKE_1",
            Self::Like2 => "LIKE_2",
            Self::Comp1 => "COMP_1",
            Self::Comp2 => "COMP_2",
            Self::Comp3 => "COMP_3",
            Self::Sat1 => "SAT_1",
            Self::Sat2 => "SAT_2",
            Self::Sat3 => "SAT_3",
            Self::Trust1 => "TRUST_1",
            Self::Trust2 => "TRUST_2",
            Self::Trust3 => "TRUST_3",
            Self::Trust4 => "TRUST_4",
        }
    }

    /// Trained column name. Identical to [`id`](Self::id) except for
    /// `QUAL_7`, which the training data spells `QUA_7`.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Qual7 => "QUA_7",
            other => other.id(),
        }
    }

    /// Short question text shown next to the scale.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Qual1 => "Bank attention to personal concerns.",
            Self::Qual2 => "Service range alignment with needs.",
            Self::Qual4 => "General trustworthiness of the institution.",
            Self::Qual5 => "Quality of products and services.",
            Self::Qual6 => "Value-for-money of products/services.",
            Self::Qual7 => "Bank as a market pioneer vs. follower.",
            Self::Perf1 => "Economic stability of the institution.",
            Self::Perf2 => "Quality of company management.",
            Self::Perf3 => "Competitive economic performance level.",
            Self::Perf4 => "Clarity of corporate future vision.",
            Self::Perf5 => "Growth potential of the institution.",
            Self::Csor1 => "Interest in factors beyond profit maximization.",
            Self::Csor2 => "Commitment to environmental preservation.",
            Self::Csor3 => "Responsible behavior toward society.",
            Self::Csor4 => "Honesty in public information disclosure.",
            Self::Csor5 => "Fair treatment of market competitors.",
            Self::Attr1 => "General attractiveness of the company.",
            Self::Attr2 => "Visual appeal (branches, digital presence).",
            Self::Attr3 => "Qualification level of bank staff.",
            Self::Attr4 => "Attractiveness as a potential employer.",
            Self::Like1 => "Identification with bank vs. competitors.",
            Self::Like2 => "Regret if the bank ceased to exist.",
            Self::Comp1 => "Perception as a leading provider.",
            Self::Comp2 => "External reputation of the institution.",
            Self::Comp3 => "Adherence to highest service standards.",
            Self::Sat1 => "Fulfillment of customer expectations.",
            Self::Sat2 => "General positive attitude toward bank.",
            Self::Sat3 => "Preference for bank over competitors.",
            Self::Trust1 => "Listening to customer concerns/problems.",
            Self::Trust2 => "Provision of constructive solutions.",
            Self::Trust3 => "Alignment of values between bank and customer.",
            Self::Trust4 => "Acting in accordance with customer wishes.",
        }
    }
}

impl fmt::Display for SurveyItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SurveyItem {
    type Err = CoreError;

    /// Accepts the form identifier or the trained column name, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|item| item.id() == wanted || item.column_name() == wanted)
            .ok_or_else(|| CoreError::UnknownItem(s.to_string()))
    }
}

/// Likert answers keyed by item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyResponses {
    answers: BTreeMap<SurveyItem, Likert>,
}

impl SurveyResponses {
    /// An empty answer sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every item at the neutral default, as the form starts out.
    pub fn neutral() -> Self {
        let answers = SurveyItem::ALL
            .into_iter()
            .map(|item| (item, Likert::NEUTRAL))
            .collect();
        Self { answers }
    }

    pub fn set(&mut self, item: SurveyItem, answer: Likert) {
        self.answers.insert(item, answer);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, item: SurveyItem, answer: Likert) -> Self {
        self.set(item, answer);
        self
    }

    pub fn get(&self, item: SurveyItem) -> Option<Likert> {
        self.answers.get(&item).copied()
    }

    /// Set every unanswered item to neutral.
    pub fn fill_neutral(&mut self) {
        for item in SurveyItem::ALL {
            self.answers.entry(item).or_insert(Likert::NEUTRAL);
        }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Columns of the unanswered items, in [`SurveyItem::ALL`] order.
    pub fn missing(&self) -> Vec<&'static str> {
        SurveyItem::ALL
            .into_iter()
            .filter(|item| !self.answers.contains_key(item))
            .map(SurveyItem::column_name)
            .collect()
    }
}

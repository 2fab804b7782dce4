//! JSON form submissions.
//!
//! A submission carries the raw form state: demographic options as labels
//! (or ordinal codes) and Likert answers keyed by item identifier. Parsing
//! resolves them into a [`CustomerProfile`] and [`SurveyResponses`];
//! completeness is left to the encoder.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::CoreError;
use crate::demographics::{
    AgeBracket, Categorical, CustomerProfile, Education, Employment, Gender, Income,
    MaritalStatus,
};
use crate::survey::{Likert, SurveyItem, SurveyResponses};

/// A demographic answer as submitted: option label or ordinal code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OptionAnswer {
    Code(i64),
    Label(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileAnswers {
    #[serde(default)]
    pub gender: Option<OptionAnswer>,
    #[serde(default)]
    pub age: Option<OptionAnswer>,
    #[serde(default)]
    pub marital_status: Option<OptionAnswer>,
    #[serde(default)]
    pub education: Option<OptionAnswer>,
    #[serde(default)]
    pub employment: Option<OptionAnswer>,
    #[serde(default)]
    pub income: Option<OptionAnswer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Submission {
    /// Caller-supplied reference, echoed in reports.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub profile: ProfileAnswers,
    /// Item identifier → answer. `null` means unanswered.
    #[serde(default)]
    pub responses: BTreeMap<String, Option<i64>>,
}

impl Submission {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve demographic answers against the enumeration tables.
    pub fn profile(&self) -> Result<CustomerProfile, CoreError> {
        let p = &self.profile;
        Ok(CustomerProfile {
            gender: resolve::<Gender>(p.gender.as_ref())?,
            age: resolve::<AgeBracket>(p.age.as_ref())?,
            marital_status: resolve::<MaritalStatus>(p.marital_status.as_ref())?,
            education: resolve::<Education>(p.education.as_ref())?,
            employment: resolve::<Employment>(p.employment.as_ref())?,
            income: resolve::<Income>(p.income.as_ref())?,
        })
    }

    /// Validate Likert answers. Unknown item keys, out-of-range values and
    /// two keys naming the same item (`QUAL_7` and `QUA_7`, or differing
    /// case) are errors.
    pub fn responses(&self) -> Result<SurveyResponses, CoreError> {
        let mut sheet = SurveyResponses::new();
        let mut seen: HashMap<SurveyItem, &str> = HashMap::new();
        for (key, value) in &self.responses {
            let item: SurveyItem = key.parse()?;
            if let Some(first) = seen.insert(item, key) {
                return Err(CoreError::DuplicateItem {
                    item: item.id(),
                    first: first.to_string(),
                    second: key.clone(),
                });
            }
            if let Some(v) = value {
                sheet.set(item, Likert::for_item(item, *v)?);
            }
        }
        Ok(sheet)
    }
}

fn resolve<T: Categorical>(answer: Option<&OptionAnswer>) -> Result<Option<T>, CoreError> {
    let Some(answer) = answer else {
        return Ok(None);
    };
    let resolved = match answer {
        OptionAnswer::Code(code) => T::from_code(*code),
        OptionAnswer::Label(label) => T::from_label(label),
    };
    resolved.map(Some).ok_or_else(|| CoreError::UnknownOption {
        field: T::FIELD,
        value: match answer {
            OptionAnswer::Code(code) => code.to_string(),
            OptionAnswer::Label(label) => label.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_codes() {
        let json = r#"{
            "id": "cust-17",
            "profile": {
                "gender": "Male",
                "age": 3,
                "marital_status": "living alone",
                "education": "'Mittlere Reife'(completed 10ᵗʰ grade)",
                "employment": "Self-employed",
                "income": ">EUR 5000"
            },
            "responses": { "QUAL_1": 5, "trust_4": 2, "QUA_7": 7, "SAT_1": null }
        }"#;
        let sub = Submission::from_json(json).unwrap();
        assert_eq!(sub.id.as_deref(), Some("cust-17"));

        let profile = sub.profile().unwrap();
        assert_eq!(profile.gender, Some(Gender::Male));
        assert_eq!(profile.age, Some(AgeBracket::From35To44));
        assert_eq!(profile.marital_status, Some(MaritalStatus::LivingAlone));
        assert_eq!(profile.education, Some(Education::MittlereReife));
        assert_eq!(profile.employment, Some(Employment::SelfEmployed));
        assert_eq!(profile.income, Some(Income::Above5000));

        let sheet = sub.responses().unwrap();
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.get(SurveyItem::Trust4).map(Likert::value), Some(2));
        assert_eq!(sheet.get(SurveyItem::Qual7).map(Likert::value), Some(7));
        assert_eq!(sheet.get(SurveyItem::Sat1), None);
    }

    #[test]
    fn absent_sections_are_unanswered() {
        let sub = Submission::from_json("{}").unwrap();
        assert_eq!(sub.profile().unwrap(), CustomerProfile::default());
        assert!(sub.responses().unwrap().is_empty());
    }

    #[test]
    fn unknown_option_label() {
        let sub = Submission::from_json(r#"{"profile": {"gender": "Unknown"}}"#).unwrap();
        let err = sub.profile().unwrap_err();
        assert!(matches!(err, CoreError::UnknownOption { field: "gender", .. }), "{err}");
    }

    #[test]
    fn out_of_range_code() {
        let sub = Submission::from_json(r#"{"profile": {"age": 0}}"#).unwrap();
        assert!(matches!(
            sub.profile(),
            Err(CoreError::UnknownOption { field: "age", .. })
        ));
    }

    #[test]
    fn unknown_item_key() {
        let sub = Submission::from_json(r#"{"responses": {"QUAL_3": 4}}"#).unwrap();
        assert!(matches!(sub.responses(), Err(CoreError::UnknownItem(_))));
    }

    #[test]
    fn likert_out_of_range() {
        let sub = Submission::from_json(r#"{"responses": {"LIKE_2": 8}}"#).unwrap();
        let err = sub.responses().unwrap_err();
        assert!(err.to_string().contains("LIKE_2"), "{err}");
    }

    #[test]
    fn sample_submission_encodes() {
        let sub = Submission::from_json(include_str!("../../../samples/submission.json")).unwrap();
        let profile = sub.profile().unwrap();
        let sheet = sub.responses().unwrap();
        assert_eq!(sheet.len(), 32);
        assert_eq!(profile.income, Some(Income::From2000To3500));

        let features = crate::encode(&profile, &sheet).unwrap();
        let csor5 = crate::schema::Column::Survey(SurveyItem::Csor5);
        assert_eq!(features.get(csor5), crate::FeatureValue::Float(6.0));
    }

    #[test]
    fn unknown_profile_field_is_rejected() {
        assert!(Submission::from_json(r#"{"profile": {"height": 180}}"#).is_err());
    }

    #[test]
    fn misspelled_section_is_rejected() {
        let json = r#"{"profile": {"gender": "Male"}, "respones": {"QUAL_1": 1, "TRUST_1": 1}}"#;
        let err = Submission::from_json(json).unwrap_err();
        assert!(matches!(err, CoreError::Json(_)), "{err}");
        assert!(err.to_string().contains("respones"), "{err}");
    }

    #[test]
    fn column_alias_and_form_id_together_are_rejected() {
        let sub = Submission::from_json(r#"{"responses": {"QUAL_7": 1, "QUA_7": 7}}"#).unwrap();
        match sub.responses() {
            Err(CoreError::DuplicateItem { item, first, second }) => {
                assert_eq!(item, "QUAL_7");
                assert_eq!(first, "QUAL_7");
                assert_eq!(second, "QUA_7");
            }
            other => panic!("expected DuplicateItem, got {other:?}"),
        }
    }

    #[test]
    fn case_variants_of_one_item_are_rejected() {
        let sub = Submission::from_json(r#"{"responses": {"trust_1": 2, "TRUST_1": 6}}"#).unwrap();
        assert!(matches!(
            sub.responses(),
            Err(CoreError::DuplicateItem { item: "TRUST_1", .. })
        ));
    }

    #[test]
    fn unanswered_duplicate_is_still_rejected() {
        let sub = Submission::from_json(r#"{"responses": {"SAT_2": null, "sat_2": 5}}"#).unwrap();
        assert!(matches!(
            sub.responses(),
            Err(CoreError::DuplicateItem { item: "SAT_2", .. })
        ));
    }
}

//! Diagnostic pipeline: encode → classify → interpret → advise.

use std::sync::Arc;

use loyalscope_core::advisory;
use loyalscope_core::{
    Advisory, Assessment, CustomerProfile, FeatureVector, PredictionResult, SurveyResponses,
    encode, interpret,
};
use tracing::info;

use crate::ClassifierError;
use crate::classifier::LoyaltyClassifier;

/// Everything produced for one submission.
#[derive(Debug, Clone)]
pub struct Diagnosis {
    pub features: FeatureVector,
    pub assessment: Assessment,
    pub advisory: Advisory,
    pub model_version: String,
}

/// Holds the shared classifier. Cloning is cheap; every clone uses the
/// same loaded model.
#[derive(Clone)]
pub struct LoyaltyPipeline {
    classifier: Arc<dyn LoyaltyClassifier>,
}

impl LoyaltyPipeline {
    pub fn new(classifier: Arc<dyn LoyaltyClassifier>) -> Self {
        Self { classifier }
    }

    pub fn model_version(&self) -> &str {
        self.classifier.model_version()
    }

    /// Run one complete submission through the model.
    pub fn diagnose(
        &self,
        profile: &CustomerProfile,
        responses: &SurveyResponses,
    ) -> Result<Diagnosis, ClassifierError> {
        let features = encode(profile, responses)?;
        let classes = self.classifier.predict(&features)?;
        let prediction = PredictionResult::from_classes(classes)
            .map_err(|e| ClassifierError::InvalidOutput(e.to_string()))?;

        let assessment = interpret(prediction);
        let advisory = advisory::select(&assessment);

        info!(
            rational = %prediction.rational,
            emotional = %prediction.emotional,
            behavioral = %prediction.behavioral,
            tier = %assessment.tier,
            "diagnosis complete"
        );

        Ok(Diagnosis {
            features,
            assessment,
            advisory,
            model_version: self.classifier.model_version().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use loyalscope_core::demographics::{
        AgeBracket, Education, Employment, Gender, Income, MaritalStatus,
    };
    use loyalscope_core::{CoreError, Dimension, Likert, RiskTier, SurveyItem, TemplateId};

    struct FixedClassifier([i64; 3]);

    impl LoyaltyClassifier for FixedClassifier {
        fn predict(&self, _: &FeatureVector) -> Result<[i64; 3], ClassifierError> {
            Ok(self.0)
        }

        fn model_version(&self) -> &str {
            "fixed"
        }
    }

    /// Records every row it is asked to classify.
    #[derive(Default)]
    struct RecordingClassifier {
        seen: Mutex<Vec<Vec<f32>>>,
    }

    impl LoyaltyClassifier for RecordingClassifier {
        fn predict(&self, features: &FeatureVector) -> Result<[i64; 3], ClassifierError> {
            self.seen.lock().unwrap().push(features.to_f32_row());
            Ok([2, 2, 2])
        }

        fn model_version(&self) -> &str {
            "recording"
        }
    }

    fn profile() -> CustomerProfile {
        CustomerProfile {
            gender: Some(Gender::Male),
            age: Some(AgeBracket::From25To34),
            marital_status: Some(MaritalStatus::Married),
            education: Some(Education::UniversityDegree),
            employment: Some(Employment::Employed),
            income: Some(Income::From2000To3500),
        }
    }

    fn pipeline(classes: [i64; 3]) -> LoyaltyPipeline {
        LoyaltyPipeline::new(Arc::new(FixedClassifier(classes)))
    }

    #[test]
    fn moderate_diagnosis_with_blocks() {
        let p = pipeline([0, 2, 1]);
        assert_eq!(p.model_version(), "fixed");
        let d = p.diagnose(&profile(), &SurveyResponses::neutral()).unwrap();
        assert_eq!(d.assessment.tier, RiskTier::Moderate);
        assert_eq!(
            d.assessment.problem_dimensions.iter().copied().collect::<Vec<_>>(),
            vec![Dimension::Rational, Dimension::Behavioral]
        );
        assert_eq!(d.advisory.tier_template, TemplateId::ModeratePrevention);
        assert_eq!(d.model_version, "fixed");
    }

    #[test]
    fn critical_diagnosis() {
        let d = pipeline([0, 0, 2])
            .diagnose(&profile(), &SurveyResponses::neutral())
            .unwrap();
        assert_eq!(d.assessment.tier, RiskTier::Critical);
        assert!(d.advisory.dimension_blocks.is_empty());
    }

    #[test]
    fn incomplete_input_never_reaches_classifier() {
        let recorder = Arc::new(RecordingClassifier::default());
        let p = LoyaltyPipeline::new(recorder.clone());

        let mut partial = profile();
        partial.income = None;
        let err = p
            .diagnose(&partial, &SurveyResponses::neutral())
            .unwrap_err();

        assert!(matches!(
            err,
            ClassifierError::Input(CoreError::IncompleteInput { .. })
        ));
        assert!(recorder.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn out_of_range_class_is_invalid_output() {
        let err = pipeline([0, 5, 1])
            .diagnose(&profile(), &SurveyResponses::neutral())
            .unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidOutput(_)), "{err}");
    }

    #[test]
    fn classifier_sees_encoded_row() {
        let recorder = Arc::new(RecordingClassifier::default());
        let p = LoyaltyPipeline::new(recorder.clone());

        let responses =
            SurveyResponses::neutral().with(SurveyItem::Csor5, Likert::try_from(7u8).unwrap());
        p.diagnose(&profile(), &responses).unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), 38);
        assert_eq!(seen[0][10], 7.0);
    }

    #[test]
    fn shared_across_threads() {
        let recorder = Arc::new(RecordingClassifier::default());
        let p = LoyaltyPipeline::new(recorder.clone());
        let responses = SurveyResponses::neutral();

        std::thread::scope(|s| {
            for _ in 0..4 {
                let p = p.clone();
                let responses = &responses;
                s.spawn(move || {
                    let d = p.diagnose(&profile(), responses).unwrap();
                    assert_eq!(d.assessment.tier, RiskTier::Secure);
                });
            }
        });

        assert_eq!(recorder.seen.lock().unwrap().len(), 4);
    }
}

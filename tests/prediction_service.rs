mod common;

use common::{FailingClassifier, RecordingClassifier, StubClassifier};
use fraud_prediction_form::types::{
    CardCategory, CardType, DeviceType, EmailDomain, PredictionRequest, ProductCode,
};
use fraud_prediction_form::{PredictionService, Verdict, VerdictReport};
use std::sync::Arc;

fn sample_request() -> PredictionRequest {
    PredictionRequest {
        card1: 9500.0,
        card2: 111.0,
        card4: CardCategory::Visa,
        card6: CardType::Debit,
        addr1: 325,
        addr2: 87,
        transaction_amt: 68.5,
        p_emaildomain: EmailDomain::Yahoo,
        product_cd: ProductCode::W,
        device_type: DeviceType::Desktop,
    }
}

#[test]
fn test_identical_requests_hit_the_model_once() {
    let model = Arc::new(StubClassifier::new(0.4321));
    let service = PredictionService::new(model.clone());
    let request = sample_request();

    let first = service.predict(&request).unwrap();
    let second = service.predict(&request).unwrap();

    assert_eq!(first, 0.43);
    assert_eq!(first, second);
    assert_eq!(model.calls(), 1);

    let other = PredictionRequest {
        transaction_amt: 68.6,
        ..request
    };
    service.predict(&other).unwrap();
    assert_eq!(model.calls(), 2);
    assert_eq!(service.cache().len(), 2);
}

#[test]
fn test_features_reach_the_model_in_training_order() {
    let model = Arc::new(RecordingClassifier::new());
    let service = PredictionService::new(model.clone());

    service.predict(&sample_request()).unwrap();

    assert_eq!(
        model.rows(),
        vec![[9500.0, 111.0, 4.0, 2.0, 325.0, 87.0, 68.5, 4.0, 4.0, 2.0]]
    );
}

#[test]
fn test_scores_are_probabilities_with_two_decimals() {
    for legitimate in [0.0, 0.004, 0.005001, 0.333333, 0.7549, 0.99999, 1.0] {
        let service = PredictionService::new(Arc::new(StubClassifier::new(legitimate)));

        let score = service.predict(&sample_request()).unwrap();

        assert!((0.0..=1.0).contains(&score), "{} out of range", score);
        assert_eq!(format!("{:.2}", score).parse::<f64>().unwrap(), score);
    }
}

#[test]
fn test_model_failure_is_reported_and_not_cached() {
    let model = Arc::new(FailingClassifier::new());
    let service = PredictionService::new(model.clone());
    let request = sample_request();

    let err = service.predict(&request).unwrap_err();
    assert!(err.to_string().contains("session run failed"));
    assert!(service.predict(&request).is_err());

    assert_eq!(model.calls(), 2);
    assert!(service.cache().is_empty());
    assert_eq!(service.metrics().snapshot().model_failures, 2);
}

#[test]
fn test_verdict_follows_rounded_score() {
    // 0.7501 rounds to 0.75, which sits on the threshold and is not above it
    let service = PredictionService::new(Arc::new(StubClassifier::new(0.7501)));
    let report = VerdictReport::from_score(service.predict(&sample_request()).unwrap());
    assert_eq!(report.verdict, Verdict::Legitimate);
    assert_eq!(report.headline, "Probability Score of Financial Transaction is 75.00%");

    let service = PredictionService::new(Arc::new(StubClassifier::new(0.756)));
    let report = VerdictReport::from_score(service.predict(&sample_request()).unwrap());
    assert_eq!(report.verdict, Verdict::Fraudulent);
    assert_eq!(report.message, "OMG! Financial Transaction is Fraudulent");
}

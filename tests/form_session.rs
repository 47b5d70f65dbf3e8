mod common;

use common::{FailingClassifier, StubClassifier};
use fraud_prediction_form::config::ShellConfig;
use fraud_prediction_form::models::Classifier;
use fraud_prediction_form::shell::{FormSession, FormState, Outcome, Tone};
use fraud_prediction_form::{PredictionService, Verdict};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn session_with(classifier: Arc<dyn Classifier>, pause_ms: u64) -> FormSession {
    let shell = ShellConfig {
        celebration_bursts: 3,
        celebration_pause_ms: pause_ms,
    };
    FormSession::new(Arc::new(PredictionService::new(classifier)), shell)
}

#[test]
fn test_no_feedback_before_trigger() {
    let session = session_with(Arc::new(StubClassifier::new(0.1)), 5000);

    assert!(session.outcome().is_none());
    assert!(session.feedback(Instant::now()).is_none());
}

#[test]
fn test_high_score_shows_fraud_warning() {
    let session_model = Arc::new(StubClassifier::new(0.9));
    let mut session = session_with(session_model, 5000);
    let now = Instant::now();

    session.submit(now);
    let feedback = session.feedback(now).unwrap();

    assert_eq!(feedback.tone, Tone::Danger);
    assert_eq!(
        feedback.headline.as_deref(),
        Some("Probability Score of Financial Transaction is 90.00%")
    );
    assert_eq!(feedback.message, "OMG! Financial Transaction is Fraudulent");
    assert_eq!(feedback.bursts, 0);
    assert_eq!(feedback.refresh_in, None);
}

#[test]
fn test_legitimate_verdict_after_celebration() {
    let mut session = session_with(Arc::new(StubClassifier::new(0.3)), 5000);
    let start = Instant::now();
    let pause = Duration::from_millis(5000);

    session.submit(start);

    let feedback = session.feedback(start).unwrap();
    assert_eq!(feedback.tone, Tone::Celebrating);
    assert_eq!(feedback.bursts, 1);
    assert!(feedback.message.is_empty());
    assert_eq!(feedback.refresh_in, Some(pause));
    assert_eq!(
        feedback.headline.as_deref(),
        Some("Probability Score of Financial Transaction is 30.00%")
    );

    let feedback = session.feedback(start + pause).unwrap();
    assert_eq!(feedback.tone, Tone::Celebrating);
    assert_eq!(feedback.bursts, 2);

    let feedback = session.feedback(start + pause * 2).unwrap();
    assert_eq!(feedback.tone, Tone::Success);
    assert_eq!(feedback.bursts, 3);
    assert_eq!(feedback.message, "Hurray! Transaction is Legitimate");
    assert_eq!(feedback.refresh_in, None);
}

#[test]
fn test_zero_pause_shows_verdict_immediately() {
    let mut session = session_with(Arc::new(StubClassifier::new(0.3)), 0);
    let now = Instant::now();

    session.submit(now);
    let feedback = session.feedback(now).unwrap();

    assert_eq!(feedback.tone, Tone::Success);
    assert_eq!(feedback.bursts, 3);
    assert_eq!(feedback.message, "Hurray! Transaction is Legitimate");
}

#[test]
fn test_out_of_range_input_reports_error() {
    let model = Arc::new(StubClassifier::new(0.3));
    let mut session = session_with(model.clone(), 5000);
    session.update_form(FormState {
        transaction_amt: 25_000.0,
        ..FormState::default()
    });
    let now = Instant::now();

    assert!(matches!(session.submit(now), Outcome::Failed { .. }));
    let feedback = session.feedback(now).unwrap();

    assert_eq!(feedback.tone, Tone::Error);
    assert!(feedback.message.starts_with("Invalid input:"));
    assert!(feedback.message.contains("TransactionAmt"));
    assert_eq!(model.calls(), 0);

    session.update_form(FormState {
        transaction_amt: 250.0,
        ..FormState::default()
    });
    assert!(matches!(session.submit(now), Outcome::Scored { .. }));
    assert_eq!(model.calls(), 1);
}

#[test]
fn test_model_failure_keeps_session_usable() {
    let mut session = session_with(Arc::new(FailingClassifier::new()), 5000);
    let now = Instant::now();

    session.submit(now);
    let feedback = session.feedback(now).unwrap();

    assert_eq!(feedback.tone, Tone::Error);
    assert!(feedback.message.starts_with("Prediction failed:"));

    session.submit(now);
    assert!(matches!(session.outcome(), Some(Outcome::Failed { .. })));
}

#[test]
fn test_repeat_trigger_reuses_cached_score() {
    let model = Arc::new(StubClassifier::new(0.9));
    let mut session = session_with(model.clone(), 5000);
    let now = Instant::now();

    session.submit(now);
    session.submit(now);

    assert_eq!(model.calls(), 1);
    let metrics = session.service().metrics();
    assert_eq!(metrics.verdict_count(Verdict::Fraudulent), 2);
    assert_eq!(metrics.verdict_count(Verdict::Legitimate), 0);
    assert_eq!(metrics.snapshot().cache_hits, 1);
}

#[test]
fn test_editing_a_control_clears_the_result() {
    let model = Arc::new(StubClassifier::new(0.9));
    let mut session = session_with(model.clone(), 5000);
    let now = Instant::now();

    session.submit(now);
    session.update_form(*session.form());
    assert!(session.feedback(now).is_some());

    session.update_form(FormState {
        card1: 1200.0,
        ..*session.form()
    });

    assert!(session.outcome().is_none());
    assert!(session.feedback(now).is_none());
    assert_eq!(session.form().card1, 1200.0);
    assert_eq!(model.calls(), 1);
}

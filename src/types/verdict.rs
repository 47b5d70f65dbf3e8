//! Verdict data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scores above this percentage are reported as fraudulent.
pub const FRAUD_THRESHOLD_PERCENT: f64 = 75.0;

/// Binary verdict shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Legitimate,
    Fraudulent,
}

impl Verdict {
    /// Apply the threshold policy to a score in [0, 1].
    pub fn from_score(score: f64) -> Self {
        if score_percent(score) > FRAUD_THRESHOLD_PERCENT {
            Verdict::Fraudulent
        } else {
            Verdict::Legitimate
        }
    }

    /// Feedback line displayed under the score
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Fraudulent => "OMG! Financial Transaction is Fraudulent",
            Verdict::Legitimate => "Hurray! Transaction is Legitimate",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Fraudulent => "fraudulent",
            Verdict::Legitimate => "legitimate",
        }
    }
}

/// Percentage form of a score, as displayed.
pub fn score_percent(score: f64) -> f64 {
    score * 100.0
}

/// Report produced for every prediction the user triggers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictReport {
    /// Unique report identifier
    pub report_id: String,

    /// Rounded class-0 probability returned by the prediction service
    pub score: f64,

    /// `score * 100`
    pub score_percent: f64,

    /// Threshold outcome
    pub verdict: Verdict,

    /// Score line, e.g. `Probability Score of Financial Transaction is 82.00%`
    pub headline: String,

    /// Verdict feedback line
    pub message: String,

    /// Report generation timestamp
    pub timestamp: DateTime<Utc>,
}

impl VerdictReport {
    /// Build a report from a prediction score
    pub fn from_score(score: f64) -> Self {
        let percent = score_percent(score);
        let verdict = Verdict::from_score(score);

        Self {
            report_id: Uuid::new_v4().to_string(),
            score,
            score_percent: percent,
            verdict,
            headline: format!(
                "Probability Score of Financial Transaction is {:.2}%",
                percent
            ),
            message: verdict.message().to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_fraudulent(&self) -> bool {
        self.verdict == Verdict::Fraudulent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_law() {
        assert_eq!(Verdict::from_score(0.75), Verdict::Legitimate);
        assert_eq!(Verdict::from_score(0.7501), Verdict::Fraudulent);
        assert_eq!(Verdict::from_score(0.0), Verdict::Legitimate);
        assert_eq!(Verdict::from_score(1.0), Verdict::Fraudulent);
        assert_eq!(Verdict::from_score(0.76), Verdict::Fraudulent);
    }

    #[test]
    fn test_report_formatting() {
        let report = VerdictReport::from_score(0.82);

        assert_eq!(report.verdict, Verdict::Fraudulent);
        assert!(report.is_fraudulent());
        assert_eq!(
            report.headline,
            "Probability Score of Financial Transaction is 82.00%"
        );
        assert_eq!(report.message, "OMG! Financial Transaction is Fraudulent");

        let legit = VerdictReport::from_score(0.3);
        assert_eq!(legit.message, "Hurray! Transaction is Legitimate");
        assert_eq!(
            legit.headline,
            "Probability Score of Financial Transaction is 30.00%"
        );
    }

    #[test]
    fn test_report_serialization() {
        let report = VerdictReport::from_score(0.5);

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: VerdictReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report.report_id, deserialized.report_id);
        assert_eq!(deserialized.verdict, Verdict::Legitimate);
        assert!(json.contains("\"verdict\":\"legitimate\""));
    }
}

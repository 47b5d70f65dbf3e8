//! One user's form session: trigger, threshold policy and feedback state

use crate::config::ShellConfig;
use crate::models::PredictionService;
use crate::shell::celebration::Celebration;
use crate::shell::form::FormState;
use crate::types::verdict::{Verdict, VerdictReport};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Visual treatment of the result area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Fraudulent verdict
    Danger,
    /// Legitimate verdict, celebration still running
    Celebrating,
    /// Legitimate verdict, celebration done
    Success,
    /// Validation or prediction failure
    Error,
}

/// What the result area shows at a given instant
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub tone: Tone,
    pub headline: Option<String>,
    pub message: String,
    /// Celebration bursts fired so far
    pub bursts: u32,
    /// When the view changes next without user input
    pub refresh_in: Option<Duration>,
}

/// Result of the last trigger
#[derive(Debug, Clone)]
pub enum Outcome {
    Scored {
        report: VerdictReport,
        celebration: Option<Celebration>,
    },
    Failed {
        message: String,
    },
}

/// Form state plus the last outcome. Predictions run only on `submit`.
///
/// Editing any control discards the shown outcome.
pub struct FormSession {
    service: Arc<PredictionService>,
    shell: ShellConfig,
    form: FormState,
    outcome: Option<Outcome>,
}

impl FormSession {
    pub fn new(service: Arc<PredictionService>, shell: ShellConfig) -> Self {
        Self {
            service,
            shell,
            form: FormState::default(),
            outcome: None,
        }
    }

    /// Run a prediction for the current form state.
    ///
    /// Failures land in the outcome as a generic error; the session stays usable.
    pub fn submit(&mut self, now: Instant) -> &Outcome {
        let outcome = match self.score() {
            Ok(report) => {
                self.service.metrics().record_verdict(report.verdict);
                info!(
                    report_id = %report.report_id,
                    score = report.score,
                    verdict = report.verdict.as_str(),
                    "Prediction displayed"
                );

                let celebration = (report.verdict == Verdict::Legitimate).then(|| {
                    Celebration::new(
                        now,
                        self.shell.celebration_bursts,
                        self.shell.celebration_pause(),
                    )
                });
                Outcome::Scored {
                    report,
                    celebration,
                }
            }
            Err(message) => Outcome::Failed { message },
        };

        self.outcome.insert(outcome)
    }

    fn score(&self) -> Result<VerdictReport, String> {
        let request = self.form.to_request().map_err(|e| {
            warn!(error = %e, "Form values rejected");
            format!("Invalid input: {}", e)
        })?;

        let score = self.service.predict(&request).map_err(|e| {
            error!(error = %e, "Prediction failed");
            format!("Prediction failed: {:#}", e)
        })?;

        Ok(VerdictReport::from_score(score))
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Replace the control values, clearing the outcome if anything changed.
    pub fn update_form(&mut self, form: FormState) {
        if form != self.form {
            self.form = form;
            self.outcome = None;
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Result area contents at `now`, `None` before the first trigger
    pub fn feedback(&self, now: Instant) -> Option<Feedback> {
        let feedback = match self.outcome.as_ref()? {
            Outcome::Failed { message } => Feedback {
                tone: Tone::Error,
                headline: None,
                message: message.clone(),
                bursts: 0,
                refresh_in: None,
            },
            Outcome::Scored {
                report,
                celebration: None,
            } => Feedback {
                tone: if report.is_fraudulent() {
                    Tone::Danger
                } else {
                    Tone::Success
                },
                headline: Some(report.headline.clone()),
                message: report.message.clone(),
                bursts: 0,
                refresh_in: None,
            },
            Outcome::Scored {
                report,
                celebration: Some(celebration),
            } => {
                let finished = celebration.is_finished(now);
                Feedback {
                    tone: if finished {
                        Tone::Success
                    } else {
                        Tone::Celebrating
                    },
                    headline: Some(report.headline.clone()),
                    message: if finished {
                        report.message.clone()
                    } else {
                        String::new()
                    },
                    bursts: celebration.bursts_fired(now),
                    refresh_in: celebration.next_burst_in(now),
                }
            }
        };

        Some(feedback)
    }

    pub fn service(&self) -> &Arc<PredictionService> {
        &self.service
    }
}

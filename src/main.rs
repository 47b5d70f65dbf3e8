//! Fraud Prediction Form - Headless Scorer
//!
//! Reads one JSON prediction request per line from stdin, scores it with the
//! configured model and writes one JSON verdict report per line to stdout.

use anyhow::Result;
use fraud_prediction_form::{
    app::AppState, config::AppConfig, consumer::RequestConsumer, metrics::MetricsReporter,
    producer::ReportProducer, telemetry, types::VerdictReport,
};
use std::time::Instant;
use tokio::io::BufReader;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    telemetry::init_logging(&config.logging)?;

    info!("Starting Fraud Prediction Scorer");
    info!(
        model = %config.model.path.display(),
        banner = %config.banner.path.display(),
        "Configuration loaded successfully"
    );

    let report_interval = config.metrics.report_interval_secs;
    let state = match AppState::bootstrap(config) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };
    for report in state.startup_reports() {
        warn!("{}", report);
    }

    let service = state.service.clone();
    let metrics = service.metrics().clone();

    if report_interval > 0 {
        let reporter = MetricsReporter::new(metrics.clone(), report_interval);
        tokio::spawn(reporter.start());
    }

    let mut consumer = RequestConsumer::new(BufReader::new(tokio::io::stdin()));
    let mut producer = ReportProducer::new(tokio::io::stdout());

    info!("Reading prediction requests from stdin");

    while let Some(incoming) = consumer.next().await? {
        let start = Instant::now();

        let request = match incoming.request {
            Ok(request) => request,
            Err(e) => {
                warn!(line = incoming.line, error = %e, "Skipping request");
                producer.publish_error(incoming.line, &e).await?;
                continue;
            }
        };

        match service.predict(&request) {
            Ok(score) => {
                let report = VerdictReport::from_score(score);
                metrics.record_verdict(report.verdict);
                producer.publish(&report).await?;

                info!(
                    line = incoming.line,
                    score = report.score,
                    verdict = report.verdict.as_str(),
                    processing_time_us = start.elapsed().as_micros() as u64,
                    "Request scored"
                );
            }
            Err(e) => {
                error!(line = incoming.line, error = %e, "Prediction failed");
                producer
                    .publish_error(incoming.line, &format!("Prediction failed: {:#}", e))
                    .await?;
            }
        }
    }

    info!(lines = consumer.lines_read(), "Input exhausted, shutting down...");
    metrics.print_summary();

    Ok(())
}

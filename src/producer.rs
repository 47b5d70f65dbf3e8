//! Line-delimited JSON producer for verdict reports

use crate::types::verdict::VerdictReport;
use anyhow::Result;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Per-line failure written in place of a report
#[derive(Debug, Serialize)]
struct LineError<'a> {
    line: u64,
    error: &'a str,
}

/// Producer writing one JSON document per line
pub struct ReportProducer<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin> ReportProducer<W> {
    /// Create a new report producer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Publish a verdict report
    pub async fn publish(&mut self, report: &VerdictReport) -> Result<()> {
        self.write_line(report).await?;

        debug!(
            report_id = %report.report_id,
            score = report.score,
            verdict = report.verdict.as_str(),
            "Published verdict report"
        );

        Ok(())
    }

    /// Publish the failure for one input line
    pub async fn publish_error(&mut self, line: u64, error: &str) -> Result<()> {
        self.write_line(&LineError { line, error }).await
    }

    async fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let mut payload = serde_json::to_vec(value)?;
        payload.push(b'\n');
        self.writer.write_all(&payload).await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

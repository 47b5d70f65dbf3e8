//! Line-delimited JSON consumer for incoming prediction requests

use crate::types::request::PredictionRequest;
use anyhow::{Context, Result};
use std::io::ErrorKind;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, warn};

/// One input line and what it decoded to
#[derive(Debug)]
pub struct IncomingRequest {
    /// 1-based line number in the input
    pub line: u64,
    pub request: Result<PredictionRequest, String>,
}

/// Consumer reading one JSON request per line
pub struct RequestConsumer<R> {
    lines: Lines<R>,
    line: u64,
}

impl<R: AsyncBufRead + Unpin> RequestConsumer<R> {
    /// Create a new request consumer
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Next non-blank line, decoded and validated. `None` at end of input.
    ///
    /// A line that is not valid UTF-8 is reported like any other undecodable
    /// line. Only read failures of the underlying stream are returned as errors.
    pub async fn next(&mut self) -> Result<Option<IncomingRequest>> {
        loop {
            let read = self.lines.next_line().await;
            let text = match read {
                Ok(Some(text)) => text,
                Ok(None) => return Ok(None),
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.line += 1;
                    warn!(line = self.line, error = %e, "Undecodable request line");
                    return Ok(Some(IncomingRequest {
                        line: self.line,
                        request: Err(format!("Invalid request: {}", e)),
                    }));
                }
                Err(e) => return Err(e).context("Failed to read request line"),
            };
            self.line += 1;

            if text.trim().is_empty() {
                continue;
            }

            let request = serde_json::from_str::<PredictionRequest>(&text)
                .map_err(|e| format!("Invalid request: {}", e))
                .and_then(|r| r.validated().map_err(|e| format!("Invalid input: {}", e)));

            debug!(line = self.line, ok = request.is_ok(), "Request line consumed");

            return Ok(Some(IncomingRequest {
                line: self.line,
                request,
            }));
        }
    }

    /// Lines read so far
    pub fn lines_read(&self) -> u64 {
        self.line
    }
}

/// JSON batch mode: format many `(precision, raw)` requests in one run.
use crate::bound::length_bound;
use crate::decode::RawTimestamp;
use crate::precision::Precision;
use crate::timefmt::to_iso8601;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchRequest {
    /// Validated on use so one bad request does not fail the whole batch.
    pub precision: i64,
    pub raw: RawTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BatchResult {
    pub precision: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_bound: Option<usize>,
}

impl BatchRequest {
    pub fn evaluate(&self) -> BatchResult {
        let outcome = Precision::new(self.precision)
            .and_then(|p| to_iso8601(p, self.raw).map(|value| (value, length_bound(p))));

        match outcome {
            Ok((value, bound)) => BatchResult {
                precision: self.precision,
                value: Some(value),
                error: None,
                length_bound: Some(bound),
            },
            Err(err) => {
                tracing::debug!(precision = self.precision, error = %err, "batch request rejected");
                BatchResult {
                    precision: self.precision,
                    value: None,
                    error: Some(err.to_string()),
                    length_bound: None,
                }
            }
        }
    }
}

pub fn load_requests(path: &Path) -> Result<Vec<BatchRequest>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;
    parse_requests(&content).with_context(|| format!("Invalid batch file: {}", path.display()))
}

pub fn parse_requests(json: &str) -> Result<Vec<BatchRequest>> {
    serde_json::from_str(json).context("Failed to parse batch requests")
}

pub fn run(requests: &[BatchRequest]) -> Vec<BatchResult> {
    let results: Vec<BatchResult> = requests.iter().map(BatchRequest::evaluate).collect();
    let failed = results.iter().filter(|r| r.error.is_some()).count();
    tracing::info!(total = results.len(), failed, "batch formatted");
    results
}

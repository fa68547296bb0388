//! Evaluation runner: drives the query API and aggregates results.

use crate::client::ApiClient;
use crate::config::{Config, Thresholds};
use crate::error::Result;
use crate::queries::QuerySet;
use crate::report::{CategoryResult, EvaluationReport, QueryRecord, ThresholdViolation};
use crate::scoring::{QualityMetrics, ResponsePayload, ScoreWeights};
use std::path::PathBuf;
use tracing::error;

/// Outcome of one query call before it is folded into the report.
///
/// Transport failures, non-success statuses, and undecodable bodies all end
/// up as `Failure`; the evaluation itself never aborts on a single query.
#[derive(Debug)]
pub enum QueryOutcome {
    /// The service answered with a decodable payload.
    Success(ResponsePayload),
    /// The call failed; the cause is kept for logging.
    Failure(String),
}

/// Collapse a query outcome into a report record.
///
/// This is the single point where failures become all-zero metrics.
fn collapse_outcome(query: &str, outcome: QueryOutcome, weights: &ScoreWeights) -> QueryRecord {
    match outcome {
        QueryOutcome::Success(payload) => {
            let metrics = weights.score(&payload);
            QueryRecord {
                query: query.to_string(),
                response: payload.response,
                metrics,
            }
        }
        QueryOutcome::Failure(cause) => {
            error!(query = %query, cause = %cause, "query evaluation failed");
            QueryRecord {
                query: query.to_string(),
                response: String::new(),
                metrics: QualityMetrics::zeroed(),
            }
        }
    }
}

/// Drives a full evaluation pass against the configured service.
pub struct Evaluator {
    client: ApiClient,
    weights: ScoreWeights,
    thresholds: Thresholds,
    report_path: PathBuf,
}

impl Evaluator {
    /// Create an evaluator from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            client: ApiClient::new(config.api.base_url.clone()),
            weights: ScoreWeights::default(),
            thresholds: config.thresholds,
            report_path: config.api.report_path.clone(),
        }
    }

    /// Evaluate one query, absorbing any failure into a zero-score record.
    pub async fn evaluate_single_query(&self, query: &str) -> QueryRecord {
        let outcome = match self.client.query(query).await {
            Ok(payload) => QueryOutcome::Success(payload),
            Err(e) => QueryOutcome::Failure(e.to_string()),
        };
        collapse_outcome(query, outcome, &self.weights)
    }

    /// Evaluate every query in the set, strictly sequentially, in category
    /// order then query order. Always produces a complete report.
    pub async fn evaluate_queries(&self, query_set: &QuerySet) -> EvaluationReport {
        let mut report = EvaluationReport::new();

        for category in &query_set.categories {
            let mut records = Vec::with_capacity(category.queries.len());
            for query in &category.queries {
                records.push(self.evaluate_single_query(query).await);
            }
            report.push(&category.name, CategoryResult::from_records(records));
        }

        report
    }

    /// Run a full pass: evaluate, persist the report, check thresholds.
    ///
    /// Returns the report together with any threshold violations; writing
    /// the report is the only fallible step.
    pub async fn run(
        &self,
        query_set: &QuerySet,
    ) -> Result<(EvaluationReport, Vec<ThresholdViolation>)> {
        let report = self.evaluate_queries(query_set).await;
        report.save(&self.report_path)?;
        let violations = report.check_thresholds(&self.thresholds);
        Ok((report, violations))
    }

    /// Check service liveness via `GET /health`.
    pub async fn health_check(&self) -> Result<()> {
        self.client.health_check().await
    }

    /// Path the report is written to.
    pub fn report_path(&self) -> &PathBuf {
        &self.report_path
    }
}

//! Evaluation report structure and persistence.
//!
//! The report is a JSON object mapping category names to their results, in
//! taxonomy order. It is built once per run, written to disk, and never read
//! back by the harness itself.

use crate::config::Thresholds;
use crate::error::{EvalError, Result};
use crate::scoring::QualityMetrics;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// Outcome of a single evaluated query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    /// The query that was sent.
    pub query: String,
    /// Response text, empty if the call failed.
    pub response: String,
    /// Derived quality metrics, zeroed if the call failed.
    pub metrics: QualityMetrics,
}

/// Aggregated results for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Per-query records, in evaluation order.
    pub queries: Vec<QueryRecord>,
    /// Arithmetic mean of the contained quality scores.
    pub avg_quality_score: f64,
    /// Number of queries configured for this category.
    pub total_queries: usize,
}

impl CategoryResult {
    /// Finalize a category from its query records.
    ///
    /// The average is 0.0 for an empty category. Failed queries carry a zero
    /// score and still count toward `total_queries`.
    pub fn from_records(records: Vec<QueryRecord>) -> Self {
        let total_queries = records.len();
        let avg_quality_score = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.metrics.quality_score).sum::<f64>() / total_queries as f64
        };
        Self {
            queries: records,
            avg_quality_score,
            total_queries,
        }
    }
}

/// Full evaluation report: category name to results, insertion-ordered.
#[derive(Debug, Clone, Default)]
pub struct EvaluationReport {
    categories: Vec<(String, CategoryResult)>,
}

impl EvaluationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized category.
    pub fn push(&mut self, name: impl Into<String>, result: CategoryResult) {
        self.categories.push((name.into(), result));
    }

    /// Look up a category by name.
    pub fn get(&self, name: &str) -> Option<&CategoryResult> {
        self.categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r)
    }

    /// Iterate categories in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryResult)> {
        self.categories.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the report has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Collect every threshold violation in the report.
    ///
    /// A category average at or below `category_min`, or an individual query
    /// score at or below `query_min`, is a violation. Order follows the
    /// report: each category first, then its queries.
    pub fn check_thresholds(&self, thresholds: &Thresholds) -> Vec<ThresholdViolation> {
        let mut violations = Vec::new();

        for (name, result) in &self.categories {
            if result.avg_quality_score <= thresholds.category_min {
                violations.push(ThresholdViolation::Category {
                    category: name.clone(),
                    avg_quality_score: result.avg_quality_score,
                });
            }

            for record in &result.queries {
                if record.metrics.quality_score <= thresholds.query_min {
                    violations.push(ThresholdViolation::Query {
                        category: name.clone(),
                        query: record.query.clone(),
                        quality_score: record.metrics.quality_score,
                    });
                }
            }
        }

        violations
    }

    /// Write the report as pretty-printed UTF-8 JSON (2-space indentation,
    /// non-ASCII characters written literally).
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| EvalError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| EvalError::Serialization(e.to_string()))?;
        fs::write(path, json).map_err(|e| EvalError::io(path, e))?;

        Ok(())
    }
}

impl Serialize for EvaluationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, result) in &self.categories {
            map.serialize_entry(name, result)?;
        }
        map.end()
    }
}

/// A quality threshold that was not met.
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdViolation {
    /// A category average fell at or below the category threshold.
    Category {
        category: String,
        avg_quality_score: f64,
    },
    /// An individual query fell at or below the per-query threshold.
    Query {
        category: String,
        query: String,
        quality_score: f64,
    },
}

impl fmt::Display for ThresholdViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdViolation::Category {
                category,
                avg_quality_score,
            } => write!(
                f,
                "Category '{}' performance is too low (avg score {:.2})",
                category, avg_quality_score
            ),
            ThresholdViolation::Query {
                category,
                query,
                quality_score,
            } => write!(
                f,
                "Query '{}' in category '{}' performance is too low (score {:.2})",
                query, category, quality_score
            ),
        }
    }
}

//! Query Eval - an evaluation harness for a query-answering HTTP API.
//!
//! The harness sends a fixed taxonomy of natural-language queries to a
//! remote service, scores each response with a lightweight heuristic,
//! aggregates scores per category, writes a JSON report, and enforces
//! minimum quality thresholds.
//!
//! # Quick Start
//!
//! ```no_run
//! use query_eval::{config::Config, queries::QuerySet, runner::Evaluator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = Config::load()?;
//!     config.validate()?;
//!
//!     // Create the evaluator and check the service is up
//!     let evaluator = Evaluator::new(&config);
//!     evaluator.health_check().await?;
//!
//!     // Run the full evaluation and persist the report
//!     let (report, violations) = evaluator.run(&QuerySet::default()).await?;
//!
//!     for (category, result) in report.iter() {
//!         println!("{}: {:.2}", category, result.avg_quality_score);
//!     }
//!
//!     for violation in &violations {
//!         eprintln!("{}", violation);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **QuerySet**: the fixed category → queries taxonomy
//! - **ApiClient**: HTTP client for the `/query` and `/health` endpoints
//! - **ScoreWeights**: pure response-quality scoring
//! - **Evaluator**: sequential evaluation loop and threshold checks
//! - **EvaluationReport**: ordered per-category results, persisted as JSON

pub mod client;
pub mod config;
pub mod error;
pub mod queries;
pub mod report;
pub mod runner;
pub mod scoring;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::{Config, Thresholds};
pub use error::{EvalError, Result};
pub use queries::{QueryCategory, QuerySet};
pub use report::{CategoryResult, EvaluationReport, QueryRecord, ThresholdViolation};
pub use runner::{Evaluator, QueryOutcome};
pub use scoring::{QualityMetrics, ResponsePayload, ScoreWeights};

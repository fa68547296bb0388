//! Response quality scoring.
//!
//! A response payload is reduced to a handful of cheap surface metrics and a
//! weighted boolean composite in [0, 1]. Scoring is a pure function of the
//! payload and never fails, whatever the service sent back.

use serde::{Deserialize, Serialize};

/// Response body returned by `POST /query`.
///
/// Every field is optional on the wire; absent fields collapse to their
/// zero values before scoring.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePayload {
    /// Generated answer text.
    #[serde(default)]
    pub response: String,

    /// Source documents backing the answer. Only the count is scored, so the
    /// element shape is left opaque.
    #[serde(default)]
    pub sources: Vec<serde_json::Value>,

    /// Service-reported confidence, conventionally in [0, 1].
    #[serde(default)]
    pub confidence: f64,
}

/// Weights and cutoffs for the quality composite.
///
/// The constants have no stated derivation; they are preserved from the
/// original harness as configuration values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight awarded when the response exceeds `min_response_length`.
    pub length_weight: f64,
    /// Weight awarded when at least one source is cited.
    pub source_weight: f64,
    /// Weight awarded when confidence exceeds `min_confidence`.
    pub confidence_weight: f64,
    /// A response longer than this many characters counts as meaningful.
    pub min_response_length: usize,
    /// Confidence above this value counts as high.
    pub min_confidence: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            length_weight: 0.3,
            source_weight: 0.3,
            confidence_weight: 0.4,
            min_response_length: 50,
            min_confidence: 0.5,
        }
    }
}

/// Derived quality metrics for a single response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Character count of the response text.
    pub response_length: usize,
    /// Number of cited sources.
    pub source_count: usize,
    /// Confidence as reported by the service.
    pub confidence: f64,
    /// Weighted boolean composite in [0, 1].
    pub quality_score: f64,
}

impl QualityMetrics {
    /// All-zero metrics, used for failed queries.
    pub fn zeroed() -> Self {
        Self {
            response_length: 0,
            source_count: 0,
            confidence: 0.0,
            quality_score: 0.0,
        }
    }
}

impl ScoreWeights {
    /// Score a response payload.
    ///
    /// The composite takes one of six discrete values
    /// {0.0, 0.3, 0.4, 0.6, 0.7, 1.0} under the default weights, depending on
    /// which of the three indicators hold.
    pub fn score(&self, payload: &ResponsePayload) -> QualityMetrics {
        let response_length = payload.response.chars().count();
        let source_count = payload.sources.len();
        let confidence = payload.confidence;

        let mut quality_score = 0.0;
        if response_length > self.min_response_length {
            quality_score += self.length_weight;
        }
        if source_count > 0 {
            quality_score += self.source_weight;
        }
        if confidence > self.min_confidence {
            quality_score += self.confidence_weight;
        }

        QualityMetrics {
            response_length,
            source_count,
            confidence,
            quality_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(response: &str, sources: usize, confidence: f64) -> ResponsePayload {
        ResponsePayload {
            response: response.to_string(),
            sources: vec![json!("doc"); sources],
            confidence,
        }
    }

    #[test]
    fn test_empty_payload_scores_zero() {
        let metrics = ScoreWeights::default().score(&ResponsePayload::default());
        assert_eq!(metrics, QualityMetrics::zeroed());
    }

    #[test]
    fn test_all_indicators_score_one() {
        let metrics = ScoreWeights::default().score(&payload(&"x".repeat(60), 1, 0.9));
        assert_eq!(metrics.response_length, 60);
        assert_eq!(metrics.source_count, 1);
        assert_eq!(metrics.confidence, 0.9);
        assert_eq!(metrics.quality_score, 1.0);
    }

    #[test]
    fn test_no_indicators_score_zero() {
        let metrics = ScoreWeights::default().score(&payload("short", 0, 0.1));
        assert_eq!(metrics.quality_score, 0.0);
    }

    #[test]
    fn test_single_indicators() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.score(&payload(&"x".repeat(60), 0, 0.0)).quality_score, 0.3);
        assert_eq!(weights.score(&payload("", 2, 0.0)).quality_score, 0.3);
        assert_eq!(weights.score(&payload("", 0, 0.9)).quality_score, 0.4);
    }

    #[test]
    fn test_indicator_pairs() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.score(&payload(&"x".repeat(60), 1, 0.0)).quality_score, 0.6);
        assert!((weights.score(&payload(&"x".repeat(60), 0, 0.9)).quality_score - 0.7).abs() < 1e-9);
        assert!((weights.score(&payload("", 1, 0.9)).quality_score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_cutoffs_are_strict() {
        let weights = ScoreWeights::default();
        // Exactly 50 chars and exactly 0.5 confidence do not count.
        assert_eq!(weights.score(&payload(&"x".repeat(50), 0, 0.5)).quality_score, 0.0);
        assert_eq!(weights.score(&payload(&"x".repeat(51), 0, 0.0)).quality_score, 0.3);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 60 Cyrillic characters, 120 bytes.
        let metrics = ScoreWeights::default().score(&payload(&"ж".repeat(60), 0, 0.0));
        assert_eq!(metrics.response_length, 60);
        assert_eq!(metrics.quality_score, 0.3);
    }

    #[test]
    fn test_payload_tolerates_missing_fields() {
        let payload: ResponsePayload = serde_json::from_value(json!({})).unwrap();
        assert!(payload.response.is_empty());
        assert!(payload.sources.is_empty());
        assert_eq!(payload.confidence, 0.0);

        let payload: ResponsePayload =
            serde_json::from_value(json!({"response": "hi", "extra": true})).unwrap();
        assert_eq!(payload.response, "hi");
    }
}

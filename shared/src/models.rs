use serde::{Serialize, Deserialize};
use std::fmt;

/// Classification outcome for a submitted message. Anything the backend
/// sends outside the known labels deserializes to `Error`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Scam,
    Safe,
    Suspicious,
    #[serde(other)]
    Error,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Scam => "scam",
            Verdict::Safe => "safe",
            Verdict::Suspicious => "suspicious",
            Verdict::Error => "error",
        }
    }

    /// Display form used in result boxes and the carousel.
    pub fn label_upper(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    #[serde(rename = "label")]
    pub verdict: Verdict,
    pub confidence: f64,
}

impl AnalysisResult {
    pub fn new(verdict: Verdict, confidence: f64) -> Self {
        Self { verdict, confidence }
    }

    /// Uniform substitute for any classifier-call failure.
    pub fn error() -> Self {
        Self { verdict: Verdict::Error, confidence: 0.0 }
    }

    /// Confidence rendered as a percentage with one decimal, e.g. "99.0%".
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub message: String,
}

/// Per-model score in the ensemble response shape. The label is numeric:
/// 1 for scam, 0 for safe.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelScore {
    pub label: i64,
    pub confidence: f64,
}

/// The analyze endpoint has shipped two body shapes: a bare
/// `{label, confidence}` object, and an ensemble `{best: {label, confidence}}`
/// with a numeric-encoded label. Both are accepted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Labeled(AnalysisResult),
    Ensemble { best: ModelScore },
}

impl From<AnalyzeResponse> for AnalysisResult {
    fn from(response: AnalyzeResponse) -> Self {
        match response {
            AnalyzeResponse::Labeled(result) => result,
            AnalyzeResponse::Ensemble { best } => {
                let verdict = match best.label {
                    1 => Verdict::Scam,
                    0 => Verdict::Safe,
                    _ => Verdict::Error,
                };
                AnalysisResult::new(verdict, best.confidence)
            }
        }
    }
}

/// A past analysis shown in the rotating carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentAnalysis {
    pub message: String,
    #[serde(rename = "label")]
    pub verdict: Verdict,
    pub confidence: f64,
}

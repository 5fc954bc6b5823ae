use thiserror::Error;
use crate::models::AnalysisResult;

/// Failure modes of the classifier call. The UI collapses all of them to
/// the same generic error verdict; the distinction only reaches the console.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyzeError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("classifier returned status {0}")]
    Status(u16),
    #[error("could not decode classifier response: {0}")]
    Decode(String),
}

impl AnalyzeError {
    pub fn as_result(&self) -> AnalysisResult {
        AnalysisResult::error()
    }
}

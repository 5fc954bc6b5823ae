pub mod error;
pub mod models;
pub mod validation;
pub mod quiz;

pub use error::AnalyzeError;
pub use models::*;
pub use validation::*;
pub use quiz::{QuizError, QuizExample, QuizSession, RoundPhase, ROUND_COUNT};

#[cfg(test)]
mod tests;

use thiserror::Error;

/// Rounds per quiz session.
pub const ROUND_COUNT: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Example pool has {0} entries, need at least {ROUND_COUNT}")]
    PoolTooSmall(usize),
}

/// A hand-labeled message the player has to judge. `confidence` is the
/// score a classifier assigned to it, reused by the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizExample {
    pub text: String,
    pub is_scam: bool,
    pub confidence: f64,
}

impl QuizExample {
    pub fn new(text: impl Into<String>, is_scam: bool, confidence: f64) -> Self {
        Self { text: text.into(), is_scam, confidence }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Answering,
    Answered,
}

/// Sequential guessing game over a fixed set of examples.
///
/// Each round moves `Answering -> Answered` on a guess and back to
/// `Answering` for the next round; after the last round `next` finishes
/// the session. Guesses while already answered are ignored, so repeated
/// button clicks cannot double-score.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    examples: Vec<QuizExample>,
    current: usize,
    answers: Vec<bool>,
    score: usize,
    phase: RoundPhase,
    finished: bool,
}

impl QuizSession {
    /// Builds a session over the first `ROUND_COUNT` examples given.
    pub fn new(mut examples: Vec<QuizExample>) -> Result<Self, QuizError> {
        if examples.len() < ROUND_COUNT {
            return Err(QuizError::PoolTooSmall(examples.len()));
        }
        examples.truncate(ROUND_COUNT);
        Ok(Self {
            examples,
            current: 0,
            answers: Vec::new(),
            score: 0,
            phase: RoundPhase::Answering,
            finished: false,
        })
    }

    /// Builds a session from a random `ROUND_COUNT`-item sample of `pool`.
    /// `rand` must yield values in `[0, 1)`; the frontend passes
    /// `js_sys::Math::random`, tests pass a deterministic closure.
    pub fn sample(pool: &[QuizExample], rand: impl FnMut() -> f64) -> Result<Self, QuizError> {
        Self::new(sample_examples(pool, ROUND_COUNT, rand))
    }

    /// Records a guess for the current round. Returns whether the guess was
    /// correct, or `None` if the round was already answered or the session
    /// is finished.
    pub fn answer(&mut self, guess: bool) -> Option<bool> {
        if self.finished || self.phase == RoundPhase::Answered {
            return None;
        }
        let correct = self.examples[self.current].is_scam == guess;
        self.answers.push(guess);
        if correct {
            self.score += 1;
        }
        self.phase = RoundPhase::Answered;
        Some(correct)
    }

    /// Advances to the next round, or finishes after the last one. Ignored
    /// until the current round has been answered.
    pub fn next(&mut self) -> bool {
        if self.finished || self.phase != RoundPhase::Answered {
            return false;
        }
        if self.current + 1 < self.examples.len() {
            self.current += 1;
            self.phase = RoundPhase::Answering;
        } else {
            self.finished = true;
        }
        true
    }

    pub fn examples(&self) -> &[QuizExample] {
        &self.examples
    }

    pub fn current_example(&self) -> &QuizExample {
        &self.examples[self.current]
    }

    /// Zero-based index of the current round, always in `[0, ROUND_COUNT)`.
    pub fn current_round(&self) -> usize {
        self.current
    }

    pub fn is_last_round(&self) -> bool {
        self.current + 1 == self.examples.len()
    }

    pub fn answers(&self) -> &[bool] {
        &self.answers
    }

    /// The guess recorded for the current round, if any.
    pub fn current_guess(&self) -> Option<bool> {
        self.answers.get(self.current).copied()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_answered(&self) -> bool {
        self.phase == RoundPhase::Answered
    }

    pub fn finished(&self) -> bool {
        self.finished
    }
}

/// Draws `n` examples from `pool` without replacement, in random order,
/// via a partial Fisher-Yates shuffle. Returns fewer than `n` only when
/// the pool itself is smaller.
pub fn sample_examples(
    pool: &[QuizExample],
    n: usize,
    mut rand: impl FnMut() -> f64,
) -> Vec<QuizExample> {
    let mut drawn: Vec<QuizExample> = pool.to_vec();
    let n = n.min(drawn.len());
    for i in 0..n {
        let remaining = drawn.len() - i;
        let offset = ((rand() * remaining as f64) as usize).min(remaining - 1);
        drawn.swap(i, i + offset);
    }
    drawn.truncate(n);
    drawn
}

#[cfg(test)]
mod tests {
    use crate::error::AnalyzeError;
    use crate::models::{AnalysisResult, AnalyzeResponse, Verdict};
    use crate::quiz::{sample_examples, QuizError, QuizExample, QuizSession, RoundPhase, ROUND_COUNT};
    use crate::validation::{validate_message, ValidationError, MAX_MESSAGE_LENGTH};

    fn example(text: &str, is_scam: bool) -> QuizExample {
        QuizExample::new(text, is_scam, 0.9)
    }

    fn pool() -> Vec<QuizExample> {
        vec![
            example("Your account will be closed in 24 hours unless you act now.", true),
            example("Hi, can you send me your bank details for a refund?", true),
            example("Please buy gift cards and send me the codes.", true),
            example("Hey, are we still on for lunch tomorrow?", false),
            example("Your package was delivered to the front door.", false),
            example("Reminder: dentist appointment on Thursday at 3pm.", false),
        ]
    }

    // Deterministic stand-in for Math.random.
    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(serde_json::from_str::<Verdict>("\"scam\"").unwrap(), Verdict::Scam);
        assert_eq!(serde_json::from_str::<Verdict>("\"safe\"").unwrap(), Verdict::Safe);
        assert_eq!(serde_json::from_str::<Verdict>("\"suspicious\"").unwrap(), Verdict::Suspicious);
        assert_eq!(serde_json::to_string(&Verdict::Scam).unwrap(), "\"scam\"");
        assert_eq!(Verdict::Suspicious.label_upper(), "SUSPICIOUS");
    }

    #[test]
    fn test_unknown_label_falls_back_to_error() {
        assert_eq!(serde_json::from_str::<Verdict>("\"phishy\"").unwrap(), Verdict::Error);
    }

    #[test]
    fn test_labeled_response_shape() {
        let body = r#"{"label": "scam", "confidence": 0.97}"#;
        let result: AnalysisResult = serde_json::from_str::<AnalyzeResponse>(body).unwrap().into();
        assert_eq!(result.verdict, Verdict::Scam);
        assert_eq!(result.confidence, 0.97);
    }

    #[test]
    fn test_ensemble_response_shape() {
        let body = r#"{
            "results": [
                {"model": "BERT", "label": 1, "confidence": 0.99},
                {"model": "XGBoost", "label": 0, "confidence": 0.61}
            ],
            "best": {"model": "BERT", "label": 1, "confidence": 0.99}
        }"#;
        let result: AnalysisResult = serde_json::from_str::<AnalyzeResponse>(body).unwrap().into();
        assert_eq!(result.verdict, Verdict::Scam);
        assert_eq!(result.confidence, 0.99);

        let safe = r#"{"best": {"label": 0, "confidence": 0.8}}"#;
        let result: AnalysisResult = serde_json::from_str::<AnalyzeResponse>(safe).unwrap().into();
        assert_eq!(result.verdict, Verdict::Safe);

        let unknown = r#"{"best": {"label": 7, "confidence": 0.5}}"#;
        let result: AnalysisResult = serde_json::from_str::<AnalyzeResponse>(unknown).unwrap().into();
        assert_eq!(result.verdict, Verdict::Error);
    }

    #[test]
    fn test_confidence_percent_formatting() {
        assert_eq!(AnalysisResult::new(Verdict::Scam, 0.99).confidence_percent(), "99.0%");
        assert_eq!(AnalysisResult::new(Verdict::Safe, 0.123).confidence_percent(), "12.3%");
        assert_eq!(AnalysisResult::error().confidence_percent(), "0.0%");
    }

    #[test]
    fn test_failure_collapses_to_error_result() {
        let errors = [
            AnalyzeError::Network("connection refused".into()),
            AnalyzeError::Status(500),
            AnalyzeError::Decode("expected value".into()),
        ];
        for err in errors {
            assert_eq!(err.as_result(), AnalysisResult::error());
        }
    }

    #[test]
    fn test_message_validation() {
        assert!(validate_message("Is this a scam?").is_ok());
        assert_eq!(validate_message(""), Err(ValidationError::EmptyMessage));
        assert_eq!(validate_message("   \n"), Err(ValidationError::EmptyMessage));
        let long = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        assert_eq!(validate_message(&long), Err(ValidationError::MessageTooLong));
    }

    #[test]
    fn test_pool_too_small() {
        let small = pool().into_iter().take(3).collect::<Vec<_>>();
        assert!(matches!(QuizSession::new(small), Err(QuizError::PoolTooSmall(3))));
        assert!(matches!(
            QuizSession::sample(&pool()[..2], fixed(0.0)),
            Err(QuizError::PoolTooSmall(2))
        ));
    }

    #[test]
    fn test_full_session_scoring() {
        let mut session = QuizSession::new(pool()).unwrap();
        // First three examples are scams, the last two of the round set are not.
        let guesses = [true, true, false, false, false];
        for (i, guess) in guesses.iter().enumerate() {
            assert_eq!(session.current_round(), i);
            assert_eq!(session.phase(), RoundPhase::Answering);
            session.answer(*guess).unwrap();
            session.next();
        }
        assert!(session.finished());
        assert_eq!(session.answers().len(), ROUND_COUNT);
        // Round 3 guessed "safe" on a scam example: 4 of 5 correct.
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn test_repeated_guess_is_ignored() {
        let mut session = QuizSession::new(pool()).unwrap();
        assert_eq!(session.answer(true), Some(true));
        assert_eq!(session.answer(true), None);
        assert_eq!(session.answer(false), None);
        assert_eq!(session.score(), 1);
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn test_next_requires_answer() {
        let mut session = QuizSession::new(pool()).unwrap();
        assert!(!session.next());
        assert_eq!(session.current_round(), 0);
        session.answer(true).unwrap();
        assert!(session.next());
        assert_eq!(session.current_round(), 1);
    }

    #[test]
    fn test_finished_session_is_inert() {
        let mut session = QuizSession::new(pool()).unwrap();
        for _ in 0..ROUND_COUNT {
            session.answer(false);
            session.next();
        }
        assert!(session.finished());
        assert_eq!(session.answer(true), None);
        assert!(!session.next());
    }

    #[test]
    fn test_restart_resets_state() {
        let mut session = QuizSession::sample(&pool(), fixed(0.0)).unwrap();
        session.answer(true).unwrap();
        session.next();

        // Restart is a freshly sampled session.
        let restarted = QuizSession::sample(&pool(), fixed(0.0)).unwrap();
        assert_eq!(restarted.score(), 0);
        assert!(restarted.answers().is_empty());
        assert_eq!(restarted.current_round(), 0);
        assert!(!restarted.finished());
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let mut seq = [0.83, 0.17, 0.64, 0.05, 0.99, 0.42].iter().cycle();
        let drawn = sample_examples(&pool(), ROUND_COUNT, move || *seq.next().unwrap());
        assert_eq!(drawn.len(), ROUND_COUNT);
        let mut texts: Vec<&str> = drawn.iter().map(|e| e.text.as_str()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), ROUND_COUNT);
    }

    #[test]
    fn test_sample_is_deterministic_given_rng() {
        let source = pool();
        // rand() == 0 keeps pool order.
        let drawn = sample_examples(&source, ROUND_COUNT, fixed(0.0));
        assert_eq!(drawn, source[..ROUND_COUNT].to_vec());
        // rand() just under 1 must stay in bounds.
        let drawn = sample_examples(&source, ROUND_COUNT, fixed(0.999_999));
        assert_eq!(drawn.len(), ROUND_COUNT);
    }

    #[test]
    fn test_current_guess_tracks_round() {
        let mut session = QuizSession::new(pool()).unwrap();
        assert_eq!(session.current_guess(), None);
        session.answer(false).unwrap();
        assert_eq!(session.current_guess(), Some(false));
        session.next();
        assert_eq!(session.current_guess(), None);
    }
}

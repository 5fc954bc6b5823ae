use shared::models::{RecentAnalysis, Verdict};
use shared::quiz::{sample_examples, QuizExample};

/// One-click example messages on the analyzer page.
pub const TRY_EXAMPLES: [&str; 5] = [
    "Your account will be closed in 24 hours unless you act now.",
    "Congratulations! You have won a $1,000 gift card. Click here to claim.",
    "Hi, can you send me your bank details for a refund?",
    "Please buy gift cards and send me the codes.",
    "This is the IRS. You owe money and must pay now.",
];

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [FaqEntry; 4] = [
    FaqEntry {
        question: "Is Scamalyzer free to use?",
        answer: "Yes, Scamalyzer is completely free for personal use. It is, in fact, a part of a Master thesis :)",
    },
    FaqEntry {
        question: "How accurate is Scamalyzer?",
        answer: "Scamalyzer uses AI to detect scams, but no tool is 100% accurate. Always use your best judgment.",
    },
    FaqEntry {
        question: "Can Scamalyzer detect all types of scams?",
        answer: "Scamalyzer is designed to spot common scam patterns, but new scams appear all the time. If in doubt, seek advice from trusted sources.",
    },
    FaqEntry {
        question: "Where can I learn more about staying safe online?",
        answer: "Visit our \"How to stay safe?\" page for tips and resources.",
    },
];

/// Hand-labeled pool feeding the quiz and the recent-analyses carousel.
/// Must stay larger than `shared::ROUND_COUNT`.
pub fn quiz_pool() -> Vec<QuizExample> {
    vec![
        QuizExample::new("Your account will be closed in 24 hours unless you act now.", true, 0.97),
        QuizExample::new("Congratulations! You have won a $1,000 gift card. Click here to claim.", true, 0.99),
        QuizExample::new("Hi, can you send me your bank details for a refund?", true, 0.93),
        QuizExample::new("Please buy gift cards and send me the codes.", true, 0.96),
        QuizExample::new("This is the IRS. You owe money and must pay now.", true, 0.98),
        QuizExample::new("You've won a free iPhone! Click here.", true, 0.99),
        QuizExample::new("We detected unusual sign-in activity. Confirm your password at secure-bank-login.com.", true, 0.95),
        QuizExample::new("Hey, are we still on for lunch tomorrow?", false, 0.91),
        QuizExample::new("Your package was delivered to the front door.", false, 0.88),
        QuizExample::new("Reminder: dentist appointment on Thursday at 3pm.", false, 0.94),
        QuizExample::new("Mom: call me when you get home.", false, 0.9),
        QuizExample::new("Your library books are due back next Friday.", false, 0.92),
        QuizExample::new("Meeting moved to 10:30, same room.", false, 0.89),
    ]
}

/// Past results shown in the carousel, drawn at random from the pool.
pub fn recent_analyses(rand: impl FnMut() -> f64, count: usize) -> Vec<RecentAnalysis> {
    sample_examples(&quiz_pool(), count, rand)
        .into_iter()
        .map(|example| RecentAnalysis {
            message: example.text,
            verdict: if example.is_scam { Verdict::Scam } else { Verdict::Safe },
            confidence: example.confidence,
        })
        .collect()
}

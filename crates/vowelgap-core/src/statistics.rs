//! Session statistics.

use serde::Serialize;

use crate::quiz::QuizSession;

/// Totals for a finished (or interrupted) session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionStats {
    pub score: u32,
    pub attempts: u32,
    /// Fraction of attempts answered correctly, in `0.0..=1.0`.
    pub accuracy: f64,
    /// Number of distinct words in the rotation.
    pub words: usize,
}

impl SessionStats {
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            score: session.score(),
            attempts: session.attempts(),
            accuracy: accuracy(session.score(), session.attempts()),
            words: session.len(),
        }
    }
}

/// `score / attempts`, or 0.0 when nothing has been attempted.
pub fn accuracy(score: u32, attempts: u32) -> f64 {
    if attempts == 0 {
        return 0.0;
    }
    (f64::from(score) / f64::from(attempts)).min(1.0)
}

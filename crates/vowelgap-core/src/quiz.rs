//! The quiz state machine.
//!
//! A [`QuizSession`] owns the shuffled records and the session counters.
//! It has no knowledge of any display; callers take a [`QuizView`] snapshot
//! after each transition and hand it to a render target.
//!
//! ```text
//! Ready ──advance──▶ Unanswered ──submit──▶ Answered ──advance──▶ Unanswered …
//! NoContent (empty list, terminal)
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::QuizError;
use crate::model::{CharKind, DisplayChar, Feedback, WordRecord, PLACEHOLDER};

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    /// The word list was empty. Terminal; every control stays disabled.
    NoContent,
    /// Records are loaded but no word has been shown yet.
    Ready,
    /// A word is shown and waiting for an answer.
    Unanswered,
    /// The shown word has been answered and revealed.
    Answered,
}

/// Session state for one run of the quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    records: Vec<WordRecord>,
    current_index: Option<usize>,
    score: u32,
    attempts: u32,
    is_answered: bool,
    feedback: Option<Feedback>,
}

impl QuizSession {
    /// Create a session over `records` in the given order, with no word shown.
    pub fn new(records: Vec<WordRecord>) -> Self {
        Self {
            records,
            current_index: None,
            score: 0,
            attempts: 0,
            is_answered: false,
            feedback: None,
        }
    }

    /// Shuffle `records` and show the first word.
    ///
    /// An empty list yields a session in [`QuizPhase::NoContent`].
    pub fn initialize<R: Rng + ?Sized>(mut records: Vec<WordRecord>, rng: &mut R) -> Self {
        records.shuffle(rng);
        let mut session = Self::new(records);
        if session.advance().is_err() {
            tracing::debug!("word list is empty, quiz has no content");
        }
        session
    }

    /// Show the next word, wrapping to the first after the last.
    pub fn advance(&mut self) -> Result<&WordRecord, QuizError> {
        if self.records.is_empty() {
            return Err(QuizError::NoContent);
        }

        let next = match self.current_index {
            Some(index) => (index + 1) % self.records.len(),
            None => 0,
        };
        self.current_index = Some(next);
        self.is_answered = false;
        self.feedback = None;

        tracing::debug!(index = next, "showing next word");
        Ok(&self.records[next])
    }

    /// Score a guess for the shown word.
    ///
    /// Returns `Ok(None)` without touching any counter if the word was
    /// already answered. The guess is lower-cased and compared literally
    /// with the hidden vowel, so an empty or multi-character guess is
    /// always wrong.
    pub fn submit_answer(&mut self, input: &str) -> Result<Option<&Feedback>, QuizError> {
        let Some(record) = self.current() else {
            return Err(if self.records.is_empty() {
                QuizError::NoContent
            } else {
                QuizError::NoWordShown
            });
        };
        if self.is_answered {
            return Ok(None);
        }

        let guess = input.to_lowercase();
        let correct_vowel = record.correct_vowel();
        let correct = {
            let mut chars = guess.chars();
            chars.next() == Some(correct_vowel) && chars.next().is_none()
        };
        let feedback = Feedback {
            correct,
            correct_vowel,
            word: record.word().to_string(),
            guess,
        };

        self.is_answered = true;
        self.attempts += 1;
        if correct {
            self.score += 1;
        }

        tracing::debug!(
            correct,
            score = self.score,
            attempts = self.attempts,
            "answer submitted"
        );
        let feedback: &Feedback = self.feedback.insert(feedback);
        Ok(Some(feedback))
    }

    pub fn phase(&self) -> QuizPhase {
        if self.records.is_empty() {
            QuizPhase::NoContent
        } else if self.current_index.is_none() {
            QuizPhase::Ready
        } else if self.is_answered {
            QuizPhase::Answered
        } else {
            QuizPhase::Unanswered
        }
    }

    /// The word currently shown, if any.
    pub fn current(&self) -> Option<&WordRecord> {
        self.current_index.map(|i| &self.records[i])
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_answered(&self) -> bool {
        self.is_answered
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Snapshot of everything a render target needs.
    pub fn view(&self) -> QuizView {
        let phase = self.phase();
        let display = match self.current() {
            Some(record) => display_chars(record, self.is_answered),
            None => Vec::new(),
        };

        QuizView {
            phase,
            display,
            feedback: self.feedback.clone(),
            score: self.score,
            attempts: self.attempts,
            can_submit: phase == QuizPhase::Unanswered,
            can_advance: phase == QuizPhase::Answered,
        }
    }
}

fn display_chars(record: &WordRecord, revealed: bool) -> Vec<DisplayChar> {
    record
        .display_word()
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if i != record.missing_vowel_index() {
                DisplayChar {
                    ch,
                    kind: CharKind::Plain,
                }
            } else if revealed {
                DisplayChar {
                    ch: record.correct_vowel(),
                    kind: CharKind::Revealed,
                }
            } else {
                DisplayChar {
                    ch: PLACEHOLDER,
                    kind: CharKind::Gap,
                }
            }
        })
        .collect()
}

/// What a render target shows after a transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizView {
    pub phase: QuizPhase,
    /// Characters of the shown word; empty when no word is shown.
    pub display: Vec<DisplayChar>,
    pub feedback: Option<Feedback>,
    pub score: u32,
    pub attempts: u32,
    /// Whether the answer input and submit control are enabled.
    pub can_submit: bool,
    /// Whether the advance control is enabled.
    pub can_advance: bool,
}

impl QuizView {
    /// The displayed word as plain text.
    pub fn display_text(&self) -> String {
        self.display.iter().map(|c| c.ch).collect()
    }
}

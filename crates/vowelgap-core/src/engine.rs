//! Quiz driver.
//!
//! Couples a [`QuizSession`] with a [`RenderTarget`] and turns user
//! commands into transitions, rendering once after each one.

use crate::error::QuizError;
use crate::model::Feedback;
use crate::quiz::QuizSession;
use crate::statistics::SessionStats;
use crate::traits::RenderTarget;

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Score a guess for the shown word.
    Submit(String),
    /// Move to the next word.
    Advance,
    /// Submit when unanswered, advance when answered.
    Enter(String),
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A guess was scored.
    Answered(Feedback),
    /// The word was already answered; nothing changed.
    Ignored,
    /// The next word is shown.
    Advanced,
}

/// Drives a session and keeps a render target in sync with it.
pub struct QuizDriver<T: RenderTarget> {
    session: QuizSession,
    target: T,
}

impl<T: RenderTarget> QuizDriver<T> {
    /// Take ownership of a session and render its current state.
    pub fn start(session: QuizSession, mut target: T) -> Self {
        target.show(&session.view());
        Self { session, target }
    }

    /// Apply one command.
    ///
    /// The target is rendered after every transition. Ignored submissions
    /// and errors leave both the session and the target untouched.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, QuizError> {
        let outcome = match command {
            Command::Submit(input) => self.submit_inner(&input)?,
            Command::Advance => {
                self.session.advance()?;
                Outcome::Advanced
            }
            Command::Enter(input) => {
                if self.session.is_answered() {
                    self.session.advance()?;
                    Outcome::Advanced
                } else {
                    self.submit_inner(&input)?
                }
            }
        };

        if outcome != Outcome::Ignored {
            self.target.show(&self.session.view());
        }
        Ok(outcome)
    }

    pub fn submit(&mut self, input: &str) -> Result<Outcome, QuizError> {
        self.apply(Command::Submit(input.to_string()))
    }

    pub fn advance(&mut self) -> Result<Outcome, QuizError> {
        self.apply(Command::Advance)
    }

    pub fn enter(&mut self, input: &str) -> Result<Outcome, QuizError> {
        self.apply(Command::Enter(input.to_string()))
    }

    fn submit_inner(&mut self, input: &str) -> Result<Outcome, QuizError> {
        Ok(match self.session.submit_answer(input)? {
            Some(feedback) => Outcome::Answered(feedback.clone()),
            None => Outcome::Ignored,
        })
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats::from_session(&self.session)
    }

    pub fn into_parts(self) -> (QuizSession, T) {
        (self.session, self.target)
    }
}

//! Terminal render target.

use std::io::{self, Write};

use vowelgap_core::model::CharKind;
use vowelgap_core::quiz::{QuizPhase, QuizView};
use vowelgap_core::traits::RenderTarget;

/// Prints each quiz view as a small text block.
///
/// The hidden vowel shows as `_`; once answered it is shown in brackets.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn render(&mut self, view: &QuizView) -> io::Result<()> {
        if view.phase == QuizPhase::NoContent {
            writeln!(self.out, "No words found in file.")?;
            return self.out.flush();
        }

        if let Some(feedback) = &view.feedback {
            writeln!(self.out, "{feedback}")?;
        }

        if !view.display.is_empty() {
            let word: String = view
                .display
                .iter()
                .map(|c| match c.kind {
                    CharKind::Revealed => format!("[{}]", c.ch),
                    _ => c.ch.to_string(),
                })
                .collect();
            writeln!(self.out, "Word: {word}")?;
        }

        writeln!(
            self.out,
            "Score: {}  Attempts: {}",
            view.score, view.attempts
        )?;

        if view.can_submit {
            writeln!(self.out, "Type the missing vowel (:next to skip, :quit to stop)")?;
        } else if view.can_advance {
            writeln!(self.out, "Press Enter for the next word")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderTarget for TerminalRenderer<W> {
    fn show(&mut self, view: &QuizView) {
        if let Err(e) = self.render(view) {
            tracing::warn!("failed to write to terminal: {e}");
        }
    }
}

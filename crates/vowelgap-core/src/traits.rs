//! Core trait definitions for word sources and render targets.
//!
//! `WordSource` is implemented by the `vowelgap-sources` crate; the CLI
//! provides the terminal `RenderTarget`.

use async_trait::async_trait;

use crate::error::LoadError;
use crate::quiz::QuizView;

// ---------------------------------------------------------------------------
// Word source trait
// ---------------------------------------------------------------------------

/// Somewhere a raw word list can be fetched from.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Human-readable location (URL or path), used in logs and messages.
    fn location(&self) -> &str;

    /// Fetch the raw word list text.
    async fn fetch_text(&self) -> Result<String, LoadError>;
}

// ---------------------------------------------------------------------------
// Render target trait
// ---------------------------------------------------------------------------

/// A surface that displays the quiz.
///
/// The quiz calls `show` after every transition with a full snapshot, so
/// implementations never need to track state of their own.
pub trait RenderTarget {
    fn show(&mut self, view: &QuizView);
}


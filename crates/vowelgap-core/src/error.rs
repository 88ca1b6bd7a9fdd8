//! Error types for loading word lists and driving a quiz session.
//!
//! Both kinds are terminal for a session: there is no retry path, the
//! front end shows the message and disables its controls.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching the raw word list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status} ({url})")]
    HttpStatus { url: String, status: u16 },

    /// The request never produced a response.
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The request timed out.
    #[error("request to {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    /// A local word file could not be read.
    #[error("failed to read word file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors returned by quiz session transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The word list parsed to zero records; the session is terminal.
    #[error("no words found in word list")]
    NoContent,

    /// An answer was submitted before any word was shown.
    #[error("no word is currently shown")]
    NoWordShown,
}

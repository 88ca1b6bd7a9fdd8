//! Core data model types for vowelgap.
//!
//! A [`WordRecord`] is one quiz item: a lowercase word with exactly one
//! vowel hidden behind a placeholder.

use std::fmt;

use serde::Serialize;

/// The fixed set of letters a gap can be cut from.
pub const VOWELS: [char; 10] = ['а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];

/// Glyph shown in place of the hidden vowel.
pub const PLACEHOLDER: char = '_';

/// Returns `true` if `c` belongs to the vowel set.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Character positions of every vowel in `word`.
pub fn vowel_positions(word: &str) -> Vec<usize> {
    word.chars()
        .enumerate()
        .filter(|(_, c)| is_vowel(*c))
        .map(|(i, _)| i)
        .collect()
}

/// A single quiz item.
///
/// Indices are character positions, not byte offsets. Records are built
/// once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordRecord {
    word: String,
    missing_vowel_index: usize,
    display_word: String,
}

impl WordRecord {
    /// Build a record hiding the character at `index`.
    ///
    /// The word is lower-cased first. Returns `None` if `index` does not
    /// point at a vowel.
    pub fn with_gap(word: &str, index: usize) -> Option<Self> {
        let word = word.to_lowercase();
        if !word.chars().nth(index).is_some_and(is_vowel) {
            return None;
        }

        let display_word = word
            .chars()
            .enumerate()
            .map(|(i, c)| if i == index { PLACEHOLDER } else { c })
            .collect();

        Some(Self {
            word,
            missing_vowel_index: index,
            display_word,
        })
    }

    /// The full, correctly spelled word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Character position of the hidden vowel.
    pub fn missing_vowel_index(&self) -> usize {
        self.missing_vowel_index
    }

    /// The word with the hidden vowel replaced by [`PLACEHOLDER`].
    pub fn display_word(&self) -> &str {
        &self.display_word
    }

    /// The vowel hidden behind the placeholder.
    pub fn correct_vowel(&self) -> char {
        self.word
            .chars()
            .nth(self.missing_vowel_index)
            .unwrap_or(PLACEHOLDER)
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_word)
    }
}

/// Output of parsing a raw word list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WordList {
    /// One record per usable word form, in input order.
    pub records: Vec<WordRecord>,
    /// Word forms dropped because they contain no vowel.
    pub skipped: Vec<String>,
}

impl WordList {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// How a character of the displayed word should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharKind {
    /// An ordinary visible letter.
    Plain,
    /// The hidden vowel, still unanswered.
    Gap,
    /// The hidden vowel, revealed after an answer.
    Revealed,
}

/// One character of the displayed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayChar {
    pub ch: char,
    pub kind: CharKind,
}

/// Outcome of a scored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub correct: bool,
    pub correct_vowel: char,
    pub word: String,
    /// The lower-cased guess as it was compared.
    pub guess: String,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.correct {
            return write!(f, "Correct!");
        }
        write!(f, "Incorrect. The correct word is: {}", self.word)?;
        if !self.guess.is_empty() {
            write!(f, " (you entered: {})", self.guess)?;
        }
        Ok(())
    }
}

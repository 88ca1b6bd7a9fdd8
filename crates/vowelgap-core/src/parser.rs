//! Word list parser.
//!
//! Turns raw text into quiz records. One line holds one or more
//! comma-separated word forms; every form becomes its own record.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{vowel_positions, WordList, WordRecord};

/// Parse a raw word list, hiding one randomly chosen vowel per form.
///
/// Forms without a vowel are reported in [`WordList::skipped`]. Record order
/// follows input order.
pub fn parse_word_list<R: Rng + ?Sized>(text: &str, rng: &mut R) -> WordList {
    let mut list = WordList::default();

    let forms = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|form| !form.is_empty());

    for form in forms {
        match record_for(form, rng) {
            Some(record) => list.records.push(record),
            None => {
                tracing::warn!("skipping {form:?}: no vowel to hide");
                list.skipped.push(form.to_string());
            }
        }
    }

    tracing::debug!(
        records = list.records.len(),
        skipped = list.skipped.len(),
        "parsed word list"
    );
    list
}

/// Build a record for a single word form, or `None` if it has no vowel.
pub fn record_for<R: Rng + ?Sized>(form: &str, rng: &mut R) -> Option<WordRecord> {
    let word = form.to_lowercase();
    let index = *vowel_positions(&word).choose(rng)?;
    WordRecord::with_gap(&word, index)
}

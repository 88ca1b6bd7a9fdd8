//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;

use vowelgap_core::loader::load_words;
use vowelgap_core::model::WordList;
use vowelgap_sources::config::{create_source, load_config_from, SourceConfig, VowelgapConfig};

pub mod check;
pub mod init;
pub mod play;

/// Load the config, letting a `--source` flag override its source.
fn resolve_config(source: Option<&str>, config_path: Option<&Path>) -> Result<VowelgapConfig> {
    let mut config = load_config_from(config_path)?;
    if let Some(location) = source {
        config.source = SourceConfig::from_location(location);
    }
    Ok(config)
}

/// Fetch and parse the configured word list.
async fn fetch_word_list<R: Rng + ?Sized>(
    config: &VowelgapConfig,
    rng: &mut R,
) -> Result<WordList> {
    let source = create_source(&config.source, config.timeout_secs)?;
    load_words(source.as_ref(), rng)
        .await
        .with_context(|| format!("could not load word list from {}", source.location()))
}

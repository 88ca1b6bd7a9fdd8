//! The `vowelgap check` command.

use std::path::PathBuf;

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use vowelgap_core::error::QuizError;
use vowelgap_core::model::WordRecord;

#[derive(Serialize)]
struct CheckReport<'a> {
    source: String,
    words: usize,
    skipped: &'a [String],
    records: &'a [WordRecord],
}

pub async fn execute(
    source: Option<String>,
    config_path: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let config = super::resolve_config(source.as_deref(), config_path.as_deref())?;
    let location = match &config.source {
        vowelgap_sources::SourceConfig::Http { url } => url.clone(),
        vowelgap_sources::SourceConfig::File { path } => path.display().to_string(),
    };

    // Gap positions do not matter here; a fixed seed keeps the output stable.
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed.unwrap_or(0));
    let words = super::fetch_word_list(&config, &mut rng).await?;

    match format.as_str() {
        "json" => {
            let report = CheckReport {
                source: location,
                words: words.len(),
                skipped: &words.skipped,
                records: &words.records,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!("Word list: {location} ({} words)", words.len());
            for form in &words.skipped {
                println!("  [{form}] WARNING: no vowel to hide, skipped");
            }

            if words.skipped.is_empty() {
                println!("All words usable.");
            } else {
                println!("\n{} word(s) skipped.", words.skipped.len());
            }
        }
    }

    if words.is_empty() {
        return Err(QuizError::NoContent.into());
    }

    Ok(())
}

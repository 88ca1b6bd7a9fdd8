//! The `vowelgap play` command.

use std::path::PathBuf;

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tokio::io::{AsyncBufReadExt, BufReader};

use vowelgap_core::engine::QuizDriver;
use vowelgap_core::error::QuizError;
use vowelgap_core::quiz::{QuizPhase, QuizSession};
use vowelgap_core::statistics::SessionStats;

use crate::render::TerminalRenderer;

pub async fn execute(
    source: Option<String>,
    seed: Option<u64>,
    rounds: Option<u32>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    if let Some(rounds) = rounds {
        anyhow::ensure!(rounds >= 1, "rounds must be at least 1");
    }

    let config = super::resolve_config(source.as_deref(), config_path.as_deref())?;

    let seed = seed
        .or(config.seed)
        .unwrap_or_else(|| rand::thread_rng().gen());
    tracing::info!(seed, "starting quiz (pass --seed {seed} to replay)");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let words = super::fetch_word_list(&config, &mut rng).await?;
    let session = QuizSession::initialize(words.records, &mut rng);
    let mut driver = QuizDriver::start(session, TerminalRenderer::new(std::io::stdout()));

    if driver.session().phase() == QuizPhase::NoContent {
        return Err(QuizError::NoContent.into());
    }

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if stdin.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and are graded as a wrong guess.
        let line = String::from_utf8_lossy(&buf);
        match line.trim() {
            ":quit" | ":q" => break,
            ":next" | ":n" => {
                driver.advance()?;
            }
            input => {
                driver.enter(input)?;
            }
        }

        let session = driver.session();
        if rounds.is_some_and(|max| session.is_answered() && session.attempts() >= max) {
            break;
        }
    }

    print_summary(&driver.stats());
    Ok(())
}

fn print_summary(stats: &SessionStats) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Score", "Attempts", "Accuracy", "Words"]);
    table.add_row(vec![
        Cell::new(stats.score),
        Cell::new(stats.attempts),
        Cell::new(format!("{:.1}%", stats.accuracy * 100.0)),
        Cell::new(stats.words),
    ]);

    println!("{table}");
}

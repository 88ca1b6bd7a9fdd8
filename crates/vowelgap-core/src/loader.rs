//! Word loader: fetch a raw list from a source and parse it.

use rand::Rng;
use tracing::instrument;

use crate::error::LoadError;
use crate::model::WordList;
use crate::parser::parse_word_list;
use crate::traits::WordSource;

/// Fetch the word list from `source` and turn it into records.
///
/// A list that parses to zero records is not an error here; the quiz
/// session reports it as [`crate::QuizError::NoContent`].
#[instrument(skip_all, fields(source = %source.location()))]
pub async fn load_words<R: Rng + ?Sized>(
    source: &dyn WordSource,
    rng: &mut R,
) -> Result<WordList, LoadError> {
    let text = source.fetch_text().await?;
    tracing::debug!(bytes = text.len(), "fetched word list");
    Ok(parse_word_list(&text, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct FixedSource(Result<&'static str, u16>);

    #[async_trait]
    impl WordSource for FixedSource {
        fn location(&self) -> &str {
            "memory://test"
        }

        async fn fetch_text(&self) -> Result<String, LoadError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(LoadError::HttpStatus {
                    url: self.location().to_string(),
                    status,
                }),
            }
        }
    }

    #[tokio::test]
    async fn loads_and_parses() {
        let source = FixedSource(Ok("корова\nпривет, приветик\nбрр"));
        let list = load_words(&source, &mut ChaCha8Rng::seed_from_u64(1))
            .await
            .unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.skipped, vec!["брр"]);
    }

    #[tokio::test]
    async fn empty_text_is_an_empty_list() {
        let source = FixedSource(Ok(""));
        let list = load_words(&source, &mut ChaCha8Rng::seed_from_u64(1))
            .await
            .unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let source = FixedSource(Err(404));
        let err = load_words(&source, &mut ChaCha8Rng::seed_from_u64(1))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::HttpStatus { status: 404, .. }));
        assert!(err.to_string().contains("404"));
    }
}

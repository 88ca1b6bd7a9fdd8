//! Configuration and source factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use vowelgap_core::traits::WordSource;

use crate::file::FileSource;
use crate::http::{HttpSource, DEFAULT_TIMEOUT_SECS};

/// Where the word list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Http { url: String },
    File { path: PathBuf },
}

impl SourceConfig {
    /// Interpret a location string: `http://` and `https://` URLs are fetched
    /// over the network, anything else is a file path.
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            SourceConfig::Http {
                url: location.to_string(),
            }
        } else {
            SourceConfig::File {
                path: PathBuf::from(location),
            }
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::File {
            path: PathBuf::from("spelling.txt"),
        }
    }
}

/// Top-level vowelgap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VowelgapConfig {
    /// Word list location.
    #[serde(default)]
    pub source: SourceConfig,
    /// Fixed RNG seed for reproducible gaps and order.
    #[serde(default)]
    pub seed: Option<u64>,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for VowelgapConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            seed: None,
            timeout_secs: default_timeout(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied as-is and never scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_source_config(config: &SourceConfig) -> SourceConfig {
    match config {
        SourceConfig::Http { url } => SourceConfig::Http {
            url: resolve_env_vars(url),
        },
        SourceConfig::File { path } => SourceConfig::File {
            path: PathBuf::from(resolve_env_vars(&path.to_string_lossy())),
        },
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `vowelgap.toml` in the current directory
/// 2. `~/.config/vowelgap/config.toml`
///
/// Environment variable override: `VOWELGAP_SOURCE`.
pub fn load_config_from(path: Option<&Path>) -> Result<VowelgapConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("vowelgap.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => VowelgapConfig::default(),
    };

    if let Ok(location) = std::env::var("VOWELGAP_SOURCE") {
        if !location.trim().is_empty() {
            config.source = SourceConfig::from_location(&location);
        }
    }

    config.source = resolve_source_config(&config.source);
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<VowelgapConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("vowelgap"))
}

/// Create a word source from its configuration.
pub fn create_source(config: &SourceConfig, timeout_secs: u64) -> Result<Box<dyn WordSource>> {
    match config {
        SourceConfig::Http { url } => {
            let source = HttpSource::new(url, timeout_secs)
                .with_context(|| format!("failed to build HTTP client for {url}"))?;
            Ok(Box::new(source))
        }
        SourceConfig::File { path } => Ok(Box::new(FileSource::new(path))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_VOWELGAP_TEST_VAR", "words");
        assert_eq!(resolve_env_vars("${_VOWELGAP_TEST_VAR}"), "words");
        assert_eq!(
            resolve_env_vars("/srv/${_VOWELGAP_TEST_VAR}/spelling.txt"),
            "/srv/words/spelling.txt"
        );
        std::env::remove_var("_VOWELGAP_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_rescan_values() {
        std::env::set_var("_VOWELGAP_SELF_REF", "${_VOWELGAP_SELF_REF}");
        assert_eq!(
            resolve_env_vars("${_VOWELGAP_SELF_REF}/spelling.txt"),
            "${_VOWELGAP_SELF_REF}/spelling.txt"
        );
        std::env::remove_var("_VOWELGAP_SELF_REF");
    }

    #[test]
    fn resolve_env_vars_multiple_and_missing() {
        std::env::set_var("_VOWELGAP_HOST", "example.com");
        assert_eq!(
            resolve_env_vars("https://${_VOWELGAP_HOST}/${_VOWELGAP_UNSET_VAR}w.txt"),
            "https://example.com/w.txt"
        );
        std::env::remove_var("_VOWELGAP_HOST");
    }

    #[test]
    fn resolve_unterminated_reference_is_left_alone() {
        assert_eq!(resolve_env_vars("${OPEN"), "${OPEN");
    }

    #[test]
    fn default_config() {
        let config = VowelgapConfig::default();
        assert_eq!(config.source, SourceConfig::File { path: "spelling.txt".into() });
        assert_eq!(config.timeout_secs, 30);
        assert!(config.seed.is_none());
    }

    #[test]
    fn parse_http_source() {
        let toml_str = r#"
seed = 42
timeout_secs = 5

[source]
type = "http"
url = "https://example.com/spelling.txt"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.timeout_secs, 5);
        assert!(matches!(config.source, SourceConfig::Http { ref url } if url.ends_with("spelling.txt")));
    }

    #[test]
    fn parse_file_source_with_defaults() {
        let config = parse_config("[source]\ntype = \"file\"\npath = \"words.txt\"\n").unwrap();
        assert_eq!(config.source, SourceConfig::File { path: "words.txt".into() });
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn parse_rejects_unknown_source_type() {
        assert!(parse_config("[source]\ntype = \"ftp\"\nurl = \"x\"\n").is_err());
    }

    #[test]
    fn location_detection() {
        assert!(matches!(
            SourceConfig::from_location("https://example.com/w.txt"),
            SourceConfig::Http { .. }
        ));
        assert!(matches!(
            SourceConfig::from_location("http://localhost:8080/w.txt"),
            SourceConfig::Http { .. }
        ));
        assert_eq!(
            SourceConfig::from_location(" ./w.txt "),
            SourceConfig::File { path: "./w.txt".into() }
        );
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vowelgap.toml");
        std::fs::write(&path, "seed = 7\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn source_env_var_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vowelgap.toml");
        std::fs::write(&path, "[source]\ntype = \"file\"\npath = \"words.txt\"\n").unwrap();

        std::env::set_var("VOWELGAP_SOURCE", "https://example.com/spelling.txt");
        let http = load_config_from(Some(&path));
        std::env::set_var("VOWELGAP_SOURCE", "/srv/other.txt");
        let file = load_config_from(Some(&path));
        std::env::remove_var("VOWELGAP_SOURCE");

        assert_eq!(
            http.unwrap().source,
            SourceConfig::Http { url: "https://example.com/spelling.txt".into() }
        );
        assert_eq!(
            file.unwrap().source,
            SourceConfig::File { path: "/srv/other.txt".into() }
        );
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let err = load_config_from(Some(Path::new("/nonexistent/vowelgap.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn create_sources() {
        let http = create_source(&SourceConfig::from_location("http://localhost/w.txt"), 5).unwrap();
        assert_eq!(http.location(), "http://localhost/w.txt");

        let file = create_source(&SourceConfig::default(), 5).unwrap();
        assert_eq!(file.location(), "spelling.txt");
    }
}

//! vowelgap-sources — Word list sources and configuration.
//!
//! Implements the `WordSource` trait for HTTP, local files, and in-memory
//! text, and loads the `vowelgap.toml` configuration that selects one.

pub mod config;
pub mod file;
pub mod http;
pub mod mock;

pub use config::{create_source, load_config_from, SourceConfig, VowelgapConfig};
pub use file::FileSource;
pub use http::HttpSource;
pub use mock::StaticSource;

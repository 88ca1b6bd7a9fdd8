//! The `vowelgap init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create vowelgap.toml
    if std::path::Path::new("vowelgap.toml").exists() {
        println!("vowelgap.toml already exists, skipping.");
    } else {
        std::fs::write("vowelgap.toml", SAMPLE_CONFIG)?;
        println!("Created vowelgap.toml");
    }

    // Create starter word list
    if std::path::Path::new("spelling.txt").exists() {
        println!("spelling.txt already exists, skipping.");
    } else {
        std::fs::write("spelling.txt", SAMPLE_WORDS)?;
        println!("Created spelling.txt");
    }

    println!("\nNext steps:");
    println!("  1. Add your own words to spelling.txt (comma-separated forms per line)");
    println!("  2. Run: vowelgap check");
    println!("  3. Run: vowelgap play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# vowelgap configuration

# Fixed seed for reproducible gaps and word order (optional)
# seed = 42

timeout_secs = 30

[source]
type = "file"
path = "spelling.txt"

# Or fetch the list over HTTP:
# [source]
# type = "http"
# url = "${VOWELGAP_BASE_URL}/spelling.txt"
"#;

const SAMPLE_WORDS: &str = "корова
молоко
привет, приветик
дорога, дороги
берёза
карандаш
собака, собаки
";

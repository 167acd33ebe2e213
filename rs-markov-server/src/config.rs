use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use rs_markov_core::model::{DEFAULT_SENTENCE_WORDS, MarkovConfig};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "RS_MARKOV_CONFIG";

/// Configuration file used when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "rs-markov.toml";

/// Default upper bound on `words` per request.
pub const DEFAULT_MAX_WORDS: usize = 1_000;

/// Top-level server configuration.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,

	/// Text file the model is trained on at startup.
	pub corpus: PathBuf,

	/// Sentence length when the request does not give one.
	pub default_words: usize,

	/// Longest sentence a request may ask for.
	pub max_words: usize,

	/// Tracing filter directive, `RUST_LOG` takes precedence.
	pub log_level: String,

	/// Origins allowed to call the API cross-site.
	pub allowed_origins: Vec<String>,

	/// Model construction settings.
	pub markov: MarkovConfig,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			corpus: PathBuf::from("./data/corpus.txt"),
			default_words: DEFAULT_SENTENCE_WORDS,
			max_words: DEFAULT_MAX_WORDS,
			log_level: "info".to_owned(),
			allowed_origins: Vec::new(),
			markov: MarkovConfig::default(),
		}
	}
}

impl ServerConfig {
	/// Resolves the configuration path from `CONFIG_ENV`.
	pub fn path() -> PathBuf {
		std::env::var_os(CONFIG_ENV)
			.map(PathBuf::from)
			.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
	}

	/// Loads the configuration file, or `None` if it does not exist.
	///
	/// # Errors
	/// Returns an error if the file exists but cannot be read or parsed.
	pub fn load(path: &Path) -> Result<Option<Self>> {
		if !path.exists() {
			return Ok(None);
		}
		let text = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read config {}", path.display()))?;
		let config = Self::parse(&text)
			.with_context(|| format!("failed to parse config {}", path.display()))?;
		Ok(Some(config))
	}

	fn parse(text: &str) -> Result<Self> {
		let config: Self = toml::from_str(text)?;
		if config.default_words == 0 {
			anyhow::bail!("default_words must be >= 1");
		}
		if config.max_words < config.default_words {
			anyhow::bail!(
				"max_words ({}) must be >= default_words ({})",
				config.max_words,
				config.default_words
			);
		}
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rs_markov_core::histogram::HistogramKind;

	#[test]
	fn empty_file_uses_defaults() {
		assert_eq!(ServerConfig::parse("").unwrap(), ServerConfig::default());
	}

	#[test]
	fn parses_every_key() {
		let text = r#"
			host = "0.0.0.0"
			port = 8080
			corpus = "texts/dracula.txt"
			default_words = 15
			max_words = 200
			log_level = "debug"
			allowed_origins = ["http://localhost:3000"]

			[markov]
			buckets = 1024
			histogram = "linear"
		"#;
		let config = ServerConfig::parse(text).unwrap();
		assert_eq!(config.host, "0.0.0.0");
		assert_eq!(config.port, 8080);
		assert_eq!(config.corpus, PathBuf::from("texts/dracula.txt"));
		assert_eq!(config.default_words, 15);
		assert_eq!(config.max_words, 200);
		assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
		assert_eq!(config.markov, MarkovConfig { buckets: 1024, histogram: HistogramKind::Linear });
	}

	#[test]
	fn partial_markov_table_keeps_defaults() {
		let config = ServerConfig::parse("[markov]\nhistogram = \"linear\"").unwrap();
		assert_eq!(config.markov.buckets, MarkovConfig::default().buckets);
		assert_eq!(config.markov.histogram, HistogramKind::Linear);
	}

	#[test]
	fn unknown_keys_rejected() {
		assert!(ServerConfig::parse("colour = \"blue\"").is_err());
		assert!(ServerConfig::parse("[markov]\norder = 2").is_err());
	}

	#[test]
	fn zero_default_words_rejected() {
		assert!(ServerConfig::parse("default_words = 0").is_err());
	}

	#[test]
	fn max_words_below_default_rejected() {
		assert!(ServerConfig::parse("default_words = 20\nmax_words = 10").is_err());
		assert_eq!(ServerConfig::parse("max_words = 10").unwrap().max_words, 10);
	}

	#[test]
	fn missing_file_is_none() {
		let path = Path::new("/nonexistent/rs-markov.toml");
		assert!(ServerConfig::load(path).unwrap().is_none());
	}
}

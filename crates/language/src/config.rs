//! Registry configuration loaded from JSON.
//!
//! ```json
//! { "aliases": { "markdown": ["md", "mkd"], "javascript": "js" } }
//! ```
//!
//! Keys are alias targets; values are one alias or an ordered list. Entries
//! are applied in file order by [`crate::Registry::apply_config`].

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use lumen_syntax::OneOrMany;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a registry configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("failed to read registry config {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("malformed registry config: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Declarative alias table for a [`crate::Registry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
	/// Alias target -> alias name(s).
	#[serde(default)]
	pub aliases: IndexMap<String, OneOrMany<String>>,
}

impl RegistryConfig {
	/// Parses a configuration from a JSON string.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Reads and parses a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json(&content)
	}

	/// Adds aliases for `target`, appending to any already configured.
	pub fn with_aliases(mut self, target: impl Into<String>, aliases: impl Into<OneOrMany<String>>) -> Self {
		let aliases: OneOrMany<String> = aliases.into();
		let entry = self
			.aliases
			.entry(target.into())
			.or_insert_with(|| OneOrMany::Many(Vec::new()));
		let mut merged = std::mem::replace(entry, OneOrMany::Many(Vec::new())).into_vec();
		merged.extend(aliases);
		*entry = OneOrMany::Many(merged);
		self
	}
}

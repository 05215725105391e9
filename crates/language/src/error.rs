//! Error type shared by the registry and highlight entry points.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by registry mutation, name resolution and highlighting.
///
/// Validation failures are reported before any mutation takes place, so a
/// registry is unchanged after any `Err` return.
#[derive(Error, Debug)]
pub enum Error {
	/// A required argument is empty or malformed.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// The name does not resolve to a registered grammar.
	#[error("Unknown language: `{0}` is not registered")]
	UnknownLanguage(String),

	/// An alias targets a language that is not registered.
	#[error("cannot alias `{0}`: language is not registered")]
	NotFound(String),

	/// Alias cycle, alias shadowing a canonical name, or similar table damage.
	#[error("configuration error: {0}")]
	Configuration(String),

	/// The tokenizer failed on a resolved grammar.
	#[error("failed to tokenize `{language}`: {source}")]
	Tokenization {
		language: String,
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},

	#[error(transparent)]
	Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

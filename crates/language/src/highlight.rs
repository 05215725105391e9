//! Highlight orchestration.
//!
//! `highlight(value, name)` resolves `name` through the registry, tokenizes
//! `value` with the resolved grammar and compiles the token stream into a
//! node tree.

use std::sync::Arc;

use lumen_syntax::{Node, OneOrMany, compile};
use tracing::trace;

use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::grammar::GrammarDefinition;
use crate::registry::Registry;
use crate::tokenizer::Tokenizer;

/// Highlights `value` as `language` using `registry` and `tokenizer`.
///
/// The language is resolved before anything else, so an unknown name fails
/// even for empty input. Empty input then short-circuits to an empty tree
/// without invoking the tokenizer.
pub fn highlight<T: Tokenizer>(
	registry: &Registry<T::Grammar>,
	tokenizer: &T,
	value: &str,
	language: &str,
) -> Result<Vec<Node>> {
	let resolved = registry.resolve(language)?;
	if value.is_empty() {
		return Ok(Vec::new());
	}

	let tokens = tokenizer
		.tokenize(value, resolved.grammar)
		.map_err(|source| Error::Tokenization {
			language: resolved.name.to_string(),
			source: Box::new(source),
		})?;

	trace!(
		language = resolved.name,
		requested = language,
		bytes = value.len(),
		tokens = tokens.len(),
		"highlighted"
	);
	Ok(compile(tokens))
}

/// A tokenizer paired with the registry it resolves languages from.
pub struct Highlighter<T: Tokenizer> {
	registry: Registry<T::Grammar>,
	tokenizer: T,
}

impl<T: Tokenizer + Clone> Clone for Highlighter<T> {
	fn clone(&self) -> Self {
		Self {
			registry: self.registry.clone(),
			tokenizer: self.tokenizer.clone(),
		}
	}
}

impl<T: Tokenizer + Default> Default for Highlighter<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: Tokenizer + std::fmt::Debug> std::fmt::Debug for Highlighter<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Highlighter")
			.field("registry", &self.registry)
			.field("tokenizer", &self.tokenizer)
			.finish()
	}
}

impl<T: Tokenizer> Highlighter<T> {
	/// Creates a highlighter with an empty registry.
	pub fn new(tokenizer: T) -> Self {
		Self::with_registry(tokenizer, Registry::new())
	}

	pub fn with_registry(tokenizer: T, registry: Registry<T::Grammar>) -> Self {
		Self { registry, tokenizer }
	}

	/// Highlights `value` as `language`. See [`highlight`].
	pub fn highlight(&self, value: &str, language: &str) -> Result<Vec<Node>> {
		highlight(&self.registry, &self.tokenizer, value, language)
	}

	pub fn register<D: GrammarDefinition<T::Grammar>>(&mut self, definition: D) -> Result<Vec<String>> {
		self.registry.register(definition)
	}

	pub fn unregister(&mut self, name: &str) -> Option<Arc<T::Grammar>> {
		self.registry.unregister(name)
	}

	pub fn registered(&self, name: &str) -> bool {
		self.registry.registered(name)
	}

	pub fn alias(&mut self, target: &str, aliases: impl Into<OneOrMany<String>>) -> Result<()> {
		self.registry.alias(target, aliases)
	}

	pub fn alias_many<I, N, A>(&mut self, mapping: I) -> Result<()>
	where
		I: IntoIterator<Item = (N, A)>,
		N: AsRef<str>,
		A: Into<OneOrMany<String>>,
	{
		self.registry.alias_many(mapping)
	}

	pub fn unalias(&mut self, alias: &str) -> bool {
		self.registry.unalias(alias)
	}

	pub fn apply_config(&mut self, config: &RegistryConfig) -> Result<()> {
		self.registry.apply_config(config)
	}

	pub fn list_languages(&self) -> Vec<String> {
		self.registry.list_languages()
	}

	pub fn registry(&self) -> &Registry<T::Grammar> {
		&self.registry
	}

	pub fn registry_mut(&mut self) -> &mut Registry<T::Grammar> {
		&mut self.registry
	}

	pub fn tokenizer(&self) -> &T {
		&self.tokenizer
	}

	pub fn into_parts(self) -> (Registry<T::Grammar>, T) {
		(self.registry, self.tokenizer)
	}
}

//! Highlighter shared across threads.
//!
//! # Concurrency
//!
//! - **Reads:** wait-free. Each call loads the current registry snapshot and
//!   works on it for its whole duration.
//! - **Writes:** serialized by a writer lock. A writer clones the current
//!   registry, mutates the clone and publishes it with a single atomic store.
//!   A failed mutation publishes nothing.

use std::sync::Arc;

use arc_swap::ArcSwap;
use lumen_syntax::{Node, OneOrMany};
use parking_lot::Mutex;

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::grammar::GrammarDefinition;
use crate::highlight::highlight;
use crate::registry::Registry;
use crate::tokenizer::Tokenizer;

/// Copy-on-write registry paired with a tokenizer.
pub struct SharedHighlighter<T: Tokenizer> {
	snap: ArcSwap<Registry<T::Grammar>>,
	writer: Mutex<()>,
	tokenizer: T,
}

impl<T: Tokenizer + Default> Default for SharedHighlighter<T> {
	fn default() -> Self {
		Self::new(T::default(), Registry::new())
	}
}

impl<T: Tokenizer> SharedHighlighter<T> {
	pub fn new(tokenizer: T, registry: Registry<T::Grammar>) -> Self {
		Self {
			snap: ArcSwap::from_pointee(registry),
			writer: Mutex::new(()),
			tokenizer,
		}
	}

	/// Current registry snapshot. Later writes do not affect it.
	pub fn snapshot(&self) -> Arc<Registry<T::Grammar>> {
		self.snap.load_full()
	}

	pub fn highlight(&self, value: &str, language: &str) -> Result<Vec<Node>> {
		let registry = self.snap.load_full();
		highlight(registry.as_ref(), &self.tokenizer, value, language)
	}

	pub fn registered(&self, name: &str) -> bool {
		self.snap.load().registered(name)
	}

	pub fn list_languages(&self) -> Vec<String> {
		self.snap.load().list_languages()
	}

	pub fn register<D: GrammarDefinition<T::Grammar>>(&self, definition: D) -> Result<Vec<String>> {
		self.update(|registry| registry.register(definition))
	}

	pub fn unregister(&self, name: &str) -> Option<Arc<T::Grammar>> {
		self.update(|registry| Ok(registry.unregister(name))).ok().flatten()
	}

	pub fn alias(&self, target: &str, aliases: impl Into<OneOrMany<String>>) -> Result<()> {
		self.update(|registry| registry.alias(target, aliases))
	}

	pub fn alias_many<I, N, A>(&self, mapping: I) -> Result<()>
	where
		I: IntoIterator<Item = (N, A)>,
		N: AsRef<str>,
		A: Into<OneOrMany<String>>,
	{
		self.update(|registry| registry.alias_many(mapping))
	}

	pub fn unalias(&self, alias: &str) -> bool {
		self.update(|registry| Ok(registry.unalias(alias))).unwrap_or(false)
	}

	pub fn apply_config(&self, config: &RegistryConfig) -> Result<()> {
		self.update(|registry| registry.apply_config(config))
	}

	/// Runs `mutate` on a private copy of the registry and publishes it on success.
	pub fn update<R>(&self, mutate: impl FnOnce(&mut Registry<T::Grammar>) -> Result<R>) -> Result<R> {
		let _guard = self.writer.lock();
		let mut next: Registry<T::Grammar> = (**self.snap.load()).clone();
		let out = mutate(&mut next)?;
		self.snap.store(Arc::new(next));
		Ok(out)
	}

	pub fn tokenizer(&self) -> &T {
		&self.tokenizer
	}
}

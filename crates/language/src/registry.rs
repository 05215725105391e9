//! Per-instance language registry.
//!
//! # Role
//!
//! Owns the `name -> grammar` table and the [`AliasTable`]. Every operation
//! works on this instance only; two registries never observe each other's
//! registrations.
//!
//! # Invariants
//!
//! - Mutations validate first and commit last. Any `Err` leaves both tables
//!   exactly as they were.
//! - Re-registering a canonical name replaces its grammar (last write wins).
//! - Alias names never collide with canonical names: aliasing onto a canonical
//!   name is rejected, and registering a grammar under an alias name drops the
//!   alias.
//! - Clones are structurally independent. Grammars are shared immutably.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;
use tracing::debug;

use crate::alias::AliasTable;
use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::grammar::{GrammarDefinition, GrammarTable};
use lumen_syntax::OneOrMany;

/// A canonical language resolved from a requested name.
#[derive(Debug)]
pub struct Resolved<'a, G> {
	/// Canonical name the request resolved to.
	pub name: &'a str,
	pub grammar: &'a Arc<G>,
}

impl<G> Clone for Resolved<'_, G> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<G> Copy for Resolved<'_, G> {}

/// Grammar and alias tables for one highlighting context.
pub struct Registry<G> {
	grammars: HashMap<String, Arc<G>>,
	aliases: AliasTable,
}

impl<G> Default for Registry<G> {
	fn default() -> Self {
		Self {
			grammars: HashMap::default(),
			aliases: AliasTable::new(),
		}
	}
}

impl<G> Clone for Registry<G> {
	fn clone(&self) -> Self {
		Self {
			grammars: self.grammars.clone(),
			aliases: self.aliases.clone(),
		}
	}
}

impl<G> fmt::Debug for Registry<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut languages = self.list_languages();
		languages.sort_unstable();
		f.debug_struct("Registry")
			.field("languages", &languages)
			.field("aliases", &self.aliases.len())
			.finish()
	}
}

impl<G> Registry<G> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Applies `definition` and commits the languages it declares.
	///
	/// Returns the declared names in declaration order. Fails with
	/// [`Error::InvalidArgument`] when the definition declares nothing or
	/// declares an empty name.
	pub fn register<D>(&mut self, definition: D) -> Result<Vec<String>>
	where
		D: GrammarDefinition<G>,
	{
		let mut table = GrammarTable::new(&self.grammars);
		definition.define(&mut table);
		let staged = table.into_staged();

		let label = definition.display_name().unwrap_or("<anonymous>");
		if staged.is_empty() {
			return Err(Error::InvalidArgument(format!(
				"grammar definition `{label}` declared no languages"
			)));
		}
		if staged.keys().any(String::is_empty) {
			return Err(Error::InvalidArgument(format!(
				"grammar definition `{label}` declared an empty language name"
			)));
		}

		let mut names = Vec::with_capacity(staged.len());
		for (name, grammar) in staged {
			if self.aliases.remove(&name).is_some() {
				debug!(language = %name, "grammar registration replaced alias");
			}
			if self.grammars.insert(name.clone(), grammar).is_some() {
				debug!(language = %name, "re-registration replaced existing grammar");
			}
			names.push(name);
		}

		debug!(definition = label, languages = ?names, "registered grammar definition");
		Ok(names)
	}

	/// Removes a canonical language.
	///
	/// Aliases pointing at it are kept and resolve to
	/// [`Error::UnknownLanguage`] until it is registered again.
	pub fn unregister(&mut self, name: &str) -> Option<Arc<G>> {
		let removed = self.grammars.remove(name);
		if removed.is_some() {
			debug!(language = name, "unregistered grammar");
		}
		removed
	}

	/// Returns whether `name` resolves, directly or through aliases, to a grammar.
	pub fn registered(&self, name: &str) -> bool {
		self.resolve(name).is_ok()
	}

	/// Returns true if `name` is a canonical language (aliases excluded).
	pub fn contains(&self, name: &str) -> bool {
		self.grammars.contains_key(name)
	}

	/// Resolves `name` to its canonical language and grammar.
	pub fn resolve<'a>(&'a self, name: &str) -> Result<Resolved<'a, G>> {
		let canonical = self.aliases.resolve(name, |n| self.grammars.contains_key(n))?;
		let (key, grammar) = self
			.grammars
			.get_key_value(canonical)
			.ok_or_else(|| Error::UnknownLanguage(name.to_string()))?;
		Ok(Resolved { name: key, grammar })
	}

	/// Looks up the grammar `name` resolves to.
	pub fn grammar(&self, name: &str) -> Option<&Arc<G>> {
		self.resolve(name).ok().map(|resolved| resolved.grammar)
	}

	/// Declares one or more aliases for `target`.
	pub fn alias(&mut self, target: &str, aliases: impl Into<OneOrMany<String>>) -> Result<()> {
		let aliases: OneOrMany<String> = aliases.into();
		self.alias_many([(target, aliases)])
	}

	/// Declares aliases for several targets at once.
	///
	/// All entries are validated against a staged copy of the alias table;
	/// nothing is inserted unless every entry is valid.
	pub fn alias_many<I, T, A>(&mut self, mapping: I) -> Result<()>
	where
		I: IntoIterator<Item = (T, A)>,
		T: AsRef<str>,
		A: Into<OneOrMany<String>>,
	{
		let mut staged = self.aliases.clone();
		let mut inserted = Vec::new();

		for (target, aliases) in mapping {
			let target = target.as_ref();
			if target.is_empty() {
				return Err(Error::InvalidArgument("alias target must not be empty".into()));
			}
			match staged.resolve(target, |n| self.grammars.contains_key(n)) {
				Ok(_) => {}
				Err(Error::UnknownLanguage(_)) => return Err(Error::NotFound(target.to_string())),
				Err(err) => return Err(err),
			}

			let aliases: OneOrMany<String> = aliases.into();
			for alias in aliases {
				if alias.is_empty() {
					return Err(Error::InvalidArgument(format!("empty alias for `{target}`")));
				}
				if self.grammars.contains_key(&alias) {
					return Err(Error::Configuration(format!(
						"alias `{alias}` for `{target}` collides with a registered language"
					)));
				}
				if alias == target {
					return Err(Error::Configuration(format!("`{alias}` cannot alias itself")));
				}
				staged.insert(alias.clone(), target.to_string());
				if let Err(err) = staged.resolve(&alias, |n| self.grammars.contains_key(n)) {
					return Err(match err {
						Error::Configuration(_) => Error::Configuration(format!(
							"aliasing `{alias}` to `{target}` would create an alias cycle"
						)),
						other => other,
					});
				}
				inserted.push((alias, target.to_string()));
			}
		}

		self.aliases = staged;
		for (alias, target) in &inserted {
			debug!(alias = %alias, target = %target, "registered alias");
		}
		Ok(())
	}

	/// Removes one alias, returning whether it existed.
	pub fn unalias(&mut self, alias: &str) -> bool {
		self.aliases.remove(alias).is_some()
	}

	/// Applies the alias table of `config` atomically.
	pub fn apply_config(&mut self, config: &RegistryConfig) -> Result<()> {
		self.alias_many(config.aliases.iter().map(|(target, aliases)| (target.as_str(), aliases.clone())))
	}

	/// Loads a JSON configuration file and applies it.
	pub fn apply_config_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
		let config = RegistryConfig::load(path)?;
		self.apply_config(&config)
	}

	/// Canonical language names; order is unspecified.
	pub fn list_languages(&self) -> Vec<String> {
		self.grammars.keys().cloned().collect()
	}

	/// Aliases whose chain ends at canonical `name`, sorted.
	pub fn aliases_of(&self, name: &str) -> Vec<String> {
		let mut aliases: Vec<String> = self
			.aliases
			.iter()
			.filter(|(alias, _)| {
				self.aliases
					.resolve(alias, |n| self.grammars.contains_key(n))
					.is_ok_and(|canonical| canonical == name)
			})
			.map(|(alias, _)| alias.to_string())
			.collect();
		aliases.sort_unstable();
		aliases
	}

	/// The alias table.
	pub fn aliases(&self) -> &AliasTable {
		&self.aliases
	}

	/// Number of canonical languages.
	pub fn len(&self) -> usize {
		self.grammars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.grammars.is_empty()
	}
}

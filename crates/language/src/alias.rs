//! Alias table and transitive name resolution.
//!
//! # Invariants
//!
//! - An alias maps to a target name, which is either a canonical language or
//!   another alias. Chains of any length resolve.
//! - Resolution walks at most `len() + 1` links. Revisiting a name is reported
//!   as [`Error::Configuration`], never looped on.
//! - Alias names never equal a canonical name at insertion time; the registry
//!   drops an alias that a later registration shadows.

use rustc_hash::FxHashMap as HashMap;

use crate::error::{Error, Result};

/// Mapping from alias name to target name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
	targets: HashMap<String, String>,
}

impl AliasTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.targets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.targets.is_empty()
	}

	pub fn contains(&self, alias: &str) -> bool {
		self.targets.contains_key(alias)
	}

	/// Direct target of `alias`, without following chains.
	pub fn target(&self, alias: &str) -> Option<&str> {
		self.targets.get(alias).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.targets.iter().map(|(alias, target)| (alias.as_str(), target.as_str()))
	}

	/// Inserts or re-points `alias`, returning the previous target.
	pub(crate) fn insert(&mut self, alias: String, target: String) -> Option<String> {
		self.targets.insert(alias, target)
	}

	pub(crate) fn remove(&mut self, alias: &str) -> Option<String> {
		self.targets.remove(alias)
	}

	/// Follows `name` through the table until `is_canonical` accepts it.
	///
	/// Fails with [`Error::UnknownLanguage`] when the chain ends at a name that
	/// is neither canonical nor an alias, and with [`Error::Configuration`] when
	/// the chain is cyclic.
	pub fn resolve<'a>(&'a self, name: &'a str, is_canonical: impl Fn(&str) -> bool) -> Result<&'a str> {
		let mut current = name;
		for _ in 0..=self.targets.len() {
			if is_canonical(current) {
				return Ok(current);
			}
			match self.targets.get(current) {
				Some(next) => current = next.as_str(),
				None => return Err(Error::UnknownLanguage(name.to_string())),
			}
		}
		Err(Error::Configuration(format!("alias cycle detected while resolving `{name}`")))
	}
}

//! Grammar definition units.
//!
//! A definition is applied to a [`GrammarTable`] and declares one or more
//! canonical languages into it. One unit may declare several related
//! languages at once, e.g. a templating language together with its host.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap as HashMap;

/// A registration unit that declares languages into a [`GrammarTable`].
///
/// Closures taking `&mut GrammarTable<'_, G>` implement this trait.
pub trait GrammarDefinition<G> {
	/// Inserts one or more `name -> grammar` entries.
	fn define(&self, table: &mut GrammarTable<'_, G>);

	/// Human-readable name used in diagnostics.
	fn display_name(&self) -> Option<&str> {
		None
	}
}

impl<G, F> GrammarDefinition<G> for F
where
	F: Fn(&mut GrammarTable<'_, G>),
{
	fn define(&self, table: &mut GrammarTable<'_, G>) {
		self(table)
	}
}

/// Staging table handed to a [`GrammarDefinition`].
///
/// Definitions see the grammars already registered (so a definition can
/// build on a host language) but only write to a staging area that the
/// registry commits after validation.
pub struct GrammarTable<'r, G> {
	existing: &'r HashMap<String, Arc<G>>,
	staged: IndexMap<String, Arc<G>>,
}

impl<'r, G> GrammarTable<'r, G> {
	pub(crate) fn new(existing: &'r HashMap<String, Arc<G>>) -> Self {
		Self {
			existing,
			staged: IndexMap::new(),
		}
	}

	/// Declares `name`. A later insert under the same name replaces the earlier one.
	pub fn insert(&mut self, name: impl Into<String>, grammar: G) {
		self.insert_shared(name, Arc::new(grammar));
	}

	/// Declares `name` with an already shared grammar.
	pub fn insert_shared(&mut self, name: impl Into<String>, grammar: Arc<G>) {
		self.staged.insert(name.into(), grammar);
	}

	/// Looks up a grammar declared by this unit or already registered.
	pub fn get(&self, name: &str) -> Option<&Arc<G>> {
		self.staged.get(name).or_else(|| self.existing.get(name))
	}

	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Names declared by this unit so far, in declaration order.
	pub fn declared(&self) -> impl Iterator<Item = &str> {
		self.staged.keys().map(String::as_str)
	}

	pub(crate) fn into_staged(self) -> IndexMap<String, Arc<G>> {
		self.staged
	}
}

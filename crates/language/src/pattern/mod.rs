//! Ordered-rule regex tokenizer.
//!
//! A [`PatternGrammar`] is an ordered list of rules; each rule is a token kind
//! with one or more [`Pattern`]s. [`PatternTokenizer`] applies the rules in
//! order to the text that earlier rules left unmatched, so a rule can never
//! re-split text an earlier rule already claimed.
//!
//! Patterns use [`fancy_regex`], which supports lookaround. A pattern may
//! declare `lookbehind`, in which case its first capture group is matching
//! context and is left as plain text, and `inside`, a nested grammar applied to
//! the matched text.
//!
//! Grammars can be built in code or declared as JSON (see [`GrammarSpec`]).

mod spec;
mod tokenize;

use std::sync::Arc;

use fancy_regex::Regex;
use indexmap::IndexMap;
use lumen_syntax::OneOrMany;
use thiserror::Error;

use crate::grammar::{GrammarDefinition, GrammarTable};
pub use spec::{DetailedPatternSpec, GrammarSpec, PatternSpec};
pub use tokenize::{DEFAULT_MAX_DEPTH, PatternTokenizer};

/// Errors raised while building or running pattern grammars.
#[derive(Error, Debug)]
pub enum PatternError {
	#[error("invalid pattern for `{kind}`: {pattern}: {source}")]
	InvalidPattern {
		kind: String,
		pattern: String,
		#[source]
		source: Box<fancy_regex::Error>,
	},

	#[error("pattern for `{kind}` failed to match: {source}")]
	Regex {
		kind: String,
		#[source]
		source: Box<fancy_regex::Error>,
	},

	#[error("grammar nesting exceeds {max_depth} levels")]
	DepthExceeded { max_depth: usize },

	#[error("malformed grammar JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// One way of recognizing a token kind.
#[derive(Debug, Clone)]
pub struct Pattern {
	regex: Regex,
	lookbehind: bool,
	alias: Option<OneOrMany<String>>,
	inside: Option<Arc<PatternGrammar>>,
}

impl Pattern {
	/// Compiles `source`.
	///
	/// The error carries no rule kind yet; [`PatternGrammar::from_spec`] adds it.
	pub fn new(source: &str) -> Result<Self, PatternError> {
		Self::compile("", source)
	}

	pub(crate) fn compile(kind: &str, source: &str) -> Result<Self, PatternError> {
		let regex = Regex::new(source).map_err(|err| PatternError::InvalidPattern {
			kind: kind.to_string(),
			pattern: source.to_string(),
			source: Box::new(err),
		})?;
		Ok(Self {
			regex,
			lookbehind: false,
			alias: None,
			inside: None,
		})
	}

	/// Treats the first capture group as context that is not part of the token.
	///
	/// The token starts where group 1 ends, so the group is normally a prefix
	/// of the pattern.
	pub fn lookbehind(mut self) -> Self {
		self.lookbehind = true;
		self
	}

	pub fn alias(mut self, alias: impl Into<OneOrMany<String>>) -> Self {
		self.alias = Some(alias.into());
		self
	}

	/// Tokenizes matched text with `grammar` instead of keeping it as a string.
	pub fn inside(mut self, grammar: impl Into<Arc<PatternGrammar>>) -> Self {
		self.inside = Some(grammar.into());
		self
	}

	pub fn source(&self) -> &str {
		self.regex.as_str()
	}

	/// Byte range of the first non-empty token in `text`, honoring `lookbehind`.
	fn find(&self, text: &str) -> Result<Option<(usize, usize)>, fancy_regex::Error> {
		let mut pos = 0;
		while pos <= text.len() {
			let Some(caps) = self.regex.captures_from_pos(text, pos)? else {
				return Ok(None);
			};
			let Some(whole) = caps.get(0) else {
				return Ok(None);
			};
			// Everything up to the end of group 1 is context. Clamped so a group
			// outside the match cannot move the start off the match.
			let start = match caps.get(1) {
				Some(context) if self.lookbehind => context.end().clamp(whole.start(), whole.end()),
				_ => whole.start(),
			};
			if start < whole.end() {
				return Ok(Some((start, whole.end())));
			}
			// Empty token: retry past this position.
			pos = next_char_boundary(text, whole.start().max(pos));
		}
		Ok(None)
	}
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
	text[pos..].chars().next().map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// A token kind and the patterns that recognize it.
#[derive(Debug, Clone)]
pub struct Rule {
	pub kind: String,
	pub patterns: Vec<Pattern>,
}

/// Ordered set of rules.
#[derive(Debug, Clone, Default)]
pub struct PatternGrammar {
	rules: Vec<Rule>,
}

impl PatternGrammar {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a rule with a single pattern.
	pub fn rule(self, kind: impl Into<String>, pattern: Pattern) -> Self {
		self.rule_patterns(kind, vec![pattern])
	}

	/// Appends a rule tried pattern by pattern, in order.
	pub fn rule_patterns(mut self, kind: impl Into<String>, patterns: Vec<Pattern>) -> Self {
		self.rules.push(Rule {
			kind: kind.into(),
			patterns,
		});
		self
	}

	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Compiles a declarative grammar.
	pub fn from_spec(spec: &GrammarSpec) -> Result<Self, PatternError> {
		let mut grammar = Self::new();
		for (kind, patterns) in &spec.rules {
			let patterns = patterns
				.iter()
				.map(|pattern| pattern.compile(kind))
				.collect::<Result<Vec<_>, _>>()?;
			grammar = grammar.rule_patterns(kind.clone(), patterns);
		}
		Ok(grammar)
	}

	/// Parses and compiles a JSON grammar.
	pub fn from_json(json: &str) -> Result<Self, PatternError> {
		let spec: GrammarSpec = serde_json::from_str(json)?;
		Self::from_spec(&spec)
	}
}

/// A set of named pattern grammars registered as one unit.
///
/// JSON form: `{ "alpha": { <grammar> }, "bravo": { <grammar> } }`.
#[derive(Debug, Clone, Default)]
pub struct PatternDefinition {
	name: Option<String>,
	languages: IndexMap<String, Arc<PatternGrammar>>,
}

impl PatternDefinition {
	pub fn new() -> Self {
		Self::default()
	}

	/// Names the unit for diagnostics.
	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn language(mut self, name: impl Into<String>, grammar: impl Into<Arc<PatternGrammar>>) -> Self {
		self.languages.insert(name.into(), grammar.into());
		self
	}

	pub fn from_json(json: &str) -> Result<Self, PatternError> {
		let specs: IndexMap<String, GrammarSpec> = serde_json::from_str(json)?;
		let mut definition = Self::new();
		for (name, spec) in &specs {
			definition = definition.language(name.clone(), PatternGrammar::from_spec(spec)?);
		}
		Ok(definition)
	}
}

impl GrammarDefinition<PatternGrammar> for PatternDefinition {
	fn define(&self, table: &mut GrammarTable<'_, PatternGrammar>) {
		for (name, grammar) in &self.languages {
			table.insert_shared(name.clone(), Arc::clone(grammar));
		}
	}

	fn display_name(&self) -> Option<&str> {
		self.name.as_deref()
	}
}

#[cfg(test)]
mod tests;

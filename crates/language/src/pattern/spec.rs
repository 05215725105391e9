//! Declarative (serde) form of pattern grammars.
//!
//! ```json
//! {
//!   "comment": "//.*",
//!   "string": { "pattern": "\"[^\"]*\"", "alias": "literal" },
//!   "tag": [
//!     { "pattern": "<\\w+>", "inside": { "punctuation": "[<>]" } }
//!   ]
//! }
//! ```
//!
//! Rule order is the order of the keys in the document.

use std::sync::Arc;

use indexmap::IndexMap;
use lumen_syntax::OneOrMany;
use serde::{Deserialize, Serialize};

use super::{Pattern, PatternError, PatternGrammar};

/// Rule kind -> one or more patterns, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrammarSpec {
	pub rules: IndexMap<String, OneOrMany<PatternSpec>>,
}

/// A bare regex source or a pattern with options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSpec {
	Source(String),
	Detailed(DetailedPatternSpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailedPatternSpec {
	pub pattern: String,
	#[serde(default)]
	pub lookbehind: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub alias: Option<OneOrMany<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub inside: Option<GrammarSpec>,
}

impl PatternSpec {
	pub(super) fn compile(&self, kind: &str) -> Result<Pattern, PatternError> {
		match self {
			Self::Source(source) => Pattern::compile(kind, source),
			Self::Detailed(spec) => {
				let mut pattern = Pattern::compile(kind, &spec.pattern)?;
				if spec.lookbehind {
					pattern = pattern.lookbehind();
				}
				if let Some(alias) = &spec.alias {
					pattern = pattern.alias(alias.clone());
				}
				if let Some(inside) = &spec.inside {
					pattern = pattern.inside(Arc::new(PatternGrammar::from_spec(inside)?));
				}
				Ok(pattern)
			}
		}
	}
}

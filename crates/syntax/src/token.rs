//! Tokens as emitted by a tokenizer.
//!
//! The serde representation mirrors the JSON shape common to regex-driven
//! highlighters: a plain token is a bare string, a matched token is an object
//! with `type`, optional `alias` and `content`.

use serde::{Deserialize, Serialize};

use crate::one_or_many::OneOrMany;

/// A single element of a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
	/// Text that no rule matched.
	Plain(String),
	/// Text recognized by a grammar rule.
	Matched(MatchedToken),
}

/// A token recognized by a grammar rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchedToken {
	/// Rule name (e.g. "keyword", "punctuation").
	#[serde(rename = "type")]
	pub kind: String,
	/// Additional labels attached by the rule.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub alias: Option<OneOrMany<String>>,
	pub content: TokenContent,
}

/// Content of a matched token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenContent {
	Text(String),
	/// Nested stream produced by an inner grammar.
	Tokens(Vec<Token>),
}

impl Token {
	pub fn plain(text: impl Into<String>) -> Self {
		Self::Plain(text.into())
	}

	/// Creates a matched token without aliases.
	pub fn matched(kind: impl Into<String>, content: impl Into<TokenContent>) -> Self {
		Self::Matched(MatchedToken::new(kind, content))
	}

	/// Creates a matched token carrying `alias`.
	pub fn aliased(
		kind: impl Into<String>,
		alias: impl Into<OneOrMany<String>>,
		content: impl Into<TokenContent>,
	) -> Self {
		Self::Matched(MatchedToken::new(kind, content).with_alias(alias))
	}

	/// Total length in bytes of the text covered by this token.
	pub fn text_len(&self) -> usize {
		match self {
			Self::Plain(text) => text.len(),
			Self::Matched(token) => token.content.text_len(),
		}
	}
}

impl MatchedToken {
	pub fn new(kind: impl Into<String>, content: impl Into<TokenContent>) -> Self {
		Self {
			kind: kind.into(),
			alias: None,
			content: content.into(),
		}
	}

	pub fn with_alias(mut self, alias: impl Into<OneOrMany<String>>) -> Self {
		self.alias = Some(alias.into());
		self
	}
}

impl TokenContent {
	pub fn text_len(&self) -> usize {
		match self {
			Self::Text(text) => text.len(),
			Self::Tokens(tokens) => tokens.iter().map(Token::text_len).sum(),
		}
	}
}

impl From<&str> for Token {
	fn from(text: &str) -> Self {
		Self::Plain(text.to_string())
	}
}

impl From<String> for Token {
	fn from(text: String) -> Self {
		Self::Plain(text)
	}
}

impl From<MatchedToken> for Token {
	fn from(token: MatchedToken) -> Self {
		Self::Matched(token)
	}
}

impl From<&str> for TokenContent {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for TokenContent {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<Vec<Token>> for TokenContent {
	fn from(tokens: Vec<Token>) -> Self {
		Self::Tokens(tokens)
	}
}

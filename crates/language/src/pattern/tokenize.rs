//! Rule-by-rule splitting of unmatched text.

use lumen_syntax::{MatchedToken, Token, TokenContent};

use super::{Pattern, PatternError, PatternGrammar};
use crate::tokenizer::Tokenizer;

/// Nesting limit for `inside` grammars unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Tokenizer for [`PatternGrammar`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternTokenizer {
	max_depth: usize,
}

impl Default for PatternTokenizer {
	fn default() -> Self {
		Self::with_max_depth(DEFAULT_MAX_DEPTH)
	}
}

impl PatternTokenizer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Limits how many `inside` grammars may nest.
	pub fn with_max_depth(max_depth: usize) -> Self {
		Self { max_depth }
	}

	pub fn max_depth(&self) -> usize {
		self.max_depth
	}

	fn tokenize_at(&self, text: &str, grammar: &PatternGrammar, depth: usize) -> Result<Vec<Token>, PatternError> {
		if depth > self.max_depth {
			return Err(PatternError::DepthExceeded {
				max_depth: self.max_depth,
			});
		}

		let mut segments = vec![Segment::Plain(text)];
		for rule in grammar.rules() {
			for pattern in &rule.patterns {
				segments = self.split(&rule.kind, pattern, segments, depth)?;
			}
		}
		Ok(segments.into_iter().map(Segment::into_token).collect())
	}

	/// Splits every plain segment at each match of `pattern`.
	fn split<'t>(
		&self,
		kind: &str,
		pattern: &Pattern,
		segments: Vec<Segment<'t>>,
		depth: usize,
	) -> Result<Vec<Segment<'t>>, PatternError> {
		let mut out = Vec::with_capacity(segments.len());
		for segment in segments {
			let mut rest = match segment {
				Segment::Plain(text) => text,
				done @ Segment::Done(_) => {
					out.push(done);
					continue;
				}
			};

			while !rest.is_empty() {
				let found = pattern.find(rest).map_err(|source| PatternError::Regex {
					kind: kind.to_string(),
					source: Box::new(source),
				})?;
				let Some((start, end)) = found else {
					break;
				};
				if start > 0 {
					out.push(Segment::Plain(&rest[..start]));
				}
				out.push(Segment::Done(self.matched(kind, pattern, &rest[start..end], depth)?));
				rest = &rest[end..];
			}
			if !rest.is_empty() {
				out.push(Segment::Plain(rest));
			}
		}
		Ok(out)
	}

	fn matched(&self, kind: &str, pattern: &Pattern, text: &str, depth: usize) -> Result<Token, PatternError> {
		let content = match &pattern.inside {
			Some(inside) => TokenContent::Tokens(self.tokenize_at(text, inside, depth + 1)?),
			None => TokenContent::Text(text.to_string()),
		};
		Ok(Token::Matched(MatchedToken {
			kind: kind.to_string(),
			alias: pattern.alias.clone(),
			content,
		}))
	}
}

impl Tokenizer for PatternTokenizer {
	type Grammar = PatternGrammar;
	type Error = PatternError;

	fn tokenize(&self, text: &str, grammar: &PatternGrammar) -> Result<Vec<Token>, PatternError> {
		self.tokenize_at(text, grammar, 0)
	}
}

/// Text still open to later rules, or a finished token.
enum Segment<'t> {
	Plain(&'t str),
	Done(Token),
}

impl Segment<'_> {
	fn into_token(self) -> Token {
		match self {
			Self::Plain(text) => Token::plain(text),
			Self::Done(token) => token,
		}
	}
}

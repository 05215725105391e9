//! Tokenizer boundary.

use lumen_syntax::Token;

/// Turns text into a token stream using a grammar.
///
/// Implementations must not fail on text their grammar does not recognize:
/// unmatched input is returned as [`Token::Plain`]. Errors are reserved for
/// broken grammars and engine failures.
pub trait Tokenizer {
	/// Grammar representation understood by this tokenizer.
	type Grammar;
	type Error: std::error::Error + Send + Sync + 'static;

	fn tokenize(&self, text: &str, grammar: &Self::Grammar) -> Result<Vec<Token>, Self::Error>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
	type Grammar = T::Grammar;
	type Error = T::Error;

	fn tokenize(&self, text: &str, grammar: &Self::Grammar) -> Result<Vec<Token>, Self::Error> {
		(**self).tokenize(text, grammar)
	}
}

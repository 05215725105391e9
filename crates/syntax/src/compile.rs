//! Token-stream-to-tree compiler.
//!
//! # Invariants
//!
//! - One output node per input token, in input order. Adjacent plain tokens are
//!   never merged; callers that want merged text post-process the tree.
//! - Elements built from a matched token carry `["token", kind, ...alias]`.
//! - Empty input compiles to an empty sequence; empty plain strings survive as
//!   empty text nodes.

use crate::node::Node;
use crate::token::{MatchedToken, Token, TokenContent};

/// Leading class of every element compiled from a matched token.
pub const TOKEN_CLASS: &str = "token";

/// Compiles a token stream into a node sequence.
///
/// Consumes the tokens so their strings move into the tree without copying.
/// Recursion depth follows the nesting of the input.
pub fn compile(tokens: impl IntoIterator<Item = Token>) -> Vec<Node> {
	tokens.into_iter().map(compile_token).collect()
}

fn compile_token(token: Token) -> Node {
	match token {
		Token::Plain(text) => Node::Text(text),
		Token::Matched(matched) => compile_matched(matched),
	}
}

fn compile_matched(MatchedToken { kind, alias, content }: MatchedToken) -> Node {
	let alias_count = alias.as_ref().map_or(0, |alias| alias.len());
	let mut class_list = Vec::with_capacity(2 + alias_count);
	class_list.push(TOKEN_CLASS.to_string());
	class_list.push(kind);
	if let Some(alias) = alias {
		class_list.extend(alias);
	}

	let children = match content {
		TokenContent::Text(text) => vec![Node::Text(text)],
		TokenContent::Tokens(tokens) => compile(tokens),
	};

	Node::Element { class_list, children }
}

//! Token model and tree compiler for highlighted source.
//!
//! Tokenizers produce a nested, heterogeneous token stream: plain strings
//! interleaved with matched tokens whose content is either a string or another
//! token stream. This crate turns that stream into a canonical tree of typed
//! nodes that downstream document processors can walk without knowing anything
//! about the tokenizer.
//!
//! # Architecture
//!
//! * [`token`]: [`Token`] as emitted by a tokenizer
//! * [`node`]: [`Node`], the canonical output tree
//! * [`compile`](mod@compile): the token-stream-to-tree compiler
//! * [`one_or_many`]: [`OneOrMany`], a single value or an ordered list
//!
//! # Class lists
//!
//! Every element produced from a matched token carries the class list
//! `["token", kind, ...aliases]`, in that order and without deduplication.

pub mod compile;
pub mod node;
pub mod one_or_many;
pub mod token;

pub use compile::{TOKEN_CLASS, compile};
pub use node::Node;
pub use one_or_many::OneOrMany;
pub use token::{MatchedToken, Token, TokenContent};

// Library code reports through tracing, never stderr
#![deny(clippy::print_stderr)]

//! Language registry and highlight orchestration.
//!
//! This crate resolves language names to grammars, hands text to a pluggable
//! [`Tokenizer`], and compiles the resulting token stream into a
//! [`lumen_syntax::Node`] tree.
//!
//! # Architecture
//!
//! * [`registry`]: [`Registry`], per-instance grammar and alias tables
//! * [`grammar`]: [`GrammarDefinition`] units that declare one or more languages
//! * [`tokenizer`]: the [`Tokenizer`] boundary
//! * [`highlight`]: [`Highlighter`], name resolution + tokenization + compilation
//! * [`shared`]: [`SharedHighlighter`], snapshot-read / single-writer wrapper
//! * [`pattern`]: a small ordered-rule regex tokenizer
//! * [`config`]: alias tables loaded from JSON
//!
//! # Isolation
//!
//! Registries never share their tables. Cloning a registry copies both
//! mappings; grammars themselves are immutable and held behind `Arc`.

pub mod alias;
pub mod config;
pub mod error;
pub mod grammar;
pub mod highlight;
pub mod pattern;
pub mod registry;
pub mod shared;
pub mod tokenizer;

pub use config::{ConfigError, RegistryConfig};
pub use error::{Error, Result};
pub use grammar::{GrammarDefinition, GrammarTable};
pub use highlight::{Highlighter, highlight};
pub use lumen_syntax::{Node, OneOrMany, Token};
pub use pattern::{Pattern, PatternDefinition, PatternError, PatternGrammar, PatternTokenizer};
pub use registry::{Registry, Resolved};
pub use shared::SharedHighlighter;
pub use tokenizer::Tokenizer;

//! Grammars shared by the integration tests.

use lumen_language::{Highlighter, Pattern, PatternDefinition, PatternGrammar, PatternTokenizer};

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn pattern(source: &str) -> Pattern {
	Pattern::new(source).expect("test pattern compiles")
}

pub fn java() -> PatternGrammar {
	PatternGrammar::new()
		.rule("comment", pattern(r"//.*"))
		.rule("keyword", pattern(r"\b(?:public|private|void|int|class|return|static|new)\b"))
		.rule("function", pattern(r"\b\w+(?=\()"))
		.rule("number", pattern(r"\b\d+\b"))
		.rule("punctuation", pattern(r"[{}()\[\];,.]"))
		.rule("operator", pattern(r"[-+*/=<>!]=?"))
}

pub fn javascript() -> PatternGrammar {
	PatternGrammar::new()
		.rule("keyword", pattern(r"\b(?:var|let|const|function|return)\b"))
		.rule("number", pattern(r"\b\d+\b"))
		.rule("punctuation", pattern(r"[{}();,.]"))
}

pub fn markdown() -> PatternGrammar {
	let punctuation = PatternGrammar::new().rule("punctuation", pattern(r"^#+"));
	PatternGrammar::new().rule(
		"title",
		pattern(r"(?m)^#{1,6} .+$").alias("important").inside(punctuation),
	)
}

/// Highlighter with `java`, `javascript` and `markdown` registered.
pub fn highlighter() -> Highlighter<PatternTokenizer> {
	init_tracing();
	let mut highlighter = Highlighter::new(PatternTokenizer::new());
	highlighter
		.register(
			PatternDefinition::new()
				.named("common")
				.language("java", java())
				.language("javascript", javascript())
				.language("markdown", markdown()),
		)
		.expect("common grammars register");
	highlighter
}

use lumen_syntax::{MatchedToken, Token, TokenContent};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::tokenizer::Tokenizer;

fn pattern(source: &str) -> Pattern {
	Pattern::new(source).unwrap()
}

fn java() -> PatternGrammar {
	PatternGrammar::new()
		.rule("keyword", pattern(r"\b(?:public|void|int|class|return|static)\b"))
		.rule("function", pattern(r"\b\w+(?=\()"))
		.rule("punctuation", pattern(r"[{}()\[\];,.]"))
		.rule("operator", pattern(r"[-+*/=<>!]=?"))
}

fn tokenize(text: &str, grammar: &PatternGrammar) -> Vec<Token> {
	PatternTokenizer::default().tokenize(text, grammar).unwrap()
}

#[test]
fn test_java_method_signature() {
	assert_eq!(
		tokenize("public void moveTo(int x, int y, int z);", &java()),
		vec![
			Token::matched("keyword", "public"),
			Token::plain(" "),
			Token::matched("keyword", "void"),
			Token::plain(" "),
			Token::matched("function", "moveTo"),
			Token::matched("punctuation", "("),
			Token::matched("keyword", "int"),
			Token::plain(" x"),
			Token::matched("punctuation", ","),
			Token::plain(" "),
			Token::matched("keyword", "int"),
			Token::plain(" y"),
			Token::matched("punctuation", ","),
			Token::plain(" "),
			Token::matched("keyword", "int"),
			Token::plain(" z"),
			Token::matched("punctuation", ")"),
			Token::matched("punctuation", ";"),
		]
	);
}

#[test]
fn test_unmatched_text_is_plain() {
	assert_eq!(tokenize("# foo", &java()), vec![Token::plain("# foo")]);
}

#[test]
fn test_empty_grammar_returns_input() {
	assert_eq!(tokenize("anything", &PatternGrammar::new()), vec![Token::plain("anything")]);
}

#[test]
fn test_earlier_rules_claim_text_first() {
	let grammar = PatternGrammar::new()
		.rule("comment", pattern(r"//.*"))
		.rule("keyword", pattern(r"\breturn\b"));

	assert_eq!(
		tokenize("return // return", &grammar),
		vec![Token::matched("keyword", "return"), Token::plain(" "), Token::matched("comment", "// return")]
	);
}

#[test]
fn test_patterns_of_one_rule_apply_in_order() {
	let grammar = PatternGrammar::new().rule_patterns("number", vec![pattern(r"0x[0-9a-f]+"), pattern(r"\d+")]);

	assert_eq!(
		tokenize("0x1f 42", &grammar),
		vec![Token::matched("number", "0x1f"), Token::plain(" "), Token::matched("number", "42")]
	);
}

#[test]
fn test_lookbehind_leaves_context_plain() {
	let grammar = PatternGrammar::new()
		.rule("class-name", pattern(r"(\bclass\s+)\w+").lookbehind())
		.rule("keyword", pattern(r"\bclass\b"));

	assert_eq!(
		tokenize("class Foo {}", &grammar),
		vec![
			Token::matched("keyword", "class"),
			Token::plain(" "),
			Token::matched("class-name", "Foo"),
			Token::plain(" {}"),
		]
	);
}

#[rstest]
#[case::group_after_multibyte_prefix(r"é(a)", "éa", vec![Token::plain("éa")])]
#[case::group_in_the_middle(r"a(b)c", "xabc", vec![Token::plain("xab"), Token::matched("odd", "c")])]
#[case::group_past_the_match(r"a(?=(bc))", "abc", vec![Token::plain("abc")])]
fn test_lookbehind_group_not_a_prefix(#[case] source: &str, #[case] text: &str, #[case] expected: Vec<Token>) {
	let grammar = PatternGrammar::new().rule("odd", pattern(source).lookbehind());

	assert_eq!(tokenize(text, &grammar), expected);
}

#[test]
fn test_inside_grammar_nests_tokens() {
	let inner = PatternGrammar::new().rule("punctuation", pattern(r"^#+"));
	let grammar = PatternGrammar::new().rule("title", pattern(r"(?m)^#+ .+$").alias("important").inside(inner));

	assert_eq!(
		tokenize("# Title\nbody", &grammar),
		vec![
			Token::aliased(
				"title",
				"important",
				vec![Token::matched("punctuation", "#"), Token::plain(" Title")]
			),
			Token::plain("\nbody"),
		]
	);
}

#[test]
fn test_empty_matches_are_skipped() {
	let grammar = PatternGrammar::new().rule("x", pattern(r"x*"));

	assert_eq!(
		tokenize("abxxc", &grammar),
		vec![Token::plain("ab"), Token::matched("x", "xx"), Token::plain("c")]
	);
}

#[test]
fn test_multibyte_text() {
	let grammar = PatternGrammar::new().rule("word", pattern(r"ö+"));

	assert_eq!(
		tokenize("wörld ööh", &grammar),
		vec![
			Token::plain("w"),
			Token::matched("word", "ö"),
			Token::plain("rld "),
			Token::matched("word", "öö"),
			Token::plain("h"),
		]
	);
}

fn nested(levels: usize) -> PatternGrammar {
	let mut grammar = PatternGrammar::new().rule("leaf", pattern(".+"));
	for _ in 0..levels {
		grammar = PatternGrammar::new().rule("nest", pattern(".+").inside(grammar));
	}
	grammar
}

#[test]
fn test_depth_limit() {
	let tokenizer = PatternTokenizer::with_max_depth(2);

	assert!(tokenizer.tokenize("x", &nested(2)).is_ok());
	assert!(matches!(
		tokenizer.tokenize("x", &nested(3)),
		Err(PatternError::DepthExceeded { max_depth: 2 })
	));
	assert_eq!(PatternTokenizer::new().max_depth(), DEFAULT_MAX_DEPTH);
}

#[test]
fn test_json_grammar_matches_builder() {
	let grammar = PatternGrammar::from_json(
		r#"{
			"keyword": "\\b(?:public|void|int|class|return|static)\\b",
			"function": "\\b\\w+(?=\\()",
			"punctuation": "[{}()\\[\\];,.]",
			"operator": "[-+*/=<>!]=?"
		}"#,
	)
	.unwrap();

	let text = "public int size() { return 0; }";
	assert_eq!(tokenize(text, &grammar), tokenize(text, &java()));
	assert_eq!(grammar.rules().iter().map(|r| r.kind.as_str()).collect::<Vec<_>>(), [
		"keyword",
		"function",
		"punctuation",
		"operator"
	]);
}

#[test]
fn test_json_detailed_patterns() {
	let grammar = PatternGrammar::from_json(
		r#"{
			"tag": {
				"pattern": "<\\w+>",
				"alias": ["markup", "element"],
				"inside": {"punctuation": "[<>]"}
			},
			"attr": [{"pattern": "(=)\\w+", "lookbehind": true}]
		}"#,
	)
	.unwrap();

	let tokens = tokenize("<b>k=v", &grammar);
	assert_eq!(
		tokens,
		vec![
			Token::aliased(
				"tag",
				["markup", "element"],
				vec![Token::matched("punctuation", "<"), Token::plain("b"), Token::matched("punctuation", ">")]
			),
			Token::plain("k="),
			Token::matched("attr", "v"),
		]
	);
	let Token::Matched(MatchedToken {
		content: TokenContent::Tokens(inner),
		..
	}) = &tokens[0]
	else {
		panic!("tag should carry nested tokens");
	};
	assert_eq!(inner.len(), 3);
}

#[test]
fn test_invalid_pattern_names_rule() {
	let err = PatternGrammar::from_json(r#"{"broken": "(unclosed"}"#).unwrap_err();
	assert!(matches!(&err, PatternError::InvalidPattern { kind, pattern, .. } if kind == "broken" && pattern == "(unclosed"));
}

#[test]
fn test_unknown_pattern_option_rejected() {
	let err = PatternGrammar::from_json(r#"{"x": {"pattern": "x", "greedy": true}}"#).unwrap_err();
	assert!(matches!(err, PatternError::Json(_)));
}

#[test]
fn test_definition_declares_every_language() {
	let definition = PatternDefinition::from_json(r#"{"alpha": {}, "bravo": {"word": "\\w+"}}"#)
		.unwrap()
		.named("alpha-bravo");

	let existing = Default::default();
	let mut table = GrammarTable::new(&existing);
	definition.define(&mut table);
	assert_eq!(table.declared().collect::<Vec<_>>(), ["alpha", "bravo"]);
	assert_eq!(definition.display_name(), Some("alpha-bravo"));
}

proptest! {
	#[test]
	fn prop_tokens_cover_input(text in "[a-z0-9 (){};,=+#\n]{0,64}") {
		let tokens = tokenize(&text, &java());
		let covered: usize = tokens.iter().map(Token::text_len).sum();
		prop_assert_eq!(covered, text.len());
		if !text.is_empty() {
			prop_assert!(tokens.iter().all(|token| token.text_len() > 0));
		}
	}
}

//! The Noze grammar table.
//!
//! Rule order is precedence: the tokenizer tries each rule in turn and the
//! first match wins, so earlier rules deliberately shadow broader ones below
//! them.

use crate::grammar::{CaptureSpec, Grammar, RegionOptions, Rule, match_rule, region};

pub const NAME: &str = "Noze";
pub const SCOPE_NAME: &str = "source.noze";
pub const FILE_TYPES: &[&str] = &["nz"];

/// Joined into a single alternation. Operators are keywords too, already
/// escaped for the pattern.
pub const KEYWORDS: &[&str] = &[
    "_",
    "as",
    "assert",
    "c",
    "case",
    "catch",
    "copy",
    "do",
    "else",
    "from",
    "get",
    "if",
    "include",
    "io",
    "import",
    "pass",
    "private",
    "set",
    "spec",
    "try",
    "when",
    r"\<",
    r"\>",
    r"\<\=",
    r"\>\=",
    r"\+",
    r"\-",
    r"\*",
    r"\/",
];

pub fn keyword_pattern() -> String {
    format!(r"\b({})\b", KEYWORDS.join("|"))
}

pub fn patterns() -> Vec<Rule> {
    vec![
        // `fun Type name` header, tried before the type rule eats it piecemeal
        match_rule(
            "keyword",
            r"^\s*(fun)\s+([A-Z][a-zA-Z0-9\-]*)\s+([a-zA-Z0-9\-]*)",
            Some(CaptureSpec::indexed([
                (2, "support.type"),
                (3, "string.quoted"),
            ])),
        ),
        match_rule("support.type", r"(\?|\$)?[A-Z][a-zA-Z0-9\-]*", None),
        match_rule("keyword", &keyword_pattern(), None),
        // unlabelled, keeps plain identifiers away from the looser rules below
        match_rule("", r"\b[a-z][a-zA-Z0-9\-]*\b", None),
        match_rule("comment", r"\.|\,|=|\\", None),
        region(
            "string.quoted",
            "\"",
            "\"",
            RegionOptions {
                patterns: Some(vec![
                    match_rule("keyword", r"\\.", None),
                    match_rule("keyword", r"\{([^}])\}", Some("string.interpolated".into())),
                ]),
                ..Default::default()
            },
        ),
        match_rule("comment", r"\|\s.*", None),
        match_rule("variable.other", r"[\(\)\[\]\{\}\<\>]", None),
        // octal accepts 8 and hex is lowercase only, kept as published
        match_rule(
            "constant.numeric",
            r"[\+\-]?((0((b[01]+)|(o[0-8]+)|(x[\da-f]+)))|(\d+(\.\d+)?))",
            None,
        ),
    ]
}

pub fn grammar() -> Grammar {
    Grammar {
        name: NAME.to_string(),
        scope_name: SCOPE_NAME.into(),
        file_types: FILE_TYPES.iter().map(|t| t.to_string()).collect(),
        patterns: patterns(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::compile_pattern;
    use test_case::test_case;

    fn top_level_pattern(idx: usize) -> onig::Regex {
        let patterns = patterns();
        let rule = patterns[idx].as_match().unwrap();
        compile_pattern(&rule.match_.0).unwrap()
    }

    #[test]
    fn document_header() {
        let grammar = grammar();

        assert_eq!(grammar.name, "Noze");
        assert_eq!(grammar.scope_name.0, "source.noze");
        assert_eq!(grammar.file_types, ["nz"]);
    }

    #[test]
    fn rules_are_in_precedence_order() {
        let names: Vec<String> = patterns().iter().map(|r| r.name().0.clone()).collect();

        assert_eq!(
            names,
            [
                "keyword",
                "support.type",
                "keyword",
                "",
                "comment",
                "string.quoted",
                "comment",
                "variable.other",
                "constant.numeric",
            ]
        );

        let patterns = patterns();
        assert!(patterns[0].as_match().unwrap().match_.0.contains("(fun)"));
        assert_eq!(patterns[2].as_match().unwrap().match_.0, keyword_pattern());
        assert_eq!(patterns[6].as_match().unwrap().match_.0, r"\|\s.*");
        assert!(
            patterns
                .iter()
                .enumerate()
                .all(|(idx, rule)| (idx == 5) == rule.as_region().is_some())
        );
    }

    #[test]
    fn string_region_has_escape_and_interpolation() {
        let patterns = patterns();
        let string = patterns[5].as_region().unwrap();

        assert_eq!(string.begin.0, "\"");
        assert_eq!(string.end.0, "\"");
        assert!(string.begin_captures.is_none());
        assert!(string.end_captures.is_none());

        let nested = string.patterns.as_ref().unwrap();
        assert_eq!(nested.len(), 2);

        let escape = nested[0].as_match().unwrap();
        assert_eq!(escape.name.0, "keyword");
        assert!(escape.captures.is_none());

        let interpolation = nested[1].as_match().unwrap();
        assert_eq!(interpolation.name.0, "keyword");
        assert_eq!(
            interpolation.captures.as_ref().unwrap().get("1").unwrap().0,
            "string.interpolated"
        );
    }

    #[test]
    fn function_header_labels_type_and_name() {
        let patterns = patterns();
        let captures = patterns[0].as_match().unwrap().captures.as_ref().unwrap();
        assert_eq!(captures.0.len(), 2);
        assert_eq!(captures.get("2").unwrap().0, "support.type");
        assert_eq!(captures.get("3").unwrap().0, "string.quoted");

        let regex = top_level_pattern(0);
        let caps = regex.captures("\tfun Nat-List to-str").unwrap();
        assert_eq!(caps.at(1), Some("fun"));
        assert_eq!(caps.at(2), Some("Nat-List"));
        assert_eq!(caps.at(3), Some("to-str"));

        assert!(regex.find("x fun Nat to-str").is_none());
    }

    #[test_case("Nat", Some((0, 3)) ; "plain type")]
    #[test_case("?Nat", Some((0, 4)) ; "optional type")]
    #[test_case("$Str-Map", Some((0, 8)) ; "dollar type")]
    #[test_case("nat", None ; "lowercase")]
    fn type_reference(text: &str, expected: Option<(usize, usize)>) {
        assert_eq!(top_level_pattern(1).find(text), expected);
    }

    #[test]
    fn operator_keywords_are_escaped() {
        for keyword in KEYWORDS {
            let is_word = keyword.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            let is_escaped = keyword
                .split('\\')
                .skip(1)
                .all(|part| part.chars().count() == 1)
                && keyword.starts_with('\\');
            assert!(is_word || is_escaped, "{keyword}");
        }
    }

    #[test]
    fn keywords_match_as_whole_words() {
        let regex = top_level_pattern(2);

        for keyword in KEYWORDS.iter().filter(|k| !k.starts_with('\\')) {
            assert_eq!(regex.find(keyword), Some((0, keyword.len())), "{keyword}");
        }
    }

    #[test]
    fn operators_match_between_operands() {
        let regex = top_level_pattern(2);

        for operator in KEYWORDS.iter().filter(|k| k.starts_with('\\')) {
            let operator = operator.replace('\\', "");
            let text = format!("a{operator}b");
            assert_eq!(
                regex.find(&text),
                Some((1, 1 + operator.len())),
                "{text}"
            );
        }
    }

    #[test_case("assertive" ; "longer word")]
    #[test_case("cases" ; "plural")]
    #[test_case("passing" ; "prefix")]
    #[test_case("my_c" ; "suffix")]
    fn keywords_do_not_match_inside_words(text: &str) {
        assert_eq!(top_level_pattern(2).find(text), None);
    }

    #[test_case("to-str", Some((0, 6)) ; "hyphenated")]
    #[test_case("Nat", None ; "capitalized")]
    fn plain_identifier(text: &str, expected: Option<(usize, usize)>) {
        assert_eq!(top_level_pattern(3).find(text), expected);
    }

    #[test_case(".", true ; "dot")]
    #[test_case(",", true ; "comma")]
    #[test_case("=", true ; "equals")]
    #[test_case("\\", true ; "backslash")]
    #[test_case(";", false ; "semicolon")]
    fn punctuation(text: &str, matches: bool) {
        assert_eq!(top_level_pattern(4).find(text).is_some(), matches);
    }

    #[test]
    fn interpolation_captures_inner_expression() {
        let patterns = patterns();
        let string = patterns[5].as_region().unwrap();
        let nested = string.patterns.as_ref().unwrap();
        let regex = compile_pattern(&nested[1].as_match().unwrap().match_.0).unwrap();

        let caps = regex.captures("hello {x}!").unwrap();
        assert_eq!(caps.at(0), Some("{x}"));
        assert_eq!(caps.at(1), Some("x"));
    }

    #[test_case("| a comment", Some((0, 11)) ; "whole line")]
    #[test_case("x | note", Some((2, 8)) ; "trailing")]
    #[test_case("a|b", None ; "no space")]
    fn line_comment(text: &str, expected: Option<(usize, usize)>) {
        assert_eq!(top_level_pattern(6).find(text), expected);
    }

    #[test]
    fn brackets_match_one_at_a_time() {
        let regex = top_level_pattern(7);
        for bracket in ["(", ")", "[", "]", "{", "}", "<", ">"] {
            assert_eq!(regex.find(bracket), Some((0, 1)), "{bracket}");
        }
        assert_eq!(regex.find("()"), Some((0, 1)));
    }

    // hex digits are lowercase only, so `0x1A` stops before the `A`
    #[test_case("0x1A", "0x1" ; "hex")]
    #[test_case("-3.14", "-3.14" ; "negative decimal")]
    #[test_case("0b101", "0b101" ; "binary")]
    #[test_case("+42", "+42" ; "signed integer")]
    #[test_case("0o8", "0o8" ; "octal accepts eight")]
    #[test_case("0xG1", "0" ; "bad hex digit")]
    #[test_case("1.2.3", "1.2" ; "two dots")]
    fn numeric_literal_token(text: &str, token: &str) {
        let (start, end) = top_level_pattern(8).find(text).unwrap();
        assert_eq!(start, 0);
        assert_eq!(&text[start..end], token);
    }
}

use serde_derive::{Deserialize, Serialize};

pub mod captures;
pub mod rule;
pub mod validate;

pub use captures::{Capture, CaptureSpec, Captures};
pub use rule::{RegionOptions, match_rule, region};

// modelled after https://github.com/microsoft/vscode-textmate/blob/f03a6a8790af81372d0e81facae75554ec5e97ef/src/rawGrammar.ts
// restricted to the keys this generator emits

/// A complete grammar document, as handed to the serializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grammar {
    pub name: String,
    // expected to be globally unique
    pub scope_name: ScopeName,
    pub file_types: Vec<String>,
    pub patterns: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeName(pub String);

impl From<&str> for ScopeName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegExpString(pub String);

impl From<&str> for RegExpString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// end strings are allowed to refer to captures that occurred in `begin`,
// see https://github.com/shikijs/shiki/issues/918 thus they aren't *really*
// correct regexps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialRegExpString(pub String);

impl PartialRegExpString {
    /// Whether the pattern refers back to a `begin` capture (`\1` to `\9`).
    pub fn has_backreferences(&self) -> bool {
        let mut chars = self.0.chars();
        while let Some(c) = chars.next() {
            // an escape consumes the next character, so `\\1` is a literal
            // backslash followed by `1`
            if c == '\\' && matches!(chars.next(), Some('1'..='9')) {
                return true;
            }
        }
        false
    }
}

impl From<&str> for PartialRegExpString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One lexical rule. Order inside the enclosing `patterns` list is the
/// tokenizer's precedence: the first rule that matches wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rule {
    Match(MatchRule),
    Region(RegionRule),
}

impl Rule {
    pub fn name(&self) -> &ScopeName {
        match self {
            Rule::Match(rule) => &rule.name,
            Rule::Region(rule) => &rule.name,
        }
    }

    pub fn as_match(&self) -> Option<&MatchRule> {
        match self {
            Rule::Match(rule) => Some(rule),
            Rule::Region(_) => None,
        }
    }

    pub fn as_region(&self) -> Option<&RegionRule> {
        match self {
            Rule::Match(_) => None,
            Rule::Region(rule) => Some(rule),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRule {
    // empty means "no highlighting class"
    pub name: ScopeName,
    #[serde(rename = "match")]
    pub match_: RegExpString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captures: Option<Captures>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRule {
    pub name: ScopeName,
    pub begin: RegExpString,
    pub end: PartialRegExpString,
    // absent and empty are different things to the consumer, never emit
    // a placeholder for a field that wasn't supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<Rule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_captures: Option<Captures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_captures: Option<Captures>,
}

/// Compiles a pattern the way editors do, with Oniguruma's Ruby syntax.
///
/// In that syntax `\<` and `\>` are plain escaped characters rather than
/// word anchors, which the operator keywords rely on.
pub fn compile_pattern(pattern: &str) -> Result<onig::Regex, onig::Error> {
    onig::Regex::with_options(
        pattern,
        onig::RegexOptions::REGEX_OPTION_NONE,
        onig::Syntax::ruby(),
    )
}

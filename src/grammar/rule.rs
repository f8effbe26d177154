use super::{CaptureSpec, MatchRule, RegionRule, Rule};

/// Optional parts of a begin/end region. Anything left as `None` is omitted
/// from the output entirely.
#[derive(Debug, Clone, Default)]
pub struct RegionOptions {
    pub patterns: Option<Vec<Rule>>,
    pub begin_captures: Option<CaptureSpec>,
    pub end_captures: Option<CaptureSpec>,
}

/// A single-match rule. `pattern` is stored as written, not compiled.
pub fn match_rule(name: &str, pattern: &str, captures: Option<CaptureSpec>) -> Rule {
    Rule::Match(MatchRule {
        name: name.into(),
        match_: pattern.into(),
        captures: captures.as_ref().map(CaptureSpec::normalize),
    })
}

/// A region spanning from a `begin` match to the next `end` match.
pub fn region(name: &str, begin: &str, end: &str, options: RegionOptions) -> Rule {
    let RegionOptions {
        patterns,
        begin_captures,
        end_captures,
    } = options;

    Rule::Region(RegionRule {
        name: name.into(),
        begin: begin.into(),
        end: end.into(),
        patterns,
        begin_captures: begin_captures.as_ref().map(CaptureSpec::normalize),
        end_captures: end_captures.as_ref().map(CaptureSpec::normalize),
    })
}

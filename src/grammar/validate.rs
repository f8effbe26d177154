use snafu::{ResultExt, Snafu};

use super::{Grammar, RegionRule, Rule, compile_pattern};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{path}.{field} does not compile: \"{pattern}\""))]
    InvalidPattern {
        path: String,
        field: &'static str,
        pattern: String,
        source: onig::Error,
    },
}

impl Grammar {
    /// Compiles every pattern in the tree on its own, stopping at the first
    /// one that fails. Overlap between rules is not looked at.
    pub fn validate(&self) -> Result<(), Error> {
        for (idx, rule) in self.patterns.iter().enumerate() {
            validate_rule(&format!("patterns[{idx}]"), rule)?;
        }
        log::debug!("{} top-level rules compiled", self.patterns.len());
        Ok(())
    }
}

fn validate_rule(path: &str, rule: &Rule) -> Result<(), Error> {
    match rule {
        Rule::Match(rule) => check(path, "match", &rule.match_.0),
        Rule::Region(rule) => validate_region(path, rule),
    }
}

fn validate_region(path: &str, rule: &RegionRule) -> Result<(), Error> {
    check(path, "begin", &rule.begin.0)?;

    // backreferences only make sense once substituted with begin's captures
    if rule.end.has_backreferences() {
        log::debug!("{path}.end refers to begin captures, skipped");
    } else {
        check(path, "end", &rule.end.0)?;
    }

    for (idx, nested) in rule.patterns.iter().flatten().enumerate() {
        validate_rule(&format!("{path}.patterns[{idx}]"), nested)?;
    }

    Ok(())
}

fn check(path: &str, field: &'static str, pattern: &str) -> Result<(), Error> {
    log::debug!("compiling {path}.{field}: {pattern}");

    compile_pattern(pattern)
        .map(|_| ())
        .context(InvalidPatternSnafu {
            path,
            field,
            pattern,
        })
}

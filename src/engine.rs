//! Cascade evaluation.
//!
//! Each classification dimension is an ordered list of [`Rule`]s applied
//! to a normalized token. The first rule whose matcher accepts the token
//! decides the result; later rules never run and nothing re-evaluates
//! text an earlier rule claimed. Rule order therefore *is* the tie-break
//! policy, and the tables in `src/rules/` are written so that the more
//! specific pattern always precedes the broader one it overlaps with.

use regex::Regex;

/// How a single rule recognizes a token.
pub(crate) enum Matcher {
    /// Regex search over the normalized token.
    Regex(&'static Regex),
    /// Plain substring containment; cheaper than a regex and sufficient
    /// for tokens that cannot be confused with anything else.
    Contains(&'static str),
    /// Escape hatch for the rare condition a regex cannot express.
    Predicate(fn(&str) -> bool),
}

impl Matcher {
    fn is_match(&self, token: &str) -> bool {
        match self {
            Matcher::Regex(re) => re.is_match(token),
            Matcher::Contains(needle) => token.contains(needle),
            Matcher::Predicate(p) => p(token),
        }
    }
}

/// One cascade entry: a recognizer and the value it classifies to.
pub(crate) struct Rule<T> {
    pub name: &'static str,
    pub matcher: Matcher,
    pub out: T,
}

/// Returns the output of the first rule matching `token`, if any.
pub(crate) fn first_match<T: Copy>(rules: &[Rule<T>], token: &str) -> Option<T> {
    for rule in rules {
        if rule.matcher.is_match(token) {
            log::trace!("rule {} matched {token:?}", rule.name);
            return Some(rule.out);
        }
    }
    None
}

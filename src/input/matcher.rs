//! Pattern matching for autocomplete candidates
//!
//! A matcher decides whether a candidate string should be offered for the
//! current query. The default is a case-insensitive substring test; callers
//! can plug in any `Fn(&str, &str) -> bool` when building an entry.

use std::sync::{Arc, Mutex};

use regex::{Regex, RegexBuilder};

use crate::config::MatchMode;

/// A shared, pluggable match predicate: `matcher(query, candidate)`
pub type Matcher = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Case-insensitive containment. The empty query matches everything.
pub fn substring(query: &str, candidate: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    candidate.to_lowercase().contains(&query.to_lowercase())
}

/// Case-insensitive `starts_with`
pub fn prefix(query: &str, candidate: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    candidate.to_lowercase().starts_with(&query.to_lowercase())
}

/// Matcher that treats the query as a case-insensitive regular expression
/// searched anywhere in the candidate.
///
/// The compiled pattern is cached for the last query seen, so filtering a
/// whole candidate set compiles once per keystroke. A query that is not a
/// valid pattern matches nothing.
pub fn regex_matcher() -> Matcher {
    let cache: Mutex<Option<(String, Option<Regex>)>> = Mutex::new(None);
    Arc::new(move |query: &str, candidate: &str| {
        if query.is_empty() {
            return true;
        }
        let mut cached = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let stale = cached.as_ref().map_or(true, |(q, _)| q != query);
        if stale {
            let compiled = RegexBuilder::new(query).case_insensitive(true).build().ok();
            *cached = Some((query.to_string(), compiled));
        }
        matches!(cached.as_ref(), Some((_, Some(re))) if re.is_match(candidate))
    })
}

/// The default matcher used when none is supplied
pub fn default_matcher() -> Matcher {
    Arc::new(substring)
}

impl MatchMode {
    /// Build the matcher for this mode
    pub fn matcher(self) -> Matcher {
        match self {
            MatchMode::Substring => Arc::new(substring),
            MatchMode::Prefix => Arc::new(prefix),
            MatchMode::Regex => regex_matcher(),
        }
    }
}

/// Filter `candidates` down to those accepted by `matcher`, keeping order
pub fn filter(candidates: &[String], matcher: &Matcher, query: &str) -> Vec<String> {
    candidates
        .iter()
        .filter(|candidate| matcher(query, candidate.as_str()))
        .cloned()
        .collect()
}

//! Ordered matcher rules. Each heuristic chain (phone, date range, company,
//! institution) is a list of patterns tried in priority order; the first
//! pattern that matches anywhere decides the result, later ones are skipped.

use regex::Regex;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct PatternChain {
    rules: Vec<Regex>,
}

impl PatternChain {
    /// Builds a chain from patterns, dropping (and logging) any that fail to compile.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = patterns
            .into_iter()
            .filter_map(|p| match Regex::new(p.as_ref()) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!("Dropping matcher rule {:?}: {e}", p.as_ref());
                    None
                }
            })
            .collect();
        Self { rules }
    }

    /// First match of the first rule that matches. When a rule has a capture
    /// group, group 1 is returned instead of the whole match.
    pub fn first_match<'t>(&self, haystack: &'t str) -> Option<&'t str> {
        self.rules.iter().find_map(|rule| {
            let caps = rule.captures(haystack)?;
            caps.get(1).or_else(|| caps.get(0)).map(|m| m.as_str())
        })
    }
}

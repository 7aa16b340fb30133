//! Wildcard matching on blueprint identifiers.

use bpdocs_shared::{BpDocsError, Result};
use regex::Regex;

/// A compiled wildcard pattern: `*` matches any run, `?` a single character.
#[derive(Debug, Clone)]
pub struct BlueprintFilter {
    pattern: String,
    regex: Regex,
}

impl BlueprintFilter {
    pub fn new(pattern: &str) -> Result<Self> {
        let escaped = regex::escape(pattern)
            .replace(r"\*", ".*")
            .replace(r"\?", ".");
        let regex = Regex::new(&format!("^{escaped}$")).map_err(|e| {
            BpDocsError::validation(format!("invalid blueprint filter '{pattern}': {e}"))
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the whole identifier matches.
    pub fn matches(&self, id: &str) -> bool {
        self.regex.is_match(id)
    }
}

//! Pre-compiled keyword matching for one taxonomy category.
//!
//! A keyword matches as a whole word: `\b` boundaries on both sides, so `cap`
//! never matches inside `capable`. Hyphenated keywords such as
//! `running-shoes` are matched literally as one unit; a hyphen only acts as a
//! boundary at the keyword's edges.

use crate::{Error, Result};
use regex::{Regex, RegexSet};

/// Whole-word matcher for the keywords of a single category
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    /// Answers "does any keyword occur at all" in one pass
    any: RegexSet,
    /// One pattern per keyword, same order as `any`
    patterns: Vec<Regex>,
}

impl KeywordMatcher {
    /// Compile the matcher for `keywords`.
    ///
    /// Keywords are expected to be lower-cased already; the encoder folds the
    /// input text to lower case before matching.
    pub fn new(category: &str, keywords: &[String]) -> Result<Self> {
        let sources: Vec<String> = keywords.iter().map(|k| whole_word_pattern(k)).collect();

        let any = RegexSet::new(&sources).map_err(|e| Error::Matcher {
            category: category.to_string(),
            reason: e.to_string(),
        })?;

        let patterns = sources
            .iter()
            .map(|source| Regex::new(source))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::Matcher {
                category: category.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { any, patterns })
    }

    /// Number of keywords this matcher was built from
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Total whole-word hits over all keywords.
    ///
    /// Each keyword is counted independently with non-overlapping occurrences,
    /// so a text containing `running-shoes` credits both the `running-shoes`
    /// and the `shoes` keyword.
    pub fn count(&self, text: &str) -> usize {
        let hits = self.any.matches(text);
        if !hits.matched_any() {
            return 0;
        }

        hits.iter()
            .map(|i| self.patterns[i].find_iter(text).count())
            .sum()
    }
}

fn whole_word_pattern(keyword: &str) -> String {
    format!(r"\b{}\b", regex::escape(keyword))
}

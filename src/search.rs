//! Fun fact search
//!
//! Validates free text from the search entry and looks it up in the
//! [`FunFacts`] table. Validation failures are errors the caller shows as a
//! modal dialog; an unknown but well-formed term is an ordinary
//! [`SearchOutcome::Miss`].

use std::fmt;

use crate::content::FunFacts;
use crate::error::SearchError;

/// Result of a search that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Hit { term: String, fact: &'static str },
    Miss { term: String },
}

impl SearchOutcome {
    /// The normalized (trimmed, lowercase) term that was looked up
    pub fn term(&self) -> &str {
        match self {
            SearchOutcome::Hit { term, .. } | SearchOutcome::Miss { term } => term,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, SearchOutcome::Hit { .. })
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Hit { term, fact } => write!(f, "Fun fact for {}:\n{}", capitalize(term), fact),
            SearchOutcome::Miss { term } => write!(f, "No fun facts available for {}.", capitalize(term)),
        }
    }
}

/// Trim and lowercase raw input the way lookups expect it
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Check raw entry text, returning the normalized term on success.
///
/// Empty input and input equal to `placeholder` (ignoring case and
/// surrounding whitespace) are rejected first, then anything outside ASCII
/// letters, whitespace and hyphens.
pub fn validate(input: &str, placeholder: &str) -> Result<String, SearchError> {
    let term = normalize(input);

    if term.is_empty() || term == normalize(placeholder) {
        return Err(SearchError::Empty);
    }

    if !term.chars().all(is_search_char) {
        return Err(SearchError::InvalidCharacters);
    }

    Ok(term)
}

/// Validate `input` and look the resulting term up in `facts`
pub fn search(input: &str, placeholder: &str, facts: &FunFacts) -> Result<SearchOutcome, SearchError> {
    let term = validate(input, placeholder)?;

    Ok(match facts.get(&term) {
        Some(fact) => SearchOutcome::Hit { term, fact },
        None => SearchOutcome::Miss { term },
    })
}

fn is_search_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || c == '-'
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

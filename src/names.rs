//! Identifier Casing
//!
//! Property names arrive as the user typed them (`first_name`, `created-at`)
//! and are stored as camel-case identifiers (`firstName`, `createdAt`).
//!
//! The compiler only depends on the [`IdentifierCase`] trait, so callers can
//! inject their own transform. [`Camelizer`] is the default.

use std::collections::HashSet;

use crate::config::NamingConfig;

/// Converts a raw property name into the identifier stored in the schema.
///
/// Implementations must be pure: the same input always yields the same output.
pub trait IdentifierCase {
    fn normalize_identifier(&self, raw: &str) -> String;
}

impl<F> IdentifierCase for F
where
    F: Fn(&str) -> String,
{
    fn normalize_identifier(&self, raw: &str) -> String {
        self(raw)
    }
}

// =============================================================================
// Camelizer
// =============================================================================

/// Default camel-case transform.
///
/// Each run of separators is dropped and the character after it upper-cased.
/// The first word starts lower-case and is otherwise left as written, so
/// `firstName`, `FirstName` and `first_name` all become `firstName`.
#[derive(Debug, Clone)]
pub struct Camelizer {
    separators: Vec<char>,

    /// Upper-cased words that are emitted fully upper-case (e.g. `ID`)
    acronyms: HashSet<String>,
}

impl Camelizer {
    pub fn new(naming: &NamingConfig) -> Self {
        Self {
            separators: naming.separators.clone(),
            acronyms: naming.acronyms.iter().map(|a| a.to_uppercase()).collect(),
        }
    }

    fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Lower-case the leading character of the first word
    fn lead_word(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_lowercase().chain(chars).collect(),
        }
    }

    /// Apply casing to a later word, preserving acronyms
    fn case_word(&self, word: &str) -> String {
        let upper = word.to_uppercase();
        if self.acronyms.contains(&upper) {
            return upper;
        }

        let mut chars = word.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().chain(chars).collect(),
        }
    }

    fn flush_word(&self, result: &mut String, word: &str) {
        if result.is_empty() {
            result.push_str(&Self::lead_word(word));
        } else {
            result.push_str(&self.case_word(word));
        }
    }
}

impl Default for Camelizer {
    fn default() -> Self {
        Self::new(&NamingConfig::default())
    }
}

impl IdentifierCase for Camelizer {
    fn normalize_identifier(&self, raw: &str) -> String {
        let mut result = String::with_capacity(raw.len());
        let mut current_word = String::new();

        for c in raw.chars() {
            if self.is_separator(c) {
                if !current_word.is_empty() {
                    self.flush_word(&mut result, &current_word);
                    current_word.clear();
                }
            } else {
                current_word.push(c);
            }
        }

        if !current_word.is_empty() {
            self.flush_word(&mut result, &current_word);
        }

        result
    }
}

//! Free-text tokenizer for listing fields.
//!
//! Text is lowercased and split on every non-word character (a word
//! character is a Unicode alphanumeric or `_`). Stopwords and tokens below
//! the configured minimum length are dropped. Absent or empty text yields
//! no tokens.

use crate::config::TokenizerConfig;
use data_loader::StopwordSet;
use std::collections::HashSet;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize `text`, keeping token order.
pub fn tokenize(text: &str, stopwords: &StopwordSet, config: &TokenizerConfig) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .filter(|token| token.chars().count() >= config.min_token_length)
        .filter(|token| !stopwords.contains(token))
        .map(str::to_string)
        .collect()
}

/// A tokenizer bound to one stopword set and configuration.
///
/// Built once per ranking pass so the stopwords flow in as an explicit
/// input instead of shared state.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    stopwords: &'a StopwordSet,
    config: TokenizerConfig,
}

impl<'a> Tokenizer<'a> {
    pub fn new(stopwords: &'a StopwordSet, config: TokenizerConfig) -> Self {
        Self { stopwords, config }
    }

    pub fn tokens(&self, text: &str) -> Vec<String> {
        tokenize(text, self.stopwords, &self.config)
    }

    /// Distinct terms of `text`
    pub fn term_set(&self, text: &str) -> HashSet<String> {
        self.tokens(text).into_iter().collect()
    }
}

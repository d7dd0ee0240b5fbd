use rand::Rng;
use serde::Serialize;

use super::error::ConfigError;

/// Candidate words for a round. Never empty, never holds a blank word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Builds a pool from raw entries. Entries are trimmed and exact duplicates
    /// are dropped, keeping the first occurrence so the pool order is stable.
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool: Vec<String> = Vec::new();
        for (index, raw) in words.into_iter().enumerate() {
            let word = raw.as_ref().trim();
            if word.is_empty() {
                return Err(ConfigError::BlankWord { index });
            }
            if !pool.iter().any(|w| w == word) {
                pool.push(word.to_string());
            }
        }

        if pool.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        Ok(Self { words: pool })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed pool.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        let needle = word.trim().to_lowercase();
        self.words.iter().any(|w| w.to_lowercase() == needle)
    }

    /// Uniform pick with replacement.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

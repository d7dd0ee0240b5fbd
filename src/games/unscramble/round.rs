use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::{ConfigError, RoundError};
use super::pool::WordPool;
use super::scramble::scramble;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceResult {
    pub finished: bool,
}

/// Everything the screen is allowed to see about a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub scrambled_word: String,
    pub score: u32,
    pub words_attempted: u32,
    pub max_words: u32,
    pub status: RoundStatus,
}

#[derive(Debug, Clone, Default)]
struct CurrentWord {
    original: String,
    scrambled: String,
}

/// Round progression and scoring for one player.
///
/// A round shows `max_words` words. The first word is drawn on
/// `initialize`; every `next_word` counts the current word as attempted and,
/// unless that was the last one, draws another. Words are drawn without
/// replacement until the pool runs dry, then with replacement.
#[derive(Debug)]
pub struct RoundEngine {
    pool: WordPool,
    max_words: u32,
    score_increment: u32,
    remaining: Vec<String>,
    current: CurrentWord,
    words_attempted: u32,
    score: u32,
    status: RoundStatus,
    rng: StdRng,
}

impl RoundEngine {
    /// Starts a round seeded from the OS.
    pub fn initialize<I, S>(
        words: I,
        max_words: u32,
        score_increment: u32,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, max_words, score_increment, StdRng::from_os_rng())
    }

    /// Starts a round with a deterministic word order and scrambles.
    pub fn initialize_with_seed<I, S>(
        words: I,
        max_words: u32,
        score_increment: u32,
        seed: u64,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, max_words, score_increment, StdRng::seed_from_u64(seed))
    }

    fn with_rng<I, S>(
        words: I,
        max_words: u32,
        score_increment: u32,
        rng: StdRng,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pool = WordPool::new(words)?;
        if max_words < 1 {
            return Err(ConfigError::ZeroMaxWords);
        }

        let mut engine = Self {
            pool,
            max_words,
            score_increment,
            remaining: Vec::new(),
            current: CurrentWord::default(),
            words_attempted: 0,
            score: 0,
            status: RoundStatus::InProgress,
            rng,
        };
        engine.start_round();
        info!(
            pool_size = engine.pool.len(),
            max_words, score_increment, "round initialized"
        );
        Ok(engine)
    }

    /// Throws the current round away and starts over with the same settings.
    pub fn reinitialize(&mut self) {
        let previous_score = self.score;
        self.start_round();
        info!(previous_score, "round reinitialized");
    }

    /// Checks `text` against the current word, ignoring case and surrounding
    /// whitespace. Never advances to the next word.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessResult, RoundError> {
        self.ensure_in_progress()?;

        let correct = text.trim().to_lowercase() == self.current.original.to_lowercase();
        if correct {
            self.score = self.score.saturating_add(self.score_increment);
        }
        debug!(correct, score = self.score, "guess submitted");
        Ok(GuessResult { correct })
    }

    /// Counts the current word as attempted, then either ends the round or
    /// draws the next word.
    pub fn next_word(&mut self) -> Result<AdvanceResult, RoundError> {
        self.ensure_in_progress()?;

        self.words_attempted += 1;
        if self.words_attempted == self.max_words {
            self.status = RoundStatus::Finished;
            info!(score = self.score, words = self.words_attempted, "round finished");
            return Ok(AdvanceResult { finished: true });
        }

        self.current = self.draw();
        Ok(AdvanceResult { finished: false })
    }

    pub fn scrambled_word(&self) -> &str {
        &self.current.scrambled
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn words_attempted(&self) -> u32 {
        self.words_attempted
    }

    pub fn max_words(&self) -> u32 {
        self.max_words
    }

    pub fn score_increment(&self) -> u32 {
        self.score_increment
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == RoundStatus::Finished
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            scrambled_word: self.current.scrambled.clone(),
            score: self.score,
            words_attempted: self.words_attempted,
            max_words: self.max_words,
            status: self.status,
        }
    }

    fn ensure_in_progress(&self) -> Result<(), RoundError> {
        match self.status {
            RoundStatus::InProgress => Ok(()),
            RoundStatus::Finished => Err(RoundError::Finished),
        }
    }

    fn start_round(&mut self) {
        self.words_attempted = 0;
        self.score = 0;
        self.status = RoundStatus::InProgress;
        self.remaining = self.pool.words().to_vec();
        self.remaining.shuffle(&mut self.rng);
        self.current = self.draw();
    }

    fn draw(&mut self) -> CurrentWord {
        let original = match self.remaining.pop() {
            Some(word) => word,
            None => {
                warn!(pool_size = self.pool.len(), "word pool exhausted, drawing with replacement");
                self.pool.pick(&mut self.rng).to_string()
            }
        };
        let scrambled = scramble(&original, &mut self.rng);
        debug!(word_number = self.words_attempted + 1, %scrambled, "next word");
        CurrentWord { original, scrambled }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::unscramble::scramble::is_anagram;

    fn engine(words: &[&str], max_words: u32) -> RoundEngine {
        RoundEngine::initialize_with_seed(words.iter().copied(), max_words, 20, 5).unwrap()
    }

    #[test]
    fn initialize_starts_clean() {
        let round = engine(&["apple", "banana"], 2);
        assert_eq!(round.score(), 0);
        assert_eq!(round.words_attempted(), 0);
        assert_eq!(round.max_words(), 2);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert!(round.pool().contains(&round.current.original));
        assert!(is_anagram(&round.current.original, round.scrambled_word()));
        assert_ne!(round.current.original, round.scrambled_word());
    }

    #[test]
    fn initialize_rejects_bad_config() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(
            RoundEngine::initialize(empty, 3, 20).unwrap_err(),
            ConfigError::EmptyPool
        );
        assert_eq!(
            RoundEngine::initialize(["apple"], 0, 20).unwrap_err(),
            ConfigError::ZeroMaxWords
        );
    }

    #[test]
    fn correct_guess_scores_once_per_submission_and_keeps_count() {
        let mut round = engine(&["apple"], 3);
        let guess = format!("  {}  ", round.current.original.to_uppercase());

        assert_eq!(round.submit_guess(&guess), Ok(GuessResult { correct: true }));
        assert_eq!(round.score(), 20);
        assert_eq!(round.words_attempted(), 0);
    }

    #[test]
    fn wrong_guess_changes_nothing() {
        let mut round = engine(&["apple", "banana"], 3);
        let before = round.snapshot();

        assert_eq!(round.submit_guess("wrong"), Ok(GuessResult { correct: false }));
        assert_eq!(round.snapshot(), before);
    }

    #[test]
    fn scrambled_text_is_not_a_correct_guess() {
        let mut round = engine(&["apple"], 1);
        let scrambled = round.scrambled_word().to_string();
        assert!(!round.submit_guess(&scrambled).unwrap().correct);
    }

    #[test]
    fn nth_advance_finishes_the_round() {
        let mut round = engine(&["apple", "banana", "cherry"], 3);
        assert_eq!(round.next_word(), Ok(AdvanceResult { finished: false }));
        assert_eq!(round.next_word(), Ok(AdvanceResult { finished: false }));
        assert_eq!(round.next_word(), Ok(AdvanceResult { finished: true }));
        assert_eq!(round.words_attempted(), 3);
        assert!(round.is_finished());
    }

    #[test]
    fn finishing_keeps_the_last_word_on_screen() {
        let mut round = engine(&["apple", "banana"], 1);
        let shown = round.scrambled_word().to_string();
        assert!(round.next_word().unwrap().finished);
        assert_eq!(round.scrambled_word(), shown);
    }

    #[test]
    fn finished_round_rejects_play_until_reinitialized() {
        let mut round = engine(&["apple"], 1);
        round.next_word().unwrap();

        assert_eq!(round.submit_guess("apple"), Err(RoundError::Finished));
        assert_eq!(round.next_word(), Err(RoundError::Finished));

        round.reinitialize();
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.score(), 0);
        assert_eq!(round.words_attempted(), 0);
        assert!(round.submit_guess("apple").unwrap().correct);
    }

    #[test]
    fn words_are_not_repeated_while_the_pool_lasts() {
        let words = ["apple", "banana", "cherry", "damson", "elder"];
        let mut round = engine(&words, 5);
        let mut seen = vec![round.current.original.clone()];
        while !round.next_word().unwrap().finished {
            seen.push(round.current.original.clone());
        }
        seen.sort();
        assert_eq!(seen, words);
    }

    #[test]
    fn exhausted_pool_resamples_from_the_pool() {
        let mut round = engine(&["apple", "banana"], 6);
        for _ in 0..5 {
            assert!(!round.next_word().unwrap().finished);
            assert!(round.pool().contains(&round.current.original));
            assert!(is_anagram(&round.current.original, round.scrambled_word()));
        }
        assert!(round.next_word().unwrap().finished);
    }

    #[test]
    fn score_is_a_multiple_of_the_increment() {
        let mut round =
            RoundEngine::initialize_with_seed(["apple", "banana", "cherry"], 3, 7, 99).unwrap();
        loop {
            let answer = round.current.original.clone();
            round.submit_guess(&answer).unwrap();
            if round.next_word().unwrap().finished {
                break;
            }
        }
        assert_eq!(round.score(), 21);
        assert_eq!(round.score() % round.score_increment(), 0);
    }

    #[test]
    fn same_seed_same_round() {
        let a = engine(&["apple", "banana", "cherry"], 3);
        let b = engine(&["apple", "banana", "cherry"], 3);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn snapshot_serializes_for_observers() {
        let round = engine(&["apple"], 2);
        let json = serde_json::to_value(round.snapshot()).unwrap();
        assert_eq!(json["score"], 0);
        assert_eq!(json["max_words"], 2);
        assert_eq!(json["status"], "InProgress");
    }
}

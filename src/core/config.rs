use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_WORDS: u32 = 10;
pub const DEFAULT_SCORE_INCREMENT: u32 = 20;

const DEFAULT_WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise", "balloon", "basket",
    "bench", "best", "birthday", "book", "briefcase", "camera", "camping", "candle", "cat",
    "cauliflower", "chat", "children", "class", "classic", "classroom", "coffee", "colorful",
    "cook", "cool", "copy", "cream", "crisis", "cry", "crypto", "dance", "daytime", "dinosaur",
    "dolphin", "donkey", "dream", "duck", "earth", "eagle", "easy", "elephant", "energy",
    "engine", "envelope", "evening", "fabric", "family", "forest", "garden", "giraffe",
    "guitar", "harbor", "island", "jungle", "kitchen", "ladder", "lemon", "market", "meadow",
    "monkey", "mountain", "number", "orange", "pencil", "planet", "rabbit", "river", "rocket",
    "summer", "tiger", "window", "winter", "yellow",
];

/// Game settings, loaded from JSON. Missing fields fall back to defaults.
///
/// Values are not checked here; building the round rejects an empty pool or
/// a zero-length round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub word_pool: Vec<String>,
    pub max_words: u32,
    pub score_increment: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_pool: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            max_words: DEFAULT_MAX_WORDS,
            score_increment: DEFAULT_SCORE_INCREMENT,
        }
    }
}

impl GameConfig {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        let cfg: GameConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing JSON config '{}'", path.display()))?;
        Ok(cfg)
    }

    /// Apply command-line overrides in memory.
    pub fn with_overrides(mut self, max_words: Option<u32>, score_increment: Option<u32>) -> Self {
        if let Some(n) = max_words {
            self.max_words = n;
        }
        if let Some(inc) = score_increment {
            self.score_increment = inc;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_game() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.max_words, 10);
        assert_eq!(cfg.score_increment, 20);
        assert!(cfg.word_pool.len() >= cfg.max_words as usize);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{ "max_words": 3 }"#).unwrap();
        assert_eq!(cfg.max_words, 3);
        assert_eq!(cfg.score_increment, DEFAULT_SCORE_INCREMENT);
        assert_eq!(cfg.word_pool, GameConfig::default().word_pool);
    }

    #[test]
    fn load_reads_a_file() {
        let path = std::env::temp_dir().join(format!("unscramble-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "word_pool": ["apple", "banana"], "score_increment": 5 }"#).unwrap();

        let cfg = GameConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(cfg.word_pool, ["apple", "banana"]);
        assert_eq!(cfg.score_increment, 5);
        assert_eq!(cfg.max_words, DEFAULT_MAX_WORDS);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = GameConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("reading config file"));
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let cfg = GameConfig::default().with_overrides(Some(4), None);
        assert_eq!(cfg.max_words, 4);
        assert_eq!(cfg.score_increment, DEFAULT_SCORE_INCREMENT);
    }
}

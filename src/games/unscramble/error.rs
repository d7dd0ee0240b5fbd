use thiserror::Error;

/// Rejected round configuration. Raised only while building a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word pool is empty")]
    EmptyPool,
    #[error("word pool entry {index} is blank")]
    BlankWord { index: usize },
    #[error("a round needs at least one word (max_words was 0)")]
    ZeroMaxWords,
}

/// Operation invoked in a state that does not allow it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round is over; only `reinitialize` is accepted until then.
    #[error("round is finished, reinitialize to keep playing")]
    Finished,
}

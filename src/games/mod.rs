pub mod unscramble;

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const UNSCRAMBLE: GameInfo = GameInfo {
    id: "unscramble",
    name: "Unscramble",
    description: "Rebuild the scrambled word before the round runs out",
};

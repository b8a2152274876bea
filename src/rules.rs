//! Fixed numbers of the Pig game and of the reference tournament.

/// Banked total that ends a game.
pub const WINNING_SCORE: u32 = 100;
/// Games played by every pair of strategies.
pub const GAMES_PER_SERIES: usize = 100;
/// Faces on the standard die.
pub const DIE_FACES: u32 = 6;
/// Face that ends the turn and forfeits unbanked points.
pub const BUST_FACE: u32 = 1;
/// Number of sides in a game.
pub const SIDES: usize = 2;

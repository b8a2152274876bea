use serde::{Deserialize, Serialize};

/// Snapshot of a turn in progress, seen from the side that acts next.
///
/// `player` and `opponent` are banked totals from completed turns and
/// `this_turn` holds the unbanked points of the current turn.
///
/// Invariant: every turn-ending transition swaps `player` and `opponent`, so
/// `player` always names whichever side acts next. Exactly one swap per turn
/// end; `this_turn` is zero after it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
    pub this_turn: u32,
}

impl Score {
    pub const fn new(player: u32, opponent: u32, this_turn: u32) -> Self {
        Self {
            player,
            opponent,
            this_turn,
        }
    }

    /// Score at the opening of a game.
    pub const fn start() -> Self {
        Self::new(0, 0, 0)
    }

    /// Banked plus unbanked points of the acting side. Point totals saturate
    /// at `u32::MAX` here and in every transition.
    #[inline]
    pub fn running_total(&self) -> u32 {
        self.player.saturating_add(self.this_turn)
    }

    /// Hands control to the other side, crediting `banked` to the side that
    /// just finished its turn.
    #[inline]
    pub(crate) fn end_turn(&self, banked: u32) -> Self {
        Self::new(self.opponent, banked, 0)
    }
}

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::rules::BUST_FACE;
use crate::score::Score;

/// Zero-based index of a side within a game (0 or 1).
pub type Side = usize;

/// Decision available to the acting side.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// Roll the die: bust on a one, otherwise add the face to the turn.
    Roll,
    /// Bank the points of this turn and pass control.
    Stay,
}

/// Result of applying a [`TurnAction`] to a [`Score`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub score: Score,
    /// True when control passed to the other side; `score` is already swapped.
    pub turn_over: bool,
}

impl TurnAction {
    pub fn apply<R: Rng + ?Sized>(self, score: Score, die: &Die, rng: &mut R) -> Transition {
        match self {
            TurnAction::Roll => roll(score, die, rng),
            TurnAction::Stay => stay(score),
        }
    }
}

impl fmt::Display for TurnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnAction::Roll => f.write_str("roll"),
            TurnAction::Stay => f.write_str("stay"),
        }
    }
}

/// Rolls once. A bust discards `this_turn` and passes control.
pub fn roll<R: Rng + ?Sized>(score: Score, die: &Die, rng: &mut R) -> Transition {
    let outcome = die.roll(rng);
    if outcome == BUST_FACE {
        return Transition {
            score: score.end_turn(score.player),
            turn_over: true,
        };
    }
    Transition {
        score: Score::new(
            score.player,
            score.opponent,
            score.this_turn.saturating_add(outcome),
        ),
        turn_over: false,
    }
}

/// Banks `this_turn` and passes control.
pub fn stay(score: Score) -> Transition {
    Transition {
        score: score.end_turn(score.running_total()),
        turn_over: true,
    }
}

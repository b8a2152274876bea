use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::action::Side;
use crate::die::Die;
use crate::error::GameError;
use crate::rules::{SIDES, WINNING_SCORE};
use crate::score::Score;
use crate::strategy::Strategy;

/// Configuration shared by every game a [`Game`] plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub winning_score: u32,
    pub die: Die,
    /// Optional cap on completed turns; `None` plays until someone wins.
    pub max_turns: Option<usize>,
}

impl GameConfig {
    pub fn new(winning_score: u32) -> Result<Self, GameError> {
        if winning_score == 0 {
            return Err(GameError::InvalidConfiguration(
                "winning score must be positive",
            ));
        }
        Ok(Self {
            winning_score,
            die: Die::standard(),
            max_turns: None,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_score: WINNING_SCORE,
            die: Die::standard(),
            max_turns: None,
        }
    }
}

/// Builder for non-default rule sets.
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    pub fn with_winning_score(mut self, winning_score: u32) -> Self {
        self.config.winning_score = winning_score;
        self
    }

    pub fn with_die(mut self, die: Die) -> Self {
        self.config.die = die;
        self
    }

    /// Abort games that run past `max_turns` completed turns.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.config.max_turns = Some(max_turns);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::new(self.config)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of one finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Side,
    /// Side that took the opening turn.
    pub first: Side,
    /// Completed turns before the winning one.
    pub turns: usize,
    pub decisions: usize,
    /// Final score from the winner's point of view.
    pub score: Score,
}

/// Pig simulator: drives two strategies until one reaches the winning score.
#[derive(Clone, Copy, Debug)]
pub struct Game {
    config: GameConfig,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        if config.winning_score == 0 {
            return Err(GameError::InvalidConfiguration(
                "winning score must be positive",
            ));
        }
        if config.max_turns == Some(0) {
            return Err(GameError::InvalidConfiguration(
                "turn limit must be positive",
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn winning_score(&self) -> u32 {
        self.config.winning_score
    }

    /// Plays one game between `side0` and `side1`; the opening side is drawn
    /// from `rng`.
    ///
    /// The game ends as soon as the acting side's banked plus unbanked points
    /// reach the winning score, so a lead can win mid-turn without staying.
    pub fn play<R: Rng + ?Sized>(
        &self,
        side0: &dyn Strategy,
        side1: &dyn Strategy,
        rng: &mut R,
    ) -> Result<Outcome, GameError> {
        let strategies: [&dyn Strategy; SIDES] = [side0, side1];
        let first: Side = rng.gen_range(0..SIDES);
        let mut current = first;
        let mut score = Score::start();
        let mut turns = 0usize;
        let mut decisions = 0usize;

        while score.running_total() < self.config.winning_score {
            let action = strategies[current].choose(&score);
            let transition = action.apply(score, &self.config.die, rng);
            log::trace!(
                "side {current} {action}: {:?} -> {:?}",
                score,
                transition.score
            );
            score = transition.score;
            decisions += 1;
            if transition.turn_over {
                current = 1 - current;
                turns += 1;
                if let Some(limit) = self.config.max_turns {
                    if turns > limit {
                        return Err(GameError::TurnLimitExceeded(limit));
                    }
                }
            }
        }

        log::trace!("side {current} wins after {turns} turns at {:?}", score);
        Ok(Outcome {
            winner: current,
            first,
            turns,
            decisions,
            score,
        })
    }
}

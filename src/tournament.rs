//! Round-robin series between every pair of strategies.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::Game;
use crate::strategy::Strategy;

/// Win tally of a finished round-robin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    /// Wins per strategy, indexed like the input list.
    pub wins: Vec<usize>,
    pub games_per_series: usize,
    /// Games each strategy played: one series against every other strategy.
    pub games_per_strategy: usize,
}

impl Standings {
    fn empty(strategies: usize, games_per_series: usize) -> Self {
        Self {
            wins: vec![0; strategies],
            games_per_series,
            games_per_strategy: games_per_series * strategies.saturating_sub(1),
        }
    }

    pub fn len(&self) -> usize {
        self.wins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    pub fn losses(&self, index: usize) -> usize {
        self.games_per_strategy - self.wins[index]
    }

    pub fn total_wins(&self) -> usize {
        self.wins.iter().sum()
    }

    /// Games played in the whole tournament: `g * n * (n - 1) / 2`.
    pub fn total_games(&self) -> usize {
        self.games_per_strategy * self.len() / 2
    }

    /// Index of the strategy with the most wins (lowest index on ties).
    pub fn leader(&self) -> Option<usize> {
        self.wins
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(idx, _)| idx)
    }
}

/// Plays `games_per_series` games for every unordered pair of strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRobin {
    games_per_series: usize,
}

impl RoundRobin {
    pub fn new(games_per_series: usize) -> Result<Self, GameError> {
        if games_per_series == 0 {
            return Err(GameError::InvalidConfiguration(
                "games per series must be positive",
            ));
        }
        Ok(Self { games_per_series })
    }

    pub fn games_per_series(&self) -> usize {
        self.games_per_series
    }

    /// For each pair `i < j`, strategy `i` plays as side 0 and `j` as side 1.
    /// Fewer than two strategies yields an all-zero tally.
    pub fn run<S: Strategy, R: Rng + ?Sized>(
        &self,
        game: &Game,
        strategies: &[S],
        rng: &mut R,
    ) -> Result<Standings, GameError> {
        let mut standings = Standings::empty(strategies.len(), self.games_per_series);
        log::info!(
            "round-robin: {} strategies, {} games per series, winning score {}",
            strategies.len(),
            self.games_per_series,
            game.winning_score()
        );

        for (i, first) in strategies.iter().enumerate() {
            for (j, second) in strategies.iter().enumerate().skip(i + 1) {
                let mut series = [0usize; 2];
                for _ in 0..self.games_per_series {
                    let outcome = game.play(first, second, rng)?;
                    series[outcome.winner] += 1;
                }
                standings.wins[i] += series[0];
                standings.wins[j] += series[1];
                log::debug!(
                    "{} vs {}: {}-{}",
                    first.label(),
                    second.label(),
                    series[0],
                    series[1]
                );
            }
        }

        log::info!(
            "round-robin finished: {} games played",
            standings.total_wins()
        );
        Ok(standings)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::game::GameConfig;
    use crate::strategy::{StayAtK, stay_at_k_family};

    #[test]
    fn test_zero_games_rejected() {
        assert!(RoundRobin::new(0).is_err());
    }

    #[test]
    fn test_wins_sum_to_all_games() -> Result<(), GameError> {
        let game = Game::new(GameConfig::default())?;
        let mut rng = StdRng::seed_from_u64(17);
        let strategies = stay_at_k_family(5);
        let standings = RoundRobin::new(10)?.run(&game, &strategies, &mut rng)?;
        assert_eq!(standings.len(), 6);
        assert_eq!(standings.games_per_strategy, 50);
        assert_eq!(standings.total_wins(), 10 * 6 * 5 / 2);
        assert_eq!(standings.total_games(), standings.total_wins());
        for idx in 0..standings.len() {
            assert_eq!(standings.wins[idx] + standings.losses(idx), 50);
        }
        Ok(())
    }

    #[test]
    fn test_single_strategy_plays_nothing() -> Result<(), GameError> {
        let game = Game::new(GameConfig::default())?;
        let mut rng = StdRng::seed_from_u64(1);
        let standings = RoundRobin::new(100)?.run(&game, &[StayAtK::new(20)], &mut rng)?;
        assert_eq!(standings.wins, vec![0]);
        assert_eq!(standings.games_per_strategy, 0);
        assert_eq!(standings.total_games(), 0);

        let none: [StayAtK; 0] = [];
        let standings = RoundRobin::new(100)?.run(&game, &none, &mut rng)?;
        assert!(standings.is_empty());
        assert_eq!(standings.leader(), None);
        Ok(())
    }

    #[test]
    fn test_leader_prefers_lowest_index_on_tie() {
        let standings = Standings {
            wins: vec![3, 7, 7, 1],
            games_per_series: 5,
            games_per_strategy: 15,
        };
        assert_eq!(standings.leader(), Some(1));
    }
}

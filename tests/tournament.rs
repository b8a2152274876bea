use rand::SeedableRng;
use rand::rngs::StdRng;

use pigsim::rules::WINNING_SCORE;
use pigsim::{Game, GameConfig, GameError, RoundRobin, StayAtK, stay_at_k_family};

#[test]
fn games_always_terminate_with_a_winner() -> Result<(), GameError> {
    let game = Game::new(GameConfig::default())?;
    let mut rng = StdRng::seed_from_u64(0xFEED);
    // Two sides that both stay at zero never score, so k starts at 1.
    let family = stay_at_k_family(WINNING_SCORE);
    for a in family.iter().skip(1).step_by(10) {
        for b in family.iter().skip(1).step_by(15) {
            let outcome = game.play(a, b, &mut rng)?;
            assert!(outcome.winner == 0 || outcome.winner == 1);
            assert!(outcome.decisions > outcome.turns);
        }
    }
    Ok(())
}

#[test]
fn opening_side_is_random() -> Result<(), GameError> {
    let game = Game::builder().with_winning_score(20).build()?;
    let mut rng = StdRng::seed_from_u64(77);
    let s = StayAtK::new(10);
    let mut opened = [0usize; 2];
    for _ in 0..1000 {
        opened[game.play(&s, &s, &mut rng)?.first] += 1;
    }
    assert!(opened[0] > 400 && opened[1] > 400, "{opened:?}");
    Ok(())
}

#[test]
fn moderate_threshold_beats_extremes() -> Result<(), GameError> {
    let game = Game::new(GameConfig::default())?;
    let mut rng = StdRng::seed_from_u64(2024);
    let strategies = [StayAtK::new(0), StayAtK::new(20), StayAtK::new(100)];
    let standings = RoundRobin::new(200)?.run(&game, &strategies, &mut rng)?;

    assert_eq!(standings.total_wins(), 200 * 3);
    // Staying at zero never banks a point.
    assert_eq!(standings.wins[0], 0);
    assert_eq!(standings.leader(), Some(1));
    assert!(standings.win_rate(1) > 0.9, "{:?}", standings.wins);
    Ok(())
}

#[test]
fn full_family_tournament_is_consistent() -> Result<(), GameError> {
    let game = Game::builder().with_winning_score(30).build()?;
    let mut rng = StdRng::seed_from_u64(5);
    let strategies = stay_at_k_family(30);
    let standings = RoundRobin::new(4)?.run(&game, &strategies, &mut rng)?;

    let n = strategies.len();
    assert_eq!(standings.games_per_strategy, 4 * (n - 1));
    assert_eq!(standings.total_wins(), 4 * n * (n - 1) / 2);
    assert_eq!(standings.report_lines().len(), n);
    Ok(())
}

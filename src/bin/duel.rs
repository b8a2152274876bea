use std::error::Error;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pigsim::rules::{GAMES_PER_SERIES, WINNING_SCORE};
use pigsim::{Die, Game, Strategy, create_strategy_from_spec, ratio_string};

const DEFAULT_SEED: u64 = 0xD0E1_5EED_0000_0002;

#[derive(Parser, Debug)]
#[command(
    name = "duel",
    about = "Play a series of Pig games between two strategies."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = GAMES_PER_SERIES)]
    games: usize,

    /// Banked total that wins a game
    #[arg(short = 'w', long = "winning-score", default_value_t = WINNING_SCORE)]
    winning_score: u32,

    /// RNG seed
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Safety cap on turns per game; exceeding it aborts the run
    #[arg(long = "max-turns")]
    max_turns: Option<usize>,

    /// Strategy specs for side 0 and side 1: stay:<k> or roll
    #[arg(num_args = 2, required = true)]
    strategies: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.games == 0 {
        return Err("games must be positive".into());
    }
    let side0 = create_strategy_from_spec(&args.strategies[0])?;
    let side1 = create_strategy_from_spec(&args.strategies[1])?;

    let die = Die::standard();
    let mut rng = StdRng::seed_from_u64(args.seed);
    die.validate_source(&mut rng, 10_000)?;

    let mut builder = Game::builder()
        .with_winning_score(args.winning_score)
        .with_die(die);
    if let Some(limit) = args.max_turns {
        builder = builder.with_max_turns(limit);
    }
    let game = builder.build()?;

    let mut wins = [0usize; 2];
    let mut opened_and_won = 0usize;
    let mut turns = 0usize;
    for _ in 0..args.games {
        let outcome = game.play(&side0, &side1, &mut rng)?;
        wins[outcome.winner] += 1;
        if outcome.first == outcome.winner {
            opened_and_won += 1;
        }
        turns += outcome.turns + 1;
    }

    println!("{} vs {}:", side0.label(), side1.label());
    println!("  {}", ratio_string(&wins));
    println!(
        "  opening side won {}",
        ratio_string(&[opened_and_won, args.games - opened_and_won])
    );
    println!(
        "  average turns per game: {:.2}",
        turns as f64 / args.games as f64
    );
    Ok(())
}

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser;
use plotters::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pigsim::rules::{GAMES_PER_SERIES, WINNING_SCORE};
use pigsim::{Die, Game, RoundRobin, Standings, stay_at_k_family};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0x0016_5EED_D1CE_0001;

#[derive(Parser, Debug)]
#[command(
    name = "tournament",
    about = "Play every \"stay at k\" strategy against every other and report win ratios."
)]
struct Args {
    /// Banked total that wins a game; strategies stay at 0..=winning-score
    #[arg(short = 'w', long = "winning-score", default_value_t = WINNING_SCORE)]
    winning_score: u32,

    /// Games played by each pair of strategies
    #[arg(short = 'g', long = "games", default_value_t = GAMES_PER_SERIES)]
    games: usize,

    /// RNG seed for the whole tournament
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Safety cap on turns per game; exceeding it aborts the run
    #[arg(long = "max-turns")]
    max_turns: Option<usize>,

    /// Rolls drawn at startup to check the random source covers every face
    #[arg(long = "validate-samples", default_value_t = 10_000)]
    validate_samples: usize,

    /// Optional PNG bar chart of win rate per threshold
    #[arg(short = 'o', long = "chart")]
    chart: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let die = Die::standard();
    let mut rng = StdRng::seed_from_u64(args.seed);
    die.validate_source(&mut rng, args.validate_samples)?;

    let mut builder = Game::builder()
        .with_winning_score(args.winning_score)
        .with_die(die);
    if let Some(limit) = args.max_turns {
        builder = builder.with_max_turns(limit);
    }
    let game = builder.build()?;

    // One strategy for each possible staying point from 0 to the winning score.
    let strategies = stay_at_k_family(args.winning_score);
    let started = Instant::now();
    let standings = RoundRobin::new(args.games)?.run(&game, &strategies, &mut rng)?;
    log::info!(
        "{} games in {:.2?}",
        standings.total_games(),
        started.elapsed()
    );

    for line in standings.report_lines() {
        println!("{line}");
    }
    if let Some(best) = standings.leader() {
        println!(
            "\nBest threshold: stay at {best} ({:.1}% wins)",
            standings.win_rate(best) * 100.0
        );
    }

    if let Some(out) = &args.chart {
        render_bar_chart(out, &standings)?;
        println!("\nChart written to {}", out.display());
    }
    Ok(())
}

fn render_bar_chart(out: &Path, standings: &Standings) -> Result<(), Box<dyn Error>> {
    let values: Vec<f64> = (0..standings.len())
        .map(|k| standings.win_rate(k) * 100.0)
        .collect();

    let root = BitMapBackend::new(out, (1200, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Pig win rate by stay threshold",
            ("sans-serif", 28).into_font(),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..values.len(), 0.0f64..100.0)
        .map_err(|e| format!("{e}"))?;

    chart
        .configure_mesh()
        .y_desc("Win rate (%)")
        .x_desc("Stay at k")
        .y_label_formatter(&|v| format!("{v:.0}"))
        .light_line_style(&WHITE.mix(0.0))
        .draw()
        .map_err(|e| format!("{e}"))?;

    chart
        .draw_series(
            values
                .iter()
                .enumerate()
                .map(|(k, value)| Rectangle::new([(k, 0.0), (k + 1, *value)], BLUE.filled())),
        )
        .map_err(|e| format!("{e}"))?;

    root.present().map_err(|e| format!("{e}"))?;
    Ok(())
}

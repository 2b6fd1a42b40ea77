//! Strategy simulator CLI - fast in-memory games for strategy evaluation.
//!
//! Runs complete "Take it or Pay" games without the game server, allowing
//! rapid comparison of strategies across many seeded tables.

mod engine;

use bot::ai::{create_strategy, Strategy};
use clap::{Parser, ValueEnum};
use engine::{GameResult, Simulator, SEATS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "simulator")]
#[command(about = "Fast in-memory game simulator for strategy evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Strategy for all seats (shortcut to set all 4 seats the same)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<StrategyKind>,

    /// Strategy for seat 0
    #[arg(long, default_value = "heuristic")]
    seat0: StrategyKind,

    /// Strategy for seat 1
    #[arg(long, default_value = "random")]
    seat1: StrategyKind,

    /// Strategy for seat 2
    #[arg(long, default_value = "random")]
    seat2: StrategyKind,

    /// Strategy for seat 3
    #[arg(long, default_value = "random")]
    seat3: StrategyKind,

    /// Base seed (for deterministic decks and baselines)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show per-game results
    #[arg(long)]
    show_output: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    Heuristic,
    Random,
}

impl StrategyKind {
    fn name(self) -> &'static str {
        match self {
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Random => "random",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seat_kinds = match args.seats {
        Some(kind) => [kind; SEATS],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };

    let mut seed_rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let strategies: [Box<dyn Strategy>; SEATS] = [
        make_strategy(seat_kinds[0], &mut seed_rng)?,
        make_strategy(seat_kinds[1], &mut seed_rng)?,
        make_strategy(seat_kinds[2], &mut seed_rng)?,
        make_strategy(seat_kinds[3], &mut seed_rng)?,
    ];

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_seed: u64 = seed_rng.random();
        match Simulator::new(game_seed).simulate_game(&strategies) {
            Ok(result) => {
                if args.verbose || args.show_output {
                    info!(
                        "Game {} completed: scores={:?}",
                        game_num, result.final_scores
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    print_summary(&seat_kinds, &results, errors, start.elapsed(), args.games);
    Ok(())
}

fn make_strategy(
    kind: StrategyKind,
    seed_rng: &mut StdRng,
) -> Result<Box<dyn Strategy>, Box<dyn std::error::Error>> {
    let seed = seed_rng.random::<u64>();
    create_strategy(kind.name(), Some(seed))
        .ok_or_else(|| format!("Unknown strategy: {}", kind.name()).into())
}

fn print_summary(
    seat_kinds: &[StrategyKind; SEATS],
    results: &[GameResult],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);

    if results.is_empty() {
        return;
    }

    let mut wins = [0u32; SEATS];
    let mut total_scores = [0i64; SEATS];
    let mut max_scores = [i32::MIN; SEATS];
    let mut min_scores = [i32::MAX; SEATS];

    for result in results {
        // Lowest score wins; ties all count as wins.
        let best = result.final_scores.iter().min().copied().unwrap_or(0);
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += score as i64;
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
            if score == best {
                wins[seat] += 1;
            }
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..SEATS {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {} ({:?}): avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat, seat_kinds[seat], avg_score, min_scores[seat], max_scores[seat], wins[seat], win_rate
        );
    }
}

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use eight_puzzle::{search, Board, DistanceMap, Heuristic, SearchReport, SearchStats, Step};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start board, nine numbers 0-8 with 0 for the blank
    #[arg(short, long, default_value = "1 2 3 4 5 6 0 7 8")]
    start: String,

    /// Goal board, same format as the start board
    #[arg(short, long, default_value = "1 2 3 4 5 6 7 8 0")]
    goal: String,

    /// Heuristic to solve with; repeat to compare several (default: all)
    #[arg(long = "heuristic", value_enum)]
    heuristics: Vec<Heuristic>,

    /// Replace the start board with a random one that can reach the goal
    #[arg(short, long)]
    random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Check every result against breadth-first search distances
    #[arg(long)]
    verify: bool,

    /// Log search progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report {
    start: Board,
    goal: Board,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    heuristic: Heuristic,
    solved: bool,
    moves: Option<usize>,
    stats: SearchStats,
    path: Vec<Step>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn random_start(goal: &Board, seed: Option<u64>) -> Board {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    loop {
        let board = Board::from_random(&mut rng);
        if board.is_solvable_to(goal) {
            return board;
        }
    }
}

fn print_solution(heuristic: Heuristic, report: &SearchReport) {
    let Some(solution) = &report.solution else {
        println!("No solution found!");
        return;
    };

    println!("\nSolution found using {} heuristic!", heuristic.name());
    println!("{}", "=".repeat(50));
    println!("Solution length: {} moves", solution.len());
    println!("Nodes expanded: {}", report.stats.expanded);
    println!("Nodes generated: {}", report.stats.generated);
    println!("Max frontier size: {}", report.stats.max_frontier);
    println!(
        "Moves: {}",
        solution
            .moves()
            .iter()
            .map(|mv| mv.label().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!();

    println!("Solution path:");
    println!("{}", "-".repeat(20));

    let steps = solution.path();
    let last = steps.len() - 1;
    for (i, step) in steps.enumerate() {
        match step.mv {
            None => println!("Initial State:"),
            Some(mv) => println!("Move {}: {}", i, mv),
        }
        print!("{}", step.board);
        if i < last {
            println!("↓");
        }
    }

    println!("Goal reached!");
}

fn print_comparison(runs: &[(Heuristic, SearchReport)]) {
    println!("\nHeuristic Comparison:");
    println!("{}", "=".repeat(30));
    for (heuristic, report) in runs {
        println!(
            "{:<18} - Nodes expanded: {}, Generated: {}, Max frontier: {}",
            heuristic.name(),
            report.stats.expanded,
            report.stats.generated,
            report.stats.max_frontier
        );
    }
}

fn verify(
    map: &DistanceMap,
    start: &Board,
    heuristic: Heuristic,
    report: &SearchReport,
) -> Result<()> {
    let expected = map.distance(start).map(|d| d as usize);
    let found = report.solution.as_ref().map(|solution| solution.len());
    if expected != found {
        bail!(
            "{} returned {:?} moves, breadth-first search says {:?}",
            heuristic.name(),
            found,
            expected
        );
    }
    info!(heuristic = heuristic.name(), moves = ?found, "verified against distance map");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let goal: Board = args
        .goal
        .parse()
        .with_context(|| format!("invalid goal board '{}'", args.goal))?;
    let start: Board = if args.random {
        random_start(&goal, args.seed)
    } else {
        args.start
            .parse()
            .with_context(|| format!("invalid start board '{}'", args.start))?
    };

    let heuristics = if args.heuristics.is_empty() {
        Heuristic::ALL.to_vec()
    } else {
        args.heuristics.clone()
    };

    if !start.is_solvable_to(&goal) {
        warn!("start and goal have different parity, the search will exhaust every reachable board");
    }

    let distances = args.verify.then(|| DistanceMap::new(goal));

    if !args.json {
        println!("8-Puzzle Solver using A* Search");
        println!("{}", "=".repeat(40));
        println!("Initial State:");
        print!("{}", start);
        println!("Goal State:");
        print!("{}", goal);
    }

    let mut runs = Vec::with_capacity(heuristics.len());
    for heuristic in heuristics {
        if !args.json {
            println!("\nSolving with {} heuristic...", heuristic.name());
        }

        let report = search(start, goal, heuristic);
        if let Some(map) = &distances {
            verify(map, &start, heuristic, &report)?;
        }

        if !args.json {
            print_solution(heuristic, &report);
            println!("\n{}", "=".repeat(60));
        }
        runs.push((heuristic, report));
    }

    if args.json {
        let report = Report {
            start,
            goal,
            runs: runs
                .iter()
                .map(|(heuristic, report)| Run {
                    heuristic: *heuristic,
                    solved: report.is_solved(),
                    moves: report.solution.as_ref().map(|s| s.len()),
                    stats: report.stats,
                    path: report
                        .solution
                        .as_ref()
                        .map(|s| s.path().collect())
                        .unwrap_or_default(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if runs.len() > 1 && runs.iter().all(|(_, report)| report.is_solved()) {
        print_comparison(&runs);
    }

    Ok(())
}

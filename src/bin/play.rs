//! Leduc poker match driver.
//!
//! Usage:
//!   cargo run --release --bin play -- [OPTIONS]
//!
//! Options:
//!   --p0 <STRAT>         Strategy for player 0 (default: greedy)
//!   --p1 <STRAT>         Strategy for player 1 (default: random)
//!   --table <FILE>       Policy file for table strategies (repeatable, merged)
//!   --hands <N>          Hands to play (default: 1000)
//!   --chips <N>          Starting chips per player (default: 3000)
//!   --seed <N>           RNG seed for reproducible matches (optional)
//!   --output <FILE>      Write the match outcome as JSON (optional)

use std::env;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use leduc_sim::sim::{run_match, MatchConfig};
use leduc_sim::strategy::{
    GreedyStrategy, RandomStrategy, Strategy, StrategyTable, TableStrategy,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut p0 = "greedy".to_string();
    let mut p1 = "random".to_string();
    let mut table_files: Vec<String> = Vec::new();
    let mut output_file: Option<String> = None;
    let mut config = MatchConfig {
        progress: true,
        ..Default::default()
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--p0" => {
                i += 1;
                if i < args.len() {
                    p0 = args[i].clone();
                }
            }
            "--p1" => {
                i += 1;
                if i < args.len() {
                    p1 = args[i].clone();
                }
            }
            "--table" | "-t" => {
                i += 1;
                if i < args.len() {
                    table_files.push(args[i].clone());
                }
            }
            "--hands" | "-n" => {
                i += 1;
                if i < args.len() {
                    config.hands = args[i].parse().unwrap_or(config.hands);
                }
            }
            "--chips" => {
                i += 1;
                if i < args.len() {
                    config.starting_chips = args[i].parse().unwrap_or(config.starting_chips);
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    config.seed = args[i].parse().ok();
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    // A shared table is only needed when someone plays the table strategy
    let needs_table = p0 == "table" || p1 == "table";
    let table = if needs_table {
        if table_files.is_empty() {
            eprintln!("error: the table strategy needs at least one --table <FILE>");
            process::exit(1);
        }
        let mut table = StrategyTable::new();
        for file in &table_files {
            match table.load_file(file) {
                Ok(count) => println!("Loaded {} entries from {}", count, file),
                Err(err) => {
                    eprintln!("error: {}: {}", file, err);
                    process::exit(1);
                }
            }
        }
        Some(Arc::new(table))
    } else {
        None
    };

    let strategy0 = build_strategy(&p0, table.as_ref(), config.seed.map(|s| s.wrapping_add(1)));
    let strategy1 = build_strategy(&p1, table.as_ref(), config.seed.map(|s| s.wrapping_add(2)));

    println!("=================================================");
    println!("  Leduc Poker: {} vs {}", p0, p1);
    println!("=================================================");
    println!(
        "Hands: {}  Chips: {}  Seed: {}",
        config.hands,
        config.starting_chips,
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "entropy".to_string())
    );
    println!();

    let start = Instant::now();
    let outcome = run_match(strategy0, strategy1, &config);
    let elapsed = start.elapsed();

    println!(
        "{} chips: {}",
        outcome.players[0].name, outcome.players[0].chips
    );
    println!(
        "{} chips: {}",
        outcome.players[1].name, outcome.players[1].chips
    );
    println!("Ties: {}  Pot carry: {}", outcome.ties, outcome.pot_carry);
    match outcome.leader() {
        Some(index) => println!("Winner: {}", outcome.players[index].name),
        None => println!("Dead heat"),
    }
    println!(
        "Played {} hands in {:.2}s",
        outcome.hands,
        elapsed.as_secs_f64()
    );

    if let Some(path) = output_file {
        match outcome.save_json(&path) {
            Ok(()) => println!("Saved outcome to {}", path),
            Err(err) => {
                eprintln!("error: failed to write {}: {}", path, err);
                process::exit(1);
            }
        }
    }
}

fn build_strategy(
    name: &str,
    table: Option<&Arc<StrategyTable>>,
    seed: Option<u64>,
) -> Box<dyn Strategy> {
    match name {
        "random" | "r" => Box::new(match seed {
            Some(seed) => RandomStrategy::seeded(seed),
            None => RandomStrategy::new(),
        }),
        "greedy" | "g" => Box::new(GreedyStrategy),
        "table" | "t" | "c" => {
            let table = table.expect("table strategy requested without a loaded table");
            Box::new(match seed {
                Some(seed) => TableStrategy::seeded(Arc::clone(table), seed),
                None => TableStrategy::new(Arc::clone(table)),
            })
        }
        other => {
            eprintln!(
                "error: unrecognized strategy {:?} (supported: random, greedy, table)",
                other
            );
            process::exit(1);
        }
    }
}

fn print_help() {
    println!("Leduc poker match driver");
    println!();
    println!("USAGE:");
    println!("  play [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  --p0 <STRAT>     Strategy for player 0: random | greedy | table (default: greedy)");
    println!("  --p1 <STRAT>     Strategy for player 1 (default: random)");
    println!("  --table <FILE>   Policy file for table strategies (repeatable, merged)");
    println!("  --hands <N>      Hands to play (default: 1000)");
    println!("  --chips <N>      Starting chips per player (default: 3000)");
    println!("  --seed <N>       RNG seed for reproducible matches");
    println!("  --output <FILE>  Write the match outcome as JSON");
    println!("  --help           Show this help");
}

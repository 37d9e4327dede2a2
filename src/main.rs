//! Lottery Drawing Simulator
//!
//! Command-line front end: collects set counts, runs one simulation and
//! renders the result.

use clap::{Parser, Subcommand};
use lottery_sim::{
    config::Config,
    simulator::{SimulationRun, Simulator},
    PrizeTier, Strategy,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lottery-sim")]
#[command(about = "Simulate a lottery drawing and compare set strategies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "lottery.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Buy sets, draw and report winnings
    Run {
        /// Number of sequential sets
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        sequential: i64,

        /// Number of scattered sets
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        scattered: i64,

        /// RNG seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the prize table
    Tiers,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Run {
            sequential,
            scattered,
            seed,
            json,
        } => run_simulation(config, sequential, scattered, seed, json),
        Commands::Tiers => {
            show_tiers();
            Ok(())
        }
    }
}

fn run_simulation(
    config: Config,
    sequential: i64,
    scattered: i64,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let mut sim_config = config.simulation;
    if seed.is_some() {
        sim_config.seed = seed;
    }

    let mut simulator = Simulator::new(sim_config);
    let run = simulator.run(sequential, scattered)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        print_report(&run);
    }

    Ok(())
}

fn print_report(run: &SimulationRun) {
    let result = &run.result;

    println!("{}", "=".repeat(60));
    println!("Lottery Simulation Result");
    println!("{}", "=".repeat(60));
    println!();
    println!("Winning ticket: {}", run.drawing.winning);
    println!("Bonus digit:    {}", run.drawing.bonus_digit);

    for strategy in [Strategy::Sequential, Strategy::Scattered] {
        let outcome = result.outcome(strategy);

        println!();
        println!("[{}] {} sets", strategy, outcome.sets);

        let mut any = false;
        for (tier, count) in outcome.counts.iter_won() {
            any = true;
            println!(
                "  {:<15} {:>4} x {:>13} = {:>14}",
                tier.label(),
                count,
                format_yen(tier.payout() as i64),
                format_yen(tier.payout() as i64 * i64::from(count))
            );
        }
        if !any {
            println!("  No winning tickets");
        }
        println!("  Payout: {}", format_yen(outcome.payout as i64));
    }

    println!();
    println!("[Total]");
    println!("  Sets:   {}", result.total_sets);
    println!("  Cost:   {}", format_yen(result.total_cost as i64));
    println!("  Payout: {}", format_yen(result.total_payout as i64));
    let sign = if result.profit >= 0 { "+" } else { "" };
    println!("  Profit: {}{}", sign, format_yen(result.profit));
    println!("{}", "=".repeat(60));
}

fn show_tiers() {
    println!("{:<15} {:>14}", "Tier", "Payout");
    println!("{}", "-".repeat(30));
    for tier in PrizeTier::WINNING {
        println!("{:<15} {:>14}", tier.label(), format_yen(tier.payout() as i64));
    }
}

/// Amount with thousands separators, e.g. `-1,234,000 yen`
fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} yen", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(0), "0 yen");
        assert_eq!(format_yen(300), "300 yen");
        assert_eq!(format_yen(3000), "3,000 yen");
        assert_eq!(format_yen(700_000_000), "700,000,000 yen");
        assert_eq!(format_yen(-99_000), "-99,000 yen");
    }

    #[test]
    fn test_cli_parses_negative_counts() {
        let cli = Cli::try_parse_from(["lottery-sim", "run", "--sequential", "-1"]).unwrap();
        match cli.command {
            Commands::Run { sequential, scattered, .. } => {
                assert_eq!(sequential, -1);
                assert_eq!(scattered, 0);
            }
            Commands::Tiers => panic!("expected run"),
        }
    }
}

// Loads a clause-text file and runs the resolution prover over it.
//
// Usage: prove [--budget N] [--verbose] <path>
//
// The file format is one clause per non-blank, non-'#'-prefixed line, in the
// notation documented in SPEC_FULL.md §6a (`?x` for a variable, `~` for
// negation, ` | ` between literals in a clause).

use anyhow::{Context, Result};
use clap::Parser;

use resolvo::clause::Clause;
use resolvo::prover::{Outcome, Prover};

#[derive(Parser)]
struct Args {
    /// Path to a clause-text file.
    #[clap()]
    path: String,

    /// Maximum number of resolution steps before giving up.
    #[clap(long)]
    budget: Option<usize>,

    /// Print every step of the resolution history, not just the outcome.
    #[clap(long, short)]
    verbose: bool,
}

fn parse_clauses(text: &str) -> Vec<Clause> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Clause::parse)
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read clause file '{}'", args.path))?;
    let clauses = parse_clauses(&text);
    if clauses.is_empty() {
        anyhow::bail!("'{}' contains no clauses", args.path);
    }

    let mut prover = Prover::new(args.budget);
    for clause in clauses {
        prover.add_clause(clause);
    }

    let outcome = prover.run();
    let message = match outcome {
        Outcome::Proved => "proved",
        Outcome::Quiescent => "no proof found",
        Outcome::BudgetExhausted => "budget exhausted",
    };
    println!("{}", message);

    let stats = prover.statistics();
    println!(
        "steps: {}, clauses: {}, rounds: {}",
        stats.steps_performed, stats.clauses_in_working_set, stats.rounds_completed
    );

    if args.verbose {
        println!();
        for step in prover.history() {
            println!("{}", step);
        }
    }

    if outcome != Outcome::Proved {
        std::process::exit(1);
    }
    Ok(())
}

// Runs the two word-problem encodings named in SPEC_FULL.md §1 as a
// non-kernel collaborator: it builds clauses with the library's
// constructors, hands them to a `Prover`, and reports the outcome. Neither
// problem is part of the kernel's contract; this binary exists so the
// repository has a runnable demonstration of the kernel end to end.

use clap::Parser;

use resolvo::clause::Clause;
use resolvo::literal::Literal;
use resolvo::prover::{Outcome, Prover};
use resolvo::term::Term;

#[derive(Parser)]
struct Args {
    /// Print the full resolution history for each problem.
    #[clap(long, short)]
    verbose: bool,
}

/// "Every hound howls. Light sleepers own nothing that howls. John is a
/// light sleeper who owns a hound." Refutes the negated goal "John owns a
/// mouse" -- which, transcribed faithfully from the original encoding, is
/// asserted as a bare fact disconnected from the rest of the set (see
/// `resolvo::tests::common::HOWLING_HOUNDS` for the identical clause-text
/// form used in tests). The contradiction is reachable from the first five
/// clauses alone.
fn howling_hounds() -> Vec<Clause> {
    let x = Term::variable("x");
    let y = Term::variable("y");
    let john = Term::constant("John");
    let animal = Term::constant("a");

    vec![
        Clause::new(vec![
            Literal::negative("Hound", vec![x.clone()]),
            Literal::positive("Howl", vec![x.clone()]),
        ]),
        Clause::new(vec![
            Literal::negative("LightSleeper", vec![x.clone()]),
            Literal::negative("Has", vec![x.clone(), y.clone()]),
            Literal::negative("Howl", vec![y.clone()]),
        ]),
        Clause::new(vec![Literal::positive("LightSleeper", vec![john.clone()])]),
        Clause::new(vec![Literal::positive(
            "Has",
            vec![john.clone(), animal.clone()],
        )]),
        Clause::new(vec![Literal::positive("Hound", vec![animal])]),
        Clause::new(vec![Literal::positive("HasMouse", vec![john])]),
    ]
}

/// "Customs officials search every entrant who isn't a VIP. A drug dealer
/// `d` entered and isn't a VIP. No drug dealer is a VIP. `o` is a customs
/// official and a drug dealer." Attempts to refute "no customs official is
/// a drug dealer".
///
/// The fourth clause below -- `~Entered(y) | VIP(y) | CustomsOfficial(x) |
/// SearchedBy(x,y)` -- is transcribed exactly as it appears in the original
/// encoding. As SPEC_FULL.md §9 notes, it reads as an existential claim
/// ("some official searches every non-VIP entrant") rather than the
/// universal constraint the word problem intends, and is logically distinct
/// from clause one. It is kept as-is: the kernel treats input clauses
/// opaquely and this binary does not silently repair encodings it is handed.
fn drug_dealer() -> Vec<Clause> {
    let x = Term::variable("x");
    let y = Term::variable("y");
    let dealer = Term::constant("d");
    let official = Term::constant("o");

    vec![
        Clause::new(vec![
            Literal::negative("CustomsOfficial", vec![x.clone()]),
            Literal::negative("Entered", vec![y.clone()]),
            Literal::positive("VIP", vec![y.clone()]),
            Literal::positive("SearchedBy", vec![x.clone(), y.clone()]),
        ]),
        Clause::new(vec![Literal::positive("DrugDealer", vec![dealer.clone()])]),
        Clause::new(vec![Literal::positive("Entered", vec![dealer.clone()])]),
        Clause::new(vec![Literal::negative("VIP", vec![dealer])]),
        Clause::new(vec![
            Literal::negative("DrugDealer", vec![x.clone()]),
            Literal::negative("VIP", vec![x.clone()]),
        ]),
        Clause::new(vec![Literal::positive(
            "CustomsOfficial",
            vec![official.clone()],
        )]),
        Clause::new(vec![Literal::positive("DrugDealer", vec![official])]),
        Clause::new(vec![
            Literal::negative("DrugDealer", vec![y.clone()]),
            Literal::negative("SearchedBy", vec![x.clone(), y.clone()]),
            Literal::positive("DrugDealer", vec![x.clone()]),
        ]),
        // The mistranscribed clause; see the doc comment above.
        Clause::new(vec![
            Literal::negative("Entered", vec![y.clone()]),
            Literal::positive("VIP", vec![y.clone()]),
            Literal::positive("CustomsOfficial", vec![x.clone()]),
            Literal::positive("SearchedBy", vec![x.clone(), y]),
        ]),
        Clause::new(vec![
            Literal::negative("CustomsOfficial", vec![x.clone()]),
            Literal::negative("DrugDealer", vec![x]),
        ]),
    ]
}

fn simple_test() -> Vec<Clause> {
    vec![
        Clause::new(vec![Literal::positive("P", vec![])]),
        Clause::new(vec![Literal::negative("P", vec![])]),
    ]
}

fn run_problem(name: &str, clauses: Vec<Clause>, verbose: bool) -> Outcome {
    println!("=== {} ===", name);
    let mut prover = Prover::new(None);
    for clause in clauses {
        prover.add_clause(clause);
    }
    let outcome = prover.run();
    let message = match outcome {
        Outcome::Proved => "proved",
        Outcome::Quiescent => "no proof found",
        Outcome::BudgetExhausted => "budget exhausted",
    };
    let stats = prover.statistics();
    println!(
        "{}: {} ({} steps, {} clauses)",
        name, message, stats.steps_performed, stats.clauses_in_working_set
    );
    if verbose {
        for step in prover.history() {
            println!("  {}", step);
        }
    }
    outcome
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let results = [
        run_problem("Howling Hounds", howling_hounds(), args.verbose),
        run_problem("Drug Dealer", drug_dealer(), args.verbose),
        run_problem("Simple Test", simple_test(), args.verbose),
    ];

    println!();
    println!("summary:");
    for (name, outcome) in ["Howling Hounds", "Drug Dealer", "Simple Test"]
        .iter()
        .zip(results.iter())
    {
        println!("  {}: {:?}", name, outcome);
    }
}

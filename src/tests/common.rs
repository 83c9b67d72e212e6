use crate::clause::Clause;
use crate::prover::{Outcome, Prover};

/// Builds a prover from clause-text lines (SPEC_FULL.md §6a notation) and
/// runs it to completion with the default step budget.
pub fn run_clauses(lines: &[&str]) -> Outcome {
    let mut prover = Prover::new(None);
    for line in lines {
        prover.add_clause(Clause::parse(line));
    }
    prover.run()
}

pub fn assert_proved(lines: &[&str]) {
    assert_eq!(run_clauses(lines), Outcome::Proved);
}

pub fn assert_quiescent(lines: &[&str]) {
    assert_eq!(run_clauses(lines), Outcome::Quiescent);
}

/// The "Howling Hounds" encoding, transcribed from `problems.py`'s
/// `create_howling_hounds_optimized`: every hound howls, light sleepers own
/// no howling animal, John is a light sleeper who owns a hound, and the
/// negated goal (John owns a mouse) is asserted directly rather than tied to
/// any `HasMouse`-producing premise.
///
/// This is exactly the shape the original source builds: the first five
/// clauses alone are enough to derive a contradiction (John owns something,
/// it's a hound, hounds howl, and light sleepers can't own anything that
/// howls) without ever touching clause six. `HasMouse(John)` does not share
/// a predicate with anything else in the set, so it never takes part in a
/// resolution step; it is dead weight in this particular transcription.
pub const HOWLING_HOUNDS: &[&str] = &[
    "~Hound(?x) | Howl(?x)",
    "~LightSleeper(?x) | ~Has(?x, ?y) | ~Howl(?y)",
    "LightSleeper(John)",
    "Has(John, a)",
    "Hound(a)",
    "HasMouse(John)",
];

/// The "Drug Dealer" encoding, transcribed from `problems.py`'s
/// `create_drug_dealer_optimized`. Clause 9 below is the mistranscription
/// flagged in SPEC_FULL.md §9: it reads as "some customs official searches
/// every non-VIP entrant", an existential claim, where the word problem
/// means to state a universal constraint ("every non-VIP entrant is
/// searched by every customs official" or similar). The kernel treats input
/// clauses opaquely, so this is reproduced verbatim rather than repaired.
pub const DRUG_DEALER: &[&str] = &[
    "~CustomsOfficial(?x) | ~Entered(?y) | VIP(?y) | SearchedBy(?x, ?y)",
    "DrugDealer(d)",
    "Entered(d)",
    "~VIP(d)",
    "~DrugDealer(?x) | ~VIP(?x)",
    "CustomsOfficial(o)",
    "DrugDealer(o)",
    "~DrugDealer(?y) | ~SearchedBy(?x, ?y) | DrugDealer(?x)",
    "~Entered(?y) | VIP(?y) | CustomsOfficial(?x) | SearchedBy(?x, ?y)",
    "~CustomsOfficial(?x) | ~DrugDealer(?x)",
];

pub const SIMPLE_TEST: &[&str] = &["P", "~P"];

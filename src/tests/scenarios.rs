//! End-to-end scenarios from SPEC_FULL.md §8's testable-properties table,
//! exercised through the public `Prover` facade rather than any one
//! module's internals.

use super::common::{assert_proved, assert_quiescent, run_clauses, DRUG_DEALER, HOWLING_HOUNDS};
use crate::clause::Clause;
use crate::prover::{Outcome, Prover};
use crate::substitution::Substitution;
use crate::term::Term;
use crate::unifier::unify;

#[test]
fn scenario_1_unit_contradiction_in_one_step() {
    let mut prover = Prover::new(None);
    prover.add_clause(Clause::parse("P"));
    prover.add_clause(Clause::parse("~P"));
    assert_eq!(prover.run(), Outcome::Proved);
    assert_eq!(prover.statistics().steps_performed, 1);
}

#[test]
fn scenario_2_single_tautology_is_quiescent() {
    // A lone tautology can never resolve against itself to produce
    // anything non-tautological: there is nothing else in the set.
    assert_quiescent(&["P() | ~P()"]);
}

#[test]
fn scenario_3_three_clause_refutation() {
    assert_proved(&["~P | Q", "P", "~Q"]);
}

#[test]
fn scenario_4_unify_variable_and_constant() {
    let theta = unify(&Term::parse("?x"), &Term::parse("a"), &Substitution::new()).unwrap();
    assert_eq!(theta.apply_term(&Term::parse("?x")), Term::constant("a"));
}

#[test]
fn scenario_5_unify_nested_compounds() {
    let theta = unify(
        &Term::parse("f(?x, a)"),
        &Term::parse("f(b, ?y)"),
        &Substitution::new(),
    )
    .unwrap();
    assert_eq!(theta.apply_term(&Term::parse("?x")), Term::constant("b"));
    assert_eq!(theta.apply_term(&Term::parse("?y")), Term::constant("a"));
}

#[test]
fn scenario_6_howling_hounds_terminates_without_looping() {
    // The encoding reproduced in `common::HOWLING_HOUNDS` happens to be
    // refutable from its first five clauses alone; `HasMouse(John)` never
    // enters a resolution step. Either way, the requirement from
    // SPEC_FULL.md §8 is that the engine halts -- proved or quiescent --
    // rather than exhausting the budget.
    let outcome = run_clauses(HOWLING_HOUNDS);
    assert!(
        matches!(outcome, Outcome::Proved | Outcome::Quiescent),
        "expected termination, got {:?}",
        outcome
    );
}

#[test]
fn drug_dealer_terminates_without_looping() {
    // Exercises the encoding containing the mistranscribed clause flagged
    // in SPEC_FULL.md §9. The kernel does not repair or reject it; this
    // only checks that resolution over a finite Herbrand universe (two
    // constants, no function symbols) reaches a definite outcome.
    let outcome = run_clauses(DRUG_DEALER);
    assert_ne!(outcome, Outcome::BudgetExhausted);
}

#[test]
fn determinism_same_input_same_history() {
    let build = || {
        let mut prover = Prover::new(None);
        for line in HOWLING_HOUNDS {
            prover.add_clause(Clause::parse(line));
        }
        prover.run();
        prover
            .history()
            .iter()
            .map(|step| step.to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(build(), build());
}

#[test]
fn working_set_is_monotone_across_a_run() {
    let mut prover = Prover::new(None);
    for line in HOWLING_HOUNDS {
        prover.add_clause(Clause::parse(line));
    }
    let before = prover.statistics().clauses_in_working_set;
    prover.run();
    let after = prover.statistics().clauses_in_working_set;
    assert!(after >= before);
}

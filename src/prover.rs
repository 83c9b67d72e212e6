use std::fmt;

use fxhash::FxHashSet;
use log::{debug, info, trace};

use crate::clause::{Clause, VariableCounter};
use crate::proof_step::{ClauseId, ProofStep, Step};
use crate::unifier::unify_literals;

/// Default step budget, per SPEC_FULL.md §4.5 ("the spec fixes a default of
/// 1000"). The original Python source used 500, 1000, and 2000 in different
/// callers; this crate picks one default and makes the budget a
/// constructor parameter so callers can override it.
pub const DEFAULT_STEP_BUDGET: usize = 1000;

/// The three outcomes a saturation run can end in. Unlike acorn's `Outcome`,
/// there is no `Interrupted` or `Timeout` variant: the kernel is
/// single-threaded and synchronous with no suspension points (SPEC_FULL.md
/// §5), so those acorn-specific concerns do not apply here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The empty clause was derived: the input clause set is unsatisfiable.
    Proved,
    /// A full round produced no new, non-tautological clause.
    Quiescent,
    /// The step counter reached the budget before either of the above.
    BudgetExhausted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Proved => write!(f, "proved"),
            Outcome::Quiescent => write!(f, "quiescent (no proof found)"),
            Outcome::BudgetExhausted => write!(f, "budget exhausted"),
        }
    }
}

/// Counters describing one completed (or in-progress) run. Corresponds to
/// the `{ total_steps, total_clauses, empty_clause_found, history_length }`
/// facade named in SPEC_FULL.md §6 (`clauses_in_working_set` doubles as
/// both `total_clauses` and `history_length`, since `history()` renders
/// exactly one `Step` per working-set entry).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub clauses_in_working_set: usize,
    pub steps_performed: usize,
    pub rounds_completed: usize,
    pub empty_clause_found: bool,
}

/// A binary-resolution theorem prover over a working set of CNF clauses.
///
/// Owns its working set, seen-set, history log, and variable counter for the
/// lifetime of one proof attempt (SPEC_FULL.md §5). A `Prover` is not meant
/// to be reused across unrelated clause sets; build a fresh one per problem.
pub struct Prover {
    working_set: Vec<ProofStep>,
    seen: FxHashSet<String>,
    counter: VariableCounter,
    budget: usize,
    steps_performed: usize,
    rounds_completed: usize,
}

impl Prover {
    /// Builds a prover with the given step budget, or `DEFAULT_STEP_BUDGET`
    /// if `budget` is `None`.
    pub fn new(budget: Option<usize>) -> Prover {
        Prover {
            working_set: vec![],
            seen: FxHashSet::default(),
            counter: VariableCounter::new(),
            budget: budget.unwrap_or(DEFAULT_STEP_BUDGET),
            steps_performed: 0,
            rounds_completed: 0,
        }
    }

    /// Standardizes `clause`'s variables against the engine-wide counter and
    /// appends it to the working set as an input clause. Input clauses are
    /// not deduplicated against one another (SPEC_FULL.md §4.5.1).
    pub fn add_clause(&mut self, clause: Clause) -> ClauseId {
        let standardized = clause.standardize_variables(&mut self.counter);
        let id = self.working_set.len();
        debug!("[{}] input clause: {}", id, standardized);
        self.working_set.push(ProofStep::input(standardized));
        id
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            clauses_in_working_set: self.working_set.len(),
            steps_performed: self.steps_performed,
            rounds_completed: self.rounds_completed,
            empty_clause_found: self.working_set.iter().any(|step| step.clause.is_empty()),
        }
    }

    /// Renders the full history log in insertion order, one `Step` per
    /// clause currently in the working set (inputs and derived clauses
    /// alike).
    pub fn history(&self) -> Vec<Step> {
        self.working_set
            .iter()
            .enumerate()
            .map(|(id, step)| Step::from_proof_step(id, step, &self.working_set))
            .collect()
    }

    /// Runs level-saturation resolution to completion: repeated rounds over
    /// the whole working set until the empty clause is derived, a round
    /// adds nothing new, or the step budget is exhausted. Implements the
    /// saturation loop of SPEC_FULL.md §4.5.3.
    pub fn run(&mut self) -> Outcome {
        loop {
            let mut new_clauses = vec![];

            for i in 0..self.working_set.len() {
                for j in (i + 1)..self.working_set.len() {
                    if !shares_complementary_predicate(
                        &self.working_set[i].clause,
                        &self.working_set[j].clause,
                    ) {
                        continue;
                    }

                    // Clone the two parent clauses so the literal loop below
                    // borrows local values instead of `self`, leaving
                    // `self.working_set` free to be pushed to inside the loop.
                    let clause_i = self.working_set[i].clause.clone();
                    let clause_j = self.working_set[j].clause.clone();

                    for (li, lit1) in clause_i.literals.iter().enumerate() {
                        for (lj, lit2) in clause_j.literals.iter().enumerate() {
                            if lit1.predicate != lit2.predicate || lit1.positive == lit2.positive {
                                continue;
                            }
                            let Some(theta) = unify_literals(lit1, lit2) else {
                                continue;
                            };

                            let resolvent = resolve(&clause_i, &clause_j, li, lj, &theta);
                            trace!(
                                "resolve({}, {}) on {} / {} => {}",
                                i,
                                j,
                                lit1,
                                lit2,
                                resolvent
                            );
                            self.steps_performed += 1;

                            if resolvent.is_empty() {
                                self.working_set.push(ProofStep::resolved(
                                    resolvent,
                                    i,
                                    j,
                                    lit1.clone(),
                                    lit2.clone(),
                                    theta,
                                ));
                                self.rounds_completed += 1;
                                info!(
                                    "proved after {} steps, {} rounds",
                                    self.steps_performed, self.rounds_completed
                                );
                                return Outcome::Proved;
                            }

                            if !resolvent.is_tautology() {
                                let canonical = resolvent.to_string();
                                if self.seen.insert(canonical) {
                                    new_clauses.push((resolvent, i, j, lit1.clone(), lit2.clone(), theta));
                                }
                            }

                            if self.steps_performed >= self.budget {
                                self.extend_working_set(new_clauses);
                                info!(
                                    "budget exhausted after {} steps",
                                    self.steps_performed
                                );
                                return Outcome::BudgetExhausted;
                            }
                        }
                    }
                }
            }

            let produced_new = !new_clauses.is_empty();
            self.extend_working_set(new_clauses);
            self.rounds_completed += 1;

            if !produced_new {
                info!(
                    "quiescent after {} steps, {} rounds",
                    self.steps_performed, self.rounds_completed
                );
                return Outcome::Quiescent;
            }
        }
    }

    fn extend_working_set(
        &mut self,
        new_clauses: Vec<(
            Clause,
            ClauseId,
            ClauseId,
            crate::literal::Literal,
            crate::literal::Literal,
            crate::substitution::Substitution,
        )>,
    ) {
        for (clause, i, j, lit1, lit2, theta) in new_clauses {
            let id = self.working_set.len();
            debug!("[{}] derived clause: {}", id, clause);
            self.working_set
                .push(ProofStep::resolved(clause, i, j, lit1, lit2, theta));
        }
    }
}

/// Cheap prefilter: true iff some predicate appears with one polarity in
/// `c1` and the opposite polarity in `c2`. A pair that fails this test can
/// never produce a resolvent, so the nested literal loop is skipped
/// entirely (SPEC_FULL.md §4.5.3, "complementary-predicate prefilter").
fn shares_complementary_predicate(c1: &Clause, c2: &Clause) -> bool {
    c1.literals.iter().any(|l1| {
        c2.literals
            .iter()
            .any(|l2| l1.predicate == l2.predicate && l1.positive != l2.positive)
    })
}

/// Builds the resolvent of `c1` and `c2` on literal indices `i1`/`i2`: apply
/// `theta` to every literal of both clauses, drop the resolved-away literal
/// from each side, concatenate what remains, and let `Clause::new` dedup and
/// sort (SPEC_FULL.md §4.5.2).
fn resolve(
    c1: &Clause,
    c2: &Clause,
    i1: usize,
    i2: usize,
    theta: &crate::substitution::Substitution,
) -> Clause {
    let mut literals = vec![];
    for (idx, lit) in c1.literals.iter().enumerate() {
        if idx != i1 {
            literals.push(lit.apply_substitution(theta));
        }
    }
    for (idx, lit) in c2.literals.iter().enumerate() {
        if idx != i2 {
            literals.push(lit.apply_substitution(theta));
        }
    }
    Clause::new(literals)
}

use std::fmt;

use crate::clause::Clause;
use crate::literal::Literal;
use crate::substitution::Substitution;

/// Identifies a clause within a running prover's working set. It is just the
/// clause's index in that set: the engine assigns it at `add_clause` time,
/// and nothing about a `Clause` value itself encodes identity (see the
/// design note in clause.rs). This is the explicit engine-assigned
/// identifier that ancestry tracking is built on, instead of relying on
/// object identity of the clause itself.
pub type ClauseId = usize;

/// How a clause entered the working set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// One of the clauses the prover was seeded with.
    Input,

    /// The result of resolving two parent clauses on a pair of
    /// complementary literals.
    Resolved {
        parent1: ClauseId,
        parent2: ClauseId,
        literal1: Literal,
        literal2: Literal,
        substitution: Substitution,
    },
}

/// A clause together with a record of where it came from. The working set
/// stores `ProofStep`s, not bare clauses, so that a completed proof can be
/// replayed from the empty clause back to its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    pub clause: Clause,
    pub source: Source,
}

impl ProofStep {
    pub fn input(clause: Clause) -> ProofStep {
        ProofStep {
            clause,
            source: Source::Input,
        }
    }

    pub fn resolved(
        clause: Clause,
        parent1: ClauseId,
        parent2: ClauseId,
        literal1: Literal,
        literal2: Literal,
        substitution: Substitution,
    ) -> ProofStep {
        ProofStep {
            clause,
            source: Source::Resolved {
                parent1,
                parent2,
                literal1,
                literal2,
                substitution,
            },
        }
    }
}

/// One line of a reconstructed proof, in the flattened, display-ready shape
/// that `Prover::history` hands back to a caller: which two clauses were
/// resolved, on which literals, under which substitution, and what came out.
/// `clause1`/`clause2` are the parents' `ClauseId`s, for callers that want to
/// cross-reference the working set directly; `parent1`/`parent2` carry the
/// parents' own clauses, so a caller never has to look the ids back up just
/// to print them. All four, along with `literal1`/`literal2`, are `None` for
/// an input clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub index: ClauseId,
    pub clause1: Option<ClauseId>,
    pub clause2: Option<ClauseId>,
    pub parent1: Option<Clause>,
    pub parent2: Option<Clause>,
    pub literal1: Option<Literal>,
    pub literal2: Option<Literal>,
    pub substitution: Vec<(String, String)>,
    pub resolvent: Clause,
    pub is_empty: bool,
}

impl Step {
    /// Builds the display-ready `Step` for the working-set entry at `index`.
    /// `working_set` is the full working set so a resolved step can look up
    /// the printed form of both parents by their `ClauseId`.
    pub fn from_proof_step(index: ClauseId, step: &ProofStep, working_set: &[ProofStep]) -> Step {
        match &step.source {
            Source::Input => Step {
                index,
                clause1: None,
                clause2: None,
                parent1: None,
                parent2: None,
                literal1: None,
                literal2: None,
                substitution: vec![],
                resolvent: step.clause.clone(),
                is_empty: step.clause.is_empty(),
            },
            Source::Resolved {
                parent1,
                parent2,
                literal1,
                literal2,
                substitution,
            } => Step {
                index,
                clause1: Some(*parent1),
                clause2: Some(*parent2),
                parent1: Some(working_set[*parent1].clause.clone()),
                parent2: Some(working_set[*parent2].clause.clone()),
                literal1: Some(literal1.clone()),
                literal2: Some(literal2.clone()),
                substitution: substitution
                    .iter_sorted()
                    .into_iter()
                    .map(|(name, term)| (name.to_string(), term.to_string()))
                    .collect(),
                resolvent: step.clause.clone(),
                is_empty: step.clause.is_empty(),
            },
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.parent1, &self.parent2) {
            (Some(p1), Some(p2)) => write!(
                f,
                "[{}] resolve({}, {}) => {}",
                self.index, p1, p2, self.resolvent
            ),
            _ => write!(f, "[{}] input => {}", self.index, self.resolvent),
        }
    }
}

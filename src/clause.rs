use std::collections::HashMap;
use std::fmt;

use crate::literal::Literal;

/// Threads fresh variable names across every `standardize_variables` call in
/// a run, so names never repeat across clauses. Owned by the engine; see
/// `Prover::add_clause`.
#[derive(Debug, Clone, Default)]
pub struct VariableCounter {
    next: u64,
}

impl VariableCounter {
    pub fn new() -> VariableCounter {
        VariableCounter::default()
    }

    pub fn next_name(&mut self) -> String {
        let name = format!("V{}", self.next);
        self.next += 1;
        name
    }
}

/// A clause is a disjunction of literals. The empty clause denotes falsity.
///
/// A `Clause` is a pure value: it does not carry an identity or an ancestry
/// record. Those belong to `ProofStep`, which is how the engine wraps a
/// clause once it enters the working set (see proof_step.rs and the design
/// note in SPEC_FULL.md §3 about not relying on address identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    pub literals: Vec<Literal>,
}

impl Clause {
    /// Builds a clause, sorting its literals into a total order and
    /// removing exact duplicates. Sorting makes the printed form of a
    /// clause invariant under literal reordering, which is what lets the
    /// engine use it as an exact duplicate-suppression key (SPEC_FULL.md
    /// §4.3, "construction normal form").
    pub fn new(mut literals: Vec<Literal>) -> Clause {
        literals.sort();
        literals.dedup();
        Clause { literals }
    }

    pub fn empty() -> Clause {
        Clause { literals: vec![] }
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// True iff two literals in this clause are syntactically complementary
    /// (same predicate, same argument tuple, opposite polarity). No
    /// unification is performed; this is the cheap, syntactic tautology
    /// test the engine's redundancy policy calls for.
    pub fn is_tautology(&self) -> bool {
        for (i, a) in self.literals.iter().enumerate() {
            for b in &self.literals[i + 1..] {
                if a.complement(b) {
                    return true;
                }
            }
        }
        false
    }

    /// Returns a clause identical in structure except that every variable
    /// name has been rewritten to a fresh name drawn from `counter`. The
    /// same source name within this clause always maps to the same fresh
    /// name (shared variables stay shared); non-variable subterms are
    /// preserved exactly.
    pub fn standardize_variables(&self, counter: &mut VariableCounter) -> Clause {
        let mut mapping: HashMap<String, String> = HashMap::new();
        let literals = self
            .literals
            .iter()
            .map(|lit| lit.rename_variables(&mut mapping, counter))
            .collect();
        Clause::new(literals)
    }

    /// Parses one or more `|`-separated literals, per SPEC_FULL.md §6a.
    pub fn parse(s: &str) -> Clause {
        Clause::new(s.split('|').map(|piece| Literal::parse(piece)).collect())
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "□");
        }
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

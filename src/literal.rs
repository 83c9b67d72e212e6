use std::collections::HashMap;
use std::fmt;

use crate::clause::VariableCounter;
use crate::substitution::Substitution;
use crate::term::{split_top_level, Term};

/// A literal is a predicate applied to an ordered tuple of arguments, with a
/// polarity. Arity is fixed per-predicate only by convention; the kernel
/// does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub predicate: String,
    pub args: Vec<Term>,
    pub positive: bool,
}

impl Literal {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>, negated: bool) -> Literal {
        Literal {
            predicate: predicate.into(),
            args,
            positive: !negated,
        }
    }

    pub fn positive(predicate: impl Into<String>, args: Vec<Term>) -> Literal {
        Literal::new(predicate, args, false)
    }

    pub fn negative(predicate: impl Into<String>, args: Vec<Term>) -> Literal {
        Literal::new(predicate, args, true)
    }

    pub fn negated(&self) -> bool {
        !self.positive
    }

    /// Two literals are complementary iff they share a predicate and
    /// argument tuple and differ in polarity. This is a purely syntactic
    /// test (no unification); it is what the engine's tautology check and
    /// the §4.2 `complement` operation both use.
    pub fn complement(&self, other: &Literal) -> bool {
        self.predicate == other.predicate && self.args == other.args && self.positive != other.positive
    }

    /// Returns a new literal with `theta` applied to every argument.
    pub fn apply_substitution(&self, theta: &Substitution) -> Literal {
        Literal {
            predicate: self.predicate.clone(),
            args: self.args.iter().map(|t| theta.apply_term(t)).collect(),
            positive: self.positive,
        }
    }

    pub fn rename_variables(
        &self,
        mapping: &mut HashMap<String, String>,
        counter: &mut VariableCounter,
    ) -> Literal {
        Literal {
            predicate: self.predicate.clone(),
            args: self
                .args
                .iter()
                .map(|t| t.rename_variables(mapping, counter))
                .collect(),
            positive: self.positive,
        }
    }

    /// Parses `~Predicate(t1, t2, ...)`, `Predicate(...)`, or a zero-arity
    /// `Predicate` / `~Predicate`, per SPEC_FULL.md §6a.
    pub fn parse(s: &str) -> Literal {
        let s = s.trim();
        let (negated, rest) = match s.strip_prefix('~') {
            Some(rest) => (true, rest.trim()),
            None => (false, s),
        };
        match rest.find('(') {
            None => Literal::new(rest, vec![], negated),
            Some(open) => {
                let predicate = &rest[..open];
                let close = rest.rfind(')').expect("unbalanced parens in literal");
                let args = split_top_level(&rest[open + 1..close])
                    .iter()
                    .map(|piece| Term::parse(piece))
                    .collect();
                Literal::new(predicate, args, negated)
            }
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.positive {
            write!(f, "¬")?;
        }
        write!(f, "{}(", self.predicate)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_positive() {
        let lit = Literal::positive("Hound", vec![Term::variable("x")]);
        assert_eq!(lit.to_string(), "Hound(x)");
    }

    #[test]
    fn test_display_negative_nullary() {
        let lit = Literal::negative("P", vec![]);
        assert_eq!(lit.to_string(), "¬P()");
    }

    #[test]
    fn test_complement() {
        let a = Literal::positive("P", vec![Term::constant("a")]);
        let b = Literal::negative("P", vec![Term::constant("a")]);
        let c = Literal::negative("P", vec![Term::constant("b")]);
        assert!(a.complement(&b));
        assert!(b.complement(&a));
        assert!(!a.complement(&c));
        assert!(!a.complement(&a));
    }

    #[test]
    fn test_parse() {
        let lit = Literal::parse("~Has(?x, ?y)");
        assert_eq!(
            lit,
            Literal::negative("Has", vec![Term::variable("x"), Term::variable("y")])
        );
        assert_eq!(Literal::parse("P"), Literal::positive("P", vec![]));
        assert_eq!(Literal::parse("~P"), Literal::negative("P", vec![]));
    }
}

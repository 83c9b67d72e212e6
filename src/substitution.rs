use std::fmt;

use fxhash::FxHashMap;

use crate::term::Term;

/// A mapping from variable name to term. Substitutions are threaded through
/// unification and then, once an MGU is found, applied to whole clauses.
///
/// Construction never makes a binding idempotent on its own; idempotence
/// after closure is an emergent property of how `apply_term` chases
/// transitive bindings (see its doc comment) together with the unifier only
/// ever extending a substitution with bindings for variables it has not
/// already bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: FxHashMap<String, Term>,
}

impl Substitution {
    pub fn new() -> Substitution {
        Substitution::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn get(&self, name: &str) -> Option<&Term> {
        self.bindings.get(name)
    }

    /// Extends the substitution with `name -> term`. Callers (the unifier)
    /// are responsible for having already checked the occurs-check; this
    /// method does not re-check it.
    pub fn bind(&mut self, name: String, term: Term) {
        self.bindings.insert(name, term);
    }

    /// Applies this substitution to `term`, chasing bindings transitively:
    /// if `x` is bound to a term that itself mentions a bound variable `y`,
    /// `y`'s binding is resolved too. Never mutates `term`.
    pub fn apply_term(&self, term: &Term) -> Term {
        match term {
            Term::Variable(name) => match self.bindings.get(name) {
                Some(bound) => self.apply_term(bound),
                None => term.clone(),
            },
            Term::Compound(name, args) => {
                Term::Compound(name.clone(), args.iter().map(|a| self.apply_term(a)).collect())
            }
        }
    }

    /// Iterates bindings in a deterministic order (sorted by variable
    /// name), which is how the engine renders a substitution into the
    /// `name -> term` mapping of a history `Step`.
    pub fn iter_sorted(&self) -> Vec<(&str, &Term)> {
        let mut pairs: Vec<(&str, &Term)> =
            self.bindings.iter().map(|(k, v)| (k.as_str(), v)).collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.bindings.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{")?;
        for (i, (name, term)) in self.iter_sorted().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} -> {}", name, term)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_term_direct() {
        let mut theta = Substitution::new();
        theta.bind("x".to_string(), Term::constant("a"));
        assert_eq!(theta.apply_term(&Term::variable("x")), Term::constant("a"));
    }

    #[test]
    fn test_apply_term_chases_transitively() {
        let mut theta = Substitution::new();
        theta.bind("x".to_string(), Term::variable("y"));
        theta.bind("y".to_string(), Term::constant("a"));
        assert_eq!(theta.apply_term(&Term::variable("x")), Term::constant("a"));
    }

    #[test]
    fn test_apply_term_through_compound() {
        let mut theta = Substitution::new();
        theta.bind("x".to_string(), Term::constant("a"));
        let t = Term::compound("f", vec![Term::variable("x"), Term::variable("y")]);
        assert_eq!(
            theta.apply_term(&t),
            Term::compound("f", vec![Term::constant("a"), Term::variable("y")])
        );
    }

    #[test]
    fn test_idempotence() {
        let mut theta = Substitution::new();
        theta.bind("x".to_string(), Term::variable("y"));
        theta.bind("y".to_string(), Term::constant("a"));
        let t = Term::variable("x");
        let once = theta.apply_term(&t);
        let twice = theta.apply_term(&once);
        assert_eq!(once, twice);
    }
}

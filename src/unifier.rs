use crate::literal::Literal;
use crate::substitution::Substitution;
use crate::term::Term;

/// A recursion-depth guard against pathological inputs, per the spec's
/// requirement of "implementation-defined, at least 50". The original
/// Python source cuts off at 50; we give a little more headroom since the
/// guard only exists to stop unbounded recursion, not to bound legitimate
/// term depth.
const MAX_UNIFY_DEPTH: u32 = 64;

/// Attempts to extend `theta` into a most-general unifier of `t1` and `t2`.
/// Returns `None` on any of the three failure modes the spec treats as
/// equivalent: a name/arity mismatch, an occurs-check failure, or hitting
/// the recursion-depth guard. Callers never need to distinguish which one
/// happened.
pub fn unify(t1: &Term, t2: &Term, theta: &Substitution) -> Option<Substitution> {
    unify_at_depth(t1, t2, theta, 0)
}

fn unify_at_depth(t1: &Term, t2: &Term, theta: &Substitution, depth: u32) -> Option<Substitution> {
    if depth > MAX_UNIFY_DEPTH {
        return None;
    }

    let t1 = theta.apply_term(t1);
    let t2 = theta.apply_term(t2);

    if t1 == t2 {
        return Some(theta.clone());
    }

    match (&t1, &t2) {
        (Term::Variable(v), _) => bind_variable(v, &t2, theta),
        (_, Term::Variable(v)) => bind_variable(v, &t1, theta),
        (Term::Compound(n1, a1), Term::Compound(n2, a2)) => {
            if n1 != n2 || a1.len() != a2.len() {
                return None;
            }
            let mut theta = theta.clone();
            for (x, y) in a1.iter().zip(a2.iter()) {
                theta = unify_at_depth(x, y, &theta, depth + 1)?;
            }
            Some(theta)
        }
    }
}

fn bind_variable(name: &str, term: &Term, theta: &Substitution) -> Option<Substitution> {
    if term.contains_variable(name) {
        // Occurs-check: refuse to bind x to a term that mentions x.
        return None;
    }
    let mut theta = theta.clone();
    theta.bind(name.to_string(), term.clone());
    Some(theta)
}

/// Unifies two literals' argument tuples, ignoring polarity entirely:
/// callers that need complementarity (the engine) check polarity
/// themselves before calling this. Requires equal predicate symbols and
/// equal arities.
pub fn unify_literals(l1: &Literal, l2: &Literal) -> Option<Substitution> {
    if l1.predicate != l2.predicate || l1.args.len() != l2.args.len() {
        return None;
    }
    let mut theta = Substitution::new();
    for (a, b) in l1.args.iter().zip(l2.args.iter()) {
        theta = unify(a, b, &theta)?;
    }
    Some(theta)
}

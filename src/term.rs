use std::collections::HashMap;
use std::fmt;

use crate::clause::VariableCounter;

/// A term is either a variable or a compound (a functor applied to zero or
/// more argument terms). A constant is just a compound with no arguments;
/// there is no separate "function symbol" type.
///
/// Terms are immutable values. Every operation that looks like a mutation
/// (substitution, renaming) returns a new term rather than editing one in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Variable(String),
    Compound(String, Vec<Term>),
}

impl Term {
    pub fn variable(name: impl Into<String>) -> Term {
        Term::Variable(name.into())
    }

    pub fn constant(name: impl Into<String>) -> Term {
        Term::Compound(name.into(), vec![])
    }

    pub fn compound(name: impl Into<String>, args: Vec<Term>) -> Term {
        Term::Compound(name.into(), args)
    }

    /// True iff `name` occurs as a variable anywhere inside this term.
    /// This is the occurs-check primitive: the unifier calls it before
    /// binding a variable to a term to rule out a cyclic binding like
    /// `x0 -> f(x0)`.
    pub fn contains_variable(&self, name: &str) -> bool {
        match self {
            Term::Variable(v) => v == name,
            Term::Compound(_, args) => args.iter().any(|arg| arg.contains_variable(name)),
        }
    }

    /// Returns a value structurally equal to this term. Since `Term` already
    /// has value semantics under ownership, this is `clone`; it exists as a
    /// named operation because the spec calls for one explicitly.
    pub fn deep_copy(&self) -> Term {
        self.clone()
    }

    /// Used by `Clause::standardize_variables`: renames every variable
    /// occurrence to a fresh name, keeping the same source name mapped to
    /// the same fresh name throughout one pass (one clause), and leaving
    /// everything else untouched.
    pub fn rename_variables(
        &self,
        mapping: &mut HashMap<String, String>,
        counter: &mut VariableCounter,
    ) -> Term {
        match self {
            Term::Variable(name) => {
                let fresh = mapping
                    .entry(name.clone())
                    .or_insert_with(|| counter.next_name())
                    .clone();
                Term::Variable(fresh)
            }
            Term::Compound(name, args) => Term::Compound(
                name.clone(),
                args.iter()
                    .map(|arg| arg.rename_variables(mapping, counter))
                    .collect(),
            ),
        }
    }

    /// Parses the notation described in SPEC_FULL.md §6a: `?name` is a
    /// variable, `name` or `name(t1, t2, ...)` is a compound. Used only by
    /// the CLI front ends and the test suite; the kernel never parses text.
    pub fn parse(s: &str) -> Term {
        let s = s.trim();
        if let Some(name) = s.strip_prefix('?') {
            return Term::variable(name.trim());
        }
        match s.find('(') {
            None => Term::constant(s),
            Some(open) => {
                let name = &s[..open];
                let inner = &s[open + 1..s.rfind(')').expect("unbalanced parens in term")];
                let args = split_top_level(inner)
                    .iter()
                    .map(|piece| Term::parse(piece))
                    .collect();
                Term::compound(name, args)
            }
        }
    }
}

/// Splits `s` on top-level commas, respecting nested parentheses, so that
/// `"f(x, y), z"` splits into `["f(x, y)", "z"]` rather than four pieces.
pub(crate) fn split_top_level(s: &str) -> Vec<&str> {
    let mut pieces = vec![];
    let mut depth = 0i32;
    let mut start = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                pieces.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = s[start..].trim();
    if !last.is_empty() || !pieces.is_empty() {
        pieces.push(last);
    }
    pieces.into_iter().filter(|p| !p.is_empty()).collect()
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Variable(name) => write!(f, "{}", name),
            Term::Compound(name, args) => {
                if args.is_empty() {
                    return write!(f, "{}", name);
                }
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

use std::fmt;
use std::fmt::Formatter;

use derive_more::Display;
use enum_as_inner::EnumAsInner;

/// A named query variable.
#[derive(Clone, Debug, Display, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[display(fmt = "?{}", _0)]
pub struct Var(String);

impl Var {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Var(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A value occupying one position of a triple pattern.
///
/// Bound terms are kept as opaque lexical forms. This crate only needs to
/// distinguish variables from bound values; interpreting IRIs and literals is
/// the concern of the surrounding query engine.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EnumAsInner)]
pub enum Term {
    Variable(Var),
    Bound(String),
}

impl Term {
    pub fn var<S: Into<String>>(name: S) -> Self {
        Term::Variable(Var::new(name))
    }

    pub fn bound<S: Into<String>>(value: S) -> Self {
        Term::Bound(value.into())
    }
}

/// Null-safe variable test: an absent term (e.g. a consumed working-set
/// slot) is never a variable. `Term::is_variable` itself comes from
/// [`EnumAsInner`].
pub fn is_variable(term: Option<&Term>) -> bool {
    term.map_or(false, Term::is_variable)
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(var) => write!(f, "{}", var),
            Term::Bound(value) => write!(f, "{}", value),
        }
    }
}

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::term::{Term, Var};

/// An immutable triple pattern: subject, predicate and object, each either a
/// bound term or a variable. Equality is by content.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TriplePattern {
    subject: Term,
    predicate: Term,
    object: Term,
}

impl TriplePattern {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    pub fn object(&self) -> &Term {
        &self.object
    }

    /// The three positions in subject, predicate, object order.
    pub fn terms(&self) -> [&Term; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    /// Variables appearing in this pattern, in position order.
    pub fn vars(&self) -> impl Iterator<Item = &Var> {
        self.terms().into_iter().filter_map(Term::as_variable)
    }
}

impl Display for TriplePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// An ordered sequence of triple patterns.
///
/// As optimizer input the order is irrelevant (a BGP is an unordered
/// conjunction); as optimizer output the order is the execution plan and is
/// semantically significant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasicPattern {
    triples: Vec<TriplePattern>,
}

impl BasicPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triples: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, triple: TriplePattern) {
        self.triples.push(triple);
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&TriplePattern> {
        self.triples.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TriplePattern> {
        self.triples.iter()
    }
}

impl From<Vec<TriplePattern>> for BasicPattern {
    fn from(triples: Vec<TriplePattern>) -> Self {
        Self { triples }
    }
}

impl FromIterator<TriplePattern> for BasicPattern {
    fn from_iter<I: IntoIterator<Item = TriplePattern>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BasicPattern {
    type Item = TriplePattern;
    type IntoIter = std::vec::IntoIter<TriplePattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a BasicPattern {
    type Item = &'a TriplePattern;
    type IntoIter = std::slice::Iter<'a, TriplePattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl Display for BasicPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ {} }}", self.triples.iter().join(" . "))
    }
}

use std::collections::HashMap;

use futures::stream::BoxStream;
use futures::StreamExt;

use olivine::error::OlivineResult;
use olivine::term::{Term, Var};

/// One solution row: a mapping from variables to bound terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Binding {
    values: HashMap<Var, Term>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, var: &Var) -> Option<&Term> {
        self.values.get(var)
    }

    pub fn set(&mut self, var: Var, term: Term) {
        self.values.insert(var, term);
    }

    pub fn vars(&self) -> impl Iterator<Item = &Var> {
        self.values.keys()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Var, Term)> for Binding {
    fn from_iter<I: IntoIterator<Item = (Var, Term)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// The stream of solution rows flowing through the service chain.
pub type BindingStream = BoxStream<'static, OlivineResult<Binding>>;

pub fn empty_stream() -> BindingStream {
    futures::stream::empty().boxed()
}

/// Wrap already-materialized bindings as a stream.
pub fn stream_of<I>(bindings: I) -> BindingStream
where
    I: IntoIterator<Item = Binding>,
    I::IntoIter: Send + 'static,
{
    futures::stream::iter(bindings.into_iter().map(Ok)).boxed()
}

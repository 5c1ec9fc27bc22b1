use std::fmt::{Display, Formatter};

use olivine::pattern::BasicPattern;

/// A remote-service sub-query: evaluate `pattern` against the service at
/// `endpoint`. `silent` requests that remote failures degrade to an empty
/// result instead of failing the query; honoring it is up to the executor
/// links, not this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceOp {
    endpoint: String,
    pattern: BasicPattern,
    silent: bool,
}

impl ServiceOp {
    pub fn new<S: Into<String>>(endpoint: S, pattern: BasicPattern) -> Self {
        Self {
            endpoint: endpoint.into(),
            pattern,
            silent: false,
        }
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn pattern(&self) -> &BasicPattern {
        &self.pattern
    }

    pub fn silent(&self) -> bool {
        self.silent
    }
}

impl Display for ServiceOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SERVICE{} <{}> {}",
            if self.silent { " SILENT" } else { "" },
            self.endpoint,
            self.pattern
        )
    }
}

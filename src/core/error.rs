use std::error::Error as StdError;
use std::fmt;

use crate::core::path::CodingPath;

/// Failure categories for a decode call. A missing registry entry is not an
/// error kind: lookup misses simply let the original failure surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Input bytes are not JSON at all. Raised only at the entry boundary.
    Syntax,
    /// A container view was requested over a value of the wrong shape.
    /// Never masked at the point it is raised.
    Structure,
    /// A leaf failed to decode: absent key, null, type mismatch, out of
    /// range, or read past the end of a sequence.
    Value,
    /// A compound type could not be rebuilt from parts that individually
    /// decoded fine.
    Composition,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    path: Option<CodingPath>,
    expected: Option<&'static str>,
    found: Option<&'static str>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            path: None,
            expected: None,
            found: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn path(&self) -> Option<&CodingPath> {
        self.path.as_ref()
    }

    pub fn expected(&self) -> Option<&'static str> {
        self.expected
    }

    pub fn found(&self) -> Option<&'static str> {
        self.found
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_path(mut self, path: CodingPath) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_expected(mut self, expected: &'static str) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn with_found(mut self, found: &'static str) -> Self {
        self.found = Some(found);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let (Some(expected), Some(found)) = (self.expected, self.found) {
            write!(f, " (expected: {expected}, found: {found})")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {path})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

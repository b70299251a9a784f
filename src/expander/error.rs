//! Error type returned by the expander upon failure.
use std::{error::Error, fmt::Display};

use thiserror::Error;

/// Anything that could possibly go wrong while expanding macros.
///
/// Any error aborts the whole expansion: no partial output is ever returned alongside it.
#[derive(Debug)]
pub struct ExpandError {
    inner: Box<Inner>,
}

#[derive(Debug)]
struct Inner {
    kind: ErrorKind,
    name: Box<str>,
    position: usize,
    context: Box<str>,
}

impl ExpandError {
    pub(super) fn new(kind: ErrorKind, input: &str, position: usize, name: &str) -> Self {
        const CONTEXT_SIZE: usize = 12;
        const CONTEXT_PREFIX: &str = "context: ";

        let lower_bound = floor_char_boundary(input, position.saturating_sub(CONTEXT_SIZE));
        let upper_bound = floor_char_boundary(input, position + CONTEXT_SIZE);

        let mut context = String::from(CONTEXT_PREFIX);
        context.push_str(&input[lower_bound..upper_bound]);
        context.shrink_to_fit();

        Self {
            inner: Box::new(Inner {
                kind,
                name: name.into(),
                position,
                context: context.into_boxed_str(),
            }),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.inner.kind
    }

    /// Name of the macro whose invocation is malformed.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Byte offset in the input where an argument was expected.
    pub fn position(&self) -> usize {
        self.inner.position
    }
}

impl Error for ExpandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner.kind)
    }
}

impl Display for ExpandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("macro expansion error: ")?;
        self.inner.kind.fmt(f)?;
        write!(f, " for `\\{}` at byte {}", self.inner.name, self.inner.position)?;
        f.write_str("\n")?;
        f.write_str(&self.inner.context)?;
        Ok(())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("expected an argument delimited by `{{}}`")]
    MissingArgument,
    #[error("argument opened with `{{` is never closed by a `}}`")]
    UnmatchedBrace,
}

fn floor_char_boundary(str: &str, index: usize) -> usize {
    if index >= str.len() {
        str.len()
    } else {
        (0..=index)
            .rev()
            .find(|&i| str.is_char_boundary(i))
            .unwrap_or(0)
    }
}

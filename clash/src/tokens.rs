//! Token grammar and the cursor that walks the raw argument list.
//!
//! Only three shapes are recognised:
//!
//! - `--name=value`: long form, the value may be empty;
//! - `-name value`: short form, the value is the next raw token;
//! - anything not starting with `-`: skipped.

use crate::error::{ClashError, SyntaxError};

/// Classification of a single raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Not an option; ignored.
    Positional,
    /// `--name=value`
    Long { name: &'a str, value: &'a str },
    /// `-name`, value pending in the next token.
    Short { name: &'a str },
}

/// Classifies `raw` without looking at its neighbours.
pub(crate) fn classify(raw: &str) -> Result<Token<'_>, SyntaxError> {
    if let Some(rest) = raw.strip_prefix("--") {
        let (name, value) = rest.split_once('=').ok_or(SyntaxError::MissingEquals)?;
        return Ok(Token::Long { name, value });
    }
    Ok(raw
        .strip_prefix('-')
        .map_or(Token::Positional, |name| Token::Short { name }))
}

/// A resolved name/value pair taken from the argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Occurrence<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Explicit cursor over the raw arguments.
///
/// Long-form tokens consume one raw token and short-form tokens consume two,
/// so the walk cannot be a plain iteration.
pub(crate) struct Cursor<'a, S> {
    args: &'a [S],
    position: usize,
}

impl<'a, S: AsRef<str>> Cursor<'a, S> {
    pub(crate) const fn new(args: &'a [S]) -> Self {
        Self { args, position: 0 }
    }

    fn advance(&mut self) -> Option<&'a str> {
        let raw = self.args.get(self.position)?;
        self.position += 1;
        Some(raw.as_ref())
    }

    /// Returns the next option occurrence, skipping positional tokens.
    pub(crate) fn next_occurrence(&mut self) -> Result<Option<Occurrence<'a>>, ClashError> {
        while let Some(raw) = self.advance() {
            let token = classify(raw).map_err(|reason| ClashError::syntax(raw, reason))?;
            tracing::trace!(raw, ?token, "classified argument");
            match token {
                Token::Positional => {}
                Token::Long { name, value } => return Ok(Some(Occurrence { name, value })),
                Token::Short { name } => {
                    let value = self
                        .advance()
                        .ok_or_else(|| ClashError::syntax(raw, SyntaxError::MissingValue))?;
                    return Ok(Some(Occurrence { name, value }));
                }
            }
        }
        Ok(None)
    }
}

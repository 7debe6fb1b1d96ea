//! Primary error enum for bind operations.

use thiserror::Error;

use super::reasons::{CoercionError, SchemaError, SyntaxError};

/// Errors that terminate a bind operation.
///
/// Every failure is fail-fast: the first problem aborts binding and no
/// partially populated value is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClashError {
    /// The argument schema is invalid.
    #[error("invalid argument schema: {0}")]
    Schema(#[from] SchemaError),

    /// A token does not follow the option grammar.
    #[error("malformed argument '{token}': {reason}")]
    Syntax {
        /// Raw token as it appeared in the argument list.
        token: String,
        /// Grammar rule the token broke.
        reason: SyntaxError,
    },

    /// A name does not resolve to any field.
    #[error("Unknown argument: {name}")]
    UnknownArgument {
        /// Name as written after the dashes.
        name: String,
    },

    /// A value could not be converted to or stored in its field.
    #[error("cannot bind field '{field}': {reason}")]
    Coercion {
        /// Field receiving the value.
        field: &'static str,
        /// Raw text, absent when the value came from a default factory.
        input: Option<String>,
        /// Underlying conversion failure.
        #[source]
        reason: CoercionError,
    },

    /// A required field received neither a value nor a default.
    #[error("Required argument not provided: {short}")]
    RequiredMissing {
        /// Field left unset.
        field: &'static str,
        /// Short name of the field.
        short: String,
    },
}

/// Coarse classification of a [`ClashError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`ClashError::Schema`].
    Schema,
    /// See [`ClashError::Syntax`].
    Syntax,
    /// See [`ClashError::UnknownArgument`].
    UnknownArgument,
    /// See [`ClashError::Coercion`].
    Coercion,
    /// See [`ClashError::RequiredMissing`].
    RequiredMissing,
}

impl ClashError {
    /// Returns the coarse category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use clash::{ClashError, ErrorKind};
    ///
    /// let err = ClashError::unknown_argument("verbose");
    /// assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Schema(_) => ErrorKind::Schema,
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::UnknownArgument { .. } => ErrorKind::UnknownArgument,
            Self::Coercion { .. } => ErrorKind::Coercion,
            Self::RequiredMissing { .. } => ErrorKind::RequiredMissing,
        }
    }

    /// Construct a syntax error for `token`.
    #[must_use]
    pub fn syntax(token: impl Into<String>, reason: SyntaxError) -> Self {
        Self::Syntax {
            token: token.into(),
            reason,
        }
    }

    /// Construct an unknown-argument error for `name`.
    #[must_use]
    pub fn unknown_argument(name: impl Into<String>) -> Self {
        Self::UnknownArgument { name: name.into() }
    }

    /// Construct a coercion error for `field`.
    #[must_use]
    pub fn coercion(field: &'static str, input: Option<&str>, reason: CoercionError) -> Self {
        Self::Coercion {
            field,
            input: input.map(str::to_owned),
            reason,
        }
    }
}

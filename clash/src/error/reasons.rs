//! Detailed causes carried by [`ClashError`](super::ClashError) variants.

use thiserror::Error;

use crate::value::{ScalarKind, ValueKind};

/// Boxed error returned by caller-supplied initializers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Problems with the declared argument schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// A short or long name was empty.
    #[error("Argument name must not be empty! : field '{field}'")]
    EmptyName {
        /// Field declaring the empty name.
        field: &'static str,
    },

    /// A name started with `-`.
    #[error("Argument name must not begin with a dash (-)! : {name}")]
    LeadingDash {
        /// Field declaring the name.
        field: &'static str,
        /// Offending name.
        name: String,
    },

    /// A name contained a whitespace character.
    #[error("Argument name must not contain whitespace! : {name}")]
    Whitespace {
        /// Field declaring the name.
        field: &'static str,
        /// Offending name.
        name: String,
    },

    /// Two distinct fields declared the same name.
    #[error("argument name '{name}' is declared by both '{first}' and '{second}'")]
    DuplicateName {
        /// Colliding name.
        name: String,
        /// Field that claimed the name first.
        first: &'static str,
        /// Field that tried to claim it again.
        second: &'static str,
    },
}

/// Malformed option tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// `--name` without `=value`.
    #[error("long-form arguments must specify value with '='")]
    MissingEquals,
    /// `-name` as the final token.
    #[error("short-form arguments must be followed by a value")]
    MissingValue,
}

/// A value whose type does not match the field receiving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct TypeMismatch {
    expected: ValueKind,
    found: &'static str,
}

impl TypeMismatch {
    /// Records that a field of kind `expected` received a `found` value.
    #[must_use]
    pub const fn new(expected: ValueKind, found: &'static str) -> Self {
        Self { expected, found }
    }

    /// Kind declared by the receiving field.
    #[must_use]
    pub const fn expected(&self) -> ValueKind {
        self.expected
    }

    /// Description of the value that was offered.
    #[must_use]
    pub const fn found(&self) -> &'static str {
        self.found
    }
}

/// Reasons a raw string could not become a field value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoercionError {
    /// The text is not valid for the scalar type.
    #[error("not a valid {expected}: {message}")]
    Malformed {
        /// Scalar type the text was parsed as.
        expected: ScalarKind,
        /// Parser diagnostic.
        message: String,
    },

    /// The field's type has no coercion rule.
    #[error("unsupported type: {kind}")]
    Unsupported {
        /// Declared kind of the field.
        kind: ValueKind,
    },

    /// The kind is recognised but its coercion does not exist.
    #[error("not implemented: {kind}")]
    NotImplemented {
        /// Declared kind of the field.
        kind: ValueKind,
    },

    /// A caller-supplied initializer rejected the text.
    #[error("initializer failed: {0}")]
    Initializer(#[source] BoxError),

    /// The produced value could not be stored in the field.
    #[error(transparent)]
    Mismatch(#[from] TypeMismatch),
}

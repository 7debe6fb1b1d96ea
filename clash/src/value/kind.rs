//! Declared semantic types for bindable fields.
//!
//! A field's [`ValueKind`] decides which coercion rule turns raw command-line
//! text into a [`Value`](super::Value). The kind is declared once, either by
//! hand when building a [`TypeDescription`](crate::TypeDescription) or by the
//! derive through [`Bindable::KIND`](crate::Bindable::KIND).

use std::fmt;

/// Width and signedness of an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IntKind {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
}

/// Width of a floating point field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FloatKind {
    /// `f32`
    F32,
    /// `f64`
    F64,
}

/// Atomic counter wrappers constructed from a parsed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CounterKind {
    /// [`std::sync::atomic::AtomicI32`]
    AtomicI32,
    /// [`std::sync::atomic::AtomicI64`]
    AtomicI64,
}

/// Scalar types with a built-in coercion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScalarKind {
    /// Text taken verbatim.
    Text,
    /// Fixed-width integer.
    Integer(IntKind),
    /// Floating point number.
    Float(FloatKind),
    /// `true` or `false`, compared case-insensitively.
    Bool,
    /// Arbitrary-precision integer.
    BigInt,
    /// Arbitrary-precision decimal.
    BigDecimal,
    /// Atomic counter around a parsed integer.
    Counter(CounterKind),
}

/// Declared semantic type of a bindable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    /// A single scalar value.
    Scalar(ScalarKind),
    /// An array or sequence of scalars. Declared, but coercion is not
    /// implemented.
    Sequence(ScalarKind),
    /// Conversion supplied by the field's own initializer.
    Custom,
    /// A type without a coercion rule, carrying its name for diagnostics.
    Unsupported(&'static str),
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        };
        f.write_str(name)
    }
}

impl fmt::Display for FloatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
        })
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AtomicI32 => "AtomicI32",
            Self::AtomicI64 => "AtomicI64",
        })
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Integer(int) => fmt::Display::fmt(int, f),
            Self::Float(float) => fmt::Display::fmt(float, f),
            Self::Bool => f.write_str("bool"),
            Self::BigInt => f.write_str("big integer"),
            Self::BigDecimal => f.write_str("big decimal"),
            Self::Counter(counter) => fmt::Display::fmt(counter, f),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Self::Sequence(scalar) => write!(f, "sequence of {scalar}"),
            Self::Custom => f.write_str("custom"),
            Self::Unsupported(name) => f.write_str(name),
        }
    }
}

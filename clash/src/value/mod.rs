//! Typed values produced by coercion and consumed by field setters.

mod bindable;
mod kind;

use std::any::Any;
use std::sync::atomic::{AtomicI32, AtomicI64};

pub use bindable::Bindable;
pub use kind::{CounterKind, FloatKind, IntKind, ScalarKind, ValueKind};

use crate::error::TypeMismatch;

/// A coerced value ready to be assigned into a field.
///
/// Built-in coercion produces one of the scalar variants. Caller-supplied
/// initializers and default factories wrap their result with
/// [`Value::custom`].
#[derive(Debug)]
#[non_exhaustive]
pub enum Value {
    /// Text, taken verbatim.
    Text(String),
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
    /// `bool`
    Bool(bool),
    /// Arbitrary-precision integer.
    #[cfg(feature = "bignum")]
    BigInt(num_bigint::BigInt),
    /// Arbitrary-precision decimal.
    #[cfg(feature = "bignum")]
    BigDecimal(bigdecimal::BigDecimal),
    /// 32-bit atomic counter.
    AtomicI32(AtomicI32),
    /// 64-bit atomic counter.
    AtomicI64(AtomicI64),
    /// Any value built by caller code, stored as the field's own type.
    Custom(Box<dyn Any + Send>),
}

impl Value {
    /// Wraps a caller-built value so it can be assigned without coercion.
    ///
    /// # Examples
    ///
    /// ```
    /// use clash::Value;
    ///
    /// let value = Value::custom(std::time::Duration::from_secs(3));
    /// assert_eq!(value.describe(), "custom");
    /// ```
    #[must_use]
    pub fn custom<V: Any + Send>(value: V) -> Self {
        Self::Custom(Box::new(value))
    }

    /// Short name of the variant, used in mismatch diagnostics.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Bool(_) => "bool",
            #[cfg(feature = "bignum")]
            Self::BigInt(_) => "big integer",
            #[cfg(feature = "bignum")]
            Self::BigDecimal(_) => "big decimal",
            Self::AtomicI32(_) => "AtomicI32",
            Self::AtomicI64(_) => "AtomicI64",
            Self::Custom(_) => "custom",
        }
    }

    /// Converts the value into a [`Bindable`] field type.
    ///
    /// Custom values are downcast to `V`; every other variant goes through
    /// [`Bindable::from_value`].
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when the value does not hold a `V`.
    pub fn take<V: Bindable + Any>(self) -> Result<V, TypeMismatch> {
        match self {
            Self::Custom(boxed) => boxed
                .downcast::<V>()
                .map(|inner| *inner)
                .map_err(|_| TypeMismatch::new(V::KIND, "custom")),
            other => V::from_value(other),
        }
    }

    /// Downcasts a custom value to `V`.
    ///
    /// Used for fields whose type has no built-in coercion rule and is filled
    /// only by an initializer or a default factory.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when the value is not a custom `V`.
    pub fn downcast<V: Any>(self) -> Result<V, TypeMismatch> {
        match self {
            Self::Custom(boxed) => boxed
                .downcast::<V>()
                .map(|inner| *inner)
                .map_err(|_| TypeMismatch::new(ValueKind::Custom, "custom")),
            other => Err(TypeMismatch::new(ValueKind::Custom, other.describe())),
        }
    }
}

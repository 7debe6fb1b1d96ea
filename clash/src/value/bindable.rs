//! Field types with a built-in coercion rule.

use std::sync::atomic::{AtomicI32, AtomicI64};

use super::{CounterKind, FloatKind, IntKind, ScalarKind, Value, ValueKind};
use crate::error::TypeMismatch;

/// A field type the binding engine knows how to fill.
///
/// The derive reads [`Bindable::KIND`] to declare each field's semantic type
/// and calls [`Bindable::from_value`] (through [`Value::take`]) to store the
/// coerced value. `Option<T>` shares the kind of `T`; `Vec<T>` declares a
/// sequence kind, which is recognised but never coerced.
pub trait Bindable: Sized {
    /// Declared semantic type of the field.
    const KIND: ValueKind;

    /// Extracts `Self` from a coerced value.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when `value` holds a different type.
    fn from_value(value: Value) -> Result<Self, TypeMismatch>;
}

macro_rules! bindable_scalar {
    ($($ty:ty => $variant:ident, $kind:expr;)*) => {
        $(
            impl Bindable for $ty {
                const KIND: ValueKind = ValueKind::Scalar($kind);

                fn from_value(value: Value) -> Result<Self, TypeMismatch> {
                    match value {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(TypeMismatch::new(Self::KIND, other.describe())),
                    }
                }
            }
        )*
    };
}

bindable_scalar! {
    String => Text, ScalarKind::Text;
    i8 => I8, ScalarKind::Integer(IntKind::I8);
    i16 => I16, ScalarKind::Integer(IntKind::I16);
    i32 => I32, ScalarKind::Integer(IntKind::I32);
    i64 => I64, ScalarKind::Integer(IntKind::I64);
    u8 => U8, ScalarKind::Integer(IntKind::U8);
    u16 => U16, ScalarKind::Integer(IntKind::U16);
    u32 => U32, ScalarKind::Integer(IntKind::U32);
    u64 => U64, ScalarKind::Integer(IntKind::U64);
    f32 => F32, ScalarKind::Float(FloatKind::F32);
    f64 => F64, ScalarKind::Float(FloatKind::F64);
    bool => Bool, ScalarKind::Bool;
    AtomicI32 => AtomicI32, ScalarKind::Counter(CounterKind::AtomicI32);
    AtomicI64 => AtomicI64, ScalarKind::Counter(CounterKind::AtomicI64);
}

#[cfg(feature = "bignum")]
bindable_scalar! {
    num_bigint::BigInt => BigInt, ScalarKind::BigInt;
    bigdecimal::BigDecimal => BigDecimal, ScalarKind::BigDecimal;
}

impl<T: Bindable> Bindable for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn from_value(value: Value) -> Result<Self, TypeMismatch> {
        T::from_value(value).map(Some)
    }
}

impl<T: Bindable> Bindable for Vec<T> {
    const KIND: ValueKind = match T::KIND {
        ValueKind::Scalar(scalar) => ValueKind::Sequence(scalar),
        ValueKind::Sequence(_) | ValueKind::Custom | ValueKind::Unsupported(_) => {
            ValueKind::Unsupported("Vec")
        }
    };

    fn from_value(value: Value) -> Result<Self, TypeMismatch> {
        Err(TypeMismatch::new(Self::KIND, value.describe()))
    }
}

//! Conversion of raw argument text into typed field values.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::atomic::{AtomicI32, AtomicI64};

use crate::error::{ClashError, CoercionError};
use crate::schema::FieldDescriptor;
use crate::value::{CounterKind, FloatKind, IntKind, ScalarKind, Value, ValueKind};

/// Converts `raw` into the value declared for `field`.
///
/// A custom initializer takes precedence over every built-in rule. Otherwise
/// the declared kind selects the parser: scalar kinds use their standard
/// textual form, sequence kinds are not implemented, and anything else is an
/// unsupported type.
pub(crate) fn coerce<T>(field: &FieldDescriptor<T>, raw: &str) -> Result<Value, ClashError> {
    coerce_kind(field, raw)
        .map_err(|reason| ClashError::coercion(field.name(), Some(raw), reason))
}

fn coerce_kind<T>(field: &FieldDescriptor<T>, raw: &str) -> Result<Value, CoercionError> {
    if let Some(initializer) = field.argument().custom_initializer() {
        return initializer
            .initialize(raw)
            .map_err(CoercionError::Initializer);
    }
    match field.kind() {
        ValueKind::Scalar(scalar) => coerce_scalar(scalar, raw),
        kind @ ValueKind::Sequence(_) => Err(CoercionError::NotImplemented { kind }),
        kind @ (ValueKind::Custom | ValueKind::Unsupported(_)) => {
            Err(CoercionError::Unsupported { kind })
        }
    }
}

/// Parses `raw` with the standard rule for `kind`.
pub(crate) fn coerce_scalar(kind: ScalarKind, raw: &str) -> Result<Value, CoercionError> {
    match kind {
        ScalarKind::Text => Ok(Value::Text(raw.to_owned())),
        ScalarKind::Integer(int) => coerce_integer(int, raw),
        ScalarKind::Float(FloatKind::F32) => parse(kind, raw).map(Value::F32),
        ScalarKind::Float(FloatKind::F64) => parse(kind, raw).map(Value::F64),
        ScalarKind::Bool => parse_bool(raw).map(Value::Bool),
        ScalarKind::Counter(CounterKind::AtomicI32) => {
            parse(kind, raw).map(|count| Value::AtomicI32(AtomicI32::new(count)))
        }
        ScalarKind::Counter(CounterKind::AtomicI64) => {
            parse(kind, raw).map(|count| Value::AtomicI64(AtomicI64::new(count)))
        }
        ScalarKind::BigInt | ScalarKind::BigDecimal => coerce_big(kind, raw),
    }
}

fn coerce_integer(int: IntKind, raw: &str) -> Result<Value, CoercionError> {
    let kind = ScalarKind::Integer(int);
    match int {
        IntKind::I8 => parse(kind, raw).map(Value::I8),
        IntKind::I16 => parse(kind, raw).map(Value::I16),
        IntKind::I32 => parse(kind, raw).map(Value::I32),
        IntKind::I64 => parse(kind, raw).map(Value::I64),
        IntKind::U8 => parse(kind, raw).map(Value::U8),
        IntKind::U16 => parse(kind, raw).map(Value::U16),
        IntKind::U32 => parse(kind, raw).map(Value::U32),
        IntKind::U64 => parse(kind, raw).map(Value::U64),
    }
}

/// Parses the arbitrary-precision kinds.
///
/// The grammar is checked before parsing: digit separators and other forms
/// the underlying parsers tolerate are rejected, matching the fixed-width
/// integer rules.
#[cfg(feature = "bignum")]
fn coerce_big(kind: ScalarKind, raw: &str) -> Result<Value, CoercionError> {
    let well_formed = if kind == ScalarKind::BigInt {
        is_integer_syntax(raw)
    } else {
        is_decimal_syntax(raw)
    };
    if !well_formed {
        return Err(CoercionError::Malformed {
            expected: kind,
            message: format!("'{raw}' is not in decimal notation"),
        });
    }
    if kind == ScalarKind::BigInt {
        parse(kind, raw).map(Value::BigInt)
    } else {
        parse(kind, raw).map(Value::BigDecimal)
    }
}

/// `[+-]digits`
#[cfg(feature = "bignum")]
fn is_integer_syntax(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// `[+-](digits[.digits?] | .digits)([eE][+-]digits)?`
#[cfg(feature = "bignum")]
fn is_decimal_syntax(raw: &str) -> bool {
    let (mantissa, exponent) = raw
        .split_once(['e', 'E'])
        .map_or((raw, None), |(mantissa, exponent)| (mantissa, Some(exponent)));
    let unsigned = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    (!whole.is_empty() || !fraction.is_empty())
        && all_digits(whole)
        && all_digits(fraction)
        && exponent.is_none_or(is_integer_syntax)
}

#[cfg(not(feature = "bignum"))]
fn coerce_big(kind: ScalarKind, _raw: &str) -> Result<Value, CoercionError> {
    Err(CoercionError::Unsupported {
        kind: ValueKind::Scalar(kind),
    })
}

fn parse<V>(kind: ScalarKind, raw: &str) -> Result<V, CoercionError>
where
    V: FromStr,
    V::Err: Display,
{
    raw.parse().map_err(|err: V::Err| CoercionError::Malformed {
        expected: kind,
        message: err.to_string(),
    })
}

fn parse_bool(raw: &str) -> Result<bool, CoercionError> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoercionError::Malformed {
            expected: ScalarKind::Bool,
            message: format!("expected 'true' or 'false', got '{raw}'"),
        })
    }
}

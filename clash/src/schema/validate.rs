//! Syntactic checks over declared argument names.

use super::FieldDescriptor;
use crate::error::SchemaError;

/// Checks every declared name, failing on the first problem.
///
/// Names must be non-empty, must not start with `-`, and must not contain
/// whitespace.
pub(crate) fn validate<T>(fields: &[FieldDescriptor<T>]) -> Result<(), SchemaError> {
    for field in fields {
        for name in field.argument().names() {
            check_name(field.name(), name)?;
        }
    }
    Ok(())
}

fn check_name(field: &'static str, name: &str) -> Result<(), SchemaError> {
    if name.is_empty() {
        return Err(SchemaError::EmptyName { field });
    }
    if name.starts_with('-') {
        return Err(SchemaError::LeadingDash {
            field,
            name: name.to_owned(),
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(SchemaError::Whitespace {
            field,
            name: name.to_owned(),
        });
    }
    Ok(())
}

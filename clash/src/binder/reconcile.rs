//! Default and required handling for fields no token reached.

use tracing::debug;

use super::satisfaction::SatisfactionSet;
use super::store;
use crate::coerce::coerce;
use crate::error::ClashError;
use crate::schema::FieldDescriptor;

/// Visits every pending field in extraction order.
///
/// A default factory wins over a literal default, which wins over the
/// required check. Optional fields without a default keep their zero value.
pub(super) fn apply_defaults<T>(
    fields: &[FieldDescriptor<T>],
    pending: &SatisfactionSet,
    target: &mut T,
) -> Result<(), ClashError> {
    for field in fields.iter().filter(|field| pending.is_pending(field.position())) {
        let argument = field.argument();
        if let Some(creator) = argument.default_creator() {
            debug!(field = field.name(), "applying default factory");
            store(field, target, creator.create(), None)?;
        } else if let Some(literal) = argument.literal_default() {
            debug!(field = field.name(), default = literal, "applying literal default");
            let value = coerce(field, literal)?;
            store(field, target, value, Some(literal))?;
        } else if argument.is_required() {
            return Err(ClashError::RequiredMissing {
                field: field.name(),
                short: argument.short().to_owned(),
            });
        }
    }
    Ok(())
}

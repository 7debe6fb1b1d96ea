//! The bind operation: extraction, validation, token parsing and
//! reconciliation.

mod reconcile;
mod satisfaction;

use std::fmt;

use tracing::{debug, warn};

use crate::coerce::coerce;
use crate::docs::ArgumentDoc;
use crate::error::{ClashError, CoercionError};
use crate::schema::{FieldDescriptor, TypeDescription, extract, validate};
use crate::table::ResolutionTable;
use crate::tokens::Cursor;
use crate::value::Value;

use satisfaction::SatisfactionSet;

/// A validated schema ready to bind argument lists.
///
/// Construction runs extraction, name validation and resolution-table
/// building once. The binder is immutable afterwards, so one instance can
/// serve any number of [`Binder::bind`] calls, including concurrent ones.
///
/// # Examples
///
/// ```
/// use clash::{Binder, Clash};
///
/// #[derive(Debug, Default, Clash)]
/// struct Opts {
///     #[clash(short = "n", long = "count", default = "1")]
///     count: i32,
/// }
///
/// let binder = Binder::new(Opts::describe())?;
/// assert_eq!(binder.bind(["--count=5"])?.count, 5);
/// assert_eq!(binder.bind(["-n", "7"])?.count, 7);
/// assert_eq!(binder.bind(Vec::<String>::new())?.count, 1);
/// # Ok::<(), clash::ClashError>(())
/// ```
pub struct Binder<T> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
    table: ResolutionTable,
}

impl<T: Default + 'static> Binder<T> {
    /// Prepares `description` for binding.
    ///
    /// # Errors
    ///
    /// Returns [`ClashError::Schema`] when a name is empty, starts with a
    /// dash or contains whitespace, or when two fields share a name.
    pub fn new(description: TypeDescription<T>) -> Result<Self, ClashError> {
        let type_name = description.name();
        let fields = extract(description);
        validate(&fields)?;
        let table = ResolutionTable::build(&fields)?;
        for field in fields
            .iter()
            .filter(|field| field.argument().is_required() && field.argument().has_default())
        {
            warn!(
                target_type = type_name,
                field = field.name(),
                "required argument declares a default; the default applies when it is absent"
            );
        }
        debug!(
            target_type = type_name,
            fields = fields.len(),
            names = table.len(),
            "prepared argument schema"
        );
        Ok(Self {
            type_name,
            fields,
            table,
        })
    }

    /// Binds `args` onto a fresh zero-valued `T`.
    ///
    /// `args` must not include the program name. Tokens are consumed left to
    /// right; afterwards every field that received no token gets its default
    /// or, if required, fails the bind.
    ///
    /// # Errors
    ///
    /// Returns the first [`ClashError`] encountered; no partial value is
    /// returned.
    pub fn bind<I>(&self, args: I) -> Result<T, ClashError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let raw: Vec<I::Item> = args.into_iter().collect();
        let mut staging = T::default();
        let mut pending = SatisfactionSet::new(self.fields.len());
        let mut cursor = Cursor::new(&raw);

        while let Some(occurrence) = cursor.next_occurrence()? {
            let field = self
                .table
                .resolve(occurrence.name)
                .and_then(|position| self.fields.get(position))
                .ok_or_else(|| ClashError::unknown_argument(occurrence.name))?;
            let value = coerce(field, occurrence.value)?;
            store(field, &mut staging, value, Some(occurrence.value))?;
            if !pending.satisfy(field.position()) {
                debug!(
                    field = field.name(),
                    name = occurrence.name,
                    "argument repeated; later value replaces the earlier one"
                );
            }
        }

        reconcile::apply_defaults(&self.fields, &pending, &mut staging)?;
        Ok(staging)
    }
}

impl<T> Binder<T> {
    /// Name of the bound type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Bound fields in extraction order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Describes every bound argument for external help renderers.
    #[must_use]
    pub fn docs(&self) -> Vec<ArgumentDoc> {
        self.fields.iter().map(ArgumentDoc::from_descriptor).collect()
    }
}

impl<T> fmt::Debug for Binder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Assigns `value` into the field, mapping a type mismatch to a coercion
/// error.
fn store<T>(
    field: &FieldDescriptor<T>,
    target: &mut T,
    value: Value,
    input: Option<&str>,
) -> Result<(), ClashError> {
    field
        .assign(target, value)
        .map_err(|mismatch| ClashError::coercion(field.name(), input, CoercionError::from(mismatch)))
}

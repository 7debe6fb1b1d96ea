//! Name resolution from declared names to extracted fields.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::SchemaError;
use crate::schema::FieldDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    position: usize,
    field: &'static str,
}

/// Maps every short and long name to exactly one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ResolutionTable {
    names: HashMap<String, Slot>,
}

impl ResolutionTable {
    /// Inserts each field's short name, then its long names.
    ///
    /// A name repeated by the same field collapses into one entry; a name
    /// claimed by two different fields is rejected.
    pub(crate) fn build<T>(fields: &[FieldDescriptor<T>]) -> Result<Self, SchemaError> {
        let mut names = HashMap::new();
        for field in fields {
            let slot = Slot {
                position: field.position(),
                field: field.name(),
            };
            for name in field.argument().names() {
                match names.entry(name.to_owned()) {
                    Entry::Vacant(entry) => {
                        entry.insert(slot);
                    }
                    Entry::Occupied(entry) if entry.get().position == slot.position => {}
                    Entry::Occupied(entry) => {
                        return Err(SchemaError::DuplicateName {
                            name: entry.key().clone(),
                            first: entry.get().field,
                            second: slot.field,
                        });
                    }
                }
            }
        }
        Ok(Self { names })
    }

    /// Exact-match lookup; no prefix or abbreviation matching.
    pub(crate) fn resolve(&self, name: &str) -> Option<usize> {
        self.names.get(name).map(|slot| slot.position)
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests panic to surface configuration mistakes"
    )]
    use super::*;
    use crate::schema::{Argument, FieldDecl, TypeDescription, extract};

    #[derive(Default)]
    struct Target;

    fn field(name: &'static str, argument: Argument) -> FieldDecl<Target> {
        FieldDecl::<Target>::undeclared(name, "unit").argument(argument)
    }

    fn table_for(description: TypeDescription<Target>) -> Result<ResolutionTable, SchemaError> {
        ResolutionTable::build(&extract(description))
    }

    #[test]
    fn resolves_short_and_long_names_to_the_same_field() {
        let table = table_for(
            TypeDescription::new("Target")
                .field(field("alpha", Argument::new("a").long("alpha").long("first")))
                .field(field("beta", Argument::new("b"))),
        )
        .expect("valid schema");
        assert_eq!(table.resolve("a"), Some(0));
        assert_eq!(table.resolve("alpha"), Some(0));
        assert_eq!(table.resolve("first"), Some(0));
        assert_eq!(table.resolve("b"), Some(1));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let table = table_for(
            TypeDescription::new("Target").field(field("alpha", Argument::new("a").long("alpha"))),
        )
        .expect("valid schema");
        assert_eq!(table.resolve("alp"), None);
        assert_eq!(table.resolve("ALPHA"), None);
    }

    #[test]
    fn repeated_name_on_one_field_collapses() {
        let table = table_for(
            TypeDescription::new("Target").field(field("alpha", Argument::new("a").long("a"))),
        )
        .expect("same field may repeat a name");
        assert_eq!(table.resolve("a"), Some(0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn rejects_name_shared_by_two_fields() {
        let err = table_for(
            TypeDescription::new("Target")
                .field(field("first", Argument::new("a")))
                .field(field("second", Argument::new("a"))),
        )
        .expect_err("duplicate short name");
        assert_eq!(
            err,
            SchemaError::DuplicateName {
                name: "a".to_owned(),
                first: "first",
                second: "second",
            }
        );
    }

    #[test]
    fn rejects_long_name_colliding_with_short_name() {
        let err = table_for(
            TypeDescription::new("Target")
                .field(field("first", Argument::new("n")))
                .field(field("second", Argument::new("s").long("n"))),
        )
        .expect_err("long name collides with short name");
        assert!(matches!(err, SchemaError::DuplicateName { ref name, .. } if name == "n"));
    }

    #[test]
    fn building_twice_yields_identical_tables() {
        let describe = || {
            TypeDescription::new("Target")
                .field(field("alpha", Argument::new("a").long("alpha")))
                .field(field("beta", Argument::new("b").long("beta").long("second")))
        };
        let first = table_for(describe()).expect("valid schema");
        let second = table_for(describe()).expect("valid schema");
        assert_eq!(first, second);
    }
}

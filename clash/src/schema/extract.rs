//! Metadata extraction over a type description.

use std::fmt;
use std::sync::Arc;

use super::{Argument, FieldDecl, SetterFn, TypeDescription};
use crate::error::TypeMismatch;
use crate::value::{Value, ValueKind};

/// A field selected for binding.
///
/// Descriptors are produced once per [`Binder`](crate::Binder) and never
/// change afterwards.
pub struct FieldDescriptor<T> {
    position: usize,
    owner: &'static str,
    name: &'static str,
    kind: ValueKind,
    argument: Argument,
    setter: Arc<SetterFn<T>>,
}

impl<T> FieldDescriptor<T> {
    /// Index of the field in extraction order.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Name of the structure that declared the field.
    #[must_use]
    pub const fn owner(&self) -> &'static str {
        self.owner
    }

    /// Field name within its structure.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared semantic type.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Argument metadata.
    #[must_use]
    pub const fn argument(&self) -> &Argument {
        &self.argument
    }

    pub(crate) fn assign(&self, target: &mut T, value: Value) -> Result<(), TypeMismatch> {
        (self.setter)(target, value)
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("position", &self.position)
            .field("owner", &self.owner)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("argument", &self.argument)
            .finish_non_exhaustive()
    }
}

/// Flattens `description` into the fields that take part in binding.
///
/// Own fields come first in declaration order, followed by each inherited
/// structure's fields. Transient fields and fields without argument metadata
/// are dropped silently.
pub(crate) fn extract<T>(description: TypeDescription<T>) -> Vec<FieldDescriptor<T>> {
    let mut out = Vec::new();
    collect(description, &mut out);
    out
}

fn collect<T>(description: TypeDescription<T>, out: &mut Vec<FieldDescriptor<T>>) {
    let TypeDescription {
        name: owner,
        fields,
        ancestors,
    } = description;
    for decl in fields {
        let FieldDecl {
            name,
            kind,
            transient,
            argument,
            setter,
        } = decl;
        let Some(argument) = argument.filter(|_| !transient) else {
            continue;
        };
        out.push(FieldDescriptor {
            position: out.len(),
            owner,
            name,
            kind,
            argument,
            setter,
        });
    }
    for ancestor in ancestors {
        collect(ancestor, out);
    }
}

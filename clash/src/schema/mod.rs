//! Schema objects describing a bindable structure.
//!
//! A [`TypeDescription`] lists a structure's field declarations in
//! declaration order together with the descriptions of embedded structures
//! whose fields it inherits. Descriptions are normally emitted by
//! `#[derive(Clash)]`, but can be assembled by hand:
//!
//! ```
//! use clash::{Argument, Bindable, FieldDecl, TypeDescription, Value};
//!
//! #[derive(Default)]
//! struct Server {
//!     port: u16,
//! }
//!
//! let description = TypeDescription::new("Server").field(
//!     FieldDecl::new("port", <u16 as Bindable>::KIND, |server: &mut Server, value: Value| {
//!         server.port = value.take()?;
//!         Ok(())
//!     })
//!     .argument(Argument::new("p").long("port").default_value("8080")),
//! );
//!
//! let server = clash::bind_with(description, ["--port=9000"])?;
//! assert_eq!(server.port, 9000);
//! # Ok::<(), clash::ClashError>(())
//! ```

mod argument;
mod extract;
mod validate;

use std::fmt;
use std::sync::Arc;

pub use argument::{Argument, DefaultCreator, Initializer};
pub use extract::FieldDescriptor;
pub(crate) use extract::extract;
pub(crate) use validate::validate;

use crate::error::TypeMismatch;
use crate::value::{Value, ValueKind};

type SetterFn<T> = dyn Fn(&mut T, Value) -> Result<(), TypeMismatch> + Send + Sync;

/// Declaration of one field of a structure.
pub struct FieldDecl<T> {
    name: &'static str,
    kind: ValueKind,
    transient: bool,
    argument: Option<Argument>,
    setter: Arc<SetterFn<T>>,
}

impl<T: 'static> FieldDecl<T> {
    /// Declares a field with the setter that stores values into it.
    #[must_use]
    pub fn new<F>(name: &'static str, kind: ValueKind, setter: F) -> Self
    where
        F: Fn(&mut T, Value) -> Result<(), TypeMismatch> + Send + Sync + 'static,
    {
        Self {
            name,
            kind,
            transient: false,
            argument: None,
            setter: Arc::new(setter),
        }
    }

    /// Declares a field that can never receive a value.
    ///
    /// Used for fields without argument metadata; the extractor drops them.
    #[must_use]
    pub fn undeclared(name: &'static str, type_name: &'static str) -> Self {
        let kind = ValueKind::Unsupported(type_name);
        Self::new(name, kind, move |_: &mut T, value: Value| {
            Err(TypeMismatch::new(kind, value.describe()))
        })
    }

    /// Attaches argument metadata.
    #[must_use]
    pub fn argument(mut self, argument: Argument) -> Self {
        self.argument = Some(argument);
        self
    }

    /// Excludes the field from binding even if it carries metadata.
    #[must_use]
    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    /// Re-targets the declaration at an outer structure embedding `T`.
    #[must_use]
    pub fn lift<U: 'static>(self, project: fn(&mut U) -> &mut T) -> FieldDecl<U> {
        let inner = self.setter;
        FieldDecl {
            name: self.name,
            kind: self.kind,
            transient: self.transient,
            argument: self.argument,
            setter: Arc::new(move |outer: &mut U, value: Value| inner(project(outer), value)),
        }
    }
}

impl<T> FieldDecl<T> {
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

    /// Whether the field is excluded from binding.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        self.transient
    }

    /// Argument metadata, if declared.
    #[must_use]
    pub const fn metadata(&self) -> Option<&Argument> {
        self.argument.as_ref()
    }
}

impl<T> Clone for FieldDecl<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            kind: self.kind,
            transient: self.transient,
            argument: self.argument.clone(),
            setter: Arc::clone(&self.setter),
        }
    }
}

impl<T> fmt::Debug for FieldDecl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDecl")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("transient", &self.transient)
            .field("argument", &self.argument)
            .finish_non_exhaustive()
    }
}

/// Structural metadata for a bindable type.
pub struct TypeDescription<T> {
    name: &'static str,
    fields: Vec<FieldDecl<T>>,
    ancestors: Vec<TypeDescription<T>>,
}

impl<T: 'static> TypeDescription<T> {
    /// Starts an empty description for the type called `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            ancestors: Vec::new(),
        }
    }

    /// Appends a field declaration.
    #[must_use]
    pub fn field(mut self, decl: FieldDecl<T>) -> Self {
        self.fields.push(decl);
        self
    }

    /// Appends an embedded structure whose fields this type inherits.
    ///
    /// Inherited fields are extracted after the type's own fields.
    #[must_use]
    pub fn inherit(mut self, ancestor: Self) -> Self {
        self.ancestors.push(ancestor);
        self
    }

    /// Re-targets the whole description at an outer structure embedding `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clash::{Clash, TypeDescription};
    ///
    /// #[derive(Default, Clash)]
    /// struct Common {
    ///     #[clash(short = "v", long = "verbose")]
    ///     verbose: bool,
    /// }
    ///
    /// #[derive(Default)]
    /// struct Tool {
    ///     common: Common,
    /// }
    ///
    /// let description: TypeDescription<Tool> = TypeDescription::new("Tool")
    ///     .inherit(Common::describe().lift(|tool: &mut Tool| &mut tool.common));
    /// let tool = clash::bind_with(description, ["-v", "true"])?;
    /// assert!(tool.common.verbose);
    /// # Ok::<(), clash::ClashError>(())
    /// ```
    #[must_use]
    pub fn lift<U: 'static>(self, project: fn(&mut U) -> &mut T) -> TypeDescription<U> {
        TypeDescription {
            name: self.name,
            fields: self
                .fields
                .into_iter()
                .map(|decl| decl.lift(project))
                .collect(),
            ancestors: self
                .ancestors
                .into_iter()
                .map(|ancestor| ancestor.lift(project))
                .collect(),
        }
    }
}

impl<T> TypeDescription<T> {
    /// Name of the described type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The type's own field declarations in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDecl<T>] {
        &self.fields
    }

    /// Embedded structures whose fields are inherited.
    #[must_use]
    pub fn ancestors(&self) -> &[Self] {
        &self.ancestors
    }
}

impl<T> fmt::Debug for TypeDescription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescription")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("ancestors", &self.ancestors)
            .finish()
    }
}

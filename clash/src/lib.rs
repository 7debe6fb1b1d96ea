//! Core crate for the `Clash` command-line binding engine.
//!
//! `Clash` fills the fields of a plain struct from an argument list. Each
//! bound field declares a short name (`-n value`), any number of long names
//! (`--name=value`), and optionally a literal default, a default factory, a
//! custom initializer and a required flag. The companion `clash_macros`
//! crate derives the schema from `#[clash(...)]` field attributes.
//!
//! ```
//! use clash::Clash;
//!
//! #[derive(Debug, Default, Clash)]
//! struct ServerArgs {
//!     #[clash(short = "h", long = "host", default = "localhost")]
//!     host: String,
//!     #[clash(short = "p", long = "port", required)]
//!     port: u16,
//!     #[clash(short = "v", long)]
//!     verbose: bool,
//! }
//!
//! let args = ServerArgs::bind(["--port=8080", "-v", "true"])?;
//! assert_eq!(args.host, "localhost");
//! assert_eq!(args.port, 8080);
//! assert!(args.verbose);
//! # Ok::<(), clash::ClashError>(())
//! ```

pub use clash_macros::Clash;

mod binder;
mod coerce;
pub mod docs;
mod error;
mod schema;
mod table;
mod tokens;
mod value;

pub use binder::Binder;
pub use docs::ArgumentDoc;
pub use error::{
    BoxError, ClashError, CoercionError, ErrorKind, SchemaError, SyntaxError, TypeMismatch,
};
pub use schema::{Argument, DefaultCreator, FieldDecl, FieldDescriptor, Initializer, TypeDescription};
pub use value::{Bindable, CounterKind, FloatKind, IntKind, ScalarKind, Value, ValueKind};

/// Trait implemented by structs whose fields bind from command-line
/// arguments.
///
/// Usually derived with `#[derive(Clash)]`. `Default` supplies the
/// zero-valued instance every bind starts from.
pub trait Clash: Default + 'static {
    /// Describes the struct's fields and their argument metadata.
    fn describe() -> TypeDescription<Self>;

    /// Binds `args` onto a fresh instance.
    ///
    /// Builds and validates the schema on every call; use [`Binder`] to bind
    /// repeatedly against one schema.
    ///
    /// # Errors
    ///
    /// Returns a [`ClashError`] if the schema is invalid or the arguments
    /// cannot be bound.
    fn bind<I>(args: I) -> Result<Self, ClashError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        bind::<Self, I>(args)
    }
}

/// Binds `args` onto a fresh `T`.
///
/// # Errors
///
/// Returns a [`ClashError`] if the schema is invalid or the arguments cannot
/// be bound.
pub fn bind<T, I>(args: I) -> Result<T, ClashError>
where
    T: Clash,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    bind_with(T::describe(), args)
}

/// Binds `args` against an explicit description.
///
/// # Errors
///
/// Returns a [`ClashError`] if the schema is invalid or the arguments cannot
/// be bound.
pub fn bind_with<T, I>(description: TypeDescription<T>, args: I) -> Result<T, ClashError>
where
    T: Default + 'static,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Binder::new(description)?.bind(args)
}

/// Binds into a mutable staging struct, then converts it into an immutable
/// form.
///
/// ```
/// use clash::Clash;
///
/// #[derive(Default, Clash)]
/// struct Staging {
///     #[clash(short = "n", long = "name", required)]
///     name: String,
/// }
///
/// struct Frozen {
///     name: std::sync::Arc<str>,
/// }
///
/// impl From<Staging> for Frozen {
///     fn from(staging: Staging) -> Self {
///         Self { name: staging.name.into() }
///     }
/// }
///
/// let frozen: Frozen = clash::bind_and_freeze::<Staging, _, _>(["-n", "svc"])?;
/// assert_eq!(&*frozen.name, "svc");
/// # Ok::<(), clash::ClashError>(())
/// ```
///
/// # Errors
///
/// Returns a [`ClashError`] if the schema is invalid or the arguments cannot
/// be bound.
pub fn bind_and_freeze<S, F, I>(args: I) -> Result<F, ClashError>
where
    S: Clash,
    F: From<S>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    bind::<S, I>(args).map(F::from)
}

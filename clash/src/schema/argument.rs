//! Per-field argument metadata.

use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;
use crate::value::Value;

type InitializerFn = dyn Fn(&str) -> Result<Value, BoxError> + Send + Sync;
type DefaultCreatorFn = dyn Fn() -> Value + Send + Sync;

/// Caller-supplied conversion from raw text to a field value.
///
/// When present it replaces the built-in coercion rules entirely.
#[derive(Clone)]
pub struct Initializer(Arc<InitializerFn>);

impl Initializer {
    /// Wraps a conversion function.
    #[must_use]
    pub fn new<F>(initialize: F) -> Self
    where
        F: Fn(&str) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(initialize))
    }

    pub(crate) fn initialize(&self, raw: &str) -> Result<Value, BoxError> {
        (self.0)(raw)
    }
}

impl fmt::Debug for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Initializer(..)")
    }
}

/// Factory producing a field's default value without any input.
///
/// Its output is assigned verbatim and never passes through coercion.
#[derive(Clone)]
pub struct DefaultCreator(Arc<DefaultCreatorFn>);

impl DefaultCreator {
    /// Wraps a factory function.
    #[must_use]
    pub fn new<F>(create: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(create))
    }

    pub(crate) fn create(&self) -> Value {
        (self.0)()
    }
}

impl fmt::Debug for DefaultCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultCreator(..)")
    }
}

/// Command-line metadata attached to a field.
///
/// # Examples
///
/// ```
/// use clash::Argument;
///
/// let port = Argument::new("p").long("port").default_value("8080");
/// assert_eq!(port.names().collect::<Vec<_>>(), ["p", "port"]);
/// assert_eq!(port.literal_default(), Some("8080"));
/// ```
#[derive(Debug, Clone)]
pub struct Argument {
    short: String,
    longs: Vec<String>,
    required: bool,
    default_value: String,
    default_creator: Option<DefaultCreator>,
    initializer: Option<Initializer>,
}

impl Argument {
    /// Starts metadata for a field reachable as `-short`.
    #[must_use]
    pub fn new(short: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            longs: Vec::new(),
            required: false,
            default_value: String::new(),
            default_creator: None,
            initializer: None,
        }
    }

    /// Adds a long name reachable as `--name=value`.
    ///
    /// Long names form an ordered set; repeating a name has no effect.
    #[must_use]
    pub fn long(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.longs.contains(&name) {
            self.longs.push(name);
        }
        self
    }

    /// Marks whether the field must receive a value.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets a literal default, coerced like a command-line value.
    ///
    /// An empty string means "no literal default".
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Sets a factory whose output is used verbatim when no value is given.
    #[must_use]
    pub fn default_with<F>(mut self, create: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default_creator = Some(DefaultCreator::new(create));
        self
    }

    /// Sets a custom conversion from raw text, bypassing built-in coercion.
    #[must_use]
    pub fn initializer<F>(mut self, initialize: F) -> Self
    where
        F: Fn(&str) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.initializer = Some(Initializer::new(initialize));
        self
    }

    /// Short name, without the leading dash.
    #[must_use]
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Long names in declaration order.
    #[must_use]
    pub fn longs(&self) -> &[String] {
        &self.longs
    }

    /// Every name of the field: the short name, then the long names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.short.as_str()).chain(self.longs.iter().map(String::as_str))
    }

    /// Whether the field must receive a value.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// The literal default, if one was declared and is non-empty.
    #[must_use]
    pub fn literal_default(&self) -> Option<&str> {
        Some(self.default_value.as_str()).filter(|value| !value.is_empty())
    }

    /// The default factory, if any.
    #[must_use]
    pub const fn default_creator(&self) -> Option<&DefaultCreator> {
        self.default_creator.as_ref()
    }

    /// Whether a literal default or a default factory is declared.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.literal_default().is_some() || self.default_creator.is_some()
    }

    /// The custom initializer, if any.
    #[must_use]
    pub const fn custom_initializer(&self) -> Option<&Initializer> {
        self.initializer.as_ref()
    }
}

//! Per-argument documentation records.

use crate::schema::FieldDescriptor;
use crate::value::ValueKind;

/// Documentation for a single bound argument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArgumentDoc {
    /// Field name within its structure.
    pub field: String,
    /// Structure that declared the field.
    pub owner: String,
    /// Declared semantic type.
    pub kind: ValueKind,
    /// Short name, written `-short value`.
    pub short: String,
    /// Long names, written `--long=value`.
    pub longs: Vec<String>,
    /// Whether the bind fails when the argument is absent.
    pub required: bool,
    /// Literal default, if any.
    pub default_value: Option<String>,
    /// Whether a default factory supplies the value when absent.
    pub has_default_creator: bool,
    /// Whether a custom initializer converts the raw text.
    pub has_initializer: bool,
}

impl ArgumentDoc {
    pub(crate) fn from_descriptor<T>(field: &FieldDescriptor<T>) -> Self {
        let argument = field.argument();
        Self {
            field: field.name().to_owned(),
            owner: field.owner().to_owned(),
            kind: field.kind(),
            short: argument.short().to_owned(),
            longs: argument.longs().to_vec(),
            required: argument.is_required(),
            default_value: argument.literal_default().map(str::to_owned),
            has_default_creator: argument.default_creator().is_some(),
            has_initializer: argument.custom_initializer().is_some(),
        }
    }

    /// Usage fragments for every name, short form first.
    ///
    /// ```
    /// use clash::{Binder, Clash};
    ///
    /// #[derive(Default, Clash)]
    /// struct Opts {
    ///     #[clash(short = "p", long = "port")]
    ///     port: u16,
    /// }
    ///
    /// let docs = Binder::new(Opts::describe())?.docs();
    /// let port = docs.first().expect("one bound field");
    /// assert_eq!(port.usage(), ["-p <u16>", "--port=<u16>"]);
    /// # Ok::<(), clash::ClashError>(())
    /// ```
    #[must_use]
    pub fn usage(&self) -> Vec<String> {
        std::iter::once(format!("-{} <{}>", self.short, self.kind))
            .chain(
                self.longs
                    .iter()
                    .map(|long| format!("--{long}=<{}>", self.kind)),
            )
            .collect()
    }
}

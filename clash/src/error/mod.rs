//! Error types produced by the binding engine.

mod reasons;
mod types;

pub use reasons::{BoxError, CoercionError, SchemaError, SyntaxError, TypeMismatch};
pub use types::{ClashError, ErrorKind};

//! Documentation metadata for bound arguments.
//!
//! [`Binder::docs`](crate::Binder::docs) produces one [`ArgumentDoc`] per
//! bound field. Rendering help text or man pages from it is left to external
//! tooling; with the `serde` feature the records serialize directly.

mod ir;

pub use ir::ArgumentDoc;

/// Current documentation schema version.
pub const CLASH_DOCS_IR_VERSION: &str = "1.0";

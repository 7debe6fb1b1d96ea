//! Unit tests for `#[clash(...)]` attribute parsing.

mod lit;

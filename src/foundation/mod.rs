//! Shared building blocks: the error taxonomy, colors, geometry re-exports and file IO.

pub(crate) mod color;
pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod fsio;

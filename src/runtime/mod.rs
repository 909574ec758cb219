//! Runtime support for binaries built on this crate.

pub mod tracing;

pub use tracing::*;

//! Semver parsing and bump arithmetic.

pub mod bump;

pub use bump::{BumpKind, bump, parse_version};

//! Per-artifact version record handling.
//!
//! Each record module exposes pure string transforms so staging can happen
//! fully in memory before anything touches the disk.

pub mod cargo;
pub mod json;

//! CLI command implementations.

pub mod catalog;
pub mod send;
pub mod serve;

//! CLI command implementations.

pub mod common;
pub mod evaluate;
pub mod generate;
pub mod solutions;
pub mod version;

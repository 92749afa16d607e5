//! CLI command implementations

pub mod map;
pub mod run;
pub mod sweep;

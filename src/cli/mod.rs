//! CLI infrastructure for the seeker toolkit
//!
//! This module provides the command-line interface for running single
//! search episodes, benchmarking the search policies against each
//! other, and rendering generated maps.

pub mod commands;
pub mod output;

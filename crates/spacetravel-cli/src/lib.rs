//! Spacetravel CLI library.
//!
//! This crate provides the command handlers and output formatting for the
//! spacetravel command-line interface.

pub mod commands;
pub mod output;

//! CLI module for osintr - command-line interface and terminal rendering.

pub mod commands;
pub mod render;

pub use commands::Cli;

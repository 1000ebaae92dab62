//! Tool Registry - categories, tools, and display metadata
//!
//! The builtin catalog is static data; `Registry::builtin()` exposes it as a
//! shared read-only view.

mod builtin;
mod catalog;
mod tool;
mod websites;

pub use catalog::Registry;
pub use tool::{Category, Tool};
pub use websites::OSINT_WEBSITES;

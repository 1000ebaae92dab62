//! Lookup result model
//!
//! This module provides:
//! - The recursive `Value` tree and ordered `Fields` mapping
//! - `LookupResult` with its `Provenance` tag
//! - Flattening of nested values into display lines

mod flatten;
mod result;
mod value;

pub use flatten::{DisplayLine, flatten_fields, humanize};
pub use result::{LookupResult, Provenance};
pub use value::{Fields, Scalar, Value};

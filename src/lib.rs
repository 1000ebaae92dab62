//! osintr - OSINT lookup dispatch with deterministic fallback
//!
//! Every lookup returns a result. Tools backed by a live provider try it once
//! when their credential is present; everything else, and every failure on
//! the live path, is answered by the simulator and tagged as such.

pub mod config;
pub mod credentials;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod provider;
pub mod registry;
pub mod simulator;

pub use engine::LookupEngine;
pub use error::{OsintError, Result};

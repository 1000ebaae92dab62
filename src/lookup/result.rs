//! Lookup result and provenance types.

use serde::{Deserialize, Serialize};

use super::value::{Fields, Value};

/// Where a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Live external provider
    Real,
    /// Deterministic synthetic stand-in
    Simulated,
}

impl Provenance {
    /// Label shown to end users
    pub fn label(&self) -> &'static str {
        match self {
            Provenance::Real => "REAL API",
            Provenance::Simulated => "SIMULATED",
        }
    }
}

/// Outcome of one lookup.
///
/// Built once per call and never mutated afterwards. When `error` is set,
/// `fields` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    query: String,
    fields: Fields,
    provenance: Provenance,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl LookupResult {
    /// Result backed by a live provider
    pub fn real(query: impl Into<String>, fields: Fields) -> Self {
        Self {
            query: query.into(),
            fields,
            provenance: Provenance::Real,
            error: None,
        }
    }

    /// Synthetic result
    pub fn simulated(query: impl Into<String>, fields: Fields) -> Self {
        Self {
            query: query.into(),
            fields,
            provenance: Provenance::Simulated,
            error: None,
        }
    }

    /// Synthetic result carrying an error and no fields
    pub fn simulated_error(query: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            fields: Fields::new(),
            provenance: Provenance::Simulated,
            error: Some(error.into()),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Shorthand for `fields().get(name)`
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_real(&self) -> bool {
        self.provenance == Provenance::Real
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

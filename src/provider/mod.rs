//! Provider Dispatch - live lookups against third-party services
//!
//! A `Provider` knows how to build one request and how to read its response.
//! `ProviderDispatch` owns the transport and credential source and runs the
//! whole attempt; any failure surfaces as a `DispatchFailure` for the engine.

mod dispatch;
mod failure;
pub mod hibp;
pub mod ipinfo;
pub mod shodan;
pub mod transport;

use std::time::Duration;

use serde_json::Value as Json;

use crate::lookup::LookupResult;

pub use dispatch::ProviderDispatch;
pub use failure::DispatchFailure;
pub use hibp::HibpProvider;
pub use ipinfo::IpinfoProvider;
pub use shodan::ShodanProvider;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, MockTransport, ReqwestTransport};

/// Placeholder for fields a provider did not return
pub const NOT_AVAILABLE: &str = "N/A";

/// One integrated third-party service bound to one tool
pub trait Provider: Send + Sync {
    /// Registry id of the tool this provider serves
    fn tool_id(&self) -> &'static str;

    /// Human readable service name
    fn name(&self) -> &'static str;

    /// Credential name the request needs
    fn credential(&self) -> &'static str;

    /// Request timeout when the caller sets no tighter deadline
    fn timeout(&self) -> Duration;

    /// Build the request for a query using a resolved credential
    fn request(&self, query: &str, key: &str) -> Result<HttpRequest, DispatchFailure>;

    /// Turn a response into a real result or a failure
    fn interpret(&self, query: &str, response: HttpResponse) -> Result<LookupResult, DispatchFailure>;
}

pub(crate) fn parse_json(body: &str) -> Result<Json, DispatchFailure> {
    serde_json::from_str(body).map_err(|e| DispatchFailure::MalformedPayload(e.to_string()))
}

/// Error message embedded in a success payload, if any
pub(crate) fn embedded_error(payload: &Json) -> Option<String> {
    match payload.get("error")? {
        Json::Null | Json::Bool(false) => None,
        Json::String(s) if s.is_empty() => None,
        Json::String(s) => Some(s.clone()),
        Json::Object(map) => Some(
            ["message", "title"]
                .iter()
                .find_map(|k| map.get(*k).and_then(Json::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| Json::Object(map.clone()).to_string()),
        ),
        other => Some(other.to_string()),
    }
}

/// String field or the `N/A` placeholder
pub(crate) fn text_or_na(payload: &Json, key: &str) -> String {
    match payload.get(key) {
        Some(Json::String(s)) if !s.is_empty() => s.clone(),
        Some(Json::Number(n)) => n.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

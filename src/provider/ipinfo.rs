//! ipinfo.io geolocation for `ipGeolocation`

use std::time::Duration;

use serde_json::Value as Json;

use crate::config::ProviderConfig;
use crate::credentials::IPINFO_API_KEY;
use crate::lookup::{Fields, LookupResult};

use super::transport::endpoint;
use super::{DispatchFailure, HttpRequest, HttpResponse, NOT_AVAILABLE, Provider, embedded_error, parse_json, text_or_na};

pub const TOOL_ID: &str = "ipGeolocation";

#[derive(Debug, Clone)]
pub struct IpinfoProvider {
    base_url: String,
    timeout: Duration,
}

impl IpinfoProvider {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
        }
    }
}

impl Provider for IpinfoProvider {
    fn tool_id(&self) -> &'static str {
        TOOL_ID
    }

    fn name(&self) -> &'static str {
        "ipinfo.io"
    }

    fn credential(&self) -> &'static str {
        IPINFO_API_KEY
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request(&self, query: &str, key: &str) -> Result<HttpRequest, DispatchFailure> {
        let mut url = endpoint(&self.base_url, &[query.trim(), "json"])?;
        url.query_pairs_mut().append_pair("token", key);
        Ok(HttpRequest::get(url, self.timeout).with_header("Accept", "application/json"))
    }

    fn interpret(&self, query: &str, response: HttpResponse) -> Result<LookupResult, DispatchFailure> {
        if !response.is_success() {
            return Err(DispatchFailure::HttpStatus(response.status));
        }
        let data = parse_json(&response.body)?;
        if !data.is_object() {
            return Err(DispatchFailure::MalformedPayload("expected a JSON object".to_string()));
        }
        if let Some(message) = embedded_error(&data) {
            return Err(DispatchFailure::ProviderError(message));
        }

        let (latitude, longitude) = coordinates(&data);
        let country = match data.get("country_name") {
            Some(Json::String(name)) if !name.is_empty() => name.clone(),
            _ => text_or_na(&data, "country"),
        };

        let fields = Fields::new()
            .with("country", country)
            .with("city", text_or_na(&data, "city"))
            .with("region", text_or_na(&data, "region"))
            .with("latitude", latitude)
            .with("longitude", longitude)
            .with("isp", text_or_na(&data, "org"))
            .with("timezone", text_or_na(&data, "timezone"))
            .with("postal", text_or_na(&data, "postal"));
        Ok(LookupResult::real(query, fields))
    }
}

/// Split ipinfo's `"lat,lon"` string
fn coordinates(data: &Json) -> (String, String) {
    data.get("loc")
        .and_then(Json::as_str)
        .and_then(|loc| loc.split_once(','))
        .map(|(lat, lon)| (lat.trim().to_string(), lon.trim().to_string()))
        .unwrap_or_else(|| (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProvidersConfig;
    use crate::lookup::{Provenance, Value};

    fn provider() -> IpinfoProvider {
        IpinfoProvider::new(&ProvidersConfig::default().ipinfo)
    }

    #[test]
    fn test_request_shape() {
        let request = provider().request("8.8.8.8", "tok123").unwrap();
        assert_eq!(request.url.as_str(), "https://ipinfo.io/8.8.8.8/json?token=tok123");
        assert_eq!(request.timeout, Duration::from_secs(5));
        assert_eq!(request.display_url(), "https://ipinfo.io");
    }

    #[test]
    fn test_interpret_success() {
        let body = r#"{"ip":"8.8.8.8","city":"Mountain View","region":"California","country":"US",
            "loc":"37.4056,-122.0775","org":"AS15169 Google LLC","postal":"94043","timezone":"America/Los_Angeles"}"#;
        let result = provider().interpret("8.8.8.8", HttpResponse::ok(body)).unwrap();

        assert_eq!(result.provenance(), Provenance::Real);
        assert_eq!(result.field("country").and_then(Value::as_str), Some("US"));
        assert_eq!(result.field("latitude").and_then(Value::as_str), Some("37.4056"));
        assert_eq!(result.field("longitude").and_then(Value::as_str), Some("-122.0775"));
        assert_eq!(result.field("isp").and_then(Value::as_str), Some("AS15169 Google LLC"));
        assert_eq!(
            result.fields().keys().collect::<Vec<_>>(),
            vec!["country", "city", "region", "latitude", "longitude", "isp", "timezone", "postal"]
        );
    }

    #[test]
    fn test_interpret_prefers_country_name() {
        let body = r#"{"country":"US","country_name":"United States"}"#;
        let result = provider().interpret("1.2.3.4", HttpResponse::ok(body)).unwrap();
        assert_eq!(result.field("country").and_then(Value::as_str), Some("United States"));
    }

    #[test]
    fn test_interpret_missing_fields_are_na() {
        let result = provider().interpret("10.0.0.1", HttpResponse::ok(r#"{"ip":"10.0.0.1","bogon":true}"#)).unwrap();
        assert_eq!(result.field("city").and_then(Value::as_str), Some(NOT_AVAILABLE));
        assert_eq!(result.field("latitude").and_then(Value::as_str), Some(NOT_AVAILABLE));
    }

    #[test]
    fn test_interpret_embedded_error() {
        let body = r#"{"status":404,"error":{"title":"Wrong ip","message":"Please provide a valid IP address"}}"#;
        let err = provider().interpret("x", HttpResponse::ok(body)).unwrap_err();
        assert_eq!(err, DispatchFailure::ProviderError("Please provide a valid IP address".to_string()));
    }

    #[test]
    fn test_interpret_status() {
        let err = provider().interpret("8.8.8.8", HttpResponse::new(429, "")).unwrap_err();
        assert_eq!(err, DispatchFailure::HttpStatus(429));
    }

    #[test]
    fn test_interpret_not_an_object() {
        let err = provider().interpret("8.8.8.8", HttpResponse::ok("[1,2]")).unwrap_err();
        assert!(matches!(err, DispatchFailure::MalformedPayload(_)));
    }
}

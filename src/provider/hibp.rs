//! HaveIBeenPwned breach lookup for `emailBreachChecker`
//!
//! A 404 means the account is in no known breach. That is a real answer,
//! not a failure, and never falls back.

use std::time::Duration;

use serde_json::Value as Json;

use crate::config::ProviderConfig;
use crate::credentials::HIBP_API_KEY;
use crate::lookup::{Fields, LookupResult, Value};

use super::transport::endpoint;
use super::{DispatchFailure, HttpRequest, HttpResponse, Provider, parse_json};

pub const TOOL_ID: &str = "emailBreachChecker";

const NOT_FOUND: u16 = 404;

#[derive(Debug, Clone)]
pub struct HibpProvider {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl HibpProvider {
    pub fn new(config: &ProviderConfig) -> Self {
        let user_agent = config
            .user_agent
            .clone()
            .filter(|ua| !ua.is_empty())
            .unwrap_or_else(|| format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            user_agent,
        }
    }
}

impl Provider for HibpProvider {
    fn tool_id(&self) -> &'static str {
        TOOL_ID
    }

    fn name(&self) -> &'static str {
        "HaveIBeenPwned"
    }

    fn credential(&self) -> &'static str {
        HIBP_API_KEY
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request(&self, query: &str, key: &str) -> Result<HttpRequest, DispatchFailure> {
        let url = endpoint(&self.base_url, &["api", "v3", "breachedaccount", query.trim()])?;
        Ok(HttpRequest::get(url, self.timeout)
            .with_header("hibp-api-key", key)
            .with_header("User-Agent", self.user_agent.as_str())
            .with_header("Accept", "application/json"))
    }

    fn interpret(&self, query: &str, response: HttpResponse) -> Result<LookupResult, DispatchFailure> {
        match response.status {
            NOT_FOUND => {
                log::info!("HIBP reports no breach for the queried account");
                return Ok(LookupResult::real(query, breach_fields(Vec::new())));
            }
            401 => log::warn!("HIBP rejected the API key; check {}", HIBP_API_KEY),
            403 => log::warn!("HIBP denied access; check key permissions or rate limits"),
            _ => {}
        }
        if !response.is_success() {
            return Err(DispatchFailure::HttpStatus(response.status));
        }

        let data = parse_json(&response.body)?;
        let entries = data
            .as_array()
            .ok_or_else(|| DispatchFailure::MalformedPayload("expected a list of breaches".to_string()))?;
        let breaches = entries
            .iter()
            .map(|entry| {
                entry
                    .get("Name")
                    .and_then(Json::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| DispatchFailure::MalformedPayload("breach entry without Name".to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LookupResult::real(query, breach_fields(breaches)))
    }
}

/// The breaching API has no paste data, so `pastes` is always empty
fn breach_fields(breaches: Vec<String>) -> Fields {
    let found = !breaches.is_empty();
    Fields::new()
        .with("breaches", breaches)
        .with("pastes", Vec::<Value>::new())
        .with("found", found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProvidersConfig;
    use crate::lookup::Provenance;
    use std::sync::Mutex;

    fn provider() -> HibpProvider {
        HibpProvider::new(&ProvidersConfig::default().hibp)
    }

    #[test]
    fn test_request_headers() {
        let request = provider().request("user@example.com", "k3y").unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://haveibeenpwned.com/api/v3/breachedaccount/user@example.com"
        );
        assert_eq!(request.header("hibp-api-key"), Some("k3y"));
        assert_eq!(request.header("accept"), Some("application/json"));
        assert!(request.header("user-agent").unwrap().starts_with("osintr/"));
    }

    #[test]
    fn test_default_user_agent_when_unset() {
        let config = ProviderConfig {
            base_url: "http://localhost".to_string(),
            timeout_ms: 100,
            user_agent: None,
        };
        let request = HibpProvider::new(&config).request("a@b.c", "k").unwrap();
        assert!(request.header("User-Agent").unwrap().starts_with("osintr/"));
    }

    #[test]
    fn test_interpret_breaches() {
        let body = r#"[{"Name":"Adobe"},{"Name":"LinkedIn"}]"#;
        let result = provider().interpret("user@example.com", HttpResponse::ok(body)).unwrap();
        assert_eq!(result.provenance(), Provenance::Real);
        let names: Vec<_> = result
            .field("breaches")
            .and_then(Value::as_list)
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(names, vec!["Adobe", "LinkedIn"]);
        assert_eq!(result.field("found").and_then(Value::as_bool), Some(true));
    }

    #[test]
    fn test_interpret_not_found_is_real_negative() {
        let result = provider()
            .interpret("clean@example.com", HttpResponse::new(404, ""))
            .unwrap();
        assert!(result.is_real());
        assert_eq!(result.field("found").and_then(Value::as_bool), Some(false));
        assert!(result.field("breaches").and_then(Value::as_list).unwrap().is_empty());
        assert!(result.field("pastes").and_then(Value::as_list).unwrap().is_empty());
    }

    struct Capture(Mutex<Vec<String>>);

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn test_not_found_log_omits_address() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);

        let result = provider()
            .interpret("unlogged.person@example.net", HttpResponse::new(404, ""))
            .unwrap();
        assert!(result.is_real());

        let lines = CAPTURE.0.lock().unwrap();
        assert!(lines.iter().any(|l| l.contains("no breach")));
        assert!(!lines.iter().any(|l| l.contains("unlogged.person")));
    }

    #[test]
    fn test_interpret_empty_list() {
        let result = provider().interpret("a@b.c", HttpResponse::ok("[]")).unwrap();
        assert_eq!(result.field("found").and_then(Value::as_bool), Some(false));
    }

    #[test]
    fn test_interpret_auth_failures() {
        assert_eq!(
            provider().interpret("a@b.c", HttpResponse::new(401, "")).unwrap_err(),
            DispatchFailure::HttpStatus(401)
        );
        assert_eq!(
            provider().interpret("a@b.c", HttpResponse::new(403, "")).unwrap_err(),
            DispatchFailure::HttpStatus(403)
        );
    }

    #[test]
    fn test_interpret_malformed() {
        let err = provider().interpret("a@b.c", HttpResponse::ok(r#"{"Name":"x"}"#)).unwrap_err();
        assert!(matches!(err, DispatchFailure::MalformedPayload(_)));
        let err = provider().interpret("a@b.c", HttpResponse::ok(r#"[{"Title":"x"}]"#)).unwrap_err();
        assert!(matches!(err, DispatchFailure::MalformedPayload(_)));
    }
}

//! Shodan host scan for `shodanIpScanner`

use std::collections::HashSet;
use std::time::Duration;

use serde_json::Value as Json;

use crate::config::ProviderConfig;
use crate::credentials::SHODAN_API_KEY;
use crate::lookup::{Fields, LookupResult};

use super::transport::endpoint;
use super::{DispatchFailure, HttpRequest, HttpResponse, Provider, embedded_error, parse_json, text_or_na};

pub const TOOL_ID: &str = "shodanIpScanner";

#[derive(Debug, Clone)]
pub struct ShodanProvider {
    base_url: String,
    timeout: Duration,
}

impl ShodanProvider {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
        }
    }
}

impl Provider for ShodanProvider {
    fn tool_id(&self) -> &'static str {
        TOOL_ID
    }

    fn name(&self) -> &'static str {
        "Shodan"
    }

    fn credential(&self) -> &'static str {
        SHODAN_API_KEY
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request(&self, query: &str, key: &str) -> Result<HttpRequest, DispatchFailure> {
        let mut url = endpoint(&self.base_url, &["shodan", "host", query.trim()])?;
        url.query_pairs_mut().append_pair("key", key);
        Ok(HttpRequest::get(url, self.timeout))
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

        let banners = data.get("data").and_then(Json::as_array).map(Vec::as_slice).unwrap_or(&[]);

        let fields = Fields::new()
            .with("ip", text_or_na(&data, "ip_str"))
            .with("country", text_or_na(&data, "country_name"))
            .with("city", text_or_na(&data, "city"))
            .with("isp", text_or_na(&data, "isp"))
            .with("organization", text_or_na(&data, "org"))
            .with("openPorts", open_ports(&data, banners))
            .with("services", services(banners))
            .with("vulnerabilities", vulnerabilities(&data));
        Ok(LookupResult::real(query, fields))
    }
}

/// `"port (product)"` per banner, falling back to the bare `ports` list
fn open_ports(data: &Json, banners: &[Json]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ports = Vec::new();
    for banner in banners {
        let Some(port) = banner.get("port").and_then(Json::as_u64) else {
            continue;
        };
        if !seen.insert(port) {
            continue;
        }
        let label = banner
            .get("product")
            .and_then(Json::as_str)
            .or_else(|| banner.pointer("/_shodan/module").and_then(Json::as_str));
        ports.push(match label {
            Some(label) => format!("{} ({})", port, label),
            None => port.to_string(),
        });
    }
    if let Some(listed) = data.get("ports").and_then(Json::as_array) {
        for port in listed.iter().filter_map(Json::as_u64) {
            if seen.insert(port) {
                ports.push(port.to_string());
            }
        }
    }
    ports
}

fn services(banners: &[Json]) -> Vec<String> {
    let mut seen = HashSet::new();
    banners
        .iter()
        .filter_map(|b| b.get("product").and_then(Json::as_str))
        .filter(|p| seen.insert(*p))
        .map(str::to_string)
        .collect()
}

/// Shodan sends `vulns` as a list or as an object keyed by CVE
fn vulnerabilities(data: &Json) -> Vec<String> {
    match data.get("vulns") {
        Some(Json::Array(items)) => items.iter().filter_map(Json::as_str).map(str::to_string).collect(),
        Some(Json::Object(map)) => {
            let mut ids: Vec<String> = map.keys().cloned().collect();
            ids.sort();
            ids
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProvidersConfig;
    use crate::lookup::{Provenance, Value};

    fn provider() -> ShodanProvider {
        ShodanProvider::new(&ProvidersConfig::default().shodan)
    }

    fn strings(result: &LookupResult, key: &str) -> Vec<String> {
        result
            .field(key)
            .and_then(Value::as_list)
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_request_shape() {
        let request = provider().request("1.2.3.4", "sk").unwrap();
        assert_eq!(request.url.as_str(), "https://api.shodan.io/shodan/host/1.2.3.4?key=sk");
        assert_eq!(request.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_interpret_host() {
        let body = r#"{
            "ip_str": "1.2.3.4", "country_name": "Germany", "city": "Berlin",
            "isp": "Hetzner", "org": "Hetzner Online GmbH",
            "ports": [22, 80, 8080],
            "vulns": {"CVE-2021-1234": {}, "CVE-2020-0001": {}},
            "data": [
                {"port": 22, "product": "OpenSSH"},
                {"port": 80, "product": "nginx"},
                {"port": 80, "product": "nginx"},
                {"port": 443, "_shodan": {"module": "https"}}
            ]
        }"#;
        let result = provider().interpret("1.2.3.4", HttpResponse::ok(body)).unwrap();

        assert_eq!(result.provenance(), Provenance::Real);
        assert_eq!(result.field("organization").and_then(Value::as_str), Some("Hetzner Online GmbH"));
        assert_eq!(
            strings(&result, "openPorts"),
            vec!["22 (OpenSSH)", "80 (nginx)", "443 (https)", "8080"]
        );
        assert_eq!(strings(&result, "services"), vec!["OpenSSH", "nginx"]);
        assert_eq!(strings(&result, "vulnerabilities"), vec!["CVE-2020-0001", "CVE-2021-1234"]);
    }

    #[test]
    fn test_interpret_vulns_as_list() {
        let body = r#"{"ip_str":"5.6.7.8","vulns":["CVE-2019-0708"]}"#;
        let result = provider().interpret("5.6.7.8", HttpResponse::ok(body)).unwrap();
        assert_eq!(strings(&result, "vulnerabilities"), vec!["CVE-2019-0708"]);
        assert!(strings(&result, "openPorts").is_empty());
    }

    #[test]
    fn test_interpret_embedded_error() {
        let body = r#"{"error":"No information available for that IP."}"#;
        let err = provider().interpret("10.0.0.1", HttpResponse::ok(body)).unwrap_err();
        assert_eq!(
            err,
            DispatchFailure::ProviderError("No information available for that IP.".to_string())
        );
    }

    #[test]
    fn test_interpret_status() {
        let err = provider().interpret("10.0.0.1", HttpResponse::new(404, "{}")).unwrap_err();
        assert_eq!(err, DispatchFailure::HttpStatus(404));
    }

    #[test]
    fn test_interpret_malformed() {
        let err = provider().interpret("1.2.3.4", HttpResponse::ok("not json")).unwrap_err();
        assert!(matches!(err, DispatchFailure::MalformedPayload(_)));
    }
}

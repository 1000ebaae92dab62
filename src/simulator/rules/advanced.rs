//! Advanced and miscellaneous rules

use reqwest::Url;

use crate::lookup::{Fields, Value};
use crate::registry::OSINT_WEBSITES;

use super::Rule;

pub(super) const RULES: &[(&str, Rule)] = &[
    ("macAddressVendorLookup", mac_vendor),
    ("deviceFingerprintGenerator", device_fingerprint),
    ("osintAutomationToolRunner", automation_runner),
    ("shodanIpScanner", shodan_scan),
    ("pastebinScraper", pastebin_scraper),
    ("googleDorkBuilder", dork_builder),
    ("websiteList", website_list),
];

const GOOGLE_SEARCH: &str = "https://www.google.com/search";

fn mac_vendor(_query: &str) -> Fields {
    Fields::new()
        .with("vendor", "Apple Inc.")
        .with("addressRange", "00:00:00:00:00:00 - 00:00:00:00:00:FF")
}

fn device_fingerprint(_query: &str) -> Fields {
    Fields::new().with(
        "fingerprint",
        "Browser: Chrome, OS: Windows 10, Screen: 1920x1080 (simulated)",
    )
}

fn automation_runner(query: &str) -> Fields {
    Fields::new()
        .with("status", format!("Automation script for {} executed (simulated).", query))
        .with("output", "Simulated output from automation tool.")
}

/// Same field layout as the live Shodan host lookup
fn shodan_scan(query: &str) -> Fields {
    Fields::new()
        .with("ip", query)
        .with("country", "United States")
        .with("city", "N/A")
        .with("isp", "Simulated ISP")
        .with("organization", "Simulated Hosting (simulated)")
        .with("openPorts", vec!["22 (OpenSSH)", "80 (nginx)", "443 (nginx)"])
        .with("services", vec!["OpenSSH", "nginx"])
        .with("vulnerabilities", Vec::<Value>::new())
}

fn pastebin_scraper(query: &str) -> Fields {
    let mention = if query.contains("password") {
        "Found 3 pastes mentioning \"password\" (simulated)"
    } else {
        "No mentions found (simulated)"
    };
    Fields::new().with("mentions", vec![mention])
}

fn dork_builder(query: &str) -> Fields {
    let dorks = vec![
        format!("site:example.com inurl:admin \"{}\"", query),
        format!("filetype:pdf \"confidential\" \"{}\"", query),
        format!("intitle:\"index of\" \"{}\"", query),
    ];
    let search = format!("site:example.com \"{}\"", query);
    let search_url = Url::parse_with_params(GOOGLE_SEARCH, &[("q", search.as_str())])
        .map(String::from)
        .unwrap_or_else(|_| format!("{}?q={}", GOOGLE_SEARCH, search));

    Fields::new()
        .with("dorks", dorks)
        .with("searchUrl", search_url)
}

fn website_list(_query: &str) -> Fields {
    let sites: Vec<Value> = OSINT_WEBSITES
        .iter()
        .map(|(name, url)| Value::from(Fields::new().with("name", *name).with("url", *url)))
        .collect();
    Fields::new().with("sites", sites)
}

//! Domain and website rules

use crate::lookup::Fields;

use super::Rule;

pub(super) const RULES: &[(&str, Rule)] = &[
    ("whoisLookup", whois),
    ("dnsRecordFetcher", dns_records),
    ("subdomainFinder", subdomains),
    ("websiteTechnologyStackIdentifier", tech_stack),
    ("sslCertificateInfoGrabber", ssl_certificate),
    ("websiteArchiveChecker", archive_snapshots),
    ("webCrawlerForMetadata", crawler_metadata),
    ("openDirectoryScanner", open_directories),
    ("siteCmsDetector", cms_detector),
    ("domainAgeChecker", domain_age),
];

const CREATION_DATE: &str = "1995-03-15";

fn whois(_query: &str) -> Fields {
    Fields::new()
        .with("registrant", "Domain Privacy Service (simulated)")
        .with("creationDate", CREATION_DATE)
        .with("expirationDate", "2025-03-15")
        .with("registrar", "MarkMonitor Inc.")
}

fn dns_records(_query: &str) -> Fields {
    Fields::new()
        .with("aRecords", vec!["192.0.2.1"])
        .with("mxRecords", vec!["mail.example.com"])
        .with("nsRecords", vec!["ns1.example.com", "ns2.example.com"])
}

fn subdomains(_query: &str) -> Fields {
    Fields::new().with("subdomains", vec!["www", "blog", "api", "dev"])
}

fn tech_stack(_query: &str) -> Fields {
    Fields::new().with("technologies", vec!["React", "Node.js", "Nginx", "Tailwind CSS"])
}

fn ssl_certificate(_query: &str) -> Fields {
    Fields::new()
        .with("issuer", "Let's Encrypt")
        .with("validFrom", "2024-01-01")
        .with("validTo", "2024-04-01")
        .with("subject", "example.com")
}

fn archive_snapshots(_query: &str) -> Fields {
    Fields::new().with("snapshots", vec!["2000-01-01", "2010-05-10", "2023-11-20"])
}

fn crawler_metadata(_query: &str) -> Fields {
    Fields::new()
        .with("metaDescription", "This is a simulated website description.")
        .with("keywords", vec!["simulated", "web", "data"])
        .with("author", "Simulated Author")
}

fn open_directories(_query: &str) -> Fields {
    Fields::new().with("foundDirectories", vec!["/admin/", "/uploads/", "/backup/"])
}

fn cms_detector(_query: &str) -> Fields {
    Fields::new().with("cms", "WordPress")
}

fn domain_age(_query: &str) -> Fields {
    Fields::new()
        .with("domainAgeYears", 29)
        .with("creationDate", CREATION_DATE)
}

//! Image and file rules

use sha2::{Digest, Sha256};

use crate::lookup::Fields;

use super::Rule;

pub(super) const RULES: &[(&str, Rule)] = &[
    ("exifMetadataViewer", exif_metadata),
    ("reverseImageSearchViaApi", reverse_image_search),
    ("imageGeolocationFromMetadata", image_geolocation),
    ("pdfMetadataAnalyzer", pdf_metadata),
    ("documentFingerprinting", document_fingerprint),
    ("hashBasedMalwareCheck", malware_check),
];

fn exif_metadata(_query: &str) -> Fields {
    Fields::new()
        .with("make", "Canon")
        .with("model", "EOS 5D Mark IV")
        .with("dateTaken", "2023-10-26 14:30:00")
        .with("gps", "34.0522 N, 118.2437 W (Los Angeles, CA) (simulated)")
        .with("software", "Adobe Photoshop")
}

fn reverse_image_search(_query: &str) -> Fields {
    Fields::new().with("matches", vec!["Similar image on Wikipedia", "Product page on Amazon"])
}

fn image_geolocation(_query: &str) -> Fields {
    Fields::new()
        .with("location", "Eiffel Tower, Paris, France (simulated)")
        .with("latitude", 48.8584)
        .with("longitude", 2.2945)
}

fn pdf_metadata(_query: &str) -> Fields {
    Fields::new()
        .with("author", "Jane Doe")
        .with("creationDate", "2023-01-15")
        .with("lastModified", "2023-01-20")
        .with("software", "Microsoft Word")
}

/// SHA-256 of the document reference itself; the document is never fetched
fn document_fingerprint(query: &str) -> Fields {
    let digest = Sha256::digest(query.as_bytes());
    Fields::new()
        .with("hash", hex::encode(digest))
        .with("algorithm", "SHA-256")
        .with("unique", true)
}

fn malware_check(query: &str) -> Fields {
    let verdict = if query.contains("malware") {
        "Detected as Malware (simulated)"
    } else {
        "Clean (simulated)"
    };
    Fields::new().with("virustotalResult", verdict)
}

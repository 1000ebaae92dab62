//! Curated list of external OSINT resources, for manual use in a browser.

/// `(name, url)` pairs in display order
pub const OSINT_WEBSITES: &[(&str, &str)] = &[
    ("HaveIBeenPwned", "https://haveibeenpwned.com/"),
    ("Epieos", "https://epieos.com/"),
    ("PhoneInfoga (web version)", "https://phoneinfoga.crvx.fr/"),
    ("Hunter.io", "https://hunter.io/"),
    ("EmailRep", "https://emailrep.io/"),
    ("TrueCaller (for phone lookup)", "https://www.truecaller.com/"),
    ("WhatIsMyIP / IPInfo.io", "https://ipinfo.io/"),
    ("ViewDNS.info", "https://viewdns.info/"),
    ("IntelligenceX", "https://intelx.io/"),
    ("DNSdumpster", "https://dnsdumpster.com/"),
    ("VirusTotal", "https://www.virustotal.com/"),
    ("Exif.tools", "https://exif.tools/"),
    ("Censys.io", "https://censys.io/"),
    ("Shodan.io", "https://www.shodan.io/"),
    ("Archive.org (Wayback Machine)", "https://archive.org/web/"),
    ("Social-Searcher", "https://www.social-searcher.com/"),
    ("Namechk", "https://namechk.com/"),
    ("Dehashed", "https://dehashed.com/"),
    ("BreachDirectory", "https://breachdirectory.org/"),
    ("ZoomEye", "https://www.zoomeye.org/"),
    ("Tineye (reverse image)", "https://tineye.com/"),
    ("Scylla.sh", "https://scylla.sh/"),
];

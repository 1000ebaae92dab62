//! Builtin tool catalog
//!
//! Rows are `(id, name, description, prompt)`. Category and row order is
//! menu order.

use crate::credentials::{HIBP_API_KEY, IPINFO_API_KEY, SHODAN_API_KEY};

use super::tool::{Category, Tool};

type ToolRow = (&'static str, &'static str, &'static str, &'static str);

const EMAIL_PROMPT: &str = "Enter email address:";
const PHONE_PROMPT: &str = "Enter phone number:";
const IP_PROMPT: &str = "Enter IP Address:";
const DOMAIN_PROMPT: &str = "Enter domain name:";
const URL_PROMPT: &str = "Enter website URL:";
const IMAGE_PROMPT: &str = "Enter image URL/path:";

const EMAIL_TOOLS: &[ToolRow] = &[
    ("emailBreachChecker", "Email Breach Checker", "Check if an email has appeared in known data breaches.", EMAIL_PROMPT),
    ("emailValidityChecker", "Email Validity Checker", "Verify if an email address is valid and exists.", EMAIL_PROMPT),
    ("emailToPhoneMapper", "Email-to-Phone Number Mapper", "Attempt to map an email to a phone number (simulated).", EMAIL_PROMPT),
    ("emailDnsMxLookup", "Email DNS/MX Record Lookup", "Retrieve DNS MX records for an email domain.", EMAIL_PROMPT),
    ("emailProviderDetection", "Email Provider Detection", "Identify the email service provider.", EMAIL_PROMPT),
    ("emailProfilePictureFetcher", "Email Profile Picture Fetcher (Gravatar)", "Check for associated Gravatar profile pictures.", EMAIL_PROMPT),
    ("disposableEmailDetector", "Disposable Email Detector", "Determine if an email is from a disposable service.", EMAIL_PROMPT),
    ("emailSocialMediaPresence", "Email Social Media Presence Checker", "Find social media accounts linked to an email (simulated).", EMAIL_PROMPT),
    ("googleAccountInfo", "Google Account Info Extractor", "Extract public info from Google accounts (simulated).", EMAIL_PROMPT),
    ("emailDomainCompanyFinder", "Email Domain Company Finder", "Find company details associated with an email domain.", EMAIL_PROMPT),
];

const PHONE_TOOLS: &[ToolRow] = &[
    ("phoneNumberCarrierLookup", "Phone Number Carrier Lookup", "Identify the mobile carrier for a phone number.", PHONE_PROMPT),
    ("phoneNumberGeolocation", "Phone Number Geolocation", "Find the approximate location of a phone number (simulated).", PHONE_PROMPT),
    ("phoneNumberTypeDetection", "Phone Number Type Detection", "Determine if it's mobile, VOIP, or landline.", PHONE_PROMPT),
    ("socialMediaLinkedToPhone", "Social Media Accounts Linked to Phone", "Discover social media profiles linked to a phone number (simulated).", PHONE_PROMPT),
    ("spamCallDatabaseCheck", "Spam Call Database Check", "Check if a number is reported for spam calls (simulated).", PHONE_PROMPT),
    ("internationalPhoneFormatting", "International Phone Formatting + Info", "Format and get info on international numbers.", PHONE_PROMPT),
    ("reversePhoneNumberLookup", "Reverse Phone Number Lookup", "Attempt to find name/address associated with a number (simulated).", PHONE_PROMPT),
    ("voipVsNonVoipDetector", "VOIP vs Non-VOIP Detector", "Distinguish between VOIP and traditional numbers.", PHONE_PROMPT),
];

const IP_TOOLS: &[ToolRow] = &[
    ("ipGeolocation", "IP Geolocation", "Locate an IP address on a map (requires IPinfo.io API Key).", IP_PROMPT),
    ("ipReverseDnsLookup", "IP Reverse DNS Lookup", "Find the hostname associated with an IP.", IP_PROMPT),
    ("ipAsnIspDetection", "IP ASN and ISP Detection", "Identify the Autonomous System Number and Internet Service Provider.", IP_PROMPT),
    ("ipToDomainHostname", "IP to Domain/Hostname", "Resolve an IP address to its associated domain or hostname.", IP_PROMPT),
    ("ipBlacklistCheck", "IP Blacklist Check", "Check if an IP is listed on known spam/malware blacklists (simulated).", IP_PROMPT),
    ("portScanner", "Port Scanner", "Scan for open ports on a target IP address (simulated).", IP_PROMPT),
    ("ipTraceroute", "IP Traceroute", "Trace the path an IP packet takes to reach its destination (simulated).", IP_PROMPT),
    ("subnetCalculator", "Subnet Calculator", "Calculate network details from an IP and subnet mask (e.g., 192.168.1.0/24).", "Enter IP/CIDR:"),
    ("localIpFinder", "Local IP Finder", "Discover your local IP address (simulated).", "N/A (Press Enter to get local IP):"),
    ("vpnProxyTorDetector", "VPN/Proxy/TOR Detector", "Detect if an IP address belongs to a VPN, proxy, or TOR exit node (simulated).", IP_PROMPT),
];

const DOMAIN_TOOLS: &[ToolRow] = &[
    ("whoisLookup", "WHOIS Lookup", "Retrieve domain registration information.", DOMAIN_PROMPT),
    ("dnsRecordFetcher", "DNS Record Fetcher", "Fetch A, MX, NS, and other DNS records.", DOMAIN_PROMPT),
    ("subdomainFinder", "Subdomain Finder", "Discover subdomains associated with a main domain (simulated).", DOMAIN_PROMPT),
    ("websiteTechnologyStackIdentifier", "Website Technology Stack Identifier", "Identify technologies used by a website (e.g., CMS, frameworks) (simulated).", URL_PROMPT),
    ("sslCertificateInfoGrabber", "SSL Certificate Info Grabber", "Extract details from a website's SSL certificate.", URL_PROMPT),
    ("websiteArchiveChecker", "Website Archive Checker (Wayback Machine)", "View historical versions of a website (simulated).", URL_PROMPT),
    ("webCrawlerForMetadata", "Web Crawler for Metadata", "Crawl a website to extract metadata (simulated).", URL_PROMPT),
    ("openDirectoryScanner", "Open Directory Scanner", "Scan for publicly accessible directories (simulated).", URL_PROMPT),
    ("siteCmsDetector", "Site CMS Detector", "Automatically detect the Content Management System (CMS) (simulated).", URL_PROMPT),
    ("domainAgeChecker", "Domain Age Checker", "Determine the age of a domain name.", DOMAIN_PROMPT),
];

const SOCIAL_TOOLS: &[ToolRow] = &[
    ("usernameCheckerAcrossPlatforms", "Username Checker Across Platforms", "Check username availability or existence across social media (simulated).", "Enter username:"),
    ("socialMediaPresenceGrabber", "Social Media Presence Grabber", "Find linked social media profiles for a username (simulated).", "Enter username:"),
    ("twitterInfoExtractor", "Twitter Info Extractor", "Extract public information from a Twitter profile (simulated).", "Enter Twitter handle:"),
    ("instagramMetadataFetcher", "Instagram Metadata Fetcher", "Fetch public metadata from an Instagram profile (simulated).", "Enter Instagram username:"),
    ("tiktokUserInfoScanner", "TikTok User Info Scanner", "Scan public TikTok user information (simulated).", "Enter TikTok username:"),
    ("youtubeChannelOsint", "YouTube Channel OSINT", "Gather public data from a YouTube channel (simulated).", "Enter YouTube channel URL/ID:"),
    ("redditProfileScraper", "Reddit Profile Scraper", "Scrape public data from a Reddit user profile (simulated).", "Enter Reddit username:"),
    ("linkedinProfileAnalyzer", "LinkedIn Profile Analyzer", "Analyze public LinkedIn profile data (simulated).", "Enter LinkedIn profile URL:"),
    ("githubUserProfileAnalyzer", "GitHub User Profile Analyzer", "Analyze public GitHub user profile data (simulated).", "Enter GitHub username:"),
    ("profilePictureRecognition", "Profile Picture Recognition Tool", "Attempt to find matching profiles based on a profile picture (simulated).", IMAGE_PROMPT),
];

const MEDIA_TOOLS: &[ToolRow] = &[
    ("exifMetadataViewer", "EXIF Metadata Viewer", "Extract metadata from images (simulated).", IMAGE_PROMPT),
    ("reverseImageSearchViaApi", "Reverse Image Search via API", "Find the source or similar images online (simulated).", IMAGE_PROMPT),
    ("imageGeolocationFromMetadata", "Image Geolocation from Metadata", "Extract GPS coordinates from image EXIF (simulated).", IMAGE_PROMPT),
    ("pdfMetadataAnalyzer", "PDF Metadata Analyzer", "Extract metadata from PDF documents (simulated).", "Enter PDF URL/path:"),
    ("documentFingerprinting", "Document Fingerprinting", "Generate a unique hash for a document.", "Enter document URL/path:"),
    ("hashBasedMalwareCheck", "Hash-based Malware Check", "Check if a file hash is known malware (simulated).", "Enter file hash:"),
];

const ADVANCED_TOOLS: &[ToolRow] = &[
    ("macAddressVendorLookup", "MAC Address Vendor Lookup", "Identify the manufacturer from a MAC address (simulated).", "Enter MAC Address:"),
    ("deviceFingerprintGenerator", "Device Fingerprint Generator", "Generate a unique fingerprint for a device (simulated).", "N/A (Press Enter to generate):"),
    ("osintAutomationToolRunner", "OSINT Automation Tool Runner", "Simulate running an external OSINT automation script.", "Enter script name/command:"),
    ("shodanIpScanner", "Shodan IP Scanner", "Scan an IP for exposed services via Shodan (requires Shodan API Key).", IP_PROMPT),
    ("pastebinScraper", "Pastebin Scraper", "Scrape Pastebin for keywords (simulated).", "Enter keyword:"),
    ("googleDorkBuilder", "Google Dork Builder + Search", "Build advanced Google search queries (dorks) and provide search URL.", "Enter search term:"),
];

const WEBSITE_TOOLS: &[ToolRow] = &[(
    "websiteList",
    "List of OSINT Websites",
    "A curated list of valuable external resources. Open these manually in your browser.",
    "N/A (Press Enter to list websites):",
)];

/// `(category id, display name, rows)` in menu order
const CATEGORIES: &[(&str, &str, &[ToolRow])] = &[
    ("emailOsint", "📧 Email OSINT", EMAIL_TOOLS),
    ("phoneNumberOsint", "📱 Phone Number OSINT", PHONE_TOOLS),
    ("ipLocationOsint", "🌍 IP & Location OSINT", IP_TOOLS),
    ("domainWebsiteOsint", "🌐 Domain & Website OSINT", DOMAIN_TOOLS),
    ("usernameSocialMediaOsint", "👤 Username / Social Media OSINT", SOCIAL_TOOLS),
    ("imageFileOsint", "🖼️ Image & File OSINT", MEDIA_TOOLS),
    ("advancedOsint", "🧠 Advanced OSINT / Other", ADVANCED_TOOLS),
    ("osintWebsites", "🌐 OSINT Websites", WEBSITE_TOOLS),
];

/// Tools backed by a credential-gated live provider
const CREDENTIALED: &[(&str, &str)] = &[
    ("ipGeolocation", IPINFO_API_KEY),
    ("emailBreachChecker", HIBP_API_KEY),
    ("shodanIpScanner", SHODAN_API_KEY),
];

/// Tools that accept an empty query
const INPUT_OPTIONAL: &[&str] = &["localIpFinder", "deviceFingerprintGenerator", "websiteList"];

fn build_tool(&(id, name, description, prompt): &ToolRow) -> Tool {
    let mut tool = Tool::new(id, name, description, prompt);
    if let Some((_, credential)) = CREDENTIALED.iter().find(|(tool_id, _)| *tool_id == id) {
        tool = tool.with_credential(*credential);
    }
    if INPUT_OPTIONAL.contains(&id) {
        tool = tool.with_optional_input();
    }
    tool
}

/// Build the builtin categories in menu order
pub(super) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(id, name, rows)| {
            rows.iter()
                .map(build_tool)
                .fold(Category::new(*id, *name), Category::with_tool)
        })
        .collect()
}

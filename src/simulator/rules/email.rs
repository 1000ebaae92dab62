//! Email rules

use crate::lookup::Fields;

use super::Rule;

pub(super) const RULES: &[(&str, Rule)] = &[
    ("emailBreachChecker", breach_checker),
    ("emailValidityChecker", validity_checker),
    ("emailToPhoneMapper", phone_mapper),
    ("emailDnsMxLookup", dns_mx_lookup),
    ("emailProviderDetection", provider_detection),
    ("emailProfilePictureFetcher", profile_picture),
    ("disposableEmailDetector", disposable_detector),
    ("emailSocialMediaPresence", social_media_presence),
    ("googleAccountInfo", google_account_info),
    ("emailDomainCompanyFinder", domain_company_finder),
];

const GRAVATAR_SAMPLE: &str = "test@example.com";
const DISPOSABLE_DOMAINS: &[&str] = &["mailinator.com", "tempmail.org"];

fn breach_checker(query: &str) -> Fields {
    let breaches: Vec<&str> = if query.contains("example.com") {
        vec!["Adobe 2013", "LinkedIn 2012", "Collection #1"]
    } else {
        Vec::new()
    };
    let pastes: Vec<&str> = if query.contains("test@") {
        vec!["Pastebin (2020)", "Hastebin (2021)"]
    } else {
        Vec::new()
    };

    Fields::new()
        .with("breaches", breaches)
        .with("pastes", pastes)
        .with("found", query.contains('@'))
}

fn validity_checker(query: &str) -> Fields {
    Fields::new()
        .with("isValid", query.contains('@') && query.contains('.'))
        .with("syntaxOk", true)
        .with("domainExists", true)
}

fn phone_mapper(query: &str) -> Fields {
    let phone = if query.contains("john.doe@") {
        "+15551234567 (simulated)"
    } else {
        "Not found (simulated)"
    };
    Fields::new().with("phoneNumber", phone)
}

fn dns_mx_lookup(query: &str) -> Fields {
    let mx: Vec<&str> = if query.contains("gmail.com") {
        vec!["gmail-smtp-in.l.google.com", "alt1.gmail-smtp-in.l.google.com"]
    } else {
        vec!["mail.example.com"]
    };
    Fields::new()
        .with("mxRecords", mx)
        .with("spfRecord", "v=spf1 include:_spf.google.com ~all")
}

fn provider_detection(query: &str) -> Fields {
    let provider = if query.contains("gmail.com") {
        "Gmail"
    } else if query.contains("outlook.com") {
        "Outlook"
    } else {
        "Custom/Unknown"
    };
    Fields::new().with("provider", provider)
}

fn profile_picture(query: &str) -> Fields {
    let found = query.contains(GRAVATAR_SAMPLE);
    Fields::new()
        .with("gravatarFound", if found { "Yes" } else { "No" })
        .with(
            "gravatarUrl",
            if found {
                "https://www.gravatar.com/avatar/205e460b479e2e5b48aec07710c08d50?s=200"
            } else {
                "N/A"
            },
        )
}

fn disposable_detector(query: &str) -> Fields {
    let disposable = DISPOSABLE_DOMAINS.iter().any(|d| query.contains(d));
    Fields::new().with("isDisposable", disposable)
}

fn social_media_presence(query: &str) -> Fields {
    let accounts: Vec<&str> = if query.contains("elon.musk@x.com") {
        vec!["Twitter", "LinkedIn"]
    } else {
        vec!["LinkedIn"]
    };
    Fields::new().with("socialMedia", accounts)
}

fn google_account_info(query: &str) -> Fields {
    let found = if query.contains("google.com") { "Possible" } else { "Unlikely" };
    Fields::new()
        .with("googleAccountFound", found)
        .with("lastLoginAttempt", "2024-05-20 (simulated)")
}

fn domain_company_finder(query: &str) -> Fields {
    let google = query.contains("google.com");
    Fields::new()
        .with("companyName", if google { "Google LLC" } else { "Unknown" })
        .with("companyWebsite", if google { "https://www.google.com" } else { "N/A" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::Value;

    fn strings(value: Option<&Value>) -> Vec<String> {
        value
            .and_then(Value::as_list)
            .map(|items| items.iter().filter_map(Value::as_str).map(String::from).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_breach_checker_example_domain() {
        let fields = breach_checker("user@example.com");
        assert_eq!(
            strings(fields.get("breaches")),
            vec!["Adobe 2013", "LinkedIn 2012", "Collection #1"]
        );
        assert!(strings(fields.get("pastes")).is_empty());
        assert_eq!(fields.get("found").and_then(Value::as_bool), Some(true));
    }

    #[test]
    fn test_breach_checker_pastes_and_not_found() {
        let fields = breach_checker("test@other.org");
        assert!(strings(fields.get("breaches")).is_empty());
        assert_eq!(strings(fields.get("pastes")).len(), 2);

        let fields = breach_checker("no-at-sign");
        assert_eq!(fields.get("found").and_then(Value::as_bool), Some(false));
    }

    #[test]
    fn test_validity_checker() {
        assert_eq!(validity_checker("a@b.c").get("isValid").and_then(Value::as_bool), Some(true));
        assert_eq!(validity_checker("a@b").get("isValid").and_then(Value::as_bool), Some(false));
    }

    #[test]
    fn test_provider_detection() {
        let provider = |q| provider_detection(q).get("provider").and_then(Value::as_str).map(String::from);
        assert_eq!(provider("x@gmail.com").as_deref(), Some("Gmail"));
        assert_eq!(provider("x@outlook.com").as_deref(), Some("Outlook"));
        assert_eq!(provider("x@corp.io").as_deref(), Some("Custom/Unknown"));
    }

    #[test]
    fn test_mx_lookup_gmail() {
        let fields = dns_mx_lookup("someone@gmail.com");
        assert_eq!(strings(fields.get("mxRecords")).len(), 2);
        assert_eq!(strings(dns_mx_lookup("a@b.c").get("mxRecords")), vec!["mail.example.com"]);
    }

    #[test]
    fn test_disposable_detector() {
        assert_eq!(
            disposable_detector("x@mailinator.com").get("isDisposable").and_then(Value::as_bool),
            Some(true)
        );
        assert_eq!(
            disposable_detector("x@gmail.com").get("isDisposable").and_then(Value::as_bool),
            Some(false)
        );
    }

    #[test]
    fn test_profile_picture() {
        let fields = profile_picture("test@example.com");
        assert_eq!(fields.get("gravatarFound").and_then(Value::as_str), Some("Yes"));
        let fields = profile_picture("other@example.com");
        assert_eq!(fields.get("gravatarUrl").and_then(Value::as_str), Some("N/A"));
    }
}

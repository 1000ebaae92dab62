//! Phone number rules

use crate::lookup::Fields;

use super::Rule;

pub(super) const RULES: &[(&str, Rule)] = &[
    ("phoneNumberCarrierLookup", carrier_lookup),
    ("phoneNumberGeolocation", geolocation),
    ("phoneNumberTypeDetection", type_detection),
    ("socialMediaLinkedToPhone", linked_social_media),
    ("spamCallDatabaseCheck", spam_check),
    ("internationalPhoneFormatting", international_formatting),
    ("reversePhoneNumberLookup", reverse_lookup),
    ("voipVsNonVoipDetector", voip_detector),
];

/// Toll-free prefix treated as VOIP
const TOLL_FREE_PREFIX: &str = "+1800";

/// Number reported as spam and with a known owner
const REPORTED_NUMBER: &str = "555-0100";

fn carrier_lookup(query: &str) -> Fields {
    let carrier = if query.contains("555") { "AT&T Mobility" } else { "Verizon Wireless" };
    Fields::new()
        .with("carrier", carrier)
        .with("country", "United States")
}

fn geolocation(query: &str) -> Fields {
    let location = if query.contains("555") {
        "California, USA (simulated)"
    } else {
        "New York, USA (simulated)"
    };
    Fields::new()
        .with("possibleLocation", location)
        .with("timezone", "America/Los_Angeles")
}

fn type_detection(query: &str) -> Fields {
    let kind = if query.starts_with(TOLL_FREE_PREFIX) { "VOIP" } else { "Mobile" };
    Fields::new().with("type", kind)
}

fn linked_social_media(query: &str) -> Fields {
    let accounts: Vec<&str> = if query.contains("1234567") {
        vec!["WhatsApp", "Telegram"]
    } else {
        Vec::new()
    };
    Fields::new().with("linkedAccounts", accounts)
}

fn spam_check(query: &str) -> Fields {
    let risk = if query.contains(REPORTED_NUMBER) {
        "High (Reported by 100+ users)"
    } else {
        "Low"
    };
    Fields::new().with("spamRisk", risk)
}

fn international_formatting(_query: &str) -> Fields {
    Fields::new()
        .with("formatted", "+1 (555) 123-4567")
        .with("countryCode", "+1")
        .with("nationalFormat", "(555) 123-4567")
}

fn reverse_lookup(query: &str) -> Fields {
    let name = if query.contains(REPORTED_NUMBER) { "John Doe (simulated)" } else { "Unknown" };
    Fields::new()
        .with("name", name)
        .with("address", "123 Main St, Anytown (simulated)")
}

fn voip_detector(query: &str) -> Fields {
    Fields::new().with("isVoip", query.starts_with(TOLL_FREE_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::Value;

    #[test]
    fn test_carrier_lookup() {
        assert_eq!(
            carrier_lookup("+1 555 123 4567").get("carrier").and_then(Value::as_str),
            Some("AT&T Mobility")
        );
        assert_eq!(
            carrier_lookup("+44 20 7946 0000").get("carrier").and_then(Value::as_str),
            Some("Verizon Wireless")
        );
    }

    #[test]
    fn test_toll_free_is_voip() {
        assert_eq!(type_detection("+18005551234").get("type").and_then(Value::as_str), Some("VOIP"));
        assert_eq!(type_detection("+15551234567").get("type").and_then(Value::as_str), Some("Mobile"));
        assert_eq!(voip_detector("+18005551234").get("isVoip").and_then(Value::as_bool), Some(true));
        assert_eq!(voip_detector("1800").get("isVoip").and_then(Value::as_bool), Some(false));
    }

    #[test]
    fn test_spam_and_reverse_lookup() {
        assert_eq!(
            spam_check("+1 555-0100").get("spamRisk").and_then(Value::as_str),
            Some("High (Reported by 100+ users)")
        );
        assert_eq!(spam_check("+1 555-0199").get("spamRisk").and_then(Value::as_str), Some("Low"));
        assert_eq!(
            reverse_lookup("555-0100").get("name").and_then(Value::as_str),
            Some("John Doe (simulated)")
        );
    }

    #[test]
    fn test_linked_social_media_empty() {
        let fields = linked_social_media("+1 000");
        assert_eq!(fields.get("linkedAccounts").and_then(Value::as_list).map(|l| l.len()), Some(0));
    }
}

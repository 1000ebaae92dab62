//! Flattening of nested result values into display lines.
//!
//! Renderers walk the output of [`LookupResult::flatten`] (or
//! [`flatten_fields`] for a bare field set) instead of re-deriving how lists
//! and mappings nest.

use super::result::LookupResult;
use super::value::{Fields, Value};

/// Placeholder line for an empty list
const EMPTY_LIST: &str = "None";

/// One line of flattened output.
///
/// `label` only: a header for the nested lines that follow.
/// `text` only: a list item.
/// Both: a `label: text` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub depth: usize,
    pub label: Option<String>,
    pub text: Option<String>,
}

impl DisplayLine {
    fn entry(depth: usize, label: String, text: String) -> Self {
        Self {
            depth,
            label: Some(label),
            text: Some(text),
        }
    }

    fn header(depth: usize, label: String) -> Self {
        Self {
            depth,
            label: Some(label),
            text: None,
        }
    }

    fn item(depth: usize, text: String) -> Self {
        Self {
            depth,
            label: None,
            text: Some(text),
        }
    }
}

/// Turn a field key into a display label: `openPorts` -> `Open Ports`,
/// `real_data` -> `Real Data`.
pub fn humanize(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in key.chars() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten a field mapping starting at `depth`
pub fn flatten_fields(fields: &Fields, depth: usize) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    for (key, value) in fields.iter() {
        push_value(&mut lines, depth, humanize(key), value);
    }
    lines
}

fn push_value(lines: &mut Vec<DisplayLine>, depth: usize, label: String, value: &Value) {
    match value {
        Value::Scalar(scalar) => lines.push(DisplayLine::entry(depth, label, scalar.to_string())),
        Value::List(items) => {
            lines.push(DisplayLine::header(depth, label));
            if items.is_empty() {
                lines.push(DisplayLine::item(depth + 1, EMPTY_LIST.to_string()));
            }
            for item in items {
                push_item(lines, depth + 1, item);
            }
        }
        Value::Map(fields) => {
            lines.push(DisplayLine::header(depth, label));
            lines.extend(flatten_fields(fields, depth + 1));
        }
    }
}

fn push_item(lines: &mut Vec<DisplayLine>, depth: usize, item: &Value) {
    match item {
        Value::Scalar(scalar) => lines.push(DisplayLine::item(depth, scalar.to_string())),
        // mapping items expand in place, one entry per line
        Value::Map(fields) => lines.extend(flatten_fields(fields, depth)),
        Value::List(inner) => {
            for nested in inner {
                push_item(lines, depth + 1, nested);
            }
        }
    }
}

impl LookupResult {
    /// Ordered display lines for this result's fields
    pub fn flatten(&self) -> Vec<DisplayLine> {
        flatten_fields(self.fields(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("openPorts"), "Open Ports");
        assert_eq!(humanize("real_data"), "Real Data");
        assert_eq!(humanize("found"), "Found");
        assert_eq!(humanize("domainAgeYears"), "Domain Age Years");
        assert_eq!(humanize("aRecords"), "A Records");
        assert_eq!(humanize("isp"), "Isp");
    }

    #[test]
    fn test_flatten_scalar() {
        let result = LookupResult::simulated("x", Fields::new().with("cms", "WordPress"));
        let lines = result.flatten();
        assert_eq!(lines, vec![DisplayLine::entry(0, "Cms".into(), "WordPress".into())]);
    }

    #[test]
    fn test_result_flatten_matches_fields() {
        let fields = Fields::new()
            .with("ip", "1.2.3.4")
            .with("openPorts", vec!["22", "443"]);
        let result = LookupResult::real("1.2.3.4", fields.clone());
        assert_eq!(result.flatten(), flatten_fields(&fields, 0));
    }

    #[test]
    fn test_flatten_list_and_empty_list() {
        let fields = Fields::new()
            .with("breaches", vec!["Adobe 2013", "LinkedIn 2012"])
            .with("pastes", Vec::<Value>::new());
        let lines = flatten_fields(&fields, 0);

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], DisplayLine::header(0, "Breaches".into()));
        assert_eq!(lines[1], DisplayLine::item(1, "Adobe 2013".into()));
        assert_eq!(lines[2], DisplayLine::item(1, "LinkedIn 2012".into()));
        assert_eq!(lines[3], DisplayLine::header(0, "Pastes".into()));
        assert_eq!(lines[4], DisplayLine::item(1, "None".into()));
    }

    #[test]
    fn test_flatten_nested_mapping() {
        let fields = Fields::new().with(
            "profiles",
            Fields::new()
                .with("twitter", "https://twitter.com/jdoe")
                .with("linkedin", "https://linkedin.com/in/jdoe"),
        );
        let lines = flatten_fields(&fields, 0);

        assert_eq!(lines[0], DisplayLine::header(0, "Profiles".into()));
        assert_eq!(
            lines[1],
            DisplayLine::entry(1, "Twitter".into(), "https://twitter.com/jdoe".into())
        );
        assert_eq!(lines[2].depth, 1);
    }

    #[test]
    fn test_flatten_list_of_mappings() {
        let fields = Fields::new().with(
            "sites",
            vec![
                Value::from(Fields::new().with("name", "Shodan.io").with("url", "https://www.shodan.io/")),
            ],
        );
        let lines = flatten_fields(&fields, 0);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], DisplayLine::entry(1, "Name".into(), "Shodan.io".into()));
        assert_eq!(lines[2], DisplayLine::entry(1, "Url".into(), "https://www.shodan.io/".into()));
    }
}

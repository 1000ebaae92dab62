//! Terminal rendering for lookup results and registry listings.

use colored::*;

use osintr::lookup::{DisplayLine, LookupResult, Provenance};
use osintr::registry::{Category, OSINT_WEBSITES, Registry};

const INDENT: &str = "  ";

/// Result block with provenance banner and flattened fields
pub fn result_lines(tool_name: &str, result: &LookupResult) -> Vec<String> {
    let mut lines = vec![format!("--- {} Results ---", tool_name).bold().to_string()];
    lines.push(format!("Query: {}", display_query(result.query())));

    if let Some(error) = result.error() {
        lines.push(format!("Error: {}", error).red().to_string());
    } else {
        let source = format!("Data Source: {}", result.provenance().label());
        match result.provenance() {
            Provenance::Real => lines.push(source.green().to_string()),
            Provenance::Simulated => {
                lines.push(source.yellow().to_string());
                lines.push(
                    "For real data, set the provider API key for an integrated tool."
                        .yellow()
                        .to_string(),
                );
            }
        }
        lines.extend(result.flatten().iter().map(display_line));
    }

    lines.push("--- End Results ---".bold().to_string());
    lines
}

fn display_query(query: &str) -> &str {
    if query.trim().is_empty() { "(none)" } else { query }
}

fn display_line(line: &DisplayLine) -> String {
    let indent = INDENT.repeat(line.depth + 1);
    match (&line.label, &line.text) {
        (Some(label), Some(text)) => format!("{}- {}: {}", indent, label.cyan(), text),
        (Some(label), None) => format!("{}- {}:", indent, label.cyan()),
        (None, Some(text)) => format!("{}- {}", indent, text),
        (None, None) => indent,
    }
}

/// Numbered category menu
pub fn category_lines(registry: &Registry) -> Vec<String> {
    registry
        .categories()
        .iter()
        .enumerate()
        .map(|(i, category)| {
            format!(
                "{:>2}. {} {} ({} tools)",
                i + 1,
                category.name.bold(),
                format!("[{}]", category.id).dimmed(),
                category.tools.len()
            )
        })
        .collect()
}

/// Tools of one category, credential-gated tools marked with their key
pub fn tool_lines(category: &Category) -> Vec<String> {
    let mut lines = vec![category.name.bold().to_string()];
    for tool in &category.tools {
        let mut line = format!("{}{:<32} {} - {}", INDENT, tool.id.cyan(), tool.name, tool.description);
        if let Some(credential) = &tool.credential {
            line.push_str(&format!(" {}", format!("[live: {}]", credential).green()));
        }
        if tool.input_optional {
            line.push_str(&format!(" {}", "[input optional]".dimmed()));
        }
        lines.push(line);
    }
    lines
}

/// The curated website list
pub fn site_lines() -> Vec<String> {
    let mut lines = vec!["Recommended OSINT websites:".bold().to_string()];
    lines.extend(
        OSINT_WEBSITES
            .iter()
            .map(|(name, url)| format!("{}- {}: {}", INDENT, name, url.underline())),
    );
    lines.push("Copy and paste these URLs into your browser.".yellow().to_string());
    lines
}

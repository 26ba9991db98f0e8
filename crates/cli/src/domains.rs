use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;

/// Merges positional domains with the optional domains file.
///
/// Domains are trimmed and lowercased, and each one is kept once in
/// first-seen order. In the file, blank lines and `#` comments are skipped.
pub fn collect(positional: &[String], file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let from_file = match file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read domains file {}", path.display()))?;
            parse_domains_file(&content)
        }
        None => Vec::new(),
    };

    Ok(dedup(positional.iter().cloned().chain(from_file)))
}

fn parse_domains_file(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn dedup(domains: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    domains
        .map(|d| d.trim().to_ascii_lowercase())
        .filter(|d| !d.is_empty())
        .filter(|d| seen.insert(d.clone()))
        .collect()
}

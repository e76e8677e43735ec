//! Raw hosts file text to ordered entries.

use crate::entry::Entry;

/// Parse full hosts file text into entries, in line order.
///
/// Lossy and total: blank lines, comments (`#` to end of line), and lines
/// that do not yield exactly two whitespace-separated tokens after comment
/// stripping are silently dropped. No input causes a failure; callers can
/// feed this any hosts file found in the wild.
pub fn parse(text: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    for raw in text.split('\n') {
        let line = raw.replace('\t', " ");
        let mut line = line.trim();
        if let Some(comment) = line.find('#') {
            line = line[..comment].trim();
        }
        let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
        if let [address, hostname] = tokens[..] {
            entries.push(Entry::new(address, hostname));
        }
    }
    entries
}

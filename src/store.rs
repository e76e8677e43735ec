//! Hostfile handle bound to a path: queries and full-file rewrites.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::parser;

/// Default hosts file location on this platform.
#[cfg(windows)]
pub const DEFAULT_HOSTFILE_PATH: &str = "C:\\Windows\\System32\\drivers\\etc\\hosts";

/// Default hosts file location on this platform.
#[cfg(not(windows))]
pub const DEFAULT_HOSTFILE_PATH: &str = "/etc/hosts";

/// Header comment written at the top of every rewritten file.
const FILE_HEADER: &str =
    "# Hosts file: one address and one hostname per line, separated by whitespace.";

/// Cosmetic gap between the address and hostname columns.
const COLUMN_GAP: &str = "   ";

/// Handle bound to a hosts file path.
///
/// Stateless beyond the path: every operation re-reads the file from disk,
/// and mutations overwrite it wholesale. Rewrites regenerate a minimal file,
/// so comments and blank lines present before a mutation are discarded. No
/// locking or atomic replace is performed; callers that may face concurrent
/// writers must serialize access themselves.
#[derive(Debug)]
pub struct Hostfile {
    path: PathBuf,
}

impl Hostfile {
    /// Open a handle after validating the path.
    ///
    /// Fails if the path names a directory, does not exist, or cannot be
    /// stat'd. The file contents are not touched until an operation runs.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => Err(Error::PathIsDirectory(path)),
            Ok(_) => Ok(Self { path }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::PathNotFound(path)),
            Err(e) => Err(Error::Path { path, source: e }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries currently in the file, in file order.
    pub fn list(&self) -> Result<Vec<Entry>> {
        let text = fs::read_to_string(&self.path).map_err(|e| Error::Io {
            op: "read",
            path: self.path.clone(),
            source: e,
        })?;
        Ok(parser::parse(&text))
    }

    /// Entries whose address and hostname both match (case-insensitive).
    /// No matches is an empty result, not an error.
    pub fn get(&self, address: &str, hostname: &str) -> Result<Vec<Entry>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|e| e.matches(address, hostname))
            .collect())
    }

    /// Entries whose address matches (case-insensitive).
    pub fn get_by_address(&self, address: &str) -> Result<Vec<Entry>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|e| e.address_matches(address))
            .collect())
    }

    /// Entries whose hostname matches (case-insensitive).
    pub fn get_by_hostname(&self, hostname: &str) -> Result<Vec<Entry>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|e| e.hostname_matches(hostname))
            .collect())
    }

    /// Append an entry and rewrite the file.
    ///
    /// Duplicate pairs are neither rejected nor merged; deduplication is a
    /// caller-level policy choice.
    pub fn add(&self, entry: Entry) -> Result<()> {
        let mut entries = self.list()?;
        entries.push(entry);
        self.write_entries(&entries)
    }

    /// Remove entries matching both fields; returns how many were removed.
    pub fn remove(&self, address: &str, hostname: &str) -> Result<usize> {
        self.remove_where(|e| e.matches(address, hostname))
    }

    /// Remove entries matching the address alone.
    pub fn remove_by_address(&self, address: &str) -> Result<usize> {
        self.remove_where(|e| e.address_matches(address))
    }

    /// Remove entries matching the hostname alone.
    pub fn remove_by_hostname(&self, hostname: &str) -> Result<usize> {
        self.remove_where(|e| e.hostname_matches(hostname))
    }

    fn remove_where(&self, matched: impl Fn(&Entry) -> bool) -> Result<usize> {
        let entries = self.list()?;
        let before = entries.len();
        let kept: Vec<Entry> = entries.into_iter().filter(|e| !matched(e)).collect();
        let removed = before - kept.len();
        self.write_entries(&kept)?;
        Ok(removed)
    }

    fn write_entries(&self, entries: &[Entry]) -> Result<()> {
        fs::write(&self.path, serialize(entries)).map_err(|e| Error::Io {
            op: "write",
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Render entries as complete hosts file content.
///
/// One header comment, one line per entry, CRLF line endings, trailing
/// newline. Output re-parses to the same entry sequence (the header is
/// dropped as a comment) as long as no field contains `#`, tab, or newline.
pub fn serialize(entries: &[Entry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(FILE_HEADER.to_string());
    for e in entries {
        lines.push(format!("{}{COLUMN_GAP}{}", e.address, e.hostname));
    }
    lines.push(String::new());
    lines.join("\r\n")
}

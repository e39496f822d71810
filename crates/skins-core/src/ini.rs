//! Reader for the INI-style text files shipped inside skins.
//!
//! `skin.hints`, `region.txt`, and `pledit.txt` all use the same loose
//! dialect: `[section]` headers, `key=value` lines, arbitrary whitespace,
//! and names whose case varies from skin to skin.

use std::collections::HashMap;
use std::path::Path;

use crate::parse::int_list;
use crate::resolver::find_file_case;

/// A parsed INI document. Section and key names are stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct IniFile {
    sections: HashMap<String, HashMap<String, String>>,
}

impl IniFile {
    /// Parse INI text.
    ///
    /// Lines starting with `;` or `#` are comments. Lines without `=` and
    /// keys that appear before the first section header are ignored. When a
    /// key repeats within a section, the later value wins.
    pub fn parse(text: &str) -> Self {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let name = rest.split(']').next().unwrap_or(rest).trim();
                let name = name.to_ascii_lowercase();
                sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let Some(section) = current.as_ref() else {
                continue;
            };
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            if key.is_empty() {
                continue;
            }
            sections
                .entry(section.clone())
                .or_default()
                .insert(key, value.trim().to_string());
        }

        Self { sections }
    }

    /// Locate `name` inside `dir` (case-insensitively) and parse it.
    ///
    /// Returns `None` when the file is absent or unreadable; callers treat a
    /// missing INI file the same as one with no matching keys.
    pub fn open(dir: &Path, name: &str) -> Option<Self> {
        let path = find_file_case(dir, name)?;
        match std::fs::read(&path) {
            Ok(bytes) => Some(Self::parse(&String::from_utf8_lossy(&bytes))),
            Err(e) => {
                log::warn!("Cannot read {}: {e}", path.display());
                None
            },
        }
    }

    /// Raw string value of `key` in `section`.
    pub fn lookup(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(&section.to_ascii_lowercase())?
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Value of `key` in `section` read as a loose integer list.
    pub fn lookup_ints(&self, section: &str, key: &str) -> Option<Vec<i32>> {
        self.lookup(section, key).map(int_list)
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(&section.to_ascii_lowercase())
    }
}

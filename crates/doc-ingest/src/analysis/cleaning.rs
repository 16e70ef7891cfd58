//! Text normalization applied before segmentation

use regex::Regex;

use crate::error::{Error, Result};

/// Whitespace collapsing, character filtering and boundary-marker removal
#[derive(Debug, Clone)]
pub struct TextCleaner {
    whitespace: Regex,
    disallowed: Regex,
    boundary_marker: Regex,
}

impl TextCleaner {
    /// Compile the cleaning patterns
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| Error::internal(format!("bad cleaning pattern {}: {}", pattern, e)))
        };

        Ok(Self {
            whitespace: compile(r"\s+")?,
            disallowed: compile(r"[^\w\s.,!?;:\-()]")?,
            boundary_marker: compile(r"--- (?:Page|Slide) \d+ ---")?,
        })
    }

    /// Normalize text.
    ///
    /// Runs of whitespace become one space, characters outside word
    /// characters, whitespace and `. , ! ? ; : - ( )` are dropped, page and
    /// slide markers are removed, and the ends are trimmed. Removing a marker
    /// can leave a double space behind; it is not collapsed again.
    pub fn clean(&self, text: &str) -> String {
        let collapsed = self.whitespace.replace_all(text, " ");
        let filtered = self.disallowed.replace_all(&collapsed, "");
        let unmarked = self.boundary_marker.replace_all(&filtered, "");
        unmarked.trim().to_string()
    }
}

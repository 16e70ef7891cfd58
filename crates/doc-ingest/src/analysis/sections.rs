//! Heading detection and section grouping over lines

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::Section;

/// Groups lines into heading-delimited sections
#[derive(Debug, Clone)]
pub struct SectionSplitter {
    max_heading_length: usize,
    numbered_heading: Regex,
}

impl SectionSplitter {
    /// Create a splitter; lines of `max_heading_length` chars or more are never headings
    pub fn new(max_heading_length: usize) -> Result<Self> {
        let numbered_heading = Regex::new(r"^[\d.\-\s]*[A-Z]")
            .map_err(|e| Error::internal(format!("bad heading pattern: {}", e)))?;
        Ok(Self {
            max_heading_length,
            numbered_heading,
        })
    }

    /// Heading heuristic: short, and all upper case, or a (numbered) capitalised
    /// start, or a trailing colon
    pub fn is_heading(&self, line: &str) -> bool {
        line.chars().count() < self.max_heading_length
            && (is_upper(line) || self.numbered_heading.is_match(line) || line.ends_with(':'))
    }

    /// Group lines into sections.
    ///
    /// Lines are trimmed and blank ones skipped. Lines before the first heading
    /// are dropped. A heading closes the open section even when it has no
    /// content; the final section is kept only if it has content.
    pub fn split<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut current: Option<(String, Vec<&str>)> = None;

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            if self.is_heading(line) {
                if let Some((heading, content)) = current.take() {
                    sections.push(Section {
                        heading,
                        content: content.join(" "),
                    });
                }
                current = Some((line.to_string(), Vec::new()));
            } else if let Some((_, content)) = current.as_mut() {
                content.push(line);
            }
        }

        if let Some((heading, content)) = current {
            if !content.is_empty() {
                sections.push(Section {
                    heading,
                    content: content.join(" "),
                });
            }
        }

        sections
    }
}

/// At least one cased character and no lower-case ones
fn is_upper(line: &str) -> bool {
    let mut cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

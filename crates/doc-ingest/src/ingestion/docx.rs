//! DOCX reader: paragraphs in order, heading styles recorded

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

use super::extractor::FormatReader;
use crate::error::ExtractionCause;
use crate::types::{ExtractionMetadata, Heading, RawExtraction};

/// Reads word-processor documents paragraph by paragraph
pub struct DocxReader;

impl FormatReader for DocxReader {
    fn read(&self, data: &[u8]) -> Result<RawExtraction, ExtractionCause> {
        let docx =
            docx_rs::read_docx(data).map_err(|e| ExtractionCause::Docx(e.to_string()))?;

        let mut paragraphs = Vec::new();
        let mut headings = Vec::new();

        for child in &docx.document.children {
            let DocumentChild::Paragraph(paragraph) = child else {
                continue;
            };

            let text = paragraph_text(paragraph);
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            if let Some(style) = paragraph.property.style.as_ref().map(|s| s.val.as_str()) {
                if style.starts_with("Heading") {
                    match heading_level(style) {
                        Some(level) => headings.push(Heading {
                            text: text.to_string(),
                            level,
                        }),
                        None => tracing::warn!(
                            "Heading style '{}' has no level, keeping '{}' inline only",
                            style,
                            text
                        ),
                    }
                }
            }

            paragraphs.push(text.to_string());
        }

        let metadata = ExtractionMetadata {
            paragraphs: Some(paragraphs.len()),
            headings: Some(headings),
            ..Default::default()
        };

        Ok(RawExtraction {
            raw_text: paragraphs.join("\n\n"),
            metadata,
        })
    }

    fn name(&self) -> &'static str {
        "docx"
    }
}

/// Concatenate the runs of a paragraph, hyperlinks included
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    collect_children(&paragraph.children, &mut text);
    text
}

fn collect_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => collect_run(run, out),
            ParagraphChild::Hyperlink(link) => collect_children(&link.children, out),
            _ => {}
        }
    }
}

fn collect_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

/// Trailing numeral of a heading style: `Heading2` and `Heading 2` are both level 2
fn heading_level(style: &str) -> Option<u32> {
    let style = style.trim_end();
    let digits_start = style.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    style[digits_start..].parse().ok()
}

//! PowerPoint (.pptx) reader with per-slide boundary markers

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use zip::ZipArchive;

use super::extractor::FormatReader;
use crate::error::ExtractionCause;
use crate::types::{ExtractionMetadata, RawExtraction};

const PRESENTATION_PART: &str = "ppt/presentation.xml";
const PRESENTATION_RELS_PART: &str = "ppt/_rels/presentation.xml.rels";
const SLIDE_PREFIX: &str = "ppt/slides/slide";

type Archive<'a> = ZipArchive<Cursor<&'a [u8]>>;

/// Reads slide decks slide by slide
pub struct PptxReader;

impl FormatReader for PptxReader {
    fn read(&self, data: &[u8]) -> Result<RawExtraction, ExtractionCause> {
        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let slide_parts = slide_order(&mut archive);

        let mut blocks = Vec::with_capacity(slide_parts.len());
        for (index, part) in slide_parts.iter().enumerate() {
            let slide_number = index + 1;
            let mut block = format!("--- Slide {} ---\n", slide_number);

            match read_part(&mut archive, part).and_then(|xml| shape_texts(&xml)) {
                Ok(texts) => {
                    for text in texts.iter().filter(|t| !t.trim().is_empty()) {
                        block.push_str(text);
                        block.push('\n');
                    }
                }
                Err(e) => {
                    tracing::warn!("Could not extract text from slide {}: {}", slide_number, e);
                }
            }

            blocks.push(block);
        }

        let metadata = ExtractionMetadata {
            slides: Some(blocks.len()),
            ..Default::default()
        };

        Ok(RawExtraction {
            raw_text: blocks.join("\n\n"),
            metadata,
        })
    }

    fn name(&self) -> &'static str {
        "pptx"
    }
}

fn read_part(archive: &mut Archive<'_>, name: &str) -> Result<String, ExtractionCause> {
    let mut file = archive.by_name(name)?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Slide part names in presentation order.
///
/// The deck's own slide list wins; numbered part names are the fallback when
/// the presentation part or its relationships are unreadable.
fn slide_order(archive: &mut Archive<'_>) -> Vec<String> {
    match presentation_slide_order(archive) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::debug!("Falling back to slide file names: {}", e);
            numbered_slide_parts(archive)
        }
    }
}

fn presentation_slide_order(archive: &mut Archive<'_>) -> Result<Vec<String>, ExtractionCause> {
    let presentation = read_part(archive, PRESENTATION_PART)?;
    let rels = read_part(archive, PRESENTATION_RELS_PART)?;

    let targets = relationship_targets(&rels)?;
    let slide_ids = slide_relationship_ids(&presentation)?;

    slide_ids
        .iter()
        .map(|rid| {
            targets
                .get(rid)
                .map(|target| resolve_target(target))
                .ok_or_else(|| ExtractionCause::Xml(format!("unknown slide relationship {}", rid)))
        })
        .collect()
}

fn numbered_slide_parts(archive: &Archive<'_>) -> Vec<String> {
    let mut numbered: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let number = name
                .strip_prefix(SLIDE_PREFIX)?
                .strip_suffix(".xml")?
                .parse::<u32>()
                .ok()?;
            Some((number, name.to_string()))
        })
        .collect();
    numbered.sort();
    numbered.into_iter().map(|(_, name)| name).collect()
}

/// Relationship targets are relative to `ppt/` unless absolute
fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("ppt/{}", target.trim_start_matches("./")),
    }
}

fn relationship_targets(xml: &str) -> Result<HashMap<String, String>, ExtractionCause> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let id = attribute(&e, |key| key == b"Id");
                let target = attribute(&e, |key| key == b"Target");
                if let (Some(id), Some(target)) = (id, target) {
                    targets.insert(id, target);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractionCause::Xml(e.to_string())),
            _ => {}
        }
    }

    Ok(targets)
}

/// `r:id` values of the `sldIdLst` entries, in order
fn slide_relationship_ids(xml: &str) -> Result<Vec<String>, ExtractionCause> {
    let mut reader = Reader::from_str(xml);
    let mut ids = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == b"sldId" => {
                // The plain `id` attribute is the numeric slide id; we want the prefixed one
                if let Some(rid) = attribute(&e, |key| key != b"id" && key.ends_with(b":id")) {
                    ids.push(rid);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractionCause::Xml(e.to_string())),
            _ => {}
        }
    }

    Ok(ids)
}

fn attribute(element: &BytesStart<'_>, matches: impl Fn(&[u8]) -> bool) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| matches(attr.key.as_ref()))
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// Text of every top-level shape (`p:sp`) on a slide, paragraphs joined by
/// newlines. Shapes inside a group (`p:grpSp`) are skipped.
fn shape_texts(xml: &str) -> Result<Vec<String>, ExtractionCause> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut shapes = Vec::new();
    let mut current: Option<String> = None;
    let mut paragraphs_in_shape = 0usize;
    let mut in_text_body = false;
    let mut in_text_run = false;
    let mut group_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"grpSp" => group_depth += 1,
                b"sp" if group_depth == 0 => {
                    current = Some(String::new());
                    paragraphs_in_shape = 0;
                }
                b"txBody" if current.is_some() => in_text_body = true,
                b"p" if in_text_body => {
                    if let Some(text) = current.as_mut() {
                        if paragraphs_in_shape > 0 {
                            text.push('\n');
                        }
                    }
                    paragraphs_in_shape += 1;
                }
                b"t" if in_text_body => in_text_run = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"p" if in_text_body => {
                    if let Some(text) = current.as_mut() {
                        if paragraphs_in_shape > 0 {
                            text.push('\n');
                        }
                    }
                    paragraphs_in_shape += 1;
                }
                b"br" if in_text_body => {
                    if let Some(text) = current.as_mut() {
                        text.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let unescaped = e
                    .unescape()
                    .map_err(|err| ExtractionCause::Xml(err.to_string()))?;
                if let Some(text) = current.as_mut() {
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"txBody" => in_text_body = false,
                b"grpSp" => group_depth = group_depth.saturating_sub(1),
                b"sp" => {
                    if let Some(text) = current.take() {
                        shapes.push(text);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractionCause::Xml(e.to_string())),
            _ => {}
        }
    }

    Ok(shapes)
}

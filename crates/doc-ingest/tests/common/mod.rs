//! Fixture builders producing real container files
#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use docx_rs::{Docx, Paragraph, Run};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write bytes under `dir` and return the path
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// DOCX with `(text, style)` paragraphs
pub fn docx(paragraphs: &[(&str, Option<&str>)]) -> Vec<u8> {
    let mut doc = Docx::new();
    for (text, style) in paragraphs {
        let mut paragraph = Paragraph::new();
        if !text.is_empty() {
            paragraph = paragraph.add_run(Run::new().add_text(*text));
        }
        if let Some(style) = style {
            paragraph = paragraph.style(style);
        }
        doc = doc.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    doc.build().pack(&mut buf).unwrap();
    buf.into_inner()
}

/// One page of a [`pdf_pages`] fixture
pub enum PdfPage<'a> {
    /// A single text line
    Text(&'a str),
    /// `Contents` points at an object that does not exist
    MissingContents,
    /// `Contents` is a stream of bytes that are not content operators
    GarbledContents,
}

/// PDF with one text line per page and optional Info entries
pub fn pdf(pages: &[&str], title: Option<&str>, author: Option<&str>) -> Vec<u8> {
    let pages: Vec<PdfPage<'_>> = pages.iter().map(|text| PdfPage::Text(text)).collect();
    pdf_pages(&pages, title, author)
}

/// PDF whose pages may be damaged
pub fn pdf_pages(pages: &[PdfPage<'_>], title: Option<&str>, author: Option<&str>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::new();
    for page in pages {
        let content_id = match page {
            PdfPage::Text(text) => {
                let content = Content {
                    operations: vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 12.into()]),
                        Operation::new("Td", vec![72.into(), 720.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*text)]),
                        Operation::new("ET", vec![]),
                    ],
                };
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()))
            }
            PdfPage::MissingContents => (9999, 0),
            PdfPage::GarbledContents => doc.add_object(Stream::new(
                dictionary! {},
                b"<< ]] )( \xff\xfe >> [[".to_vec(),
            )),
        };
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if title.is_some() || author.is_some() {
        let mut info = lopdf::Dictionary::new();
        if let Some(title) = title {
            info.set("Title", Object::string_literal(title));
        }
        if let Some(author) = author {
            info.set("Author", Object::string_literal(author));
        }
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);
    }

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

const PRESENTATION_NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

fn slide_xml(shapes: &[&str]) -> String {
    let shapes: String = shapes
        .iter()
        .map(|text| {
            let paragraphs: String = text
                .split('\n')
                .map(|line| format!("<a:p><a:r><a:t>{}</a:t></a:r></a:p>", line))
                .collect();
            format!("<p:sp><p:txBody><a:bodyPr/>{}</p:txBody></p:sp>", paragraphs)
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld {}><p:cSld><p:spTree>{}</p:spTree></p:cSld></p:sld>"#,
        PRESENTATION_NS, shapes
    )
}

/// One slide of a [`pptx_parts`] fixture
pub enum SlidePart<'a> {
    /// Well-formed slide with one shape per entry
    Shapes(&'a [&'a str]),
    /// Listed in the presentation but absent from the archive
    Missing,
    /// Slide part written verbatim
    Raw(&'a str),
}

/// PPTX whose presentation order is `slides`; part files are numbered in
/// reverse so that file-name order differs from presentation order
pub fn pptx(slides: &[&[&str]]) -> Vec<u8> {
    let parts: Vec<SlidePart<'_>> = slides.iter().map(|shapes| SlidePart::Shapes(shapes)).collect();
    pptx_parts(&parts)
}

/// PPTX whose slide parts may be missing or malformed
pub fn pptx_parts(slides: &[SlidePart<'_>]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    let total = slides.len();
    let mut ids = String::new();
    let mut rels = String::new();
    for (index, slide) in slides.iter().enumerate() {
        let part_number = total - index;
        let rid = format!("rId{}", index + 2);
        ids.push_str(&format!(r#"<p:sldId id="{}" r:id="{}"/>"#, 256 + index, rid));
        rels.push_str(&format!(
            r#"<Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            rid, part_number
        ));

        let xml = match slide {
            SlidePart::Shapes(shapes) => slide_xml(shapes),
            SlidePart::Missing => continue,
            SlidePart::Raw(xml) => xml.to_string(),
        };
        zip.start_file(format!("ppt/slides/slide{}.xml", part_number), options)
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
    }

    zip.start_file("ppt/presentation.xml", options).unwrap();
    zip.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:presentation {}><p:sldIdLst>{}</p:sldIdLst></p:presentation>"#,
            PRESENTATION_NS, ids
        )
        .as_bytes(),
    )
    .unwrap();

    zip.start_file("ppt/_rels/presentation.xml.rels", options)
        .unwrap();
    zip.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{}</Relationships>"#,
            rels
        )
        .as_bytes(),
    )
    .unwrap();

    zip.finish().unwrap().into_inner()
}

/// PPTX with only numbered slide parts and no presentation part
pub fn pptx_without_presentation(slides: &[&[&str]]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    // Written out of order on purpose; slide10 must sort after slide2
    let mut numbered: Vec<(usize, &[&str])> = slides
        .iter()
        .enumerate()
        .map(|(i, shapes)| (if i == 0 { 1 } else { i * 10 }, *shapes))
        .collect();
    numbered.reverse();

    for (number, shapes) in numbered {
        zip.start_file(format!("ppt/slides/slide{}.xml", number), options)
            .unwrap();
        zip.write_all(slide_xml(shapes).as_bytes()).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

//! Extraction from real container files

mod common;

use common::{PdfPage, SlidePart};
use doc_ingest::{DocumentFormat, Error, ExtractionCause, ExtractionConfig, Extractor, Heading};

#[test]
fn test_pdf_pages_and_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = common::pdf(
        &["Revenue grew this year.", "Costs fell sharply."],
        Some("Annual Report"),
        Some("Jane Smith"),
    );
    let path = common::write_file(dir.path(), "report.pdf", &bytes);

    let raw = doc_ingest::extract(&path, "pdf").unwrap();

    assert!(raw.raw_text.starts_with("--- Page 1 ---"));
    let page_one = raw.raw_text.find("--- Page 1 ---").unwrap();
    let page_two = raw.raw_text.find("--- Page 2 ---").unwrap();
    let revenue = raw.raw_text.find("Revenue grew this year.").unwrap();
    let costs = raw.raw_text.find("Costs fell sharply.").unwrap();
    assert!(page_one < revenue && revenue < page_two && page_two < costs);

    assert_eq!(raw.metadata.pages, Some(2));
    assert_eq!(raw.metadata.title.as_deref(), Some("Annual Report"));
    assert_eq!(raw.metadata.author.as_deref(), Some("Jane Smith"));
    assert_eq!(raw.metadata.slides, None);
}

#[test]
fn test_pdf_without_info_has_empty_title() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_file(dir.path(), "plain.pdf", &common::pdf(&["Body."], None, None));

    let raw = doc_ingest::extract(&path, "PDF").unwrap();
    assert_eq!(raw.metadata.title.as_deref(), Some(""));
    assert_eq!(raw.metadata.author.as_deref(), Some(""));
}

#[test]
fn test_pdf_without_pages() {
    let raw = Extractor::default()
        .extract_bytes(&common::pdf(&[], None, None), DocumentFormat::Pdf)
        .unwrap();
    assert_eq!(raw.raw_text, "");
    assert_eq!(raw.metadata.pages, Some(0));
}

#[test]
fn test_damaged_pdf_pages_keep_their_markers() {
    let bytes = common::pdf_pages(
        &[
            PdfPage::Text("Opening remarks."),
            PdfPage::MissingContents,
            PdfPage::GarbledContents,
            PdfPage::Text("Closing remarks."),
        ],
        None,
        None,
    );

    let raw = Extractor::default()
        .extract_bytes(&bytes, DocumentFormat::Pdf)
        .unwrap();

    assert_eq!(raw.metadata.pages, Some(4));
    let markers: Vec<usize> = (1..=4)
        .map(|n| raw.raw_text.find(&format!("--- Page {} ---", n)).unwrap())
        .collect();
    assert!(markers.windows(2).all(|pair| pair[0] < pair[1]));

    let opening = raw.raw_text.find("Opening remarks.").unwrap();
    let closing = raw.raw_text.find("Closing remarks.").unwrap();
    assert!(markers[0] < opening && opening < markers[1]);
    assert!(markers[3] < closing);
    assert!(raw.raw_text[markers[1]..markers[3]]
        .lines()
        .all(|line| line.trim().is_empty() || line.starts_with("--- Page")));
}

#[test]
fn test_docx_paragraphs_and_headings() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = common::docx(&[
        ("Overview", Some("Heading1")),
        ("The project started in March.", None),
        ("", None),
        ("   ", None),
        ("Budget", Some("Heading2")),
        ("Spending stayed flat.", None),
    ]);
    let path = common::write_file(dir.path(), "notes.docx", &bytes);

    let raw = doc_ingest::extract(&path, "docx").unwrap();

    assert_eq!(
        raw.raw_text,
        "Overview\n\nThe project started in March.\n\nBudget\n\nSpending stayed flat."
    );
    assert_eq!(raw.metadata.paragraphs, Some(4));
    assert_eq!(
        raw.metadata.headings,
        Some(vec![
            Heading {
                text: "Overview".to_string(),
                level: 1
            },
            Heading {
                text: "Budget".to_string(),
                level: 2
            },
        ])
    );
}

#[test]
fn test_empty_docx() {
    let raw = Extractor::default()
        .extract_bytes(&common::docx(&[]), DocumentFormat::Docx)
        .unwrap();
    assert_eq!(raw.raw_text, "");
    assert_eq!(raw.metadata.paragraphs, Some(0));
    assert_eq!(raw.metadata.headings, Some(Vec::new()));
}

#[test]
fn test_pptx_follows_presentation_order() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = common::pptx(&[
        &["Kickoff", "Goals\nTimeline"],
        &[],
        &["Wrap up"],
    ]);
    let path = common::write_file(dir.path(), "deck.pptx", &bytes);

    let raw = doc_ingest::extract(&path, "pptx").unwrap();

    assert_eq!(
        raw.raw_text,
        "--- Slide 1 ---\nKickoff\nGoals\nTimeline\n\n\n--- Slide 2 ---\n\n\n--- Slide 3 ---\nWrap up\n"
    );
    assert_eq!(raw.metadata.slides, Some(3));
    assert_eq!(raw.metadata.pages, None);
}

#[test]
fn test_damaged_slides_keep_their_markers() {
    let bytes = common::pptx_parts(&[
        SlidePart::Shapes(&["Intro"]),
        SlidePart::Missing,
        SlidePart::Raw("<p:sld><p:sp><a:t>unclosed</p:sp></p:sld>"),
        SlidePart::Shapes(&["Closing"]),
    ]);

    let raw = Extractor::default()
        .extract_bytes(&bytes, DocumentFormat::Pptx)
        .unwrap();

    assert_eq!(
        raw.raw_text,
        "--- Slide 1 ---\nIntro\n\n\n--- Slide 2 ---\n\n\n--- Slide 3 ---\n\n\n--- Slide 4 ---\nClosing\n"
    );
    assert_eq!(raw.metadata.slides, Some(4));
}

#[test]
fn test_pptx_falls_back_to_numbered_parts() {
    let bytes = common::pptx_without_presentation(&[&["first"], &["second"], &["third"]]);
    let raw = Extractor::default()
        .extract_bytes(&bytes, DocumentFormat::Pptx)
        .unwrap();

    let first = raw.raw_text.find("first").unwrap();
    let second = raw.raw_text.find("second").unwrap();
    let third = raw.raw_text.find("third").unwrap();
    assert!(first < second && second < third);
    assert_eq!(raw.metadata.slides, Some(3));
}

#[test]
fn test_text_with_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_file(dir.path(), "notes.txt", b"caf\xff\xfee\nline two");

    let raw = doc_ingest::extract(&path, "txt").unwrap();
    assert_eq!(raw.raw_text, "cafe\nline two");
    assert_eq!(raw.metadata.lines, Some(2));
    assert_eq!(raw.metadata.characters, Some(13));
}

#[test]
fn test_empty_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_file(dir.path(), "empty.txt", b"");

    let raw = doc_ingest::extract(&path, "txt").unwrap();
    assert_eq!(raw.raw_text, "");
    assert_eq!(raw.metadata.characters, Some(0));
}

#[test]
fn test_corrupt_container_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_file(dir.path(), "broken.docx", b"definitely not a zip archive");

    let err = doc_ingest::extract(&path, "docx").unwrap_err();
    match err {
        Error::ExtractionFailed { path: label, .. } => assert!(label.ends_with("broken.docx")),
        other => panic!("unexpected error: {other:?}"),
    }

    let path = common::write_file(dir.path(), "broken.pptx", b"definitely not a zip archive");
    assert!(matches!(
        doc_ingest::extract(&path, "pptx"),
        Err(Error::ExtractionFailed {
            source: ExtractionCause::Archive(_),
            ..
        })
    ));
}

#[test]
fn test_unsupported_and_missing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        doc_ingest::extract(dir.path().join("sheet.xlsx"), "xlsx"),
        Err(Error::UnsupportedFormat(_))
    ));
    assert!(matches!(
        doc_ingest::extract(dir.path().join("missing.pdf"), "pdf"),
        Err(Error::ExtractionFailed {
            source: ExtractionCause::Io(_),
            ..
        })
    ));
}

#[test]
fn test_file_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_file(dir.path(), "big.txt", &[b'a'; 64]);

    let extractor = Extractor::new(ExtractionConfig { max_file_size: 16 });
    assert!(matches!(
        extractor.extract(&path, "txt"),
        Err(Error::ExtractionFailed {
            source: ExtractionCause::FileTooLarge { size: 64, limit: 16 },
            ..
        })
    ));
}

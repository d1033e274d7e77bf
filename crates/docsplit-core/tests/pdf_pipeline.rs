//! End-to-end page loading against a real PDF built with lopdf.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use docsplit_config::PdfConfig;
use docsplit_core::{PageLoader, PdfError};

/// Write a PDF with one page per entry of `page_texts`.
fn write_pdf(path: &Path, page_texts: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let kid_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => kid_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Sample Report"),
        "Author" => Object::string_literal("docsplit tests"),
    });
    doc.trailer.set("Info", info_id);

    doc.compress();
    doc.save(path).expect("save pdf");
}

#[test]
fn loads_and_serves_a_three_page_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    write_pdf(&path, &["Page one content", "Page two content", "Page three content"]);

    let mut loader = PageLoader::new(&path);
    let pages = loader.load_and_split().unwrap();
    assert_eq!(pages.len(), 3);

    assert_eq!(loader.total_pages().unwrap(), 3);
    assert!(loader.get_page(1).unwrap().text.contains("Page one content"));
    assert!(loader.get_page(3).unwrap().text.contains("Page three content"));
    assert!(matches!(
        loader.get_page(4),
        Err(PdfError::PageOutOfRange { number: 4, total: 3 })
    ));
}

#[test]
fn pages_carry_document_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meta.pdf");
    write_pdf(&path, &["Only page"]);

    let mut loader = PageLoader::new(&path);
    loader.load_and_split().unwrap();

    let page = loader.get_page(1).unwrap();
    assert_eq!(page.number, 1);
    assert_eq!(page.metadata.title.as_deref(), Some("Sample Report"));
    assert_eq!(page.metadata.author.as_deref(), Some("docsplit tests"));
}

#[test]
fn normalize_whitespace_collapses_layout_breaks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("normalized.pdf");
    write_pdf(&path, &["Spaced   out   text"]);

    let mut loader = PageLoader::with_config(
        &path,
        PdfConfig {
            normalize_whitespace: true,
            ..PdfConfig::default()
        },
    );
    loader.load_and_split().unwrap();

    let text = &loader.get_page(1).unwrap().text;
    assert!(!text.contains('\n'));
    assert!(!text.contains("  "));
}

#[test]
fn missing_file_surfaces_load_error() {
    let mut loader = PageLoader::new("definitely/not/here.pdf");
    assert!(matches!(loader.load_and_split(), Err(PdfError::Load { .. })));
}

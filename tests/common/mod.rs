//! Fixture builders shared by the integration tests.
#![allow(dead_code)]

use std::io::{Cursor, Write};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Cell style index 1 in [`STYLES_XML`] is a built-in date format.
pub const DATE_STYLE: u32 = 1;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<cellXfs count="2">
<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
<xf numFmtId="14" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/>
</cellXfs>
</styleSheet>"#;

/// A cell in a fixture worksheet.
pub enum Cell {
    Str(&'static str),
    Num(f64),
    Bool(bool),
    Date(u32),
    /// Formula with its cached numeric result
    Formula(&'static str, f64),
}

/// A fixture worksheet: name and rows of `(cell reference, cell)`.
pub struct SheetSpec {
    pub name: &'static str,
    pub rows: Vec<Vec<(&'static str, Cell)>>,
}

fn cell_xml(reference: &str, cell: &Cell) -> String {
    match cell {
        Cell::Str(s) => format!(r#"<c r="{reference}" t="inlineStr"><is><t>{s}</t></is></c>"#),
        Cell::Num(n) => format!(r#"<c r="{reference}"><v>{n}</v></c>"#),
        Cell::Bool(b) => format!(r#"<c r="{reference}" t="b"><v>{}</v></c>"#, u8::from(*b)),
        Cell::Date(serial) => {
            format!(r#"<c r="{reference}" s="{DATE_STYLE}"><v>{serial}</v></c>"#)
        }
        Cell::Formula(f, cached) => format!(r#"<c r="{reference}"><f>{f}</f><v>{cached}</v></c>"#),
    }
}

fn row_number(reference: &str) -> &str {
    reference.trim_start_matches(|c: char| c.is_ascii_alphabetic())
}

fn sheet_xml(sheet: &SheetSpec) -> String {
    let mut xml = format!(r#"<?xml version="1.0" encoding="UTF-8"?><worksheet xmlns="{MAIN_NS}"><sheetData>"#);
    for row in &sheet.rows {
        let Some((first, _)) = row.first() else {
            continue;
        };
        xml.push_str(&format!(r#"<row r="{}">"#, row_number(first)));
        for (reference, cell) in row {
            xml.push_str(&cell_xml(reference, cell));
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Build a minimal xlsx workbook in memory.
pub fn build_xlsx(sheets: &[SheetSpec]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let mut overrides = String::new();
    let mut workbook_sheets = String::new();
    let mut workbook_rels = String::new();
    for (i, sheet) in sheets.iter().enumerate() {
        let n = i + 1;
        overrides.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
        workbook_sheets.push_str(&format!(
            r#"<sheet name="{}" sheetId="{n}" r:id="rId{n}"/>"#,
            sheet.name
        ));
        workbook_rels.push_str(&format!(
            r#"<Relationship Id="rId{n}" Type="{REL_NS}/worksheet" Target="worksheets/sheet{n}.xml"/>"#
        ));
    }
    let styles_id = sheets.len() + 1;
    workbook_rels.push_str(&format!(
        r#"<Relationship Id="rId{styles_id}" Type="{REL_NS}/styles" Target="styles.xml"/>"#
    ));

    let files = [
        (
            "[Content_Types].xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>{overrides}</Types>"#
            ),
        ),
        (
            "_rels/.rels".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="{PKG_REL_NS}"><Relationship Id="rId1" Type="{REL_NS}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
            ),
        ),
        (
            "xl/workbook.xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><workbook xmlns="{MAIN_NS}" xmlns:r="{REL_NS}"><sheets>{workbook_sheets}</sheets></workbook>"#
            ),
        ),
        (
            "xl/_rels/workbook.xml.rels".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="{PKG_REL_NS}">{workbook_rels}</Relationships>"#
            ),
        ),
        ("xl/styles.xml".to_string(), STYLES_XML.to_string()),
    ];

    for (name, body) in files {
        zip.start_file(name, SimpleFileOptions::default()).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    for (i, sheet) in sheets.iter().enumerate() {
        zip.start_file(
            format!("xl/worksheets/sheet{}.xml", i + 1),
            SimpleFileOptions::default(),
        )
        .unwrap();
        zip.write_all(sheet_xml(sheet).as_bytes()).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Build a PDF with one page per entry; empty entries produce pages
/// without any text operators.
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    save(pdf_document(pages))
}

/// Build a PDF whose standard security handler requires a non-empty user
/// password: the `/U` entry does not match the empty password.
pub fn build_encrypted_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = pdf_document(pages);
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "Length" => 40,
        "P" => -4,
        "O" => Object::string_literal(vec![0x4Fu8; 32]),
        "U" => Object::string_literal(vec![0x55u8; 32]),
    });
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(vec![0x11u8; 16]),
            Object::string_literal(vec![0x11u8; 16]),
        ],
    );
    save(doc)
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut data = Vec::new();
    doc.save_to(&mut data).unwrap();
    data
}

fn pdf_document(pages: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
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
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

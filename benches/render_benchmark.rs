//! Benchmarks for rawextract extraction and rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rawextract::model::{CellValue, PageText, Sheet, TextDocument, Workbook};
use rawextract::render::{self, JsonFormat};

/// Creates a synthetic PDF with the given number of pages.
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    let mut content = String::from("%PDF-1.4\n");
    let mut offsets = Vec::new();

    offsets.push(content.len());
    content.push_str("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    let font_obj = 3 + page_count * 2;
    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", i * 2 + 3)).collect();
    offsets.push(content.len());
    content.push_str(&format!(
        "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
        kids.join(" "),
        page_count
    ));

    for i in 0..page_count {
        let page_obj = i * 2 + 3;
        let content_obj = page_obj + 1;

        offsets.push(content.len());
        content.push_str(&format!(
            "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>\nendobj\n",
            page_obj, font_obj, content_obj
        ));

        let text = format!(
            "BT /F1 12 Tf 100 700 Td (Page {} - Budget line items for the spring term.) Tj ET",
            i + 1
        );
        offsets.push(content.len());
        content.push_str(&format!(
            "{} 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
            content_obj,
            text.len(),
            text
        ));
    }

    offsets.push(content.len());
    content.push_str(&format!(
        "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n",
        font_obj
    ));

    let xref_offset = content.len();
    content.push_str(&format!("xref\n0 {}\n", offsets.len() + 1));
    content.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        content.push_str(&format!("{:010} 00000 n \n", offset));
    }
    content.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        offsets.len() + 1,
        xref_offset
    ));

    content.into_bytes()
}

fn create_test_workbook(sheets: usize, rows: usize) -> Workbook {
    let mut workbook = Workbook::new();
    for s in 0..sheets {
        let rows = (0..rows)
            .map(|r| {
                vec![
                    CellValue::text(format!("Item {}", r)),
                    CellValue::Int(r as i64 * 100),
                    CellValue::Float(r as f64 * 1.25),
                    CellValue::Bool(r % 2 == 0),
                    CellValue::Empty,
                ]
            })
            .collect();
        workbook.add_sheet(Sheet::with_rows(format!("Sheet{}", s + 1), rows));
    }
    workbook
}

fn create_test_document(pages: u32) -> TextDocument {
    let mut doc = TextDocument::new();
    for n in 1..=pages {
        doc.add_page(PageText::new(n, "Tuition and fees, line by line. ".repeat(40)));
    }
    doc
}

/// Benchmark magic-byte format detection.
fn bench_format_detection(c: &mut Criterion) {
    let pdf_data = create_test_pdf(1);
    let non_pdf_data = b"Not a PDF file at all, just random text content";

    c.bench_function("detect_valid_pdf", |b| {
        b.iter(|| rawextract::detect_format_from_bytes(black_box(&pdf_data)).is_ok());
    });

    c.bench_function("detect_unknown", |b| {
        b.iter(|| rawextract::detect_format_from_bytes(black_box(non_pdf_data)).is_err());
    });
}

/// Benchmark PDF text extraction at various sizes.
fn bench_pdf_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf_extraction");

    for page_count in [1, 5, 10].iter() {
        let data = create_test_pdf(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| {
                let options = rawextract::ExtractOptions::new().lenient();
                let _ = rawextract::PdfReader::from_bytes_with_options(black_box(&data), options)
                    .and_then(|reader| reader.extract());
            });
        });
    }

    group.finish();
}

/// Benchmark JSON and text rendering.
fn bench_rendering(c: &mut Criterion) {
    let workbook = create_test_workbook(3, 500);
    let doc = create_test_document(50);

    c.bench_function("to_json_pretty", |b| {
        b.iter(|| render::to_json(black_box(&workbook), JsonFormat::Pretty));
    });

    c.bench_function("to_json_compact", |b| {
        b.iter(|| render::to_json(black_box(&workbook), JsonFormat::Compact));
    });

    c.bench_function("to_text", |b| {
        b.iter(|| render::to_text(black_box(&doc)));
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_pdf_extraction,
    bench_rendering,
);
criterion_main!(benches);

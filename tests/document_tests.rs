mod common;

use common::fixtures::*;
use common::{Harness, TestResult, write_compact};
use quire::{
    ControlErrorKind, DiagnosticKind, Document, DocumentBuilder, DocumentWriter, DropdownMode,
    InlineTextControl, Paragraph, QuireError, Table, TableCell, TableRow, WriterConfig,
    document_from_json,
};

#[test]
fn test_write_document_with_controls() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let builder = DocumentBuilder::isolated(1);
    let ctx = builder.context();

    let name = InlineTextControl::plain("CustomerName", "[Name]", &ctx)?;
    let doc = Document::new().child(Paragraph::new().child("Name: ").child(name));
    let xml = write_compact(&doc)?;

    assert_xml_contains!(xml, "xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\"");
    assert_xml_contains!(xml, "mc:Ignorable=\"w14 w15\"");
    assert_xml_contains!(
        xml,
        "<w:sdt><w:sdtPr><w:tag w:val=\"CustomerName\"/><w:id w:val=\"1\"/><w:text/></w:sdtPr>"
    );
    assert_xml_contains!(xml, "<w:sdtContent><w:r><w:t>[Name]</w:t></w:r></w:sdtContent></w:sdt>");
    assert_xml_contains!(xml, "<w:t xml:space=\"preserve\">Name: </w:t>");
    Ok(())
}

#[test]
fn test_pretty_output_and_declaration() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = Document::new().child(Paragraph::with_text("Hello"));
    let xml = DocumentWriter::new(WriterConfig::pretty()).to_string(&doc)?;

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
    assert_xml_contains!(xml, "\n  <w:body>");
    Ok(())
}

#[test]
fn test_empty_runs_follow_config() -> TestResult {
    let doc = Document::new().child(Paragraph::new().child(""));

    let dropped = write_compact(&doc)?;
    assert_xml_contains!(dropped, "<w:p/>");

    let config = WriterConfig {
        emit_empty_runs: true,
        xml_declaration: false,
        ..WriterConfig::default()
    };
    let kept = DocumentWriter::new(config).to_string(&doc)?;
    assert_xml_contains!(kept, "<w:p><w:r><w:t/></w:r></w:p>");
    Ok(())
}

#[test]
fn test_table_cells_get_paragraphs() -> TestResult {
    let doc = Document::new().child(
        Table::new().row(TableRow::new().cell(TableCell::new()).cell(TableCell::new().child(Paragraph::with_text("B")))),
    );
    let xml = write_compact(&doc)?;
    assert_xml_contains!(xml, "<w:tr><w:tc><w:p/></w:tc><w:tc><w:p><w:r><w:t>B</w:t></w:r></w:p></w:tc></w:tr>");
    Ok(())
}

#[test]
fn test_document_from_json() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let h = Harness::new();

    let description = document(vec![
        paragraph(vec![
            text("Customer: "),
            inline_text("CustomerName", "[Name]"),
            text(" "),
            checkbox("Active", true),
        ]),
        block(
            "Terms",
            vec![paragraph(vec![rich_inline_text(
                "Clause",
                vec![text("Effective "), bound_date("Effective", "/contract/date", STORE_ITEM_ID)],
            )])],
        ),
        paragraph(vec![dropdown("Status", "restricted-list", &[("Open", "open"), ("Closed", "closed")])]),
    ]);

    let doc = document_from_json(&description.to_string(), &h.ctx())?;
    assert_eq!(doc.body().len(), 3);
    assert!(h.diagnostics.is_empty());

    let xml = write_compact(&doc)?;
    assert_xml_contains!(xml, "<w14:checked w14:val=\"1\"/>");
    assert_xml_contains!(xml, "<w:dataBinding w:xpath=\"/contract/date\"");
    assert_xml_contains!(xml, "<w:listItem w:displayText=\"Closed\" w:value=\"closed\"/>");
    assert_xml_contains!(xml, "<w:richText/>");
    Ok(())
}

#[test]
fn test_json_nesting_violation_is_reported() {
    let h = Harness::new();
    let description = document(vec![paragraph(vec![serde_json::json!({
        "type": "inlineText",
        "properties": { "tag": "Outer" },
        "children": [inline_text("Inner", "x")]
    })])]);

    let err = document_from_json(&description.to_string(), &h.ctx()).unwrap_err();
    assert_eq!(err.control_kind(), Some(ControlErrorKind::NestingViolation));
}

#[test]
fn test_json_bad_store_item_id() {
    let h = Harness::new();
    let description = document(vec![paragraph(vec![bound_date("Due", "/root/x", "{invalid-guid}")])]);

    let err = document_from_json(&description.to_string(), &h.ctx()).unwrap_err();
    assert_eq!(err.control_kind(), Some(ControlErrorKind::Format));
    assert!(err.to_string().contains("{invalid-guid}"));
}

#[test]
fn test_json_dropdown_mode_and_duplicates() -> TestResult {
    let h = Harness::new();

    let bad_mode = document(vec![paragraph(vec![dropdown("Choice", "combo", &[("A", "a")])])]);
    let err = document_from_json(&bad_mode.to_string(), &h.ctx()).unwrap_err();
    assert_eq!(err.control_kind(), Some(ControlErrorKind::Configuration));
    assert!(err.to_string().contains(DropdownMode::FreeEntry.as_str()));

    let dupes = document(vec![paragraph(vec![dropdown("Choice", "free-entry", &[("A", "x"), ("B", "x")])])]);
    document_from_json(&dupes.to_string(), &h.ctx())?;
    assert_eq!(h.diagnostics.of_kind(DiagnosticKind::DuplicateOptionValue).len(), 1);
    Ok(())
}

#[test]
fn test_json_rejects_block_inside_paragraph() {
    let h = Harness::new();
    let description = document(vec![paragraph(vec![block("Inner", vec![paragraph(vec![text("x")])])])]);
    let err = document_from_json(&description.to_string(), &h.ctx()).unwrap_err();
    assert!(matches!(err, QuireError::Description(_)), "{err}");
}

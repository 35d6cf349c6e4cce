//! Flattens an [`Element`] tree to XML bytes using `quick-xml`.

use crate::element::{Element, Node};
use crate::error::MarkupError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::borrow::Cow;
use std::io::Write;

/// Options controlling how a tree is flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Pretty-print with this many spaces per level. `None` writes compact output.
    pub indent: Option<usize>,
    /// Emit an `<?xml ...?>` declaration before the root element.
    pub xml_declaration: bool,
    /// Value of the declaration's `standalone` pseudo-attribute.
    pub standalone: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: None,
            xml_declaration: true,
            standalone: true,
        }
    }
}

/// Writes `root` (and its declaration, if requested) into `sink`.
pub fn write_element<W: Write>(
    root: &Element,
    sink: W,
    options: &WriteOptions,
) -> Result<W, MarkupError> {
    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(sink, b' ', width),
        None => Writer::new(sink),
    };

    if options.xml_declaration {
        let standalone = if options.standalone { "yes" } else { "no" };
        writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some("UTF-8"),
            Some(standalone),
        )))?;
    }

    write_node(&mut writer, root)?;
    Ok(writer.into_inner())
}

/// Convenience wrapper returning the written markup as a `String`.
pub fn write_to_string(root: &Element, options: &WriteOptions) -> Result<String, MarkupError> {
    let bytes = write_element(root, Vec::new(), options)?;
    log::trace!("Wrote {} bytes of markup for <{}>", bytes.len(), root.name());
    Ok(String::from_utf8(bytes)?)
}

fn write_node<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), MarkupError> {
    let mut start = BytesStart::new(element.name());
    for attribute in element.attributes() {
        start.push_attribute((attribute.name.as_ref(), xml_safe(&attribute.value).as_ref()));
    }

    if !element.has_children() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in element.children() {
        match child {
            Node::Element(e) => write_node(writer, e)?,
            Node::Text(t) => writer.write_event(Event::Text(BytesText::new(&xml_safe(t))))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}

/// The XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Drops characters that cannot appear in an XML 1.0 document, escaped or not.
fn xml_safe(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        return Cow::Borrowed(s);
    }
    log::warn!("Dropping characters not allowed in XML 1.0 from {:?}", s);
    Cow::Owned(s.chars().filter(|&c| is_xml_char(c)).collect())
}

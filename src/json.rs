//! Loads a document tree from a JSON description.
//!
//! Each node is an object with a `type` discriminator:
//!
//! ```json
//! { "body": [
//!   { "type": "paragraph", "children": [
//!     { "type": "text", "text": "Name: " },
//!     { "type": "inlineText", "properties": { "tag": "CustomerName" },
//!       "children": [{ "type": "text", "text": "[Name]" }] }
//!   ] }
//! ] }
//! ```
//!
//! Controls are built through the same validating builders as hand-written
//! trees, so a description either yields a valid document or a
//! [`QuireError`] naming the offending field.

use crate::document::Document;
use crate::error::QuireError;
use chrono::{DateTime, NaiveDate, Utc};
use quire_sdt::{
    BlockContent, BlockControl, BuildContext, CheckboxControl, ContentNode, ControlError,
    ControlKind, ControlProperties, DateControl, DropdownControl, InlineContent,
    InlineTextControl, ListOption, Paragraph, RichInlineControl, Run, SymbolDescriptor, Table,
    TableCell, TableRow,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSpec {
    #[serde(default)]
    pub body: Vec<NodeSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSpec {
    #[serde(default)]
    pub cells: Vec<CellSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellSpec {
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

/// One node of a JSON document description.
///
/// Keyword fields (`mode`, `calendar`, `storage`) stay strings here and are
/// parsed by the control builders, so an unknown value is reported as a
/// configuration error listing the legal set once the tag has been checked.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NodeSpec {
    Text {
        text: String,
        #[serde(default)]
        style: Option<String>,
    },
    Break,
    Paragraph {
        #[serde(default)]
        style: Option<String>,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    Table {
        #[serde(default)]
        rows: Vec<RowSpec>,
    },
    InlineText {
        properties: ControlProperties,
        #[serde(default)]
        rich_text: bool,
        #[serde(default)]
        multi_line: bool,
        #[serde(default)]
        default_style: Option<String>,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    RichInline {
        properties: ControlProperties,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    Block {
        properties: ControlProperties,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    Dropdown {
        properties: ControlProperties,
        #[serde(default)]
        mode: Option<String>,
        #[serde(default)]
        options: Vec<ListOption>,
        #[serde(default)]
        multi_line: bool,
        #[serde(default)]
        max_length: Option<u32>,
        #[serde(default)]
        default_style: Option<String>,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    Date {
        properties: ControlProperties,
        #[serde(default)]
        format: Option<String>,
        #[serde(default)]
        calendar: Option<String>,
        #[serde(default)]
        locale: Option<String>,
        #[serde(default)]
        default_date: Option<String>,
        #[serde(default)]
        storage: Option<String>,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    Checkbox {
        properties: ControlProperties,
        #[serde(default)]
        checked: bool,
        #[serde(default)]
        checked_symbol: Option<SymbolDescriptor>,
        #[serde(default)]
        unchecked_symbol: Option<SymbolDescriptor>,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
}

/// Parses and builds a whole document.
pub fn document_from_json(json: &str, ctx: &BuildContext<'_>) -> Result<Document, QuireError> {
    let spec: DocumentSpec = serde_json::from_str(json)?;
    let body = spec
        .body
        .into_iter()
        .map(|node| expect_block(node.build(ctx)?, "document body"))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("Loaded document with {} body nodes from JSON", body.len());
    Ok(Document::from(body))
}

/// Parses and builds a single node.
pub fn node_from_json(json: &str, ctx: &BuildContext<'_>) -> Result<ContentNode, QuireError> {
    let spec: NodeSpec = serde_json::from_str(json)?;
    spec.build(ctx)
}

fn expect_block(node: ContentNode, container: &str) -> Result<BlockContent, QuireError> {
    match node {
        ContentNode::Block(b) => Ok(b),
        ContentNode::Inline(i) => Err(QuireError::Description(format!(
            "{} is inline content and cannot appear directly in the {container}; \
             wrap it in a paragraph",
            i.describe()
        ))),
    }
}

fn expect_inline(node: ContentNode, container: &str) -> Result<InlineContent, QuireError> {
    match node {
        ContentNode::Inline(i) => Ok(i),
        ContentNode::Block(b) => Err(QuireError::Description(format!(
            "{} is block-level content and cannot appear inside a {container}",
            b.describe()
        ))),
    }
}

fn build_all(children: Vec<NodeSpec>, ctx: &BuildContext<'_>) -> Result<Vec<ContentNode>, QuireError> {
    children.into_iter().map(|c| c.build(ctx)).collect()
}

fn parse_default_date(value: &str) -> Result<DateTime<Utc>, ControlError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            ControlError::configuration(
                ControlKind::Date,
                "defaultDate",
                format!("'{value}' is neither an RFC 3339 timestamp nor a YYYY-MM-DD date"),
            )
        })
}

impl NodeSpec {
    /// Builds the node, recursively building and validating its children.
    pub fn build(self, ctx: &BuildContext<'_>) -> Result<ContentNode, QuireError> {
        let node = match self {
            NodeSpec::Text { text, style } => {
                let run = Run::new(text);
                ContentNode::from(match style {
                    Some(s) => run.style(s),
                    None => run,
                })
            }
            NodeSpec::Break => ContentNode::Inline(InlineContent::Break),
            NodeSpec::Paragraph { style, children } => {
                let mut paragraph = Paragraph::new();
                if let Some(s) = style {
                    paragraph = paragraph.style(s);
                }
                for child in build_all(children, ctx)? {
                    paragraph = paragraph.child(expect_inline(child, "paragraph")?);
                }
                ContentNode::from(paragraph)
            }
            NodeSpec::Table { rows } => {
                let mut table = Table::new();
                for row in rows {
                    let mut table_row = TableRow::new();
                    for cell in row.cells {
                        let mut table_cell = TableCell::new();
                        for child in build_all(cell.children, ctx)? {
                            table_cell = table_cell.child(expect_block(child, "table cell")?);
                        }
                        table_row = table_row.cell(table_cell);
                    }
                    table = table.row(table_row);
                }
                ContentNode::from(table)
            }
            NodeSpec::InlineText {
                properties,
                rich_text,
                multi_line,
                default_style,
                children,
            } => {
                let mut builder = InlineTextControl::builder(properties)
                    .rich_text(rich_text)
                    .multi_line(multi_line);
                if let Some(style) = default_style {
                    builder = builder.default_style(style);
                }
                for child in build_all(children, ctx)? {
                    builder = builder.node(child);
                }
                ContentNode::from(builder.build(ctx)?)
            }
            NodeSpec::RichInline { properties, children } => {
                let builder = build_all(children, ctx)?
                    .into_iter()
                    .fold(RichInlineControl::builder(properties), |b, c| b.node(c));
                ContentNode::from(builder.build(ctx)?)
            }
            NodeSpec::Block { properties, children } => {
                let builder = build_all(children, ctx)?
                    .into_iter()
                    .fold(BlockControl::builder(properties), |b, c| b.node(c));
                ContentNode::from(builder.build(ctx)?)
            }
            NodeSpec::Dropdown {
                properties,
                mode,
                options,
                multi_line,
                max_length,
                default_style,
                children,
            } => {
                let mut builder = DropdownControl::builder(properties)
                    .options(options)
                    .multi_line(multi_line);
                if let Some(mode) = mode {
                    builder = builder.mode_name(mode);
                }
                if let Some(n) = max_length {
                    builder = builder.max_length(n);
                }
                if let Some(style) = default_style {
                    builder = builder.default_style(style);
                }
                for child in build_all(children, ctx)? {
                    builder = builder.node(child);
                }
                ContentNode::from(builder.build(ctx)?)
            }
            NodeSpec::Date {
                properties,
                format,
                calendar,
                locale,
                default_date,
                storage,
                children,
            } => {
                let mut builder = DateControl::builder(properties);
                if let Some(format) = format {
                    builder = builder.format(format);
                }
                if let Some(calendar) = calendar {
                    builder = builder.calendar_name(calendar);
                }
                if let Some(locale) = locale {
                    builder = builder.locale(locale);
                }
                if let Some(date) = default_date {
                    builder = builder.default_date(parse_default_date(&date)?);
                }
                if let Some(storage) = storage {
                    builder = builder.storage_name(storage);
                }
                for child in build_all(children, ctx)? {
                    builder = builder.node(child);
                }
                ContentNode::from(builder.build(ctx)?)
            }
            NodeSpec::Checkbox {
                properties,
                checked,
                checked_symbol,
                unchecked_symbol,
                children,
            } => {
                let mut builder = CheckboxControl::builder(properties).checked(checked);
                if let Some(symbol) = checked_symbol {
                    builder = builder.checked_symbol(symbol);
                }
                if let Some(symbol) = unchecked_symbol {
                    builder = builder.unchecked_symbol(symbol);
                }
                for child in build_all(children, ctx)? {
                    builder = builder.node(child);
                }
                ContentNode::from(builder.build(ctx)?)
            }
        };
        Ok(node)
    }
}

//! The ordinary document content that controls wrap and are wrapped by.
//!
//! Content is split into two closed sets: [`InlineContent`] for run-level
//! containers (paragraphs and inline controls) and [`BlockContent`] for
//! block-level containers (the document body, table cells and block
//! controls). A table can therefore never end up inside an inline control.
//! [`ContentNode`] is the untyped union used by dynamic tree sources; it is
//! checked when a container takes ownership of it.

use crate::controls::{
    BlockControl, CheckboxControl, DateControl, DropdownControl, InlineTextControl,
    RichInlineControl,
};
use crate::error::ControlError;
use crate::kind::ControlKind;
use crate::names as w;
use quire_markup::Element;
use quire_traits::{Materialize, MaterializeContext, materialize_all};

/// A run of text with an optional character style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Run {
    text: String,
    style: Option<String>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style_name(&self) -> Option<&str> {
        self.style.as_deref()
    }
}

/// Builds a `w:rPr/w:rStyle` fragment.
pub(crate) fn run_style_element(style: &str) -> Element {
    Element::new(w::RUN_PR).child(Element::new(w::RUN_STYLE).attr(w::VAL, style))
}

/// Builds a `w:t`, preserving leading/trailing whitespace.
pub(crate) fn text_element(text: &str) -> Element {
    let t = Element::new(w::TEXT);
    let t = if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
        t.attr(w::XML_SPACE, "preserve")
    } else {
        t
    };
    t.text(text)
}

impl Materialize for Run {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        if self.text.is_empty() && !ctx.emit_empty_runs {
            return None;
        }
        let mut r = Element::new(w::RUN);
        if let Some(style) = &self.style {
            r.push(run_style_element(style));
        }
        r.push(text_element(&self.text));
        Some(r)
    }
}

/// Everything that may appear inside a paragraph or an inline control.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineContent {
    Run(Run),
    /// A line break inside the paragraph.
    Break,
    InlineText(InlineTextControl),
    RichInline(RichInlineControl),
    Dropdown(DropdownControl),
    Date(DateControl),
    Checkbox(CheckboxControl),
}

impl InlineContent {
    /// The control variant of this item, if it is a control.
    pub fn control_kind(&self) -> Option<ControlKind> {
        match self {
            InlineContent::Run(_) | InlineContent::Break => None,
            InlineContent::InlineText(_) => Some(ControlKind::InlineText),
            InlineContent::RichInline(_) => Some(ControlKind::RichInline),
            InlineContent::Dropdown(_) => Some(ControlKind::Dropdown),
            InlineContent::Date(_) => Some(ControlKind::Date),
            InlineContent::Checkbox(_) => Some(ControlKind::Checkbox),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            InlineContent::Run(_) => "Run",
            InlineContent::Break => "Break",
            other => other.control_kind().map(ControlKind::name).unwrap_or("inline content"),
        }
    }
}

impl Materialize for InlineContent {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        match self {
            InlineContent::Run(r) => r.materialize(ctx),
            InlineContent::Break => Some(Element::new(w::RUN).child(Element::new(w::BREAK))),
            InlineContent::InlineText(c) => c.materialize(ctx),
            InlineContent::RichInline(c) => c.materialize(ctx),
            InlineContent::Dropdown(c) => c.materialize(ctx),
            InlineContent::Date(c) => c.materialize(ctx),
            InlineContent::Checkbox(c) => c.materialize(ctx),
        }
    }
}

impl From<Run> for InlineContent {
    fn from(r: Run) -> Self {
        InlineContent::Run(r)
    }
}

impl From<&str> for InlineContent {
    fn from(s: &str) -> Self {
        InlineContent::Run(Run::new(s))
    }
}

impl From<String> for InlineContent {
    fn from(s: String) -> Self {
        InlineContent::Run(Run::new(s))
    }
}

impl From<InlineTextControl> for InlineContent {
    fn from(c: InlineTextControl) -> Self {
        InlineContent::InlineText(c)
    }
}

impl From<RichInlineControl> for InlineContent {
    fn from(c: RichInlineControl) -> Self {
        InlineContent::RichInline(c)
    }
}

impl From<DropdownControl> for InlineContent {
    fn from(c: DropdownControl) -> Self {
        InlineContent::Dropdown(c)
    }
}

impl From<DateControl> for InlineContent {
    fn from(c: DateControl) -> Self {
        InlineContent::Date(c)
    }
}

impl From<CheckboxControl> for InlineContent {
    fn from(c: CheckboxControl) -> Self {
        InlineContent::Checkbox(c)
    }
}

/// A paragraph holding inline content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    style: Option<String>,
    children: Vec<InlineContent>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new().child(Run::new(text))
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn child(mut self, child: impl Into<InlineContent>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(&self) -> &[InlineContent] {
        &self.children
    }
}

impl Materialize for Paragraph {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        let mut p = Element::new(w::PARAGRAPH);
        if let Some(style) = &self.style {
            p.push(
                Element::new(w::PARAGRAPH_PR)
                    .child(Element::new(w::PARAGRAPH_STYLE).attr(w::VAL, style.as_str())),
            );
        }
        Some(p.children_from(materialize_all(&self.children, ctx)))
    }
}

/// A table cell. The schema requires at least one paragraph per cell, so an
/// empty cell is written with an empty paragraph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    children: Vec<BlockContent>,
}

impl TableCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<BlockContent>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(&self) -> &[BlockContent] {
        &self.children
    }
}

impl Materialize for TableCell {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        let mut children = materialize_all(&self.children, ctx);
        if children.is_empty() {
            children.push(Element::new(w::PARAGRAPH));
        }
        Some(Element::new(w::TABLE_CELL).children_from(children))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, cell: TableCell) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }
}

impl Materialize for TableRow {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        Some(Element::new(w::TABLE_ROW).children_from(materialize_all(&self.cells, ctx)))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    rows: Vec<TableRow>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}

impl Materialize for Table {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        if self.rows.is_empty() {
            return None;
        }
        Some(Element::new(w::TABLE).children_from(materialize_all(&self.rows, ctx)))
    }
}

/// Everything that may appear directly in the body, a table cell or a block control.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Paragraph(Paragraph),
    Table(Table),
    Block(BlockControl),
}

impl BlockContent {
    pub fn describe(&self) -> &'static str {
        match self {
            BlockContent::Paragraph(_) => "Paragraph",
            BlockContent::Table(_) => "Table",
            BlockContent::Block(_) => ControlKind::Block.name(),
        }
    }

    /// True when materializing writes nothing, which only a table without rows does.
    pub fn is_empty(&self) -> bool {
        matches!(self, BlockContent::Table(t) if t.rows().is_empty())
    }
}

impl Materialize for BlockContent {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        match self {
            BlockContent::Paragraph(p) => p.materialize(ctx),
            BlockContent::Table(t) => t.materialize(ctx),
            BlockContent::Block(b) => b.materialize(ctx),
        }
    }
}

impl From<Paragraph> for BlockContent {
    fn from(p: Paragraph) -> Self {
        BlockContent::Paragraph(p)
    }
}

impl From<Table> for BlockContent {
    fn from(t: Table) -> Self {
        BlockContent::Table(t)
    }
}

impl From<BlockControl> for BlockContent {
    fn from(b: BlockControl) -> Self {
        BlockContent::Block(b)
    }
}

/// A node whose level (inline or block) is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    Inline(InlineContent),
    Block(BlockContent),
}

impl ContentNode {
    pub fn describe(&self) -> &'static str {
        match self {
            ContentNode::Inline(i) => i.describe(),
            ContentNode::Block(b) => b.describe(),
        }
    }

    /// Accepts the node as block content of `container`.
    ///
    /// Inline-only nodes are rejected with a message pointing at the inline
    /// control variants.
    pub fn into_block(self, container: ControlKind) -> Result<BlockContent, ControlError> {
        match self {
            ContentNode::Block(b) => Ok(b),
            ContentNode::Inline(i) => Err(ControlError::configuration(
                container,
                "children",
                format!(
                    "{} is inline content and cannot be a direct child of {container}; \
                     wrap it in a Paragraph, or use InlineTextControl / RichInlineControl \
                     to wrap inline content",
                    i.describe()
                ),
            )),
        }
    }

    /// Accepts the node as inline content of `container`.
    ///
    /// Block-level nodes are rejected with a message pointing at `BlockControl`.
    pub fn into_inline(self, container: ControlKind) -> Result<InlineContent, ControlError> {
        match self {
            ContentNode::Inline(i) => Ok(i),
            ContentNode::Block(b) => Err(ControlError::configuration(
                container,
                "children",
                format!(
                    "{} is block-level content and cannot be placed inside {container}; \
                     use BlockControl to wrap paragraphs and tables",
                    b.describe()
                ),
            )),
        }
    }
}

macro_rules! inline_node_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ContentNode {
                fn from(item: $ty) -> Self {
                    ContentNode::Inline(item.into())
                }
            }
        )*
    };
}

inline_node_from!(
    InlineContent,
    Run,
    &str,
    String,
    InlineTextControl,
    RichInlineControl,
    DropdownControl,
    DateControl,
    CheckboxControl,
);

macro_rules! block_node_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ContentNode {
                fn from(item: $ty) -> Self {
                    ContentNode::Block(item.into())
                }
            }
        )*
    };
}

block_node_from!(Paragraph, Table, BlockControl);

impl From<BlockContent> for ContentNode {
    fn from(b: BlockContent) -> Self {
        ContentNode::Block(b)
    }
}

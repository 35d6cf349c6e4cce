use super::{ControlCore, inline_children};
use crate::content::{ContentNode, InlineContent};
use crate::context::BuildContext;
use crate::error::ControlError;
use crate::kind::ControlKind;
use crate::names as w;
use crate::properties::ControlProperties;
use quire_markup::Element;
use quire_traits::{DiagnosticKind, Materialize, MaterializeContext, materialize_all};

/// Whether a run-level control holds plain text or rich content.
///
/// Fixed when the control is built, so the nesting check runs exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// `w:text`: terminal, may not contain other controls.
    #[default]
    Plain,
    /// `w:richText`: may contain any control, to any depth.
    Rich,
}

/// A run-level control wrapping inline content.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineTextControl {
    pub(super) core: ControlCore,
    mode: TextMode,
    multi_line: bool,
    default_style: Option<String>,
    children: Vec<InlineContent>,
}

impl InlineTextControl {
    pub fn builder(properties: impl Into<ControlProperties>) -> InlineTextControlBuilder {
        InlineTextControlBuilder {
            properties: properties.into(),
            rich_text: false,
            multi_line: false,
            default_style: None,
            children: Vec::new(),
        }
    }

    /// Builds a plain-text control around a single run of text.
    pub fn plain(
        properties: impl Into<ControlProperties>,
        text: impl Into<String>,
        ctx: &BuildContext<'_>,
    ) -> Result<Self, ControlError> {
        Self::builder(properties).text(text).build(ctx)
    }

    pub fn mode(&self) -> TextMode {
        self.mode
    }

    pub fn is_rich_text(&self) -> bool {
        self.mode == TextMode::Rich
    }

    pub fn multi_line(&self) -> bool {
        self.multi_line
    }

    pub fn default_style(&self) -> Option<&str> {
        self.default_style.as_deref()
    }

    pub fn children(&self) -> &[InlineContent] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct InlineTextControlBuilder {
    properties: ControlProperties,
    rich_text: bool,
    multi_line: bool,
    default_style: Option<String>,
    children: Vec<ContentNode>,
}

impl InlineTextControlBuilder {
    /// Switches to rich-text mode, which permits nested controls.
    pub fn rich_text(mut self, rich: bool) -> Self {
        self.rich_text = rich;
        self
    }

    /// Allows line breaks in plain-text mode. Ignored in rich-text mode.
    pub fn multi_line(mut self, multi_line: bool) -> Self {
        self.multi_line = multi_line;
        self
    }

    /// Character style applied to text typed into the control.
    pub fn default_style(mut self, style: impl Into<String>) -> Self {
        self.default_style = Some(style.into());
        self
    }

    pub fn child(mut self, child: impl Into<InlineContent>) -> Self {
        self.children.push(ContentNode::Inline(child.into()));
        self
    }

    /// Adds a node whose level is only known at runtime; block-level nodes
    /// are rejected by [`build`](Self::build).
    pub fn node(mut self, node: ContentNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(InlineContent::from(text.into()))
    }

    pub fn build(self, ctx: &BuildContext<'_>) -> Result<InlineTextControl, ControlError> {
        let mode = if self.rich_text {
            TextMode::Rich
        } else {
            TextMode::Plain
        };
        let tag = self.properties.tag.clone();
        let multi_line = self.multi_line;
        let children = self.children;

        let (core, children) = ControlCore::establish(
            ControlKind::InlineText,
            self.properties,
            ctx,
            || {
                let children = inline_children(children, ControlKind::InlineText)?;
                if mode == TextMode::Plain {
                    check_plain_text_nesting(tag.as_str(), &children)?;
                    if !multi_line {
                        report_single_line_breaks(tag.as_str(), &children, ctx);
                    }
                }
                Ok(children)
            },
        )?;

        Ok(InlineTextControl {
            core,
            mode,
            multi_line: self.multi_line,
            default_style: self.default_style,
            children,
        })
    }
}

/// Rejects any control among the children of a plain-text control.
///
/// The schema forbids structured document tags inside a `w:text` container.
fn check_plain_text_nesting(tag: &str, children: &[InlineContent]) -> Result<(), ControlError> {
    for child in children {
        let nested = match child {
            InlineContent::Run(_) | InlineContent::Break => continue,
            InlineContent::InlineText(_) => ControlKind::InlineText,
            InlineContent::RichInline(_) => ControlKind::RichInline,
            InlineContent::Dropdown(_) => ControlKind::Dropdown,
            InlineContent::Date(_) => ControlKind::Date,
            InlineContent::Checkbox(_) => ControlKind::Checkbox,
        };
        return Err(ControlError::NestingViolation {
            control: ControlKind::InlineText,
            child: nested,
            message: format!(
                "{nested} cannot be nested inside plain-text InlineTextControl '{tag}': \
                 WordprocessingML does not allow structured document tags inside a plain-text \
                 (w:text) run-level control. To fix this, either \
                 (1) switch the outer control to rich-text mode with `.rich_text(true)`, \
                 (2) use RichInlineControl for the outer control, which always permits nesting, or \
                 (3) use BlockControl if block-level nesting was intended."
            ),
        });
    }
    Ok(())
}

/// Line breaks in a single-line plain-text control are dropped by the
/// consuming application.
fn report_single_line_breaks(tag: &str, children: &[InlineContent], ctx: &BuildContext<'_>) {
    let breaks = children
        .iter()
        .filter(|c| matches!(c, InlineContent::Break))
        .count();
    if breaks > 0 {
        ctx.warn(
            DiagnosticKind::SingleLineBreak,
            ControlKind::InlineText,
            format!(
                "{breaks} line break(s) in single-line plain-text control '{tag}' will be \
                 collapsed; call .multi_line(true) to keep them"
            ),
        );
    }
}

impl Materialize for InlineTextControl {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        let payload = match self.mode {
            TextMode::Plain if self.multi_line => Element::new(w::PLAIN_TEXT).attr(w::MULTI_LINE, "1"),
            TextMode::Plain => Element::new(w::PLAIN_TEXT),
            TextMode::Rich => Element::new(w::RICH_TEXT),
        };
        Some(self.core.wrap(
            payload,
            self.default_style.as_deref(),
            materialize_all(&self.children, ctx),
        ))
    }
}

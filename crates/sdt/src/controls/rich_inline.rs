use super::{ControlCore, inline_children};
use crate::content::{ContentNode, InlineContent};
use crate::context::BuildContext;
use crate::error::ControlError;
use crate::kind::ControlKind;
use crate::names as w;
use crate::properties::ControlProperties;
use quire_markup::Element;
use quire_traits::{Materialize, MaterializeContext, materialize_all};

/// A run-level control that always permits nested controls.
///
/// Use this when a sentence carries fields of its own, for example a clause
/// with an embedded party name and a date. It always writes `w:richText`.
#[derive(Debug, Clone, PartialEq)]
pub struct RichInlineControl {
    pub(super) core: ControlCore,
    children: Vec<InlineContent>,
}

impl RichInlineControl {
    pub fn builder(properties: impl Into<ControlProperties>) -> RichInlineControlBuilder {
        RichInlineControlBuilder {
            properties: properties.into(),
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[InlineContent] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct RichInlineControlBuilder {
    properties: ControlProperties,
    children: Vec<ContentNode>,
}

impl RichInlineControlBuilder {
    pub fn child(mut self, child: impl Into<InlineContent>) -> Self {
        self.children.push(ContentNode::Inline(child.into()));
        self
    }

    pub fn node(mut self, node: ContentNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(InlineContent::from(text.into()))
    }

    pub fn build(self, ctx: &BuildContext<'_>) -> Result<RichInlineControl, ControlError> {
        let children = self.children;
        let (core, children) = ControlCore::establish(ControlKind::RichInline, self.properties, ctx, || {
            inline_children(children, ControlKind::RichInline)
        })?;
        Ok(RichInlineControl { core, children })
    }
}

impl Materialize for RichInlineControl {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        Some(self.core.wrap(
            Element::new(w::RICH_TEXT),
            None,
            materialize_all(&self.children, ctx),
        ))
    }
}

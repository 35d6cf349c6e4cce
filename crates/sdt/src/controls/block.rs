use super::ControlCore;
use crate::content::{BlockContent, ContentNode};
use crate::context::BuildContext;
use crate::error::ControlError;
use crate::kind::ControlKind;
use crate::names as w;
use crate::properties::ControlProperties;
use quire_markup::Element;
use quire_traits::{Materialize, MaterializeContext, materialize_all};

/// A block-level control wrapping paragraphs, tables and other block controls.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockControl {
    pub(super) core: ControlCore,
    children: Vec<BlockContent>,
}

impl BlockControl {
    pub fn builder(properties: impl Into<ControlProperties>) -> BlockControlBuilder {
        BlockControlBuilder {
            properties: properties.into(),
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[BlockContent] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct BlockControlBuilder {
    properties: ControlProperties,
    children: Vec<ContentNode>,
}

impl BlockControlBuilder {
    pub fn child(mut self, child: impl Into<BlockContent>) -> Self {
        self.children.push(ContentNode::Block(child.into()));
        self
    }

    /// Adds a node whose level is only known at runtime; inline-only nodes
    /// are rejected by [`build`](Self::build).
    pub fn node(mut self, node: ContentNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn build(self, ctx: &BuildContext<'_>) -> Result<BlockControl, ControlError> {
        let nodes = self.children;
        let (core, children) = ControlCore::establish(ControlKind::Block, self.properties, ctx, || {
            let children = nodes
                .into_iter()
                .map(|n| n.into_block(ControlKind::Block))
                .collect::<Result<Vec<_>, _>>()?;
            if children.iter().all(BlockContent::is_empty) {
                return Err(ControlError::configuration(
                    ControlKind::Block,
                    "children",
                    "BlockControl requires at least one block-level child that writes content, \
                     for example .child(Paragraph::with_text(\"...\")); a table needs at least one row",
                ));
            }
            Ok(children)
        })?;
        Ok(BlockControl { core, children })
    }
}

impl Materialize for BlockControl {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        Some(self.core.wrap(
            Element::new(w::RICH_TEXT),
            None,
            materialize_all(&self.children, ctx),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Paragraph, Run, Table, TableCell, TableRow};
    use crate::controls::test_support::Harness;
    use crate::controls::InlineTextControl;
    use crate::error::ControlErrorKind;
    use crate::properties::Lock;

    #[test]
    fn test_block_wraps_paragraphs_and_tables() {
        let h = Harness::new();
        let ctx = h.ctx();
        let field = InlineTextControl::plain("Amount", "0.00", &ctx).unwrap();
        let block = BlockControl::builder(ControlProperties::new("Terms").lock(Lock::structure()))
        .child(Paragraph::with_text("Terms and conditions"))
        .child(Paragraph::new().child("Total: ").child(field))
        .child(Table::new().row(TableRow::new().cell(TableCell::new().child(Paragraph::with_text("A1")))))
        .build(&ctx)
        .unwrap();

        let sdt = block.materialize(&MaterializeContext::default()).unwrap();
        let pr = sdt.find("w:sdtPr").unwrap();
        assert!(pr.find("w:richText").is_some());
        assert!(pr.find("w:text").is_none());
        assert_eq!(pr.find("w:lock").and_then(|l| l.attribute("w:val")), Some("sdtLocked"));

        let names: Vec<&str> = sdt
            .find("w:sdtContent")
            .unwrap()
            .child_elements()
            .map(|e| e.name())
            .collect();
        assert_eq!(names, vec!["w:p", "w:p", "w:tbl"]);
    }

    #[test]
    fn test_nested_block_controls() {
        let h = Harness::new();
        let ctx = h.ctx();
        let inner = BlockControl::builder("Inner")
            .child(Paragraph::with_text("inside"))
            .build(&ctx)
            .unwrap();
        let inner_id = inner.id();
        let outer = BlockControl::builder("Outer").child(inner).build(&ctx).unwrap();
        assert_ne!(outer.id(), inner_id);

        let sdt = outer.materialize(&MaterializeContext::default()).unwrap();
        let content = sdt.find("w:sdtContent").unwrap();
        assert_eq!(content.find("w:sdt").map(|e| e.text_content()), Some("inside".to_string()));
    }

    #[test]
    fn test_rejects_inline_children() {
        let h = Harness::new();
        let err = BlockControl::builder("Block")
            .node(Run::new("loose text").into())
            .build(&h.ctx())
            .unwrap_err();
        assert_eq!(err.kind(), ControlErrorKind::Configuration);
        let msg = err.to_string();
        assert!(msg.contains("BlockControl"), "{msg}");
        assert!(msg.contains("InlineTextControl"), "{msg}");
    }

    #[test]
    fn test_requires_content() {
        let h = Harness::new();
        let err = BlockControl::builder("Empty").build(&h.ctx()).unwrap_err();
        assert_eq!(err.kind(), ControlErrorKind::Configuration);
        assert!(err.to_string().contains("children"));
    }

    #[test]
    fn test_rejects_empty_table_child() {
        let h = Harness::new();
        let ctx = h.ctx();
        let err = BlockControl::builder("Grid").child(Table::new()).build(&ctx).unwrap_err();
        assert_eq!(err.kind(), ControlErrorKind::Configuration);
        assert!(err.to_string().contains("row"), "{err}");

        let block = BlockControl::builder("Grid")
            .child(Table::new())
            .child(Paragraph::with_text("below"))
            .build(&ctx)
            .unwrap();
        assert_eq!(block.id().get(), 1);
        let sdt = block.materialize(&MaterializeContext::default()).unwrap();
        assert_eq!(sdt.find("w:sdtContent").unwrap().child_elements().count(), 1);
    }
}

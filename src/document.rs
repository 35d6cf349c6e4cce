//! The document root: a body of block content wrapped in `w:document`.

use quire_markup::Element;
use quire_sdt::BlockContent;
use quire_traits::{Materialize, MaterializeContext, materialize_all};

pub const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const NS_W14: &str = "http://schemas.microsoft.com/office/word/2010/wordml";
pub const NS_W15: &str = "http://schemas.microsoft.com/office/word/2012/wordml";
pub const NS_MC: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    body: Vec<BlockContent>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<BlockContent>) -> Self {
        self.body.push(child.into());
        self
    }

    pub fn push(&mut self, child: impl Into<BlockContent>) {
        self.body.push(child.into());
    }

    pub fn body(&self) -> &[BlockContent] {
        &self.body
    }
}

impl From<Vec<BlockContent>> for Document {
    fn from(body: Vec<BlockContent>) -> Self {
        Self { body }
    }
}

impl Materialize for Document {
    /// Always yields an element; an empty body is still a valid document.
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        let body = Element::new("w:body").children_from(materialize_all(&self.body, ctx));
        Some(
            Element::new("w:document")
                .attr("xmlns:w", NS_W)
                .attr("xmlns:w14", NS_W14)
                .attr("xmlns:w15", NS_W15)
                .attr("xmlns:mc", NS_MC)
                .attr("mc:Ignorable", "w14 w15")
                .child(body),
        )
    }
}

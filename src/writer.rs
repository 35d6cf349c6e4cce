use crate::config::WriterConfig;
use crate::document::Document;
use crate::error::QuireError;
use quire_markup::{Element, write_element, write_to_string};
use quire_traits::Materialize;
use std::io::Write;

/// Materializes a [`Document`] and flattens it to XML.
#[derive(Debug, Clone, Default)]
pub struct DocumentWriter {
    config: WriterConfig,
}

impl DocumentWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Builds the element tree without writing it.
    pub fn materialize(&self, document: &Document) -> Element {
        let ctx = self.config.materialize_context();
        document
            .materialize(&ctx)
            .unwrap_or_else(|| Element::new("w:document"))
    }

    /// Writes the document into `sink` and hands the sink back.
    pub fn write<W: Write>(&self, document: &Document, sink: W) -> Result<W, QuireError> {
        let root = self.materialize(document);
        let sink = write_element(&root, sink, &self.config.write_options())?;
        log::debug!("Wrote document with {} body elements", document.body().len());
        Ok(sink)
    }

    pub fn to_string(&self, document: &Document) -> Result<String, QuireError> {
        let root = self.materialize(document);
        Ok(write_to_string(&root, &self.config.write_options())?)
    }
}

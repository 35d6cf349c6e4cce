pub mod fixtures;
pub mod xml_assertions;

use quire::{
    BuildContext, CollectingDiagnostics, Document, DocumentWriter, Materialize,
    MaterializeContext, SequentialIdGenerator, WriterConfig,
};
use quire::markup::Element;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Deterministic identities and collected diagnostics for one test.
pub struct Harness {
    pub ids: SequentialIdGenerator,
    pub diagnostics: CollectingDiagnostics,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            ids: SequentialIdGenerator::starting_at(1),
            diagnostics: CollectingDiagnostics::new(),
        }
    }

    pub fn ctx(&self) -> BuildContext<'_> {
        BuildContext::new(&self.ids, &self.diagnostics)
    }
}

/// Materializes a node with the default context.
pub fn materialize<M: Materialize>(node: &M) -> Element {
    node.materialize(&MaterializeContext::default())
        .expect("node should produce markup")
}

/// Writes a document as compact XML without a declaration.
pub fn write_compact(doc: &Document) -> Result<String, quire::QuireError> {
    let config = WriterConfig {
        xml_declaration: false,
        ..WriterConfig::default()
    };
    DocumentWriter::new(config).to_string(doc)
}

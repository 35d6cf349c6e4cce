//! # quire
//!
//! Builds WordprocessingML document bodies containing content controls
//! (structured document tags) and writes them as XML.
//!
//! - **sdt**: the control variants, their validation and markup
//! - **markup**: the element tree and the XML writer
//! - **traits**: identity generation, diagnostics and the `Materialize` seam
//! - **document** / **writer**: the `w:document` root and its output
//! - **json**: building a document from a JSON description
//!
//! ```ignore
//! let builder = DocumentBuilder::new();
//! let ctx = builder.context();
//! let name = InlineTextControl::plain("CustomerName", "[Name]", &ctx)?;
//! let doc = Document::new().child(Paragraph::new().child("Name: ").child(name));
//! let xml = DocumentWriter::new(WriterConfig::pretty()).to_string(&doc)?;
//! ```

// Re-export foundation crates
pub use quire_markup as markup;
pub use quire_traits as traits;
pub use quire_types as types;

// Re-export the core crate
pub use quire_sdt as sdt;

pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod json;
pub mod writer;

pub use builder::DocumentBuilder;
pub use config::WriterConfig;
pub use document::Document;
pub use error::QuireError;
pub use json::{document_from_json, node_from_json};
pub use writer::DocumentWriter;

pub use quire_sdt::{
    Appearance, BlockContent, BlockControl, BuildContext, CalendarSystem, CheckboxControl,
    ContentNode, ControlError, ControlErrorKind, ControlKind, ControlProperties, DataBinding,
    DateControl, DateStorage, DropdownControl, DropdownMode, InlineContent, InlineTextControl,
    ListOption, Lock, Paragraph, RichInlineControl, Run, SymbolDescriptor, Table, TableCell,
    TableRow, TextMode,
};
pub use quire_traits::{
    CollectingDiagnostics, DiagnosticKind, DiagnosticSink, IdGenerator, LogDiagnostics,
    Materialize, MaterializeContext, NullDiagnostics, SequentialIdGenerator,
};

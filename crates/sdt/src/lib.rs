//! Content controls (structured document tags) for WordprocessingML.
//!
//! A content control wraps ordinary document content with metadata: a tag,
//! an identity, appearance, locking, data binding and a variant payload such
//! as a date picker or a checkbox. Every control is validated completely
//! when it is built, so materializing a tree of built controls never fails.
//!
//! ```ignore
//! let ids = SequentialIdGenerator::new();
//! let ctx = BuildContext::new(&ids, &LogDiagnostics);
//! let name = InlineTextControl::plain("CustomerName", "[Name]", &ctx)?;
//! let sdt = name.materialize(&MaterializeContext::default());
//! ```

pub mod content;
pub mod context;
pub mod controls;
pub mod error;
pub mod kind;
pub mod names;
pub mod properties;
pub mod validation;

pub use content::{
    BlockContent, ContentNode, InlineContent, Paragraph, Run, Table, TableCell, TableRow,
};
pub use context::BuildContext;
pub use controls::{
    BlockControl, BlockControlBuilder, CalendarSystem, CheckboxControl, CheckboxControlBuilder,
    DateControl, DateControlBuilder, DateStorage, DropdownControl, DropdownControlBuilder,
    DropdownMode, InlineTextControl, InlineTextControlBuilder, ListOption, RichInlineControl,
    RichInlineControlBuilder, SymbolDescriptor, TextMode,
};
pub use error::{ControlError, ControlErrorKind};
pub use kind::ControlKind;
pub use properties::{Appearance, ControlProperties, DataBinding, Lock};

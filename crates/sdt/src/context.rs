use crate::kind::ControlKind;
use quire_traits::{Diagnostic, DiagnosticKind, DiagnosticSink, IdGenerator};
use quire_types::ControlId;

/// Everything a control constructor needs besides its own configuration.
///
/// One context (or copies of it) is shared by every control in a document,
/// so all of them draw identities from the same generator.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    ids: &'a dyn IdGenerator,
    diagnostics: &'a dyn DiagnosticSink,
    strict_colors: bool,
}

impl<'a> BuildContext<'a> {
    pub fn new(ids: &'a dyn IdGenerator, diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self {
            ids,
            diagnostics,
            strict_colors: true,
        }
    }

    /// When `false`, malformed colours are reported as diagnostics and kept
    /// verbatim instead of failing construction.
    pub fn with_strict_colors(mut self, strict: bool) -> Self {
        self.strict_colors = strict;
        self
    }

    pub fn strict_colors(&self) -> bool {
        self.strict_colors
    }

    pub(crate) fn next_id(&self) -> ControlId {
        self.ids.next_id()
    }

    pub fn diagnostics(&self) -> &'a dyn DiagnosticSink {
        self.diagnostics
    }

    pub(crate) fn warn(&self, kind: DiagnosticKind, control: ControlKind, message: impl Into<String>) {
        self.diagnostics
            .report(Diagnostic::new(kind, control.name(), message));
    }
}

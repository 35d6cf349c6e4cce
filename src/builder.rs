use quire_sdt::BuildContext;
use quire_traits::{DiagnosticSink, IdGenerator, LogDiagnostics, SequentialIdGenerator, shared_generator};
use std::sync::Arc;

/// Owns the collaborators every control constructor needs.
///
/// By default identities come from the process-wide generator and
/// diagnostics go to the `log` facade, so controls built through different
/// builders in one process still never share an identity.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    ids: Arc<dyn IdGenerator>,
    diagnostics: Arc<dyn DiagnosticSink>,
    strict_colors: bool,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            ids: shared_generator(),
            diagnostics: Arc::new(LogDiagnostics),
            strict_colors: true,
        }
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// A builder with its own generator starting at `seed`, for reproducible output.
    pub fn isolated(seed: u32) -> Self {
        Self::new().with_id_generator(Arc::new(SequentialIdGenerator::starting_at(seed)))
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// With `false`, malformed colours become diagnostics instead of errors.
    pub fn with_strict_colors(mut self, strict: bool) -> Self {
        self.strict_colors = strict;
        self
    }

    /// The context to pass to control builders.
    pub fn context(&self) -> BuildContext<'_> {
        BuildContext::new(self.ids.as_ref(), self.diagnostics.as_ref())
            .with_strict_colors(self.strict_colors)
    }
}

//! DiagnosticSink trait for non-fatal advisories.
//!
//! Construction-time validation has two severities: hard failures are
//! returned as errors, advisories are reported here and never abort
//! construction. Routing advisories through a sink lets tests assert on them
//! and lets library users redirect or silence them.

use std::fmt;
use std::fmt::Debug;
use std::sync::Mutex;

/// What an advisory is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The tag contains whitespace.
    TagWhitespace,
    /// The title is longer than the consuming application displays.
    LongTitle,
    /// The locale tag does not look like `ll-CC`.
    LocaleFormat,
    /// Two dropdown options share the same value.
    DuplicateOptionValue,
    /// A checkbox was given content children.
    CheckboxContent,
    /// A line break inside a plain-text control that is not multi-line.
    SingleLineBreak,
    /// A data-binding locator does not start with `/`.
    RelativeBindingLocator,
    /// A colour is not six hex digits (only reported when strict colours are off).
    ColorFormat,
}

/// A single advisory message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Human-readable name of the control that raised it.
    pub control: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, control: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            control,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.control, self.message)
    }
}

/// A destination for advisories.
pub trait DiagnosticSink: Send + Sync + Debug {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards every advisory to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}

/// Drops every advisory.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl DiagnosticSink for NullDiagnostics {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Keeps advisories in memory so they can be inspected afterwards.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far.
    ///
    /// Returns an empty list if the lock is poisoned.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Returns the advisories of one kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> Vec<Diagnostic> {
        self.entries()
            .into_iter()
            .filter(|d| d.kind == kind)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns everything reported so far.
    pub fn drain(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|mut e| std::mem::take(&mut *e))
            .unwrap_or_default()
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        log::debug!("collected diagnostic: {}", diagnostic);
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(diagnostic);
        }
    }
}

pub mod diagnostics;
pub mod ids;
pub mod materialize;

pub use diagnostics::{
    CollectingDiagnostics, Diagnostic, DiagnosticKind, DiagnosticSink, LogDiagnostics,
    NullDiagnostics,
};
pub use ids::{IdGenerator, SequentialIdGenerator, shared_generator};
pub use materialize::{Materialize, MaterializeContext, materialize_all};

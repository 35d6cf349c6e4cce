use quire_markup::WriteOptions;
use quire_traits::MaterializeContext;
use serde::Deserialize;

/// Output settings for [`DocumentWriter`](crate::DocumentWriter).
///
/// Can be loaded from JSON; every field is optional there and falls back to
/// the default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WriterConfig {
    /// Spaces per nesting level. `None` writes compact output.
    pub indent: Option<usize>,
    pub xml_declaration: bool,
    pub standalone: bool,
    /// Keep empty runs instead of dropping them.
    pub emit_empty_runs: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: None,
            xml_declaration: true,
            standalone: true,
            emit_empty_runs: false,
        }
    }
}

impl WriterConfig {
    pub fn pretty() -> Self {
        Self {
            indent: Some(2),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            indent: self.indent,
            xml_declaration: self.xml_declaration,
            standalone: self.standalone,
        }
    }

    pub fn materialize_context(&self) -> MaterializeContext {
        MaterializeContext {
            emit_empty_runs: self.emit_empty_runs,
        }
    }
}

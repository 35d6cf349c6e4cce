//! The configuration surface shared by every control variant.

use quire_types::Tag;
use serde::{Deserialize, Serialize};

/// How the consuming application draws the control's boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum Appearance {
    /// A visible border around the content.
    #[default]
    BoundingBox,
    /// Visible start and end markers.
    Tags,
    /// No visual indicator.
    Hidden,
}

impl Appearance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Appearance::BoundingBox => "boundingBox",
            Appearance::Tags => "tags",
            Appearance::Hidden => "hidden",
        }
    }
}

/// Editing restrictions. The two flags are independent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct Lock {
    /// The content cannot be edited; the control stays selectable.
    #[serde(default)]
    pub content_locked: bool,
    /// The control cannot be deleted; the content stays editable unless
    /// `content_locked` is also set.
    #[serde(default)]
    pub structure_locked: bool,
}

impl Lock {
    pub const fn content() -> Self {
        Self {
            content_locked: true,
            structure_locked: false,
        }
    }

    pub const fn structure() -> Self {
        Self {
            content_locked: false,
            structure_locked: true,
        }
    }

    pub const fn both() -> Self {
        Self {
            content_locked: true,
            structure_locked: true,
        }
    }

    /// The `w:lock` value, or `None` when neither flag is set.
    pub const fn markup_value(self) -> Option<&'static str> {
        match (self.content_locked, self.structure_locked) {
            (true, true) => Some("sdtContentLocked"),
            (true, false) => Some("contentLocked"),
            (false, true) => Some("sdtLocked"),
            (false, false) => None,
        }
    }
}

/// Binds the control to a node in a custom XML part.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DataBinding {
    /// XPath-like locator of the bound node. Should be absolute.
    pub xpath: String,
    /// Brace-delimited GUID of the custom XML part.
    pub store_item_id: String,
    /// Namespace prefix declarations used by `xpath`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_mappings: Option<String>,
}

impl DataBinding {
    pub fn new(xpath: impl Into<String>, store_item_id: impl Into<String>) -> Self {
        Self {
            xpath: xpath.into(),
            store_item_id: store_item_id.into(),
            prefix_mappings: None,
        }
    }

    pub fn prefix_mappings(mut self, mappings: impl Into<String>) -> Self {
        self.prefix_mappings = Some(mappings.into());
        self
    }
}

/// Identity, appearance, locking and binding settings of a control.
///
/// Everything except the tag is optional; absent fields fall back to the
/// consuming application's defaults and produce no markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ControlProperties {
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<Appearance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<Lock>,
    /// Instructional text. Only its presence matters for the markup: the
    /// text itself is expected among the control's content children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
}

impl ControlProperties {
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            title: None,
            appearance: None,
            color: None,
            lock: None,
            placeholder: None,
            data_binding: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn lock(mut self, lock: Lock) -> Self {
        self.lock = Some(lock);
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn data_binding(mut self, binding: DataBinding) -> Self {
        self.data_binding = Some(binding);
        self
    }
}

impl From<&str> for ControlProperties {
    fn from(tag: &str) -> Self {
        ControlProperties::new(tag)
    }
}

impl From<String> for ControlProperties {
    fn from(tag: String) -> Self {
        ControlProperties::new(tag)
    }
}

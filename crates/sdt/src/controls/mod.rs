//! Content control variants.
//!
//! Every variant shares one skeleton: a `w:sdtPr` properties block followed
//! by a `w:sdtContent` block, wrapped in `w:sdt`. Variants differ only in
//! the payload element inside the properties block and in what content they
//! accept. All validation happens in the builders' `build` methods; a built
//! control is immutable and materializes without failing.

mod block;
mod checkbox;
mod date;
mod dropdown;
mod inline_text;
mod rich_inline;

pub use block::{BlockControl, BlockControlBuilder};
pub use checkbox::{CheckboxControl, CheckboxControlBuilder, SymbolDescriptor};
pub use date::{CalendarSystem, DateControl, DateControlBuilder, DateStorage};
pub use dropdown::{DropdownControl, DropdownControlBuilder, DropdownMode, ListOption};
pub use inline_text::{InlineTextControl, InlineTextControlBuilder, TextMode};
pub use rich_inline::{RichInlineControl, RichInlineControlBuilder};

use crate::content::{ContentNode, InlineContent, run_style_element};
use crate::context::BuildContext;
use crate::error::ControlError;
use crate::kind::ControlKind;
use crate::names as w;
use crate::properties::ControlProperties;
use crate::validation::{validate_color, validate_data_binding, validate_tag, validate_title};
use quire_markup::Element;
use quire_types::{ControlId, HexColor};
use std::str::FromStr;

/// State every control owns: its identity and validated properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ControlCore {
    id: ControlId,
    properties: ControlProperties,
    color: Option<HexColor>,
}

impl ControlCore {
    /// Runs the construction steps shared by all variants.
    ///
    /// Order: tag, variant payload (`validate_payload`), data binding,
    /// colour, title advisories, then identity assignment. Nothing is drawn
    /// from the generator unless every check passed.
    pub(crate) fn establish<T>(
        kind: ControlKind,
        properties: ControlProperties,
        ctx: &BuildContext<'_>,
        validate_payload: impl FnOnce() -> Result<T, ControlError>,
    ) -> Result<(Self, T), ControlError> {
        validate_tag(&properties.tag, kind, ctx)?;
        let payload = validate_payload()?;
        if let Some(binding) = &properties.data_binding {
            validate_data_binding(binding, kind, ctx)?;
        }
        let color = properties
            .color
            .as_deref()
            .map(|c| validate_color(c, kind, ctx))
            .transpose()?;
        if let Some(title) = &properties.title {
            validate_title(title, kind, ctx);
        }

        let id = ctx.next_id();
        log::debug!("Constructed {} '{}' with id {}", kind, properties.tag, id);
        Ok((
            Self {
                id,
                properties,
                color,
            },
            payload,
        ))
    }

    pub(crate) fn id(&self) -> ControlId {
        self.id
    }

    pub(crate) fn properties(&self) -> &ControlProperties {
        &self.properties
    }

    pub(crate) fn color(&self) -> Option<&HexColor> {
        self.color.as_ref()
    }

    /// Builds `w:sdtPr`: optional properties, tag and id, the payload, then
    /// the optional default style.
    fn properties_element(&self, payload: Element, default_style: Option<&str>) -> Element {
        let p = &self.properties;
        let mut pr = Element::new(w::SDT_PR);

        if let Some(title) = &p.title {
            pr.push(Element::new(w::ALIAS).attr(w::VAL, title.as_str()));
        }
        pr.push(Element::new(w::TAG).attr(w::VAL, p.tag.as_str()));
        pr.push(Element::new(w::ID).attr(w::VAL, self.id.to_string()));
        if let Some(appearance) = p.appearance {
            pr.push(Element::new(w::APPEARANCE).attr(w::W15_VAL, appearance.as_str()));
        }
        if let Some(color) = &self.color {
            pr.push(Element::new(w::COLOR).attr(w::VAL, color.as_str()));
        }
        if let Some(binding) = &p.data_binding {
            pr.push(
                Element::new(w::DATA_BINDING)
                    .attr_opt(w::PREFIX_MAPPINGS, binding.prefix_mappings.as_deref())
                    .attr(w::XPATH, binding.xpath.as_str())
                    .attr(w::STORE_ITEM_ID, binding.store_item_id.as_str()),
            );
        }
        if let Some(value) = p.lock.and_then(|l| l.markup_value()) {
            pr.push(Element::new(w::LOCK).attr(w::VAL, value));
        }
        if p.placeholder.is_some() {
            pr.push(Element::new(w::SHOWING_PLACEHOLDER));
        }
        pr.push(payload);
        if let Some(style) = default_style {
            pr.push(run_style_element(style));
        }
        pr
    }

    /// Wraps the properties block and the already-materialized content in `w:sdt`.
    pub(crate) fn wrap(
        &self,
        payload: Element,
        default_style: Option<&str>,
        content: Vec<Element>,
    ) -> Element {
        log::trace!("Materializing control {} ({} content nodes)", self.id, content.len());
        Element::new(w::SDT)
            .child(self.properties_element(payload, default_style))
            .child(Element::new(w::SDT_CONTENT).children_from(content))
    }
}

/// Converts untyped nodes into the inline content of `kind`, rejecting block-level nodes.
pub(crate) fn inline_children(
    nodes: Vec<ContentNode>,
    kind: ControlKind,
) -> Result<Vec<InlineContent>, ControlError> {
    nodes.into_iter().map(|n| n.into_inline(kind)).collect()
}

/// A keyword setting given either typed or as markup text.
///
/// Text is parsed when the control is built, after the tag has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Keyword<T> {
    Value(T),
    Text(String),
}

impl<T: FromStr<Err = ControlError>> Keyword<T> {
    pub(crate) fn resolve(self) -> Result<T, ControlError> {
        match self {
            Keyword::Value(v) => Ok(v),
            Keyword::Text(s) => s.parse(),
        }
    }
}

/// Generates the read-only accessors every control exposes.
macro_rules! impl_control_accessors {
    ($($name:ident => $kind:expr),+ $(,)?) => {
        $(
            impl $name {
                /// The variant of this control.
                pub fn kind(&self) -> $crate::kind::ControlKind {
                    $kind
                }

                /// The document-unique identity assigned at construction.
                pub fn id(&self) -> quire_types::ControlId {
                    self.core.id()
                }

                pub fn tag(&self) -> &quire_types::Tag {
                    &self.core.properties().tag
                }

                pub fn properties(&self) -> &$crate::properties::ControlProperties {
                    self.core.properties()
                }

                /// The validated colour, normalised to upper-case hex.
                pub fn color(&self) -> Option<&quire_types::HexColor> {
                    self.core.color()
                }
            }
        )+
    };
}

impl_control_accessors!(
    InlineTextControl => crate::kind::ControlKind::InlineText,
    RichInlineControl => crate::kind::ControlKind::RichInline,
    BlockControl => crate::kind::ControlKind::Block,
    DropdownControl => crate::kind::ControlKind::Dropdown,
    DateControl => crate::kind::ControlKind::Date,
    CheckboxControl => crate::kind::ControlKind::Checkbox,
);

#[cfg(test)]
pub(crate) mod test_support {
    use quire_traits::{CollectingDiagnostics, SequentialIdGenerator};

    /// Deterministic identities plus collected diagnostics.
    pub(crate) struct Harness {
        pub ids: SequentialIdGenerator,
        pub diagnostics: CollectingDiagnostics,
    }

    impl Harness {
        pub(crate) fn new() -> Self {
            Self {
                ids: SequentialIdGenerator::starting_at(1),
                diagnostics: CollectingDiagnostics::new(),
            }
        }

        pub(crate) fn ctx(&self) -> crate::context::BuildContext<'_> {
            crate::context::BuildContext::new(&self.ids, &self.diagnostics)
        }
    }

    pub(crate) const KEY: &str = "{12345678-1234-1234-1234-123456789ABC}";
}

use super::{ControlCore, inline_children};
use crate::content::{ContentNode, InlineContent, text_element};
use crate::context::BuildContext;
use crate::error::ControlError;
use crate::kind::ControlKind;
use crate::names as w;
use crate::properties::ControlProperties;
use quire_markup::Element;
use quire_traits::{DiagnosticKind, Materialize, MaterializeContext, materialize_all};
use serde::{Deserialize, Serialize};

/// The font and hex code point drawn for one checkbox state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDescriptor {
    pub font: String,
    /// Code point as hex digits, for example `"2612"` for a ballot box with X.
    pub value: String,
}

impl SymbolDescriptor {
    pub const DEFAULT_FONT: &'static str = "MS Gothic";
    pub const DEFAULT_CHECKED_VALUE: &'static str = "2612";
    pub const DEFAULT_UNCHECKED_VALUE: &'static str = "2610";

    pub fn new(font: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            font: font.into(),
            value: value.into(),
        }
    }

    /// ☒ in MS Gothic.
    pub fn default_checked() -> Self {
        Self::new(Self::DEFAULT_FONT, Self::DEFAULT_CHECKED_VALUE)
    }

    /// ☐ in MS Gothic.
    pub fn default_unchecked() -> Self {
        Self::new(Self::DEFAULT_FONT, Self::DEFAULT_UNCHECKED_VALUE)
    }

    /// The character this descriptor stands for, or the raw value when it
    /// is not a valid hex code point.
    pub fn glyph(&self) -> String {
        u32::from_str_radix(self.value.trim(), 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| self.value.clone())
    }

    fn validate(&self, field: &'static str) -> Result<(), ControlError> {
        let missing: Vec<&str> = [("font", &self.font), ("value", &self.value)]
            .into_iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| name)
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        Err(ControlError::configuration(
            ControlKind::Checkbox,
            field,
            format!(
                "symbol descriptor is missing {}; supply both a font and a hex character value, \
                 for example SymbolDescriptor::new(\"{}\", \"{}\")",
                missing.join(" and "),
                Self::DEFAULT_FONT,
                Self::DEFAULT_CHECKED_VALUE
            ),
        ))
    }

    fn state_element(&self, name: &'static str) -> Element {
        Element::new(name)
            .attr(w::W14_VAL, self.value.as_str())
            .attr(w::W14_FONT, self.font.as_str())
    }
}

/// A run-level checkbox.
///
/// The visible symbol comes from the two descriptors. When no content
/// children are given, a run showing the current state's symbol is written.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxControl {
    pub(super) core: ControlCore,
    checked: bool,
    checked_symbol: SymbolDescriptor,
    unchecked_symbol: SymbolDescriptor,
    children: Vec<InlineContent>,
}

impl CheckboxControl {
    pub fn builder(properties: impl Into<ControlProperties>) -> CheckboxControlBuilder {
        CheckboxControlBuilder {
            properties: properties.into(),
            checked: false,
            checked_symbol: None,
            unchecked_symbol: None,
            children: Vec::new(),
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn checked_symbol(&self) -> &SymbolDescriptor {
        &self.checked_symbol
    }

    pub fn unchecked_symbol(&self) -> &SymbolDescriptor {
        &self.unchecked_symbol
    }

    /// The descriptor for the current state.
    pub fn current_symbol(&self) -> &SymbolDescriptor {
        if self.checked {
            &self.checked_symbol
        } else {
            &self.unchecked_symbol
        }
    }

    pub fn children(&self) -> &[InlineContent] {
        &self.children
    }

    fn glyph_run(&self) -> Element {
        let symbol = self.current_symbol();
        let font = symbol.font.as_str();
        Element::new(w::RUN)
            .child(
                Element::new(w::RUN_PR).child(
                    Element::new(w::RUN_FONTS)
                        .attr(w::ASCII, font)
                        .attr(w::EAST_ASIA, font)
                        .attr(w::H_ANSI, font),
                ),
            )
            .child(text_element(&symbol.glyph()))
    }
}

#[derive(Debug, Clone)]
pub struct CheckboxControlBuilder {
    properties: ControlProperties,
    checked: bool,
    checked_symbol: Option<SymbolDescriptor>,
    unchecked_symbol: Option<SymbolDescriptor>,
    children: Vec<ContentNode>,
}

impl CheckboxControlBuilder {
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn checked_symbol(mut self, symbol: SymbolDescriptor) -> Self {
        self.checked_symbol = Some(symbol);
        self
    }

    pub fn unchecked_symbol(mut self, symbol: SymbolDescriptor) -> Self {
        self.unchecked_symbol = Some(symbol);
        self
    }

    /// Accepted, but reported: the symbol descriptors already define what is shown.
    pub fn child(mut self, child: impl Into<InlineContent>) -> Self {
        self.children.push(ContentNode::Inline(child.into()));
        self
    }

    pub fn node(mut self, node: ContentNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn build(self, ctx: &BuildContext<'_>) -> Result<CheckboxControl, ControlError> {
        let kind = ControlKind::Checkbox;
        let Self {
            properties,
            checked,
            checked_symbol,
            unchecked_symbol,
            children,
        } = self;

        let (core, (checked_symbol, unchecked_symbol, children)) =
            ControlCore::establish(kind, properties, ctx, || {
                let checked_symbol = match checked_symbol {
                    Some(s) => {
                        s.validate("checkedSymbol")?;
                        s
                    }
                    None => SymbolDescriptor::default_checked(),
                };
                let unchecked_symbol = match unchecked_symbol {
                    Some(s) => {
                        s.validate("uncheckedSymbol")?;
                        s
                    }
                    None => SymbolDescriptor::default_unchecked(),
                };
                let children = inline_children(children, kind)?;
                if !children.is_empty() {
                    ctx.warn(
                        DiagnosticKind::CheckboxContent,
                        kind,
                        format!(
                            "{} content children supplied; a checkbox is drawn from its symbol \
                             descriptors and the children replace the generated symbol run",
                            children.len()
                        ),
                    );
                }
                Ok((checked_symbol, unchecked_symbol, children))
            })?;

        Ok(CheckboxControl {
            core,
            checked,
            checked_symbol,
            unchecked_symbol,
            children,
        })
    }
}

impl Materialize for CheckboxControl {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        let payload = Element::new(w::CHECKBOX)
            .child(Element::new(w::CHECKED).attr(w::W14_VAL, if self.checked { "1" } else { "0" }))
            .child(self.checked_symbol.state_element(w::CHECKED_STATE))
            .child(self.unchecked_symbol.state_element(w::UNCHECKED_STATE));

        let content = if self.children.is_empty() {
            vec![self.glyph_run()]
        } else {
            materialize_all(&self.children, ctx)
        };
        Some(self.core.wrap(payload, None, content))
    }
}

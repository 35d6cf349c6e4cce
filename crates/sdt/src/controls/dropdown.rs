use super::{ControlCore, Keyword, inline_children};
use crate::content::{ContentNode, InlineContent};
use crate::context::BuildContext;
use crate::error::ControlError;
use crate::kind::ControlKind;
use crate::names as w;
use crate::properties::ControlProperties;
use itertools::Itertools;
use quire_markup::Element;
use quire_traits::{DiagnosticKind, Materialize, MaterializeContext, materialize_all};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether the user may only pick from the list or may also type freely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DropdownMode {
    /// `w:dropDownList`
    RestrictedList,
    /// `w:comboBox`
    FreeEntry,
}

impl DropdownMode {
    pub const ALL: [DropdownMode; 2] = [DropdownMode::RestrictedList, DropdownMode::FreeEntry];

    pub const fn as_str(self) -> &'static str {
        match self {
            DropdownMode::RestrictedList => "restricted-list",
            DropdownMode::FreeEntry => "free-entry",
        }
    }
}

impl fmt::Display for DropdownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropdownMode {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|m| m.as_str() == s).ok_or_else(|| {
            ControlError::configuration(
                ControlKind::Dropdown,
                "mode",
                format!(
                    "unknown dropdown mode '{s}'; expected one of: {}",
                    Self::ALL.iter().join(", ")
                ),
            )
        })
    }
}

/// One selectable entry: the text shown and the value stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListOption {
    pub display_text: String,
    pub value: String,
}

impl ListOption {
    pub fn new(display_text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            value: value.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.display_text.trim().is_empty() && !self.value.trim().is_empty()
    }
}

/// A run-level control offering a list of options.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownControl {
    pub(super) core: ControlCore,
    mode: DropdownMode,
    options: Vec<ListOption>,
    multi_line: bool,
    max_length: Option<u32>,
    default_style: Option<String>,
    children: Vec<InlineContent>,
}

impl DropdownControl {
    pub fn builder(properties: impl Into<ControlProperties>) -> DropdownControlBuilder {
        DropdownControlBuilder {
            properties: properties.into(),
            mode: None,
            options: Vec::new(),
            multi_line: false,
            max_length: None,
            default_style: None,
            children: Vec::new(),
        }
    }

    pub fn mode(&self) -> DropdownMode {
        self.mode
    }

    pub fn options(&self) -> &[ListOption] {
        &self.options
    }

    /// Stored for both modes; only written for [`DropdownMode::FreeEntry`].
    pub fn multi_line(&self) -> bool {
        self.multi_line
    }

    pub fn max_length(&self) -> Option<u32> {
        self.max_length
    }

    pub fn default_style(&self) -> Option<&str> {
        self.default_style.as_deref()
    }

    pub fn children(&self) -> &[InlineContent] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct DropdownControlBuilder {
    properties: ControlProperties,
    mode: Option<Keyword<DropdownMode>>,
    options: Vec<ListOption>,
    multi_line: bool,
    max_length: Option<u32>,
    default_style: Option<String>,
    children: Vec<ContentNode>,
}

impl DropdownControlBuilder {
    pub fn mode(mut self, mode: DropdownMode) -> Self {
        self.mode = Some(Keyword::Value(mode));
        self
    }

    /// Sets the mode from its markup keyword, for example `"free-entry"`.
    /// An unknown keyword fails in [`build`](Self::build).
    pub fn mode_name(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(Keyword::Text(mode.into()));
        self
    }

    pub fn option(mut self, display_text: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(ListOption::new(display_text, value));
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = ListOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn multi_line(mut self, multi_line: bool) -> Self {
        self.multi_line = multi_line;
        self
    }

    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn default_style(mut self, style: impl Into<String>) -> Self {
        self.default_style = Some(style.into());
        self
    }

    /// Content shown for the current selection, usually one run.
    pub fn child(mut self, child: impl Into<InlineContent>) -> Self {
        self.children.push(ContentNode::Inline(child.into()));
        self
    }

    pub fn node(mut self, node: ContentNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(InlineContent::from(text.into()))
    }

    pub fn build(self, ctx: &BuildContext<'_>) -> Result<DropdownControl, ControlError> {
        let kind = ControlKind::Dropdown;
        let Self {
            properties,
            mode,
            options,
            multi_line,
            max_length,
            default_style,
            children,
        } = self;

        let (core, (mode, children)) = ControlCore::establish(kind, properties, ctx, || {
            let mode = mode.ok_or_else(|| {
                ControlError::configuration(
                    kind,
                    "mode",
                    format!(
                        "DropdownControl requires a mode, one of: {}",
                        DropdownMode::ALL.iter().join(", ")
                    ),
                )
            })?
            .resolve()?;
            validate_options(&options, ctx)?;
            Ok((mode, inline_children(children, kind)?))
        })?;

        Ok(DropdownControl {
            core,
            mode,
            options,
            multi_line,
            max_length,
            default_style,
            children,
        })
    }
}

/// Fails on an empty list or on entries with a blank half; reports duplicate values.
fn validate_options(options: &[ListOption], ctx: &BuildContext<'_>) -> Result<(), ControlError> {
    if options.is_empty() {
        return Err(ControlError::configuration(
            ControlKind::Dropdown,
            "options",
            "DropdownControl requires at least one option, for example .option(\"Yes\", \"yes\")",
        ));
    }

    let incomplete = options.iter().filter(|o| !o.is_complete()).count();
    if incomplete > 0 {
        return Err(ControlError::configuration(
            ControlKind::Dropdown,
            "options",
            format!(
                "{incomplete} of {} options have an empty display text or value; \
                 both must be non-empty",
                options.len()
            ),
        ));
    }

    for value in options.iter().map(|o| o.value.as_str()).duplicates() {
        ctx.warn(
            DiagnosticKind::DuplicateOptionValue,
            ControlKind::Dropdown,
            format!("duplicate option value '{value}'; the stored value will not identify the choice"),
        );
    }
    Ok(())
}

impl Materialize for DropdownControl {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        let items = self.options.iter().map(|o| {
            Element::new(w::LIST_ITEM)
                .attr(w::DISPLAY_TEXT, o.display_text.as_str())
                .attr(w::VALUE, o.value.as_str())
        });

        let (payload, default_style) = match self.mode {
            DropdownMode::RestrictedList => (Element::new(w::DROP_DOWN_LIST), None),
            DropdownMode::FreeEntry => (
                Element::new(w::COMBO_BOX)
                    .attr_opt(w::MULTI_LINE, self.multi_line.then_some("1"))
                    .attr_opt(w::MAX_LENGTH, self.max_length.map(|n| n.to_string())),
                self.default_style.as_deref(),
            ),
        };

        Some(self.core.wrap(
            payload.children_from(items),
            default_style,
            materialize_all(&self.children, ctx),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::test_support::{Harness, KEY};
    use crate::error::ControlErrorKind;
    use crate::properties::DataBinding;

    fn yes_no() -> DropdownControlBuilder {
        DropdownControl::builder("Answer")
            .option("Yes", "yes")
            .option("No", "no")
    }

    #[test]
    fn test_restricted_list_markup() {
        let h = Harness::new();
        let control = yes_no()
            .mode(DropdownMode::RestrictedList)
            .text("Yes")
            .build(&h.ctx())
            .unwrap();

        let sdt = control.materialize(&MaterializeContext::default()).unwrap();
        let list = sdt.find("w:sdtPr").and_then(|p| p.find("w:dropDownList")).unwrap();
        let items: Vec<(Option<&str>, Option<&str>)> = list
            .child_elements()
            .map(|i| (i.attribute("w:displayText"), i.attribute("w:value")))
            .collect();
        assert_eq!(items, vec![(Some("Yes"), Some("yes")), (Some("No"), Some("no"))]);
        assert!(h.diagnostics.is_empty());
    }

    #[test]
    fn test_restricted_list_ignores_formatting_fields() {
        let h = Harness::new();
        let control = yes_no()
            .mode(DropdownMode::RestrictedList)
            .multi_line(true)
            .max_length(10)
            .default_style("Strong")
            .build(&h.ctx())
            .unwrap();

        assert!(control.multi_line());
        assert_eq!(control.max_length(), Some(10));

        let sdt = control.materialize(&MaterializeContext::default()).unwrap();
        let pr = sdt.find("w:sdtPr").unwrap();
        let list = pr.find("w:dropDownList").unwrap();
        assert!(list.attributes().is_empty());
        assert!(pr.find("w:rPr").is_none());
    }

    #[test]
    fn test_free_entry_emits_formatting_fields() {
        let h = Harness::new();
        let control = yes_no()
            .mode(DropdownMode::FreeEntry)
            .multi_line(true)
            .max_length(10)
            .default_style("Strong")
            .build(&h.ctx())
            .unwrap();

        let sdt = control.materialize(&MaterializeContext::default()).unwrap();
        let pr = sdt.find("w:sdtPr").unwrap();
        let combo = pr.find("w:comboBox").unwrap();
        assert_eq!(combo.attribute("w:multiLine"), Some("1"));
        assert_eq!(combo.attribute("w:maxLength"), Some("10"));
        assert_eq!(combo.child_elements().count(), 2);
        assert_eq!(
            pr.find("w:rPr").and_then(|r| r.find("w:rStyle")).and_then(|s| s.attribute("w:val")),
            Some("Strong")
        );
    }

    #[test]
    fn test_duplicate_values_warn() {
        let h = Harness::new();
        let control = DropdownControl::builder("Status")
            .mode(DropdownMode::RestrictedList)
            .option("Open", "1")
            .option("Reopened", "1")
            .build(&h.ctx());
        assert!(control.is_ok());

        let warnings = h.diagnostics.of_kind(DiagnosticKind::DuplicateOptionValue);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("duplicate"));
        assert!(warnings[0].message.contains("'1'"));
    }

    #[test]
    fn test_missing_mode_and_options() {
        let h = Harness::new();
        let err = yes_no().build(&h.ctx()).unwrap_err();
        assert_eq!(err.kind(), ControlErrorKind::Configuration);
        assert!(err.to_string().contains("restricted-list, free-entry"));

        let err = DropdownControl::builder("Empty")
            .mode(DropdownMode::FreeEntry)
            .build(&h.ctx())
            .unwrap_err();
        assert_eq!(err.kind(), ControlErrorKind::Configuration);
        assert!(err.to_string().contains("options"));
    }

    #[test]
    fn test_incomplete_options_are_counted() {
        let h = Harness::new();
        let err = DropdownControl::builder("Bad")
            .mode(DropdownMode::RestrictedList)
            .option("", "a")
            .option("B", "b")
            .option("C", " ")
            .build(&h.ctx())
            .unwrap_err();
        assert_eq!(err.kind(), ControlErrorKind::Configuration);
        assert!(err.to_string().contains("2 of 3 options"), "{err}");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("free-entry".parse::<DropdownMode>().unwrap(), DropdownMode::FreeEntry);
        assert_eq!(
            "restricted-list".parse::<DropdownMode>().unwrap(),
            DropdownMode::RestrictedList
        );
        let err = "combo".parse::<DropdownMode>().unwrap_err();
        assert!(err.to_string().contains("'combo'"));
        assert!(err.to_string().contains("restricted-list, free-entry"));
    }

    #[test]
    fn test_mode_name_is_checked_after_tag() {
        let h = Harness::new();
        let control = yes_no().mode_name("free-entry").build(&h.ctx()).unwrap();
        assert_eq!(control.mode(), DropdownMode::FreeEntry);

        let err = yes_no().mode_name("combo").build(&h.ctx()).unwrap_err();
        assert!(err.to_string().contains("'combo'"), "{err}");

        let err = DropdownControl::builder(" ")
            .mode_name("combo")
            .option("A", "a")
            .build(&h.ctx())
            .unwrap_err();
        assert_eq!(err.kind(), ControlErrorKind::Configuration);
        let msg = err.to_string();
        assert!(msg.contains("'tag'"), "{msg}");
        assert!(!msg.contains("combo"), "{msg}");
    }

    #[test]
    fn test_bad_binding_key_is_format_error() {
        let h = Harness::new();
        let err = DropdownControl::builder(
            ControlProperties::new("Bound").data_binding(DataBinding::new("/root/x", "{invalid-guid}")),
        )
        .mode(DropdownMode::RestrictedList)
        .option("A", "a")
        .build(&h.ctx())
        .unwrap_err();
        assert_eq!(err.kind(), ControlErrorKind::Format);
        assert!(err.to_string().contains("{invalid-guid}"));

        assert!(
            DropdownControl::builder(
                ControlProperties::new("Bound").data_binding(DataBinding::new("/root/x", KEY)),
            )
            .mode(DropdownMode::RestrictedList)
            .option("A", "a")
            .build(&h.ctx())
            .is_ok()
        );
    }
}

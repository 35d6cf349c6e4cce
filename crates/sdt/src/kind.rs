use std::fmt;

/// Identifies a control variant in errors, diagnostics and nesting checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    InlineText,
    RichInline,
    Block,
    Dropdown,
    Date,
    Checkbox,
}

impl ControlKind {
    /// The public type name of the variant.
    pub const fn name(self) -> &'static str {
        match self {
            ControlKind::InlineText => "InlineTextControl",
            ControlKind::RichInline => "RichInlineControl",
            ControlKind::Block => "BlockControl",
            ControlKind::Dropdown => "DropdownControl",
            ControlKind::Date => "DateControl",
            ControlKind::Checkbox => "CheckboxControl",
        }
    }

    /// True for the variants that live inside a paragraph.
    pub const fn is_inline(self) -> bool {
        !matches!(self, ControlKind::Block)
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

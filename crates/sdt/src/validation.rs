//! Structural precondition checks shared by every control variant.
//!
//! Hard failures come back as [`ControlError`]; advisories go to the
//! context's diagnostic sink and never stop construction.

use crate::context::BuildContext;
use crate::error::ControlError;
use crate::kind::ControlKind;
use crate::properties::DataBinding;
use quire_traits::DiagnosticKind;
use quire_types::{HexColor, Tag};
use regex::Regex;
use std::sync::LazyLock;

/// The pattern a data-binding store item ID must match.
pub const CROSS_REFERENCE_KEY_PATTERN: &str =
    r"^\{[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}\}$";

/// Longest title the consuming application shows in full.
pub const MAX_TITLE_CHARS: usize = 255;

static CROSS_REFERENCE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CROSS_REFERENCE_KEY_PATTERN).expect("BUG: invalid CROSS_REFERENCE_KEY regex literal")
});

static LOCALE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2}-[A-Z]{2}$").expect("BUG: invalid LOCALE_TAG regex literal")
});

/// Fails with a format error unless `key` is a brace-delimited GUID such as
/// `{12345678-ABCD-1234-ABCD-1234567890AB}`.
///
/// A malformed key makes the consuming application unable to open the
/// document, so this is never downgraded to a warning.
pub fn validate_cross_reference_key(key: &str, control: ControlKind) -> Result<(), ControlError> {
    if CROSS_REFERENCE_KEY.is_match(key) {
        return Ok(());
    }
    Err(ControlError::format(
        control,
        "storeItemID",
        format!(
            "invalid data-binding store item ID '{}': expected a brace-delimited GUID \
             matching {} (for example {{12345678-ABCD-1234-ABCD-1234567890AB}})",
            key, CROSS_REFERENCE_KEY_PATTERN
        ),
    ))
}

/// Checks a data binding: the locator must be non-empty and the key must be
/// well-formed. A locator not starting with `/` is only reported.
pub fn validate_data_binding(
    binding: &DataBinding,
    control: ControlKind,
    ctx: &BuildContext<'_>,
) -> Result<(), ControlError> {
    if binding.xpath.trim().is_empty() {
        return Err(ControlError::format(
            control,
            "xpath",
            "data-binding xpath must not be empty (for example \"/invoice/customer/name\")",
        ));
    }
    validate_cross_reference_key(&binding.store_item_id, control)?;
    if !binding.xpath.starts_with('/') {
        ctx.warn(
            DiagnosticKind::RelativeBindingLocator,
            control,
            format!(
                "data-binding xpath '{}' does not start with '/'; relative locators are resolved \
                 against the part root by the consuming application",
                binding.xpath
            ),
        );
    }
    Ok(())
}

/// Fails when the tag is blank; reports a tag containing whitespace.
pub fn validate_tag(tag: &Tag, control: ControlKind, ctx: &BuildContext<'_>) -> Result<(), ControlError> {
    if tag.is_blank() {
        return Err(ControlError::configuration(
            control,
            "tag",
            format!(
                "{control} requires a non-empty tag, for example \
                 ControlProperties::new(\"CustomerName\")"
            ),
        ));
    }
    if tag.contains_whitespace() {
        ctx.warn(
            DiagnosticKind::TagWhitespace,
            control,
            format!("tag '{}' contains whitespace; tags are meant as machine-readable keys", tag),
        );
    }
    Ok(())
}

/// Reports titles longer than [`MAX_TITLE_CHARS`]. Titles are never truncated.
pub fn validate_title(title: &str, control: ControlKind, ctx: &BuildContext<'_>) {
    let len = title.chars().count();
    if len > MAX_TITLE_CHARS {
        ctx.warn(
            DiagnosticKind::LongTitle,
            control,
            format!("title is {len} characters long; only the first {MAX_TITLE_CHARS} are displayed"),
        );
    }
}

/// Parses the colour strictly, or keeps it verbatim with a diagnostic when
/// strict colours are switched off.
pub fn validate_color(color: &str, control: ControlKind, ctx: &BuildContext<'_>) -> Result<HexColor, ControlError> {
    match HexColor::parse(color) {
        Ok(c) => Ok(c),
        Err(msg) if ctx.strict_colors() => Err(ControlError::format(control, "color", msg)),
        Err(msg) => {
            ctx.warn(DiagnosticKind::ColorFormat, control, msg);
            Ok(HexColor::unchecked(color))
        }
    }
}

/// Reports locale tags not shaped like `en-US`.
pub fn validate_locale(locale: &str, control: ControlKind, ctx: &BuildContext<'_>) {
    if !LOCALE_TAG.is_match(locale) {
        ctx.warn(
            DiagnosticKind::LocaleFormat,
            control,
            format!("locale '{locale}' does not follow the language-REGION convention (for example \"en-US\")"),
        );
    }
}

/// Fails when a required string field is blank.
pub fn require_non_empty(value: &str, field: &'static str, control: ControlKind) -> Result<(), ControlError> {
    if value.trim().is_empty() {
        return Err(ControlError::configuration(
            control,
            field,
            format!("'{field}' must not be empty"),
        ));
    }
    Ok(())
}

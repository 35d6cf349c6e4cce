use super::{ControlCore, Keyword, inline_children};
use crate::content::{ContentNode, InlineContent};
use crate::context::BuildContext;
use crate::error::ControlError;
use crate::kind::ControlKind;
use crate::names as w;
use crate::properties::ControlProperties;
use crate::validation::{require_non_empty, validate_locale};
use chrono::{DateTime, SecondsFormat, Utc};
use itertools::Itertools;
use quire_markup::Element;
use quire_traits::{Materialize, MaterializeContext, materialize_all};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date display pattern used when none is given.
pub const DEFAULT_DATE_FORMAT: &str = "M/d/yyyy";

/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Implements the string round trip for a closed set of markup keywords.
///
/// Parsing an unknown keyword fails with a configuration error that lists
/// the legal set.
macro_rules! keyword_enum {
    ($name:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ControlError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL.iter().copied().find(|v| v.as_str() == s).ok_or_else(|| {
                    ControlError::configuration(
                        ControlKind::Date,
                        $field,
                        format!(
                            "invalid {} '{}'; expected one of: {}",
                            $field,
                            s,
                            Self::ALL.iter().join(", ")
                        ),
                    )
                })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum CalendarSystem {
    #[default]
    Gregorian,
    Hijri,
    Hebrew,
    Taiwan,
}

keyword_enum!(CalendarSystem, "calendar", {
    Gregorian => "gregorian",
    Hijri => "hijri",
    Hebrew => "hebrew",
    Taiwan => "taiwan",
});

/// How the chosen date is written to a bound custom XML node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum DateStorage {
    #[default]
    Text,
    Date,
    DateTime,
}

keyword_enum!(DateStorage, "storeMappedDataAs", {
    Text => "text",
    Date => "date",
    DateTime => "dateTime",
});

/// A run-level date picker.
#[derive(Debug, Clone, PartialEq)]
pub struct DateControl {
    pub(super) core: ControlCore,
    format: String,
    calendar: CalendarSystem,
    locale: String,
    default_date: Option<DateTime<Utc>>,
    storage: DateStorage,
    children: Vec<InlineContent>,
}

impl DateControl {
    pub fn builder(properties: impl Into<ControlProperties>) -> DateControlBuilder {
        DateControlBuilder {
            properties: properties.into(),
            format: DEFAULT_DATE_FORMAT.to_string(),
            calendar: Keyword::Value(CalendarSystem::default()),
            locale: DEFAULT_LOCALE.to_string(),
            default_date: None,
            storage: Keyword::Value(DateStorage::default()),
            children: Vec::new(),
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn default_date(&self) -> Option<DateTime<Utc>> {
        self.default_date
    }

    pub fn storage(&self) -> DateStorage {
        self.storage
    }

    pub fn children(&self) -> &[InlineContent] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct DateControlBuilder {
    properties: ControlProperties,
    format: String,
    calendar: Keyword<CalendarSystem>,
    locale: String,
    default_date: Option<DateTime<Utc>>,
    storage: Keyword<DateStorage>,
    children: Vec<ContentNode>,
}

impl DateControlBuilder {
    /// Display pattern, for example `"dd.MM.yyyy"`.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn calendar(mut self, calendar: CalendarSystem) -> Self {
        self.calendar = Keyword::Value(calendar);
        self
    }

    /// Sets the calendar from its markup keyword, for example `"hijri"`.
    pub fn calendar_name(mut self, calendar: impl Into<String>) -> Self {
        self.calendar = Keyword::Text(calendar.into());
        self
    }

    /// Locale tag in `language-REGION` form, for example `"nb-NO"`.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn default_date(mut self, date: DateTime<Utc>) -> Self {
        self.default_date = Some(date);
        self
    }

    pub fn storage(mut self, storage: DateStorage) -> Self {
        self.storage = Keyword::Value(storage);
        self
    }

    /// Sets the storage type from its markup keyword, for example `"dateTime"`.
    pub fn storage_name(mut self, storage: impl Into<String>) -> Self {
        self.storage = Keyword::Text(storage.into());
        self
    }

    /// Display text for the current value.
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

    pub fn build(self, ctx: &BuildContext<'_>) -> Result<DateControl, ControlError> {
        let kind = ControlKind::Date;
        let Self {
            properties,
            format,
            calendar,
            locale,
            default_date,
            storage,
            children,
        } = self;

        let (core, (calendar, storage, children)) =
            ControlCore::establish(kind, properties, ctx, || {
                require_non_empty(&format, "dateFormat", kind)?;
                let calendar = calendar.resolve()?;
                require_non_empty(&locale, "locale", kind)?;
                validate_locale(&locale, kind, ctx);
                let storage = storage.resolve()?;
                Ok((calendar, storage, inline_children(children, kind)?))
            })?;

        Ok(DateControl {
            core,
            format,
            calendar,
            locale,
            default_date,
            storage,
            children,
        })
    }
}

impl Materialize for DateControl {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        let payload = Element::new(w::DATE)
            .attr_opt(
                w::FULL_DATE,
                self.default_date
                    .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true)),
            )
            .child(Element::new(w::DATE_FORMAT).attr(w::VAL, self.format.as_str()))
            .child(Element::new(w::LANGUAGE_ID).attr(w::VAL, self.locale.as_str()))
            .child(Element::new(w::STORE_MAPPED_DATA_AS).attr(w::VAL, self.storage.as_str()))
            .child(Element::new(w::CALENDAR).attr(w::VAL, self.calendar.as_str()));

        Some(self.core.wrap(payload, None, materialize_all(&self.children, ctx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::test_support::Harness;
    use crate::error::ControlErrorKind;
    use chrono::TimeZone;
    use quire_traits::DiagnosticKind;

    fn payload(control: &DateControl) -> Element {
        let sdt = control.materialize(&MaterializeContext::default()).unwrap();
        sdt.find("w:sdtPr").and_then(|p| p.find("w:date")).cloned().unwrap()
    }

    fn val<'a>(date: &'a Element, name: &str) -> Option<&'a str> {
        date.find(name).and_then(|e| e.attribute("w:val"))
    }

    #[test]
    fn test_defaults() {
        let h = Harness::new();
        let control = DateControl::builder("Due").build(&h.ctx()).unwrap();
        assert_eq!(control.format(), DEFAULT_DATE_FORMAT);
        assert_eq!(control.locale(), "en-US");
        assert_eq!(control.calendar(), CalendarSystem::Gregorian);
        assert_eq!(control.storage(), DateStorage::Text);

        let date = payload(&control);
        assert_eq!(date.attribute("w:fullDate"), None);
        let names: Vec<&str> = date.child_elements().map(|e| e.name()).collect();
        assert_eq!(names, vec!["w:dateFormat", "w:lid", "w:storeMappedDataAs", "w:calendar"]);
        assert_eq!(val(&date, "w:dateFormat"), Some("M/d/yyyy"));
        assert_eq!(val(&date, "w:lid"), Some("en-US"));
        assert_eq!(val(&date, "w:storeMappedDataAs"), Some("text"));
        assert_eq!(val(&date, "w:calendar"), Some("gregorian"));
        assert!(h.diagnostics.is_empty());
    }

    #[test]
    fn test_configured_date() {
        let h = Harness::new();
        let when = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let control = DateControl::builder("Signed")
            .format("dd.MM.yyyy")
            .locale("nb-NO")
            .calendar(CalendarSystem::Hebrew)
            .storage(DateStorage::DateTime)
            .default_date(when)
            .text("15.03.2024")
            .build(&h.ctx())
            .unwrap();

        let date = payload(&control);
        assert_eq!(date.attribute("w:fullDate"), Some("2024-03-15T00:00:00Z"));
        assert_eq!(val(&date, "w:storeMappedDataAs"), Some("dateTime"));
        assert_eq!(val(&date, "w:calendar"), Some("hebrew"));
        assert_eq!(control.children().len(), 1);
    }

    #[test]
    fn test_odd_locale_warns() {
        let h = Harness::new();
        let control = DateControl::builder("Due").locale("norwegian").build(&h.ctx());
        assert!(control.is_ok());
        assert_eq!(h.diagnostics.of_kind(DiagnosticKind::LocaleFormat).len(), 1);
    }

    #[test]
    fn test_keyword_parsing() {
        assert_eq!("hijri".parse::<CalendarSystem>().unwrap(), CalendarSystem::Hijri);
        assert_eq!("taiwan".parse::<CalendarSystem>().unwrap(), CalendarSystem::Taiwan);
        assert_eq!("dateTime".parse::<DateStorage>().unwrap(), DateStorage::DateTime);

        let err = "julian".parse::<CalendarSystem>().unwrap_err();
        assert_eq!(err.kind(), ControlErrorKind::Configuration);
        assert!(err.to_string().contains("gregorian, hijri, hebrew, taiwan"), "{err}");

        let err = "xml".parse::<DateStorage>().unwrap_err();
        assert!(err.to_string().contains("text, date, dateTime"), "{err}");
    }

    #[test]
    fn test_keyword_names_are_checked_after_tag() {
        let h = Harness::new();
        let control = DateControl::builder("Due")
            .calendar_name("taiwan")
            .storage_name("date")
            .build(&h.ctx())
            .unwrap();
        assert_eq!(control.calendar(), CalendarSystem::Taiwan);
        assert_eq!(control.storage(), DateStorage::Date);

        let err = DateControl::builder("Due").storage_name("xml").build(&h.ctx()).unwrap_err();
        assert!(err.to_string().contains("storeMappedDataAs"), "{err}");

        let err = DateControl::builder("")
            .calendar_name("julian")
            .build(&h.ctx())
            .unwrap_err();
        assert_eq!(err.kind(), ControlErrorKind::Configuration);
        assert!(err.to_string().contains("'tag'"), "{err}");
    }

    #[test]
    fn test_empty_format_is_rejected() {
        let h = Harness::new();
        let err = DateControl::builder("Due").format(" ").build(&h.ctx()).unwrap_err();
        assert_eq!(err.kind(), ControlErrorKind::Configuration);
        assert!(err.to_string().contains("dateFormat"));
    }
}

use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// A six-digit RGB colour as written into control properties (`FF0000`).
///
/// The stored value never carries a leading `#`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a hex color string (`RRGGBB` or `#RRGGBB` format).
    ///
    /// Digits are normalised to upper case.
    pub fn parse(s: &str) -> Result<HexColor, String> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return Err(format!(
                "Invalid hex color length: expected 6 digits, got {} in '{}'",
                hex.len(),
                s
            ));
        }
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex digit '{}' in color '{}'", bad, s));
        }
        Ok(HexColor(hex.to_ascii_uppercase()))
    }

    /// Wraps a colour string without validating it.
    ///
    /// Used when strict colour checking is switched off; the value is
    /// written exactly as supplied.
    pub fn unchecked(s: impl Into<String>) -> HexColor {
        HexColor(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

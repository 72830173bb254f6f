//! Configuration API for quote style checking

use std::str::FromStr;

use crate::api::{Error, Result};
use crate::types::{MarkerPair, StyleFamily, StyleRules};

/// Default marker sets
pub mod defaults {
    /// Smart marker strings in nesting order
    pub const SMART: &[&str] = &["\u{201C}\u{201D}", "\u{2018}\u{2019}"];

    /// Straight marker strings in nesting order
    pub const STRAIGHT: &[&str] = &["\"", "'"];
}

impl FromStr for StyleFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "smart" => Ok(StyleFamily::Smart),
            "straight" => Ok(StyleFamily::Straight),
            other => Err(Error::InvalidStyle(other.to_string())),
        }
    }
}

/// Checking configuration
///
/// Immutable for the lifetime of one run. Construct through
/// [`Config::builder`]; the marker lists are validated once at build time so
/// the engine never re-checks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) rules: StyleRules,
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build().expect("defaults are valid")
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Family the document should be using
    pub fn preferred(&self) -> StyleFamily {
        self.rules.preferred
    }

    /// Smart marker pairs in nesting order
    pub fn smart(&self) -> &[MarkerPair] {
        &self.rules.smart
    }

    /// Straight marker pairs in nesting order
    pub fn straight(&self) -> &[MarkerPair] {
        &self.rules.straight
    }

    pub(crate) fn rules(&self) -> &StyleRules {
        &self.rules
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    preferred: Option<StyleFamily>,
    smart: Option<Vec<String>>,
    straight: Option<Vec<String>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred family
    pub fn preferred(mut self, family: StyleFamily) -> Self {
        self.preferred = Some(family);
        self
    }

    /// Set the preferred family from its name (`"smart"` or `"straight"`)
    pub fn preferred_name(mut self, name: &str) -> Result<Self> {
        self.preferred = Some(name.parse()?);
        Ok(self)
    }

    /// Set the smart marker strings in nesting order
    ///
    /// Each entry is one character (same glyph opens and closes) or two
    /// characters (open, then close).
    pub fn smart<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.smart = Some(markers.into_iter().map(Into::into).collect());
        self
    }

    /// Set the straight marker strings in nesting order
    pub fn straight<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.straight = Some(markers.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let preferred = self.preferred.unwrap_or_default();

        let smart = match self.smart {
            Some(markers) => parse_markers(&markers, StyleFamily::Smart)?,
            None => parse_defaults(defaults::SMART),
        };
        let straight = match self.straight {
            Some(markers) => parse_markers(&markers, StyleFamily::Straight)?,
            None => parse_defaults(defaults::STRAIGHT),
        };

        Ok(Config {
            rules: StyleRules {
                preferred,
                straight,
                smart,
            },
        })
    }
}

fn parse_marker(marker: &str) -> Result<MarkerPair> {
    let mut chars = marker.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(glyph), None, _) => Ok(MarkerPair::symmetric(glyph)),
        (Some(open), Some(close), None) => Ok(MarkerPair::new(open, close)),
        _ => Err(Error::InvalidMarker(marker.to_string())),
    }
}

fn parse_markers<S: AsRef<str>>(markers: &[S], family: StyleFamily) -> Result<Vec<MarkerPair>> {
    if markers.is_empty() {
        return Err(Error::EmptyMarkerList(family));
    }
    markers.iter().map(|m| parse_marker(m.as_ref())).collect()
}

fn parse_defaults(markers: &[&str]) -> Vec<MarkerPair> {
    markers
        .iter()
        .map(|m| parse_marker(m).expect("defaults are valid"))
        .collect()
}

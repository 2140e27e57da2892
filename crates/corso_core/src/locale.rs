//! Supported presentation locales.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A supported presentation language.
///
/// The set is closed because every text table in the bot carries one string
/// per locale. Anything outside the set resolves to the default; resolution
/// happens on read and is only persisted when the user explicitly sets a
/// locale.
///
/// # Examples
///
/// ```
/// use corso_core::Locale;
///
/// assert_eq!(Locale::resolve(Some(" RU "), Locale::Ru), Locale::Ru);
/// assert_eq!(Locale::resolve(Some("tj"), Locale::Ru), Locale::Tj);
/// assert_eq!(Locale::resolve(Some("xx"), Locale::Ru), Locale::Ru);
/// assert_eq!(Locale::resolve(None, Locale::Tj), Locale::Tj);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian
    #[default]
    Ru,
    /// Tajik
    Tj,
}

impl Locale {
    /// Resolve a raw stored or user-supplied value against the supported
    /// set, falling back to `default` for absent or unsupported input.
    pub fn resolve(raw: Option<&str>, default: Locale) -> Locale {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| Locale::from_str(s).ok())
            .unwrap_or(default)
    }
}

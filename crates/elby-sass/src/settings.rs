//! Theme settings record and typed lookups.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The host persists theme settings as a flat key/value map. This module
//! provides:
//! - [`SettingValue`]: a single stored value (text, boolean or integer)
//! - [`SettingsStore`]: the read-only interface the compiler consumes
//! - [`ThemeSettings`]: an owned record loadable from JSON or YAML
//! - typed lookup helpers that recover from bad values by falling back
//!   to the caller's default
//!
//! # Configuration Formats
//!
//! ```yaml
//! brandcolor: "#1e3a8a"
//! coursecardstyle: bordered
//! coursecardshadow: false
//! fontbody: Poppins
//! scss: |
//!   .my-rule { color: red; }
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize, Serializer};

use crate::color::HexColor;
use crate::error::SettingsError;

/// Setting keys read by the compiler.
pub mod keys {
    pub const BRAND_COLOR: &str = "brandcolor";
    pub const SECONDARY_COLOR: &str = "secondarycolor";
    pub const SUCCESS_COLOR: &str = "successcolor";
    pub const INFO_COLOR: &str = "infocolor";
    pub const WARNING_COLOR: &str = "warningcolor";
    pub const DANGER_COLOR: &str = "dangercolor";
    pub const BODY_BG_COLOR: &str = "bodybgcolor";
    pub const BODY_TEXT_COLOR: &str = "bodytextcolor";
    pub const LINK_COLOR: &str = "linkcolor";

    pub const FONT_BODY: &str = "fontbody";
    pub const FONT_HEADINGS: &str = "fontheadings";
    pub const FONT_SIZE: &str = "fontsize";
    pub const BORDER_RADIUS: &str = "borderradius";

    pub const COURSE_CARD_STYLE: &str = "coursecardstyle";
    pub const COURSE_CARD_SHADOW: &str = "coursecardshadow";
    pub const COURSE_CARD_HOVER: &str = "coursecardhover";
    pub const COURSE_PROGRESS_COLOR: &str = "courseprogresscolor";
    pub const COURSE_COMPLETION_COLOR: &str = "coursecompletioncolor";
    pub const ACTIVITY_ICON_COLOR: &str = "activityiconcolor";

    pub const BUTTON_RADIUS: &str = "buttonradius";
    pub const BUTTON_STYLE: &str = "buttonstyle";
    pub const INPUT_FOCUS_COLOR: &str = "inputfocuscolor";
    pub const INPUT_RADIUS: &str = "inputradius";

    pub const BREADCRUMB_STYLE: &str = "breadcrumbstyle";
    pub const BREADCRUMB_COLOR: &str = "breadcrumbcolor";
    pub const NAV_BADGE_COLOR: &str = "navbadgecolor";
    pub const DASHBOARD_CARD_STYLE: &str = "dashboardcardstyle";

    pub const SCSS_PRE: &str = "scsspre";
    pub const SCSS: &str = "scss";
}

/// A single stored setting value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SettingValue {
    /// The value as text. Booleans render as `1`/`0`, the way checkbox
    /// settings are stored.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            SettingValue::Bool(true) => Cow::Borrowed("1"),
            SettingValue::Bool(false) => Cow::Borrowed("0"),
            SettingValue::Int(i) => Cow::Owned(i.to_string()),
            SettingValue::Float(f) => Cow::Owned(f.to_string()),
            SettingValue::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Whitespace-only text counts as unset.
    pub fn is_blank(&self) -> bool {
        matches!(self, SettingValue::Text(s) if s.trim().is_empty())
    }

    /// Checkbox semantics: anything except an explicit "off" is enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            SettingValue::Bool(b) => *b,
            SettingValue::Int(i) => *i != 0,
            SettingValue::Float(f) => *f != 0.0,
            SettingValue::Text(s) => !matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Float(value)
    }
}

/// Read access to the host's settings storage.
///
/// The compiler never writes through this interface.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<SettingValue>;
}

impl<S: BuildHasher> SettingsStore for HashMap<String, SettingValue, S> {
    fn get(&self, key: &str) -> Option<SettingValue> {
        HashMap::get(self, key).cloned()
    }
}

impl SettingsStore for BTreeMap<String, SettingValue> {
    fn get(&self, key: &str) -> Option<SettingValue> {
        BTreeMap::get(self, key).cloned()
    }
}

/// An owned snapshot of the theme settings.
///
/// `null` values in a loaded document are dropped, so they behave exactly
/// like absent keys.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Option<SettingValue>>")]
pub struct ThemeSettings {
    values: BTreeMap<String, SettingValue>,
}

impl ThemeSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<SettingValue> {
        self.values.remove(key)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<BTreeMap<String, Option<SettingValue>>> for ThemeSettings {
    fn from(raw: BTreeMap<String, Option<SettingValue>>) -> Self {
        Self {
            values: raw
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect(),
        }
    }
}

impl Serialize for ThemeSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl SettingsStore for ThemeSettings {
    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).cloned()
    }
}

/// Trimmed, non-empty text for `key`.
pub fn text_setting(settings: &dyn SettingsStore, key: &str) -> Option<String> {
    let value = settings.get(key)?;
    let text = value.as_text();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Text for `key` exactly as stored, if it has any non-whitespace content.
///
/// Used for raw SCSS fragments where indentation matters.
pub fn raw_setting(settings: &dyn SettingsStore, key: &str) -> Option<String> {
    let value = settings.get(key)?;
    let text = value.as_text();
    (!text.trim().is_empty()).then(|| text.into_owned())
}

/// A valid color for `key`, or `None` if unset or malformed.
///
/// Malformed values are logged and treated as unset.
pub fn color_setting(settings: &dyn SettingsStore, key: &str) -> Option<HexColor> {
    let raw = text_setting(settings, key)?;
    match HexColor::parse(&raw) {
        Ok(color) => Some(color),
        Err(err) => {
            tracing::warn!(key, error = %err, "Ignoring invalid color setting");
            None
        }
    }
}

/// A valid color for `key`, falling back to `default`.
pub fn color_or(settings: &dyn SettingsStore, key: &str, default: HexColor) -> HexColor {
    color_setting(settings, key).unwrap_or(default)
}

/// Checkbox value for `key`; unset or blank values use `default`.
pub fn flag_setting(settings: &dyn SettingsStore, key: &str, default: bool) -> bool {
    match settings.get(key) {
        Some(value) if !value.is_blank() => value.is_enabled(),
        _ => default,
    }
}

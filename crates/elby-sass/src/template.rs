//! `{{name}}` substitution for the embedded SCSS templates.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! SCSS itself uses `#{...}` for interpolation, so double braces never
//! collide with template content.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::color::HexColor;

/// Matches `{{ name }}` placeholders; captures the name in group 1.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([a-z][a-z0-9-]*)\s*\}\}").unwrap());

/// Named values substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVars {
    values: BTreeMap<&'static str, String>,
}

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.values.insert(name, value.into());
        self
    }

    /// Set `name` to the hex form and `name-rgb` to the channel triple.
    pub fn set_color(&mut self, name: &'static str, color: HexColor) -> &mut Self {
        self.values.insert(name, color.to_string());
        if let Some(rgb_name) = rgb_key(name) {
            self.values.insert(rgb_name, color.rgb().to_string());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

fn rgb_key(name: &str) -> Option<&'static str> {
    Some(match name {
        "brand" => "brand-rgb",
        "progress" => "progress-rgb",
        "completion" => "completion-rgb",
        "activity-icon" => "activity-icon-rgb",
        "input-focus" => "input-focus-rgb",
        "breadcrumb" => "breadcrumb-rgb",
        "badge" => "badge-rgb",
        _ => return None,
    })
}

/// Replace every placeholder in `template` with its value.
///
/// Unknown placeholders render as empty text and are logged.
pub fn render(template: &str, vars: &TemplateVars) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            match vars.get(name) {
                Some(value) => value.to_string(),
                None => {
                    tracing::warn!(placeholder = name, "Unknown template placeholder");
                    String::new()
                }
            }
        })
        .into_owned()
}

/// Append `block` to `out` as its own newline-terminated chunk.
pub(crate) fn push_block(out: &mut String, block: &str) {
    if block.trim().is_empty() {
        return;
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(block);
    if !block.ends_with('\n') {
        out.push('\n');
    }
}

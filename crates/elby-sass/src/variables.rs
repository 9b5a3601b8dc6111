//! SCSS variable declarations from branding settings.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! This is the "declare-if-present" stream. It is emitted ahead of the
//! host's framework variables, which are all declared with `!default`, so
//! a value set here wins and an unset key leaves the host default alone.
//! An unset key must therefore never produce a line.

use crate::color::HexColor;
use crate::settings::{SettingsStore, keys, text_setting};
use crate::template::push_block;

/// System font stack appended after a chosen body font.
const BODY_FONT_FALLBACK: &str = r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif"#;

/// System font stack appended after a chosen headings font.
const HEADINGS_FONT_FALLBACK: &str = r#"-apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif"#;

/// Font setting value meaning "use the host font".
const FONT_INHERIT: &str = "inherit";

#[derive(Debug, Clone, Copy)]
enum VariableKind {
    /// A hex color
    Color,
    /// A font family name followed by a fallback stack
    FontFamily { fallback: &'static str },
    /// A plain CSS length
    Length,
    /// A base radius, plus `-sm` and `-lg` variants derived from it
    Radius,
}

#[derive(Debug, Clone, Copy)]
struct VariableDef {
    key: &'static str,
    variable: &'static str,
    kind: VariableKind,
}

const fn def(key: &'static str, variable: &'static str, kind: VariableKind) -> VariableDef {
    VariableDef {
        key,
        variable,
        kind,
    }
}

/// Settings that map onto framework variables, in emission order.
const VARIABLES: &[VariableDef] = &[
    def(keys::BRAND_COLOR, "primary", VariableKind::Color),
    def(keys::SECONDARY_COLOR, "secondary", VariableKind::Color),
    def(keys::SUCCESS_COLOR, "success", VariableKind::Color),
    def(keys::INFO_COLOR, "info", VariableKind::Color),
    def(keys::WARNING_COLOR, "warning", VariableKind::Color),
    def(keys::DANGER_COLOR, "danger", VariableKind::Color),
    def(keys::BODY_BG_COLOR, "body-bg", VariableKind::Color),
    def(keys::BODY_TEXT_COLOR, "body-color", VariableKind::Color),
    def(keys::LINK_COLOR, "link-color", VariableKind::Color),
    def(
        keys::FONT_BODY,
        "font-family-base",
        VariableKind::FontFamily {
            fallback: BODY_FONT_FALLBACK,
        },
    ),
    def(
        keys::FONT_HEADINGS,
        "headings-font-family",
        VariableKind::FontFamily {
            fallback: HEADINGS_FONT_FALLBACK,
        },
    ),
    def(keys::FONT_SIZE, "font-size-base", VariableKind::Length),
    def(keys::BORDER_RADIUS, "border-radius", VariableKind::Radius),
];

/// SCSS variable names this block can declare (without `$`).
pub fn declared_variable_names() -> Vec<&'static str> {
    let mut names = Vec::new();
    for def in VARIABLES {
        names.push(def.variable);
        if matches!(def.kind, VariableKind::Radius) {
            names.push("border-radius-sm");
            names.push("border-radius-lg");
        }
    }
    names
}

/// Compile the variable block for `settings`.
///
/// One `$variable: value;` line per present setting, in a fixed order.
/// Unset keys and invalid values emit nothing.
///
/// # Example
///
/// ```rust
/// use elby_sass::{ThemeSettings, compile_variable_block};
///
/// let settings = ThemeSettings::new().with("brandcolor", "#1e3a8a");
/// assert_eq!(compile_variable_block(&settings), "$primary: #1e3a8a;\n");
/// ```
pub fn compile_variable_block(settings: &dyn SettingsStore) -> String {
    let mut out = String::new();

    for def in VARIABLES {
        let Some(raw) = text_setting(settings, def.key) else {
            continue;
        };

        let lines = match def.kind {
            VariableKind::Color => color_line(def, &raw),
            VariableKind::FontFamily { fallback } => font_line(def, &raw, fallback),
            VariableKind::Length => plain_value(def, &raw)
                .map(|value| format!("${}: {};\n", def.variable, value)),
            VariableKind::Radius => plain_value(def, &raw).map(|value| {
                format!(
                    "${var}: {value};\n${var}-sm: calc({value} * 0.5);\n${var}-lg: calc({value} * 1.5);\n",
                    var = def.variable
                )
            }),
        };

        if let Some(lines) = lines {
            push_block(&mut out, &lines);
        }
    }

    out
}

fn color_line(def: &VariableDef, raw: &str) -> Option<String> {
    match HexColor::parse(raw) {
        Ok(color) => Some(format!("${}: {};\n", def.variable, color)),
        Err(err) => {
            tracing::warn!(key = def.key, error = %err, "Leaving variable undeclared");
            None
        }
    }
}

fn font_line(def: &VariableDef, raw: &str, fallback: &str) -> Option<String> {
    if raw == FONT_INHERIT {
        return None;
    }
    let family = plain_value(def, raw)?;
    Some(format!("${}: \"{}\", {};\n", def.variable, family, fallback))
}

/// Accept a free-text value only if it cannot escape its declaration.
fn plain_value<'a>(def: &VariableDef, raw: &'a str) -> Option<&'a str> {
    if raw.contains(['"', '\'', ';', '{', '}', '\n', '\r']) {
        tracing::warn!(key = def.key, value = raw, "Leaving variable undeclared");
        return None;
    }
    Some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ThemeSettings;

    #[test]
    fn test_empty_settings_emit_nothing() {
        assert_eq!(compile_variable_block(&ThemeSettings::new()), "");
    }

    #[test]
    fn test_full_block() {
        let settings = ThemeSettings::new()
            .with("brandcolor", "#1e3a8a")
            .with("secondarycolor", "64748b")
            .with("successcolor", "#22c55e")
            .with("infocolor", "#06b6d4")
            .with("warningcolor", "#fbbf24")
            .with("dangercolor", "#ef4444")
            .with("bodybgcolor", "#f8f9fa")
            .with("bodytextcolor", "#1e293b")
            .with("linkcolor", "#00f")
            .with("fontbody", "Poppins")
            .with("fontheadings", "Montserrat")
            .with("fontsize", "0.9375rem")
            .with("borderradius", "8px");

        insta::assert_snapshot!(compile_variable_block(&settings), @r#"
        $primary: #1e3a8a;
        $secondary: #64748b;
        $success: #22c55e;
        $info: #06b6d4;
        $warning: #fbbf24;
        $danger: #ef4444;
        $body-bg: #f8f9fa;
        $body-color: #1e293b;
        $link-color: #0000ff;
        $font-family-base: "Poppins", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        $headings-font-family: "Montserrat", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
        $font-size-base: 0.9375rem;
        $border-radius: 8px;
        $border-radius-sm: calc(8px * 0.5);
        $border-radius-lg: calc(8px * 1.5);
        "#);
    }

    #[test]
    fn test_absent_keys_are_never_declared() {
        let settings = ThemeSettings::new().with("dangercolor", "#f00");
        let block = compile_variable_block(&settings);

        assert_eq!(block, "$danger: #ff0000;\n");
        for name in declared_variable_names() {
            if name != "danger" {
                assert!(!block.contains(&format!("${name}:")), "{name} leaked");
            }
        }
    }

    #[test]
    fn test_inherit_font_is_unset() {
        let settings = ThemeSettings::new()
            .with("fontbody", "inherit")
            .with("fontheadings", "inherit");
        assert_eq!(compile_variable_block(&settings), "");
    }

    #[test]
    fn test_invalid_values_are_unset() {
        let settings = ThemeSettings::new()
            .with("brandcolor", "not-a-color")
            .with("fontbody", "Evil\"; } body { x: y")
            .with("fontsize", "1rem; color: red")
            .with("linkcolor", "#abc");
        assert_eq!(compile_variable_block(&settings), "$link-color: #aabbcc;\n");
    }

    #[test]
    fn test_declared_variable_names() {
        let names = declared_variable_names();
        assert_eq!(names.first(), Some(&"primary"));
        assert!(names.contains(&"border-radius-sm"));
        assert!(names.contains(&"border-radius-lg"));
        assert_eq!(names.len(), 15);
    }
}

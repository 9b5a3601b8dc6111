//! Branding settings to SCSS compiler for the Elby theme.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! This crate provides:
//! - Settings records ([`ThemeSettings`], [`SettingsStore`]) and color parsing
//! - The variable block, emitted ahead of the host's `!default` layer
//! - Structural and component rule blocks built from embedded templates
//! - Stylesheet assembly, either as one text or as the two host streams
//! - File-area and web-font helpers the host needs alongside the stylesheet
//!
//! Generation never fails: malformed settings are logged with `tracing`
//! and replaced by their defaults.

mod assemble;
mod choices;
mod color;
mod components;
mod error;
mod files;
mod fonts;
mod palette;
mod resources;
mod settings;
mod structural;
mod template;
mod variables;

pub use assemble::{
    StylesheetLayers, assemble_stylesheet, assemble_stylesheet_with_files, host_defaults,
};
pub use choices::{
    BreadcrumbStyle, ButtonStyle, Choice, CourseCardStyle, DashboardCardStyle, RadiusStyle,
    choice_setting,
};
pub use color::{HexColor, Rgb, hex_to_rgb};
pub use components::{
    badge_rules, breadcrumb_rules, button_rules, compile_component_rules, course_card_rules,
    dashboard_rules, input_rules,
};
pub use error::{SettingsError, StyleError};
pub use files::{
    CAMPUS_LIFE_COUNT, EVENT_COUNT, FileArea, FileUrlResolver, HERO_SLIDE_COUNT, NoStoredFiles,
    TESTIMONIAL_COUNT,
};
pub use fonts::{WebFont, font_head_html, font_stylesheet_url};
pub use palette::{DEFAULT_BADGE_COLOR, DEFAULT_BRAND_COLOR, DEFAULT_COMPLETION_COLOR, Palette};
pub use resources::{EmbeddedTemplates, SCSS_TEMPLATES};
pub use settings::{SettingValue, SettingsStore, ThemeSettings, keys};
pub use structural::{STRUCTURAL_BLOCKS, compile_login_background_block, compile_structural_rules};
pub use template::{TemplateVars, render};
pub use variables::{compile_variable_block, declared_variable_names};

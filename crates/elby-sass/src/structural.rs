//! Fixed page structure rules and the login background block.
//!
//! Copyright (c) 2025 Posit, PBC

use crate::palette::Palette;
use crate::resources::scss_template;
use crate::settings::SettingsStore;
use crate::template::{TemplateVars, push_block, render};

/// Front-page and chrome blocks, in emission order.
///
/// Their relative order does not matter; they only need to come after the
/// variable declarations they reference.
pub const STRUCTURAL_BLOCKS: &[&str] = &[
    "structure/custom-properties.scss",
    "structure/navigation.scss",
    "structure/hero.scss",
    "structure/categories.scss",
    "structure/announcements.scss",
    "structure/feature.scss",
    "structure/campus-life.scss",
    "structure/testimonials.scss",
    "structure/statistics.scss",
    "structure/events.scss",
    "structure/footer.scss",
];

/// Compile the fixed structural blocks, colored with the brand color.
pub fn compile_structural_rules(settings: &dyn SettingsStore) -> String {
    let vars = Palette::resolve(settings).template_vars();
    let mut out = String::new();
    for path in STRUCTURAL_BLOCKS {
        push_block(&mut out, &render(scss_template(path), &vars));
    }
    out
}

/// Full-bleed login page background with a dark overlay.
///
/// Returns an empty string when there is no image. The URL is used as-is
/// apart from trimming and percent-encoding `"`, which would otherwise end
/// the `url("...")` string early.
pub fn compile_login_background_block(image_url: Option<&str>) -> String {
    let Some(url) = image_url.map(str::trim).filter(|url| !url.is_empty()) else {
        return String::new();
    };

    let mut vars = TemplateVars::new();
    vars.set("image-url", url.replace('"', "%22"));
    render(scss_template("structure/login-background.scss"), &vars)
}

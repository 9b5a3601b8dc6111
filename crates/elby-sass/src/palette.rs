//! Resolved brand colors for the rule templates.
//!
//! Copyright (c) 2025 Posit, PBC

use crate::color::{HexColor, Rgb};
use crate::settings::{SettingsStore, color_or, keys};
use crate::template::TemplateVars;

/// Brand color used when `brandcolor` is unset or invalid.
pub const DEFAULT_BRAND_COLOR: HexColor = HexColor::from_rgb(Rgb::new(0x1e, 0x3a, 0x8a));

/// Default for `coursecompletioncolor`.
pub const DEFAULT_COMPLETION_COLOR: HexColor = HexColor::from_rgb(Rgb::new(0x22, 0xc5, 0x5e));

/// Default for `navbadgecolor`.
pub const DEFAULT_BADGE_COLOR: HexColor = HexColor::from_rgb(Rgb::new(0xef, 0x44, 0x44));

/// Every color the rule templates reference, with defaults applied.
///
/// Colors that default to the brand color follow `brandcolor` when they
/// are unset themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub brand: HexColor,
    pub progress: HexColor,
    pub completion: HexColor,
    pub activity_icon: HexColor,
    pub input_focus: HexColor,
    pub breadcrumb: HexColor,
    pub badge: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_brand(DEFAULT_BRAND_COLOR)
    }
}

impl Palette {
    fn from_brand(brand: HexColor) -> Self {
        Self {
            brand,
            progress: brand,
            completion: DEFAULT_COMPLETION_COLOR,
            activity_icon: brand,
            input_focus: brand,
            breadcrumb: brand,
            badge: DEFAULT_BADGE_COLOR,
        }
    }

    /// Read every palette color from `settings`.
    pub fn resolve(settings: &dyn SettingsStore) -> Self {
        let brand = color_or(settings, keys::BRAND_COLOR, DEFAULT_BRAND_COLOR);
        Self {
            brand,
            progress: color_or(settings, keys::COURSE_PROGRESS_COLOR, brand),
            completion: color_or(
                settings,
                keys::COURSE_COMPLETION_COLOR,
                DEFAULT_COMPLETION_COLOR,
            ),
            activity_icon: color_or(settings, keys::ACTIVITY_ICON_COLOR, brand),
            input_focus: color_or(settings, keys::INPUT_FOCUS_COLOR, brand),
            breadcrumb: color_or(settings, keys::BREADCRUMB_COLOR, brand),
            badge: color_or(settings, keys::NAV_BADGE_COLOR, DEFAULT_BADGE_COLOR),
        }
    }

    /// Template variables for the palette.
    ///
    /// Each color is available as `{{name}}` (hex) and `{{name-rgb}}`
    /// (`r, g, b`); the brand color also as `{{brand-url}}` for `data:` URIs.
    pub fn template_vars(&self) -> TemplateVars {
        let mut vars = TemplateVars::new();
        vars.set_color("brand", self.brand)
            .set("brand-url", self.brand.url_encoded())
            .set_color("progress", self.progress)
            .set_color("completion", self.completion)
            .set_color("activity-icon", self.activity_icon)
            .set_color("input-focus", self.input_focus)
            .set_color("breadcrumb", self.breadcrumb)
            .set_color("badge", self.badge);
        vars
    }
}

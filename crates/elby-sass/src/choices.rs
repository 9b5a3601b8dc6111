//! Closed-set settings as sum types.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Each admin select box maps to one enum. The first variant listed is the
//! declared default, used when the setting is unset or holds a tag that is
//! not one of the declared choices.

use std::fmt;

use crate::error::StyleError;
use crate::settings::{SettingsStore, text_setting};

/// A setting whose value is one of a fixed set of string tags.
pub trait Choice: Copy + Eq + Default + fmt::Debug + 'static {
    /// All variants; the first one is the default.
    const VARIANTS: &'static [Self];

    /// The tag stored in settings for this variant.
    fn tag(self) -> &'static str;

    /// Parse a stored tag. Matching is exact after trimming.
    fn parse(key: &'static str, value: &str) -> Result<Self, StyleError> {
        let wanted = value.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.tag() == wanted)
            .ok_or_else(|| StyleError::UnknownEnumValue {
                key,
                value: value.to_string(),
            })
    }
}

/// Read a choice setting, falling back to the declared default.
///
/// Unknown tags are logged and replaced by the default rather than failing.
pub fn choice_setting<C: Choice>(settings: &dyn SettingsStore, key: &'static str) -> C {
    let Some(raw) = text_setting(settings, key) else {
        return C::default();
    };

    match C::parse(key, &raw) {
        Ok(choice) => choice,
        Err(err) => {
            let fallback = C::default();
            tracing::warn!(error = %err, fallback = fallback.tag(), "Using default for unknown choice");
            fallback
        }
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Choice for $name {
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn tag(self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::VARIANTS[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.tag())
            }
        }
    };
}

choice_enum! {
    /// Course card appearance (`coursecardstyle`).
    pub enum CourseCardStyle {
        /// Thin neutral border on white
        Default => "default",
        /// Brand-colored border
        Bordered => "bordered",
        /// Brand-tinted overlay on the card image
        Gradient => "gradient",
        /// No border, shadow or background
        Minimal => "minimal",
    }
}

choice_enum! {
    /// Corner radius for buttons (`buttonradius`) and inputs (`inputradius`).
    pub enum RadiusStyle {
        Rounded => "rounded",
        Sharp => "sharp",
        Pill => "pill",
    }
}

impl RadiusStyle {
    /// CSS length for this radius.
    pub fn radius(self) -> &'static str {
        match self {
            RadiusStyle::Rounded => "6px",
            RadiusStyle::Sharp => "0",
            RadiusStyle::Pill => "50px",
        }
    }
}

choice_enum! {
    /// Primary button treatment (`buttonstyle`).
    pub enum ButtonStyle {
        Solid => "solid",
        Gradient => "gradient",
        Outline => "outline",
    }
}

choice_enum! {
    /// Breadcrumb separator style (`breadcrumbstyle`).
    pub enum BreadcrumbStyle {
        Default => "default",
        Arrows => "arrows",
        Pills => "pills",
    }
}

choice_enum! {
    /// Dashboard block appearance (`dashboardcardstyle`).
    ///
    /// `compact` and `detailed` are offered by the admin form but share
    /// the default rules.
    pub enum DashboardCardStyle {
        Default => "default",
        Bordered => "bordered",
        Elevated => "elevated",
        Compact => "compact",
        Detailed => "detailed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ThemeSettings;

    #[test]
    fn test_first_variant_is_default() {
        assert_eq!(CourseCardStyle::default(), CourseCardStyle::Default);
        assert_eq!(RadiusStyle::default(), RadiusStyle::Rounded);
        assert_eq!(ButtonStyle::default(), ButtonStyle::Solid);
        assert_eq!(BreadcrumbStyle::default(), BreadcrumbStyle::Default);
        assert_eq!(DashboardCardStyle::default(), DashboardCardStyle::Default);
    }

    #[test]
    fn test_parse_round_trips_tags() {
        for variant in CourseCardStyle::VARIANTS {
            assert_eq!(
                CourseCardStyle::parse("coursecardstyle", variant.tag()),
                Ok(*variant)
            );
        }
        for variant in DashboardCardStyle::VARIANTS {
            assert_eq!(variant.to_string(), variant.tag());
        }
    }

    #[test]
    fn test_parse_unknown_value() {
        assert_eq!(
            ButtonStyle::parse("buttonstyle", "neon"),
            Err(StyleError::UnknownEnumValue {
                key: "buttonstyle",
                value: "neon".to_string()
            })
        );
        // Tags are case-sensitive
        assert!(RadiusStyle::parse("buttonradius", "Pill").is_err());
    }

    #[test]
    fn test_choice_setting_fails_open() {
        let settings = ThemeSettings::new()
            .with("buttonradius", " pill ")
            .with("buttonstyle", "neon")
            .with("inputradius", "");

        assert_eq!(
            choice_setting::<RadiusStyle>(&settings, "buttonradius"),
            RadiusStyle::Pill
        );
        assert_eq!(
            choice_setting::<ButtonStyle>(&settings, "buttonstyle"),
            ButtonStyle::Solid
        );
        assert_eq!(
            choice_setting::<RadiusStyle>(&settings, "inputradius"),
            RadiusStyle::Rounded
        );
        assert_eq!(
            choice_setting::<BreadcrumbStyle>(&settings, "breadcrumbstyle"),
            BreadcrumbStyle::Default
        );
    }

    #[test]
    fn test_radius_values() {
        assert_eq!(RadiusStyle::Rounded.radius(), "6px");
        assert_eq!(RadiusStyle::Sharp.radius(), "0");
        assert_eq!(RadiusStyle::Pill.radius(), "50px");
    }
}

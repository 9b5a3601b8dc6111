//! Hosted web font links for the page head.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The variable block only names the font family. When the family is one
//! of the hosted web fonts offered in the typography settings, the page
//! also needs a stylesheet link to load it.

use std::str::FromStr;

use crate::settings::{SettingsStore, keys, text_setting};

const FONTS_ORIGIN: &str = "https://fonts.googleapis.com";
const FONTS_STATIC_ORIGIN: &str = "https://fonts.gstatic.com";
const FONT_WEIGHTS: &str = "400;500;600;700";

/// Font families available from the hosted font service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebFont {
    OpenSans,
    Roboto,
    Poppins,
    Inter,
    Lato,
    Montserrat,
    Nunito,
    Raleway,
    SourceSansPro,
    WorkSans,
}

impl WebFont {
    /// The CSS family name, which is also the stored setting value.
    pub fn family(&self) -> &'static str {
        match self {
            WebFont::OpenSans => "Open Sans",
            WebFont::Roboto => "Roboto",
            WebFont::Poppins => "Poppins",
            WebFont::Inter => "Inter",
            WebFont::Lato => "Lato",
            WebFont::Montserrat => "Montserrat",
            WebFont::Nunito => "Nunito",
            WebFont::Raleway => "Raleway",
            WebFont::SourceSansPro => "Source Sans Pro",
            WebFont::WorkSans => "Work Sans",
        }
    }

    pub fn all() -> &'static [WebFont] {
        &[
            WebFont::OpenSans,
            WebFont::Roboto,
            WebFont::Poppins,
            WebFont::Inter,
            WebFont::Lato,
            WebFont::Montserrat,
            WebFont::Nunito,
            WebFont::Raleway,
            WebFont::SourceSansPro,
            WebFont::WorkSans,
        ]
    }

    /// `family=` query value, e.g. `Open+Sans:wght@400;500;600;700`.
    fn query_param(&self) -> String {
        format!("{}:wght@{}", self.family().replace(' ', "+"), FONT_WEIGHTS)
    }
}

impl FromStr for WebFont {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WebFont::all()
            .iter()
            .copied()
            .find(|font| font.family() == s)
            .ok_or(())
    }
}

fn web_font_setting(settings: &dyn SettingsStore, key: &str) -> Option<WebFont> {
    text_setting(settings, key)?.parse().ok()
}

/// Stylesheet URL loading the body and headings fonts.
///
/// Returns `None` when neither setting names a hosted web font. A headings
/// font equal to the body font is requested once.
pub fn font_stylesheet_url(settings: &dyn SettingsStore) -> Option<String> {
    let body = web_font_setting(settings, keys::FONT_BODY);
    let headings = web_font_setting(settings, keys::FONT_HEADINGS).filter(|h| Some(*h) != body);

    let families: Vec<String> = body
        .into_iter()
        .chain(headings)
        .map(|font| font.query_param())
        .collect();

    if families.is_empty() {
        return None;
    }

    Some(format!(
        "{FONTS_ORIGIN}/css2?family={}&display=swap",
        families.join("&family=")
    ))
}

/// `<link>` tags for the page head, or an empty string.
pub fn font_head_html(settings: &dyn SettingsStore) -> String {
    let Some(url) = font_stylesheet_url(settings) else {
        return String::new();
    };

    format!(
        r#"<link rel="preconnect" href="{FONTS_ORIGIN}"><link rel="preconnect" href="{FONTS_STATIC_ORIGIN}" crossorigin><link href="{url}" rel="stylesheet">"#
    )
}

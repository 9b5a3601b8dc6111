//! Stored-file areas and URL resolution.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The host stores uploaded images per named file area and serves them on
//! request. The compiler only needs the login background URL, but the full
//! area registry lives here so the host can reject requests for areas the
//! theme does not own.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

/// Number of hero carousel slides with image areas.
pub const HERO_SLIDE_COUNT: u8 = 10;
/// Number of campus life gallery images.
pub const CAMPUS_LIFE_COUNT: u8 = 4;
/// Number of event cards.
pub const EVENT_COUNT: u8 = 3;
/// Number of testimonial cards.
pub const TESTIMONIAL_COUNT: u8 = 3;

/// A file area the theme serves.
///
/// Indexed areas are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileArea {
    Logo,
    LogoCompact,
    Favicon,
    LoginBackgroundImage,
    HeroBackgroundImage,
    HeroSecondaryImage,
    FeatureSectionImage,
    HeroSlideMainImage(u8),
    HeroSlideSecondaryImage(u8),
    CampusLifeImage(u8),
    EventImage(u8),
    TestimonialImage(u8),
    CategoriesPlaceholder,
}

impl FileArea {
    /// The area name used by the host's file storage.
    pub fn name(&self) -> String {
        match self {
            FileArea::Logo => "logo".to_string(),
            FileArea::LogoCompact => "logocompact".to_string(),
            FileArea::Favicon => "favicon".to_string(),
            FileArea::LoginBackgroundImage => "loginbackgroundimage".to_string(),
            FileArea::HeroBackgroundImage => "herobackgroundimage".to_string(),
            FileArea::HeroSecondaryImage => "herosecondaryimage".to_string(),
            FileArea::FeatureSectionImage => "featuresectionimage".to_string(),
            FileArea::HeroSlideMainImage(n) => format!("heroslide{n}mainimage"),
            FileArea::HeroSlideSecondaryImage(n) => format!("heroslide{n}secondaryimage"),
            FileArea::CampusLifeImage(n) => format!("campuslife{n}image"),
            FileArea::EventImage(n) => format!("event{n}image"),
            FileArea::TestimonialImage(n) => format!("testimonial{n}image"),
            FileArea::CategoriesPlaceholder => "categoriesplaceholder".to_string(),
        }
    }

    /// Parse an area name.
    ///
    /// Returns `None` for names the theme does not serve, including indexed
    /// areas outside their range.
    pub fn parse(name: &str) -> Option<Self> {
        let area = match name {
            "logo" => FileArea::Logo,
            "logocompact" => FileArea::LogoCompact,
            "favicon" => FileArea::Favicon,
            "loginbackgroundimage" => FileArea::LoginBackgroundImage,
            "herobackgroundimage" => FileArea::HeroBackgroundImage,
            "herosecondaryimage" => FileArea::HeroSecondaryImage,
            "featuresectionimage" => FileArea::FeatureSectionImage,
            "categoriesplaceholder" => FileArea::CategoriesPlaceholder,
            _ => parse_indexed(name)?,
        };
        Some(area)
    }

    /// Every servable area, in a stable order.
    pub fn all() -> Vec<FileArea> {
        let mut areas = vec![
            FileArea::Logo,
            FileArea::LogoCompact,
            FileArea::Favicon,
            FileArea::LoginBackgroundImage,
            FileArea::HeroBackgroundImage,
            FileArea::HeroSecondaryImage,
            FileArea::FeatureSectionImage,
        ];
        for n in 1..=HERO_SLIDE_COUNT {
            areas.push(FileArea::HeroSlideMainImage(n));
            areas.push(FileArea::HeroSlideSecondaryImage(n));
        }
        areas.extend((1..=CAMPUS_LIFE_COUNT).map(FileArea::CampusLifeImage));
        areas.extend((1..=EVENT_COUNT).map(FileArea::EventImage));
        areas.extend((1..=TESTIMONIAL_COUNT).map(FileArea::TestimonialImage));
        areas.push(FileArea::CategoriesPlaceholder);
        areas
    }
}

impl fmt::Display for FileArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Split `<prefix><n><suffix>` and return `n` if it is in `1..=max`.
///
/// Leading zeros are rejected so every area has exactly one name.
fn index_between(name: &str, prefix: &str, suffix: &str, max: u8) -> Option<u8> {
    let digits = name.strip_prefix(prefix)?.strip_suffix(suffix)?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let n: u8 = digits.parse().ok()?;
    (1..=max).contains(&n).then_some(n)
}

fn parse_indexed(name: &str) -> Option<FileArea> {
    if let Some(n) = index_between(name, "heroslide", "mainimage", HERO_SLIDE_COUNT) {
        return Some(FileArea::HeroSlideMainImage(n));
    }
    if let Some(n) = index_between(name, "heroslide", "secondaryimage", HERO_SLIDE_COUNT) {
        return Some(FileArea::HeroSlideSecondaryImage(n));
    }
    if let Some(n) = index_between(name, "campuslife", "image", CAMPUS_LIFE_COUNT) {
        return Some(FileArea::CampusLifeImage(n));
    }
    if let Some(n) = index_between(name, "event", "image", EVENT_COUNT) {
        return Some(FileArea::EventImage(n));
    }
    index_between(name, "testimonial", "image", TESTIMONIAL_COUNT).map(FileArea::TestimonialImage)
}

/// Resolves a file area to the public URL of its stored file.
pub trait FileUrlResolver {
    fn url_for(&self, area: FileArea) -> Option<String>;
}

/// A resolver with no stored files.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStoredFiles;

impl FileUrlResolver for NoStoredFiles {
    fn url_for(&self, _area: FileArea) -> Option<String> {
        None
    }
}

impl<S: BuildHasher> FileUrlResolver for HashMap<FileArea, String, S> {
    fn url_for(&self, area: FileArea) -> Option<String> {
        self.get(&area).cloned()
    }
}

impl<F> FileUrlResolver for F
where
    F: Fn(FileArea) -> Option<String>,
{
    fn url_for(&self, area: FileArea) -> Option<String> {
        self(area)
    }
}

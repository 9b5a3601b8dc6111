//! Embedded SCSS templates.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! All literal rule blocks live under `resources/scss/` and are embedded at
//! compile time:
//!
//! - `structure/`: fixed page blocks (navigation, hero, footer, ...)
//! - `components/`: per-subsystem variant blocks
//! - `host/`: the reference `!default` layer

use std::collections::BTreeSet;
use std::sync::OnceLock;

use include_dir::{Dir, DirEntry, include_dir};

static SCSS_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/resources/scss");

/// SCSS templates embedded in the binary.
pub static SCSS_TEMPLATES: EmbeddedTemplates = EmbeddedTemplates::new(&SCSS_DIR);

/// A tree of embedded text files addressed by `/`-separated relative paths.
pub struct EmbeddedTemplates {
    dir: &'static Dir<'static>,
    /// Lazily built index of every file path.
    files: OnceLock<BTreeSet<String>>,
}

impl EmbeddedTemplates {
    pub const fn new(dir: &'static Dir<'static>) -> Self {
        Self {
            dir,
            files: OnceLock::new(),
        }
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.files().contains(path)
    }

    /// Read a template as UTF-8 text.
    pub fn read_str(&self, path: &str) -> Option<&'static str> {
        self.dir.get_file(path).and_then(|f| f.contents_utf8())
    }

    /// All template paths, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files().iter().map(String::as_str)
    }

    fn files(&self) -> &BTreeSet<String> {
        self.files.get_or_init(|| {
            let mut files = BTreeSet::new();
            collect_files(self.dir, &mut files);
            files
        })
    }
}

fn collect_files(dir: &Dir<'_>, files: &mut BTreeSet<String>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => collect_files(sub, files),
            DirEntry::File(file) => {
                files.insert(file.path().to_string_lossy().replace('\\', "/"));
            }
        }
    }
}

/// Read a template that ships with the crate.
///
/// A missing template renders as nothing so generation still succeeds.
pub(crate) fn scss_template(path: &str) -> &'static str {
    match SCSS_TEMPLATES.read_str(path) {
        Some(content) => content,
        None => {
            tracing::error!(path, "Embedded SCSS template not found");
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_indexed() {
        assert!(SCSS_TEMPLATES.is_file("structure/navigation.scss"));
        assert!(SCSS_TEMPLATES.is_file("components/buttons/solid.scss"));
        assert!(SCSS_TEMPLATES.is_file("host/defaults.scss"));
        assert!(!SCSS_TEMPLATES.is_file("structure/missing.scss"));
    }

    #[test]
    fn test_paths_are_sorted_scss_files() {
        let paths: Vec<&str> = SCSS_TEMPLATES.paths().collect();
        assert!(paths.len() > 30);
        assert!(paths.iter().all(|p| p.ends_with(".scss")));
        assert!(paths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_read_nested_template() {
        let content = SCSS_TEMPLATES
            .read_str("components/course-cards/minimal.scss")
            .unwrap();
        assert!(content.contains("border: none;"));
    }

    #[test]
    fn test_missing_template_is_empty() {
        assert_eq!(scss_template("nope.scss"), "");
    }
}

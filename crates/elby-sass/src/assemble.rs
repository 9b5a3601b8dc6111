//! Stylesheet assembly.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The generated SCSS is split into the two streams a host theme pipeline
//! expects:
//!
//! 1. PRE: raw `scsspre`, then the variable block. Everything here is
//!    declared without `!default` so it wins over the host's base layer.
//! 2. (host) the host's own `!default` variable layer
//! 3. EXTRA: login background, structural blocks, component rules, then
//!    raw `scss` last so hand-written overrides win the cascade.
//!
//! Hosts without a base layer of their own use [`assemble_stylesheet`],
//! which is simply PRE followed by EXTRA.

use crate::components::compile_component_rules;
use crate::files::{FileArea, FileUrlResolver, NoStoredFiles};
use crate::resources::scss_template;
use crate::settings::{SettingsStore, keys, raw_setting};
use crate::structural::{compile_login_background_block, compile_structural_rules};
use crate::template::push_block;
use crate::variables::compile_variable_block;

const HOST_DEFAULTS_PATH: &str = "host/defaults.scss";

/// Reference `!default` base layer.
///
/// Declares every framework variable the generated rules reference, with
/// the host's stock values. Hosts that ship their own base layer do not
/// need this.
pub fn host_defaults() -> &'static str {
    scss_template(HOST_DEFAULTS_PATH)
}

/// The generated stylesheet, split around the host's `!default` layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StylesheetLayers {
    /// Raw `scsspre` and the variable block.
    pub pre: String,
    /// Structural rules, component rules and raw `scss`.
    pub extra: String,
}

impl StylesheetLayers {
    pub fn build(settings: &dyn SettingsStore, files: &dyn FileUrlResolver) -> Self {
        let mut pre = String::new();
        if let Some(scss_pre) = raw_setting(settings, keys::SCSS_PRE) {
            push_block(&mut pre, &scss_pre);
        }
        push_block(&mut pre, &compile_variable_block(settings));

        let mut extra = String::new();
        let login_url = files.url_for(FileArea::LoginBackgroundImage);
        push_block(
            &mut extra,
            &compile_login_background_block(login_url.as_deref()),
        );
        push_block(&mut extra, &compile_structural_rules(settings));
        push_block(&mut extra, &compile_component_rules(settings));

        // Appended verbatim so the fragment is an exact suffix.
        if let Some(scss) = raw_setting(settings, keys::SCSS) {
            if !extra.is_empty() && !extra.ends_with('\n') {
                extra.push('\n');
            }
            extra.push_str(&scss);
        }

        tracing::debug!(
            pre_bytes = pre.len(),
            extra_bytes = extra.len(),
            login_background = login_url.is_some(),
            "Assembled stylesheet layers"
        );

        StylesheetLayers { pre, extra }
    }

    /// Interleave a host `!default` layer between the two streams.
    pub fn compose(&self, host_defaults: &str) -> String {
        let mut out = self.pre.clone();
        push_block(&mut out, host_defaults);
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&self.extra);
        out
    }

    pub fn into_stylesheet(self) -> String {
        let mut out = self.pre;
        out.push_str(&self.extra);
        out
    }
}

/// Assemble the full stylesheet for `settings` with no stored files.
pub fn assemble_stylesheet(settings: &dyn SettingsStore) -> String {
    assemble_stylesheet_with_files(settings, &NoStoredFiles)
}

/// Assemble the full stylesheet, resolving the login background image
/// through `files`.
///
/// Order: `scsspre`, variables, login background, structural blocks,
/// component rules, `scss`.
pub fn assemble_stylesheet_with_files(
    settings: &dyn SettingsStore,
    files: &dyn FileUrlResolver,
) -> String {
    StylesheetLayers::build(settings, files).into_stylesheet()
}

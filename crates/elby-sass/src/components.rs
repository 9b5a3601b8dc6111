//! Per-subsystem component rules.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Every UI subsystem reads its own settings and picks a rule block by
//! looking its variant up in a table. Subsystems are independent: the card
//! style never influences the button rules and so on.
//!
//! Emission order:
//! 1. Course cards (base, variant, shadow, hover, progress, completion, activity icons)
//! 2. Buttons (radius, style)
//! 3. Form inputs
//! 4. Breadcrumbs (base, style)
//! 5. Notification badges
//! 6. Dashboard blocks (style, overview)

use crate::choices::{
    BreadcrumbStyle, ButtonStyle, Choice, CourseCardStyle, DashboardCardStyle, RadiusStyle,
    choice_setting,
};
use crate::palette::Palette;
use crate::resources::scss_template;
use crate::settings::{SettingsStore, flag_setting, keys};
use crate::template::{TemplateVars, push_block, render};

const COURSE_CARD_BLOCKS: &[(CourseCardStyle, &str)] = &[
    (CourseCardStyle::Default, "components/course-cards/default.scss"),
    (CourseCardStyle::Bordered, "components/course-cards/bordered.scss"),
    (CourseCardStyle::Gradient, "components/course-cards/gradient.scss"),
    (CourseCardStyle::Minimal, "components/course-cards/minimal.scss"),
];

const BUTTON_STYLE_BLOCKS: &[(ButtonStyle, &str)] = &[
    (ButtonStyle::Solid, "components/buttons/solid.scss"),
    (ButtonStyle::Gradient, "components/buttons/gradient.scss"),
    (ButtonStyle::Outline, "components/buttons/outline.scss"),
];

const BREADCRUMB_BLOCKS: &[(BreadcrumbStyle, &str)] = &[
    (BreadcrumbStyle::Default, "components/breadcrumbs/default.scss"),
    (BreadcrumbStyle::Arrows, "components/breadcrumbs/arrows.scss"),
    (BreadcrumbStyle::Pills, "components/breadcrumbs/pills.scss"),
];

const DASHBOARD_BLOCKS: &[(DashboardCardStyle, &str)] = &[
    (DashboardCardStyle::Default, "components/dashboard/default.scss"),
    (DashboardCardStyle::Bordered, "components/dashboard/bordered.scss"),
    (DashboardCardStyle::Elevated, "components/dashboard/elevated.scss"),
    (DashboardCardStyle::Compact, "components/dashboard/default.scss"),
    (DashboardCardStyle::Detailed, "components/dashboard/default.scss"),
];

/// Find the template for `variant`, using the default variant's entry if
/// the table has none.
fn block_for<C: Choice>(table: &[(C, &'static str)], variant: C) -> &'static str {
    let lookup = |wanted: C| {
        table
            .iter()
            .find(|(candidate, _)| *candidate == wanted)
            .map(|(_, path)| *path)
    };
    lookup(variant)
        .or_else(|| lookup(C::default()))
        .unwrap_or_default()
}

fn push_template(out: &mut String, path: &str, vars: &TemplateVars) {
    push_block(out, &render(scss_template(path), vars));
}

/// Compile the component rules for `settings`.
pub fn compile_component_rules(settings: &dyn SettingsStore) -> String {
    let vars = Palette::resolve(settings).template_vars();
    let mut out = String::new();

    push_block(&mut out, &course_card_rules(settings, &vars));
    push_block(&mut out, &button_rules(settings, &vars));
    push_block(&mut out, &input_rules(settings, &vars));
    push_block(&mut out, &breadcrumb_rules(settings, &vars));
    push_block(&mut out, &badge_rules(&vars));
    push_block(&mut out, &dashboard_rules(settings, &vars));

    out
}

/// Course cards, progress bars, completion badges and activity icons.
///
/// Shadow and hover are on unless explicitly switched off.
pub fn course_card_rules(settings: &dyn SettingsStore, vars: &TemplateVars) -> String {
    let style: CourseCardStyle = choice_setting(settings, keys::COURSE_CARD_STYLE);
    let mut out = String::new();

    push_template(&mut out, "components/course-cards/base.scss", vars);
    push_template(&mut out, block_for(COURSE_CARD_BLOCKS, style), vars);
    if flag_setting(settings, keys::COURSE_CARD_SHADOW, true) {
        push_template(&mut out, "components/course-cards/shadow.scss", vars);
    }
    if flag_setting(settings, keys::COURSE_CARD_HOVER, true) {
        push_template(&mut out, "components/course-cards/hover.scss", vars);
    }
    push_template(&mut out, "components/course-cards/progress.scss", vars);
    push_template(&mut out, "components/course-cards/completion.scss", vars);
    push_template(&mut out, "components/course-cards/activity-icons.scss", vars);

    out
}

pub fn button_rules(settings: &dyn SettingsStore, vars: &TemplateVars) -> String {
    let radius: RadiusStyle = choice_setting(settings, keys::BUTTON_RADIUS);
    let style: ButtonStyle = choice_setting(settings, keys::BUTTON_STYLE);

    let mut radius_vars = vars.clone();
    radius_vars.set("radius", radius.radius());

    let mut out = String::new();
    push_template(&mut out, "components/buttons/radius.scss", &radius_vars);
    push_template(&mut out, block_for(BUTTON_STYLE_BLOCKS, style), vars);
    out
}

pub fn input_rules(settings: &dyn SettingsStore, vars: &TemplateVars) -> String {
    let radius: RadiusStyle = choice_setting(settings, keys::INPUT_RADIUS);

    let mut input_vars = vars.clone();
    input_vars.set("radius", radius.radius());

    render(scss_template("components/forms/inputs.scss"), &input_vars)
}

pub fn breadcrumb_rules(settings: &dyn SettingsStore, vars: &TemplateVars) -> String {
    let style: BreadcrumbStyle = choice_setting(settings, keys::BREADCRUMB_STYLE);

    let mut out = String::new();
    push_template(&mut out, "components/breadcrumbs/base.scss", vars);
    push_template(&mut out, block_for(BREADCRUMB_BLOCKS, style), vars);
    out
}

pub fn badge_rules(vars: &TemplateVars) -> String {
    render(scss_template("components/badges.scss"), vars)
}

pub fn dashboard_rules(settings: &dyn SettingsStore, vars: &TemplateVars) -> String {
    let style: DashboardCardStyle = choice_setting(settings, keys::DASHBOARD_CARD_STYLE);

    let mut out = String::new();
    push_template(&mut out, block_for(DASHBOARD_BLOCKS, style), vars);
    push_template(&mut out, "components/dashboard/overview.scss", vars);
    out
}

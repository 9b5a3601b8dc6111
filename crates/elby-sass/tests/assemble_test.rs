//! Integration tests for stylesheet assembly from stored settings.
//!
//! Settings arrive as the host's flat key/value record, so most of these
//! start from a JSON or YAML document.

use std::collections::HashMap;

use elby_sass::{
    FileArea, Palette, SettingValue, SettingsStore, ThemeSettings, assemble_stylesheet,
    assemble_stylesheet_with_files, compile_variable_block, course_card_rules,
    declared_variable_names, font_head_html, hex_to_rgb,
};

const SETTINGS_JSON: &str = r##"{
    "brandcolor": "#1e3a8a",
    "successcolor": "16a34a",
    "coursecardstyle": "bordered",
    "coursecardshadow": 0,
    "coursecardhover": true,
    "buttonradius": "pill",
    "buttonstyle": "outline",
    "breadcrumbstyle": "arrows",
    "dashboardcardstyle": "compact",
    "fontbody": "Poppins",
    "logo": null,
    "scss": ".elby-hero { min-height: 70vh; }"
}"##;

const SETTINGS_YAML: &str = r##"
brandcolor: "#2563eb"
fontbody: Inter
fontheadings: Inter
coursecardstyle: minimal
inputradius: sharp
scsspre: |
  $elby-hero-height: 70vh;
"##;

#[test]
fn test_json_settings() {
    let settings = ThemeSettings::from_json_str(SETTINGS_JSON).expect("valid JSON");
    assert_eq!(settings.get("logo"), None);

    let css = assemble_stylesheet(&settings);

    assert!(css.starts_with("$primary: #1e3a8a;\n$success: #16a34a;\n"));
    assert!(css.contains("border: 2px solid #1e3a8a;"));
    assert!(css.contains("border-radius: 50px !important;"));
    assert!(css.contains("content: \"→\" !important;"));
    assert!(!css.contains("box-shadow: 0 4px 15px rgba(0, 0, 0, 0.08);"));
    assert!(css.contains("transform: translateY(-5px);"));
    assert!(css.ends_with(".elby-hero { min-height: 70vh; }"));
}

#[test]
fn test_yaml_settings() {
    let settings = ThemeSettings::from_yaml_str(SETTINGS_YAML).expect("valid YAML");
    let css = assemble_stylesheet(&settings);

    assert!(css.starts_with("$elby-hero-height: 70vh;\n$primary: #2563eb;\n"));
    assert!(css.contains("$font-family-base: \"Inter\""));
    assert!(css.contains("border: none;"));
    assert!(css.contains("border-radius: 0 !important;"));

    assert_eq!(
        font_head_html(&settings).matches("family=Inter").count(),
        1
    );
}

#[test]
fn test_fractional_font_size() {
    let settings = ThemeSettings::from_json_str(r#"{"fontsize": 1.5}"#).expect("valid JSON");
    assert_eq!(compile_variable_block(&settings), "$font-size-base: 1.5;\n");
}

#[test]
fn test_malformed_documents_are_errors() {
    assert!(ThemeSettings::from_json_str("{ not json").is_err());
    assert!(ThemeSettings::from_json_str("[1, 2]").is_err());
    assert!(ThemeSettings::from_yaml_str("brandcolor: [unterminated").is_err());
}

#[test]
fn test_plain_map_store() {
    let mut map: HashMap<String, SettingValue> = HashMap::new();
    map.insert("buttonradius".into(), "pill".into());
    map.insert("brandcolor".into(), "#abc".into());

    let css = assemble_stylesheet(&map);
    assert!(css.starts_with("$primary: #aabbcc;\n"));
    assert!(css.contains("border-radius: 50px !important"));
}

#[test]
fn test_three_digit_hex_matches_expanded() {
    let digits = "0123456789abcdefABCDEF";
    for a in digits.chars() {
        for b in ["0", "7", "f", "C"] {
            let short = format!("{a}{b}{a}");
            let long: String = short.chars().flat_map(|c| [c, c]).collect();
            assert_eq!(hex_to_rgb(&short), hex_to_rgb(&long), "{short}");
            assert_eq!(hex_to_rgb(&format!("#{short}")), hex_to_rgb(&long));
        }
    }
}

#[test]
fn test_absent_color_keys_never_declared() {
    let color_keys = [
        ("brandcolor", "primary"),
        ("secondarycolor", "secondary"),
        ("successcolor", "success"),
        ("infocolor", "info"),
        ("warningcolor", "warning"),
        ("dangercolor", "danger"),
        ("bodybgcolor", "body-bg"),
        ("bodytextcolor", "body-color"),
        ("linkcolor", "link-color"),
    ];

    for (skip, variable) in color_keys {
        let mut settings = ThemeSettings::new();
        for (key, _) in color_keys {
            if key != skip {
                settings.set(key, "#336699");
            }
        }
        let block = compile_variable_block(&settings);
        assert!(!block.contains(&format!("${variable}:")), "{variable} declared");
        assert_eq!(block.lines().count(), color_keys.len() - 1);
    }
}

#[test]
fn test_variable_block_only_declares_known_names() {
    let settings = ThemeSettings::from_json_str(SETTINGS_JSON).expect("valid JSON");
    let names = declared_variable_names();
    for line in compile_variable_block(&settings).lines() {
        let name = line
            .strip_prefix('$')
            .and_then(|rest| rest.split(':').next())
            .expect("declaration line");
        assert!(names.contains(&name), "{name}");
    }
}

#[test]
fn test_bordered_and_minimal_are_exclusive() {
    let bordered = ThemeSettings::new().with("coursecardstyle", "bordered");
    let minimal = ThemeSettings::new().with("coursecardstyle", "minimal");

    let bordered_css = course_card_rules(
        &bordered,
        &Palette::resolve(&bordered).template_vars(),
    );
    let minimal_css = course_card_rules(&minimal, &Palette::resolve(&minimal).template_vars());

    assert!(bordered_css.contains("border: 2px solid #1e3a8a;"));
    assert!(!bordered_css.contains("border: none;"));
    assert!(minimal_css.contains("border: none;"));
    assert!(!minimal_css.contains("border: 2px solid"));
}

#[test]
fn test_append_suffix_across_configurations() {
    let fragment = "body { letter-spacing: 0.01em; }\n";
    let configs = [
        ThemeSettings::new(),
        ThemeSettings::from_json_str(SETTINGS_JSON).expect("valid JSON"),
        ThemeSettings::from_yaml_str(SETTINGS_YAML).expect("valid YAML"),
    ];

    for mut settings in configs {
        settings.set("scss", fragment);
        let css = assemble_stylesheet(&settings);
        assert!(css.ends_with(fragment));
        assert_eq!(css, assemble_stylesheet(&settings));
    }
}

#[test]
fn test_login_background_scenarios() {
    let settings = ThemeSettings::new();
    assert!(!assemble_stylesheet(&settings).contains(".pagelayout-login"));

    let url = "https://lms.example.org/pluginfile.php/1/theme_elby/loginbackgroundimage/0/b%20g.jpg";
    let resolver = |area: FileArea| (area == FileArea::LoginBackgroundImage).then(|| url.to_string());
    let css = assemble_stylesheet_with_files(&settings, &resolver);

    assert!(css.contains(&format!("background-image: url(\"{url}\");")));
    assert!(css.contains("background-color: rgba(0, 0, 0, 0.5);"));
}

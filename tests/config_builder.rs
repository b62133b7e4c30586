//! ConfigBuilder integration tests
//!
//! Catalog contents, includes/excludes resolution, and builder options.

use launcher_matrix::{
    lint_config, BuildError, BuilderOptions, ConfigBuilder, Exclude, Includes, LauncherMap,
    LintError, Spec,
};
use serde_json::json;

/// Desktop launcher names, without mobile devices.
const ALL_KEYS: &[&str] = &[
    "ChromeWin",
    "FirefoxWin",
    "OperaWin",
    "Edge",
    "IE11",
    "IE10",
    "IE9",
    "IE8",
    "Safari12",
    "Safari11",
    "Safari10",
    "Safari9",
];

fn keys<V>(map: &LauncherMap<V>) -> Vec<String> {
    map.keys().map(str::to_string).collect()
}

fn all_keys() -> Vec<String> {
    ALL_KEYS.iter().map(|k| k.to_string()).collect()
}

fn spec_from(value: serde_json::Value) -> Spec {
    serde_json::from_value(value).unwrap()
}

// === Default options ===

#[test]
fn test_constructs_without_options() {
    let builder = ConfigBuilder::default();
    assert_eq!(builder.names().count(), ALL_KEYS.len());
}

#[test]
fn test_all_returns_desktop_launchers() {
    let builder = ConfigBuilder::default();
    let configs = builder.get_configs("all").unwrap();

    assert_eq!(keys(&configs), all_keys());
    assert!(configs.values().all(|d| d.base == "BrowserStack"));
    assert!(!configs.contains_key("Android4_4"));
}

#[test]
fn test_equivalent_all_forms() {
    let builder = ConfigBuilder::default();
    let expected = builder.get_configs("all").unwrap();

    let forms = [
        spec_from(json!({})),
        spec_from(json!({"includes": null})),
        spec_from(json!({"includes": "all"})),
        spec_from(json!("all")),
        Spec::from(Includes::All),
        Spec::names(ALL_KEYS.iter().copied()),
        spec_from(json!({"excludes": []})),
        spec_from(json!({"excludes": [{"pattern": "@@DOESNOTMATCH@@"}]})),
    ];

    for spec in forms {
        assert_eq!(builder.get_configs(spec).unwrap(), expected);
    }
}

#[test]
fn test_empty_results() {
    let builder = ConfigBuilder::default();

    let empty_includes = builder.get_configs(spec_from(json!({"includes": []}))).unwrap();
    assert!(empty_includes.is_empty());

    let exclude_all = Spec::all();
    let exclude_all = ALL_KEYS.iter().fold(exclude_all, |s, k| s.exclude(*k));
    assert!(builder.get_configs(exclude_all).unwrap().is_empty());

    let exclude_pattern = spec_from(json!({"excludes": [{"pattern": ".*"}]}));
    assert!(builder.get_configs(exclude_pattern).unwrap().is_empty());
}

#[test]
fn test_default_base() {
    let builder = ConfigBuilder::default();
    let configs = builder.get_configs(Spec::names(["ChromeWin"])).unwrap();
    assert_eq!(configs.get("ChromeWin").unwrap().base, "BrowserStack");
}

#[test]
fn test_single_include_matches_excluding_the_rest() {
    let builder = ConfigBuilder::default();

    let by_include = builder.get_configs(Spec::names(["ChromeWin"])).unwrap();
    let by_exclude = builder
        .get_configs(
            ALL_KEYS
                .iter()
                .filter(|k| **k != "ChromeWin")
                .fold(Spec::all(), |s, k| s.exclude(*k)),
        )
        .unwrap();
    let by_shorthand = builder.get_configs("ChromeWin").unwrap();

    assert_eq!(keys(&by_include), vec!["ChromeWin"]);
    assert_eq!(by_include, by_exclude);
    assert_eq!(by_include, by_shorthand);

    let chrome = by_include.get("ChromeWin").unwrap();
    assert_eq!(chrome.browser, "Chrome");
    assert_eq!(chrome.os, "Windows");
    assert_eq!(chrome.os_version, "10");
}

#[test]
fn test_includes_then_excludes() {
    let builder = ConfigBuilder::default();
    let spec = Spec::names(["IE11", "IE10", "Edge"])
        .exclude_pattern("^IE1")
        .unwrap();
    let configs = builder.get_configs(spec).unwrap();
    assert_eq!(keys(&configs), vec!["Edge"]);
}

#[test]
fn test_mixed_excludes() {
    let builder = ConfigBuilder::default();
    let spec = Spec::all()
        .exclude("Edge")
        .exclude(Exclude::pattern("^Safari").unwrap());
    let configs = builder.get_configs(spec).unwrap();

    assert_eq!(
        keys(&configs),
        vec!["ChromeWin", "FirefoxWin", "OperaWin", "IE11", "IE10", "IE9", "IE8"]
    );
}

#[test]
fn test_unknown_include() {
    let builder = ConfigBuilder::default();
    let err = builder.get_configs("Konqueror").unwrap_err();
    assert_eq!(
        err,
        BuildError::UnknownName {
            name: "Konqueror".to_string()
        }
    );
}

#[test]
fn test_repeated_calls_are_equal_copies() {
    let builder = ConfigBuilder::default();
    let mut first = builder.get_configs("all").unwrap();
    let second = builder.get_configs("all").unwrap();
    assert_eq!(first, second);

    first.remove("Edge");
    first.insert(
        "ChromeWin",
        launcher_matrix::LauncherDescriptor::new("x", "y", "z", "0"),
    );
    assert_eq!(builder.get_configs("all").unwrap(), second);
}

#[test]
fn test_full_catalog_passes_lint() {
    let builder = ConfigBuilder::new(BuilderOptions::default().with_mobile(true));
    let configs = builder.get_configs("all").unwrap();
    assert!(lint_config(&configs).is_ok());
}

#[test]
fn test_merged_duplicate_fails_lint() {
    let builder = ConfigBuilder::default();
    let mut configs = builder.get_configs(Spec::names(["IE9", "Edge"])).unwrap();
    let copy = configs.get("IE9").unwrap().clone();
    configs.insert("OldIE", copy);

    assert_eq!(
        lint_config(&configs),
        Err(LintError::DuplicateConfiguration {
            key: "OldIE".to_string()
        })
    );
}

// === Custom options ===

#[test]
fn test_custom_base() {
    let builder = ConfigBuilder::new(BuilderOptions::default().with_base("fnord"));
    let configs = builder.get_configs("all").unwrap();

    assert_eq!(configs.get("ChromeWin").unwrap().base, "fnord");
    assert!(configs.values().all(|d| d.base == "fnord"));
}

#[test]
fn test_custom_prefix() {
    let builder = ConfigBuilder::new(BuilderOptions::default().with_prefix("Custom"));
    let configs = builder.get_configs("all").unwrap();

    let expected: Vec<String> = ALL_KEYS.iter().map(|k| format!("Custom{}", k)).collect();
    assert_eq!(keys(&configs), expected);
}

#[test]
fn test_mobile_on() {
    let builder = ConfigBuilder::new(BuilderOptions::default().with_mobile(true));
    let configs = builder.get_configs("all").unwrap();

    assert_eq!(configs.len(), ALL_KEYS.len() + 1);
    let android = configs.get("Android4_4").unwrap();
    assert_eq!(android.browser, "android");
    assert_eq!(android.device.as_deref(), Some("Samsung Galaxy Tab 4"));
    assert_eq!(android.real_mobile, Some(true));
}

#[test]
fn test_mobile_with_prefix() {
    let options = BuilderOptions::default()
        .with_prefix("Bs")
        .with_mobile(true);
    let builder = ConfigBuilder::new(options);
    let configs = builder.get_configs("all").unwrap();

    assert!(configs.contains_key("BsAndroid4_4"));
    assert!(!configs.contains_key("Android4_4"));
}

#[test]
fn test_options_from_json() {
    let options: BuilderOptions =
        serde_json::from_value(json!({"base": "fnord", "prefix": "P", "mobile": true})).unwrap();
    let builder = ConfigBuilder::new(options);

    assert_eq!(builder.base(), "fnord");
    assert!(builder.catalog().contains("PAndroid4_4"));
}

#[test]
fn test_output_serializes_in_include_order() {
    let builder = ConfigBuilder::default();
    let configs = builder.get_configs(Spec::names(["IE9", "ChromeWin"])).unwrap();
    let json = serde_json::to_string(&configs).unwrap();

    let ie9 = json.find("\"IE9\"").unwrap();
    let chrome = json.find("\"ChromeWin\"").unwrap();
    assert!(ie9 < chrome);
    assert!(json.contains("\"browser_version\":\"9\""));
}

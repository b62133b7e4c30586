//! Lint behavior over mappings with caller-defined iteration order.

use launcher_lint::{lint_config, no_duplicates, JsonLauncher, LintError, LintReport};
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};

/// Minimal insertion-ordered mapping, like a launcher table assembled by hand.
struct Ordered(Vec<(String, Value)>);

impl<'a> IntoIterator for &'a Ordered {
    type Item = (&'a String, &'a Value);
    type IntoIter = Box<dyn Iterator<Item = (&'a String, &'a Value)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter().map(|(k, v)| (k, v)))
    }
}

fn ordered(entries: &[(&str, Value)]) -> Ordered {
    Ordered(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

#[test]
fn test_insertion_order_decides_reported_key() {
    let config = ordered(&[
        ("zeta", json!({"browser": "Chrome"})),
        ("alpha", json!({"browser": "Chrome"})),
    ]);
    assert_eq!(
        lint_config(&config),
        Err(LintError::DuplicateConfiguration {
            key: "alpha".to_string()
        })
    );
}

#[test]
fn test_only_first_of_several_duplicates_reported() {
    let config = ordered(&[
        ("IE9", json!({"browser": "IE", "browser_version": "9"})),
        ("Edge", json!({"browser": "Edge"})),
        ("EdgeAgain", json!({"browser": "Edge"})),
        ("IE9Again", json!({"browser": "IE", "browser_version": "9"})),
    ]);
    assert_eq!(
        no_duplicates(&config),
        Err(LintError::DuplicateConfiguration {
            key: "EdgeAgain".to_string()
        })
    );
}

#[test]
fn test_empty_takes_priority() {
    let config = ordered(&[]);
    let result = lint_config(&config);
    assert_eq!(result, Err(LintError::EmptyConfiguration));

    let report = LintReport::from_result(0, &result);
    assert_eq!(report.code.as_deref(), Some("EMPTY_CONFIGURATION"));
}

#[test]
fn test_hash_map_input() {
    let mut config: HashMap<String, Value> = HashMap::new();
    config.insert("ChromeWin".to_string(), json!({"browser": "Chrome"}));
    config.insert("FirefoxWin".to_string(), json!({"browser": "Firefox"}));
    assert!(lint_config(&config).is_ok());
}

#[test]
fn test_single_entry_passes() {
    let config = ordered(&[("only", json!({"os": "Windows"}))]);
    assert!(lint_config(&config).is_ok());
}

#[test]
fn test_json_numbers_equal_by_value() {
    let config: BTreeMap<String, JsonLauncher> = serde_json::from_value(json!({
        "a": {"os": "Windows", "v": 1},
        "b": {"os": "Windows", "v": 1.0},
    }))
    .unwrap();
    assert_eq!(
        lint_config(&config),
        Err(LintError::DuplicateConfiguration {
            key: "b".to_string()
        })
    );
}

#[test]
fn test_json_strings_and_numbers_stay_distinct() {
    let config: BTreeMap<String, JsonLauncher> = serde_json::from_value(json!({
        "a": {"os_version": "10"},
        "b": {"os_version": 10},
        "c": {"device": null},
        "d": {},
    }))
    .unwrap();
    assert!(lint_config(&config).is_ok());
}

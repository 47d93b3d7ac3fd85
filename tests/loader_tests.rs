use parcoords::data_types::{ChartConfig, LogScaleMode, RawValue};
use parcoords::loader::{records_from_json_str, records_from_json_value};
use parcoords::{infer, AttributeType};
use serde_json::json;

#[test]
fn test_json_records_keep_key_order() {
    let records = records_from_json_str(
        r#"[
            {"zeta": 1, "alpha": "a", "mid": true},
            {"zeta": 2, "alpha": "b", "mid": null}
        ]"#,
    )
    .unwrap();
    assert_eq!(records.len(), 2);
    let names: Vec<&str> = records[0].iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    assert_eq!(records[1].get("mid"), Some(&RawValue::Null));

    let typed = infer(&records).unwrap();
    assert_eq!(typed.attributes(), &["zeta", "alpha", "mid"]);
    assert_eq!(typed.attribute_type("mid"), Some(AttributeType::Boolean));
}

#[test]
fn test_nested_values_become_strings() {
    let records = records_from_json_value(json!([
        {"tags": ["a", "b"]},
        {"tags": 3}
    ]))
    .unwrap();
    let typed = infer(&records).unwrap();
    assert_eq!(typed.attribute_type("tags"), Some(AttributeType::String));
    assert_eq!(typed.decode("tags", 0), Some("[\"a\",\"b\"]"));
    assert_eq!(typed.decode("tags", 1), Some("3"));
}

#[test]
fn test_rejects_non_array_and_non_object_rows() {
    assert!(records_from_json_str("{\"a\": 1}").is_err());
    assert!(records_from_json_str("[1, 2]").is_err());
    assert!(records_from_json_str("not json").is_err());
    assert!(records_from_json_str("[]").unwrap().is_empty());
}

#[test]
fn test_config_defaults_and_overrides() {
    let config = ChartConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ChartConfig::default());
    assert_eq!(config.selected_opacity, 0.8);
    assert_eq!(config.deselected_opacity, 0.1);

    let config = ChartConfig::from_json_str(
        r#"{"excluded_attributes": ["name", "year"], "color_attribute": "year", "log_scale": "never"}"#,
    )
    .unwrap();
    assert!(config.is_excluded("year"));
    assert!(!config.is_excluded("mpg"));
    assert_eq!(config.color_attribute.as_deref(), Some("year"));
    assert_eq!(config.log_scale, LogScaleMode::Never);

    assert!(ChartConfig::from_json_str(r#"{"log_scale": "sometimes"}"#).is_err());
}

#[test]
fn test_raw_values_deserialize_untagged() {
    let values: Vec<RawValue> = serde_json::from_str(r#"[null, true, 2, 2.5, "s"]"#).unwrap();
    assert_eq!(
        values,
        vec![
            RawValue::Null,
            RawValue::Boolean(true),
            RawValue::Number(2.0),
            RawValue::Number(2.5),
            RawValue::String("s".to_string()),
        ]
    );
}

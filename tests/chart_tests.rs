use parcoords::data_types::{ChartConfig, LogScaleMode, RawValue, Record};
use parcoords::{AttributeType, ChartError, ParallelChart};

fn cars() -> Vec<Record> {
    vec![
        Record::new()
            .with("name", "civic")
            .with("origin", "japan")
            .with("hp", 70)
            .with("weight", 2000)
            .with("wheels", 4),
        Record::new()
            .with("name", "mustang")
            .with("origin", "usa")
            .with("hp", 200)
            .with("weight", 3200)
            .with("wheels", 4),
        Record::new()
            .with("name", "corolla")
            .with("origin", "japan")
            .with("hp", 90)
            .with("weight", 2300)
            .with("wheels", 4),
        Record::new()
            .with("name", "golf")
            .with("origin", "germany")
            .with("hp", 110)
            .with("weight", 2600)
            .with("wheels", 4),
    ]
}

fn chart() -> ParallelChart {
    let config = ChartConfig {
        excluded_attributes: vec!["name".to_string()],
        ..Default::default()
    };
    ParallelChart::new(&cars(), config).unwrap()
}

#[test]
fn test_axes_skip_excluded_and_degenerate() {
    let chart = chart();
    assert_eq!(chart.axes(), vec!["origin", "hp", "weight"]);
    assert_eq!(
        chart.annotations(),
        vec![("wheels", &RawValue::Number(4.0))]
    );
    // excluded attributes are still typed
    assert_eq!(
        chart.dataset().attribute_type("name"),
        Some(AttributeType::String)
    );
}

#[test]
fn test_empty_records_rejected() {
    let err = ParallelChart::new(&[], ChartConfig::default()).unwrap_err();
    assert_eq!(err, ChartError::EmptyDataset);
}

#[test]
fn test_default_color_axis() {
    assert_eq!(chart().color_axis(), Some("origin"));

    let config = ChartConfig {
        color_attribute: Some("weight".to_string()),
        ..Default::default()
    };
    let chart = ParallelChart::new(&cars(), config).unwrap();
    assert_eq!(chart.color_axis(), Some("weight"));

    let config = ChartConfig {
        color_attribute: Some("nonexistent".to_string()),
        ..Default::default()
    };
    let chart = ParallelChart::new(&cars(), config).unwrap();
    assert_eq!(chart.color_axis(), Some("name"));
}

#[test]
fn test_color_values() {
    let mut chart = chart();
    chart.set_color_axis("hp").unwrap();
    assert_eq!(chart.color_value(0), Some(0.0));
    assert_eq!(chart.color_value(1), Some(1.0));
    let mid = chart.color_value(3).unwrap();
    assert!((mid - 40.0 / 130.0).abs() < 1e-12);
    assert_eq!(chart.color_value(99), None);

    assert_eq!(
        chart.set_color_axis("torque"),
        Err(ChartError::UnknownAttribute("torque".to_string()))
    );
    assert_eq!(chart.color_axis(), Some("hp"));
}

#[test]
fn test_brushing_drives_visibility() {
    let mut chart = chart();
    assert_eq!(chart.visible_rows(), vec![0, 1, 2, 3]);

    chart.brush("hp", Some((120.0, 60.0))).unwrap();
    assert_eq!(chart.visible_rows(), vec![0, 2, 3]);

    chart.brush("weight", Some((2100.0, 3300.0))).unwrap();
    assert_eq!(chart.visible_rows(), vec![2, 3]);
    assert_eq!(chart.opacity(2), 0.8);
    assert_eq!(chart.opacity(0), 0.1);
    assert_eq!(chart.selected_records().len(), 2);

    chart.brush("hp", None).unwrap();
    assert_eq!(chart.visible_rows(), vec![1, 2, 3]);

    assert!(chart.brush("weight", Some((f64::NAN, 1.0))).is_err());
    assert_eq!(
        chart.brush("torque", Some((0.0, 1.0))),
        Err(ChartError::UnknownAttribute("torque".to_string()))
    );
    assert_eq!(chart.brushes().len(), 1);
}

#[test]
fn test_brush_on_category_codes() {
    let mut chart = chart();
    let japan = chart.dataset().code_table("origin").unwrap().code("japan").unwrap();
    chart
        .brush("origin", Some((japan as f64, japan as f64)))
        .unwrap();
    assert_eq!(chart.visible_rows(), vec![0, 2]);
}

#[test]
fn test_drill_down_and_reset() {
    let mut chart = chart();
    chart.set_color_axis("hp").unwrap();
    chart.brush("hp", Some((0.0, 80.0))).unwrap();

    let japan = chart.dataset().code_table("origin").unwrap().code("japan").unwrap();
    assert_eq!(chart.drill_down("origin", japan as f64).unwrap(), 2);
    assert_eq!(chart.view(), &[0, 2]);
    assert!(chart.brushes().is_empty());
    assert_eq!(chart.visible_rows(), vec![0, 2]);
    assert!(!chart.is_visible(1));

    // color domain follows the view: hp 70..90
    assert_eq!(chart.color_value(2), Some(1.0));

    assert_eq!(chart.drill_down("origin", 99.0).unwrap(), 0);
    assert!(chart.visible_rows().is_empty());
    assert!(chart.drill_down("torque", 0.0).is_err());

    chart.reset();
    assert_eq!(chart.view(), &[0, 1, 2, 3]);
    assert_eq!(chart.visible_rows(), vec![0, 1, 2, 3]);
    assert_eq!(chart.color_axis(), Some("origin"));
}

#[test]
fn test_reset_clears_brushes() {
    let mut chart = chart();
    chart.brush("hp", Some((0.0, 1.0))).unwrap();
    assert!(chart.visible_rows().is_empty());
    chart.reset();
    assert!(chart.brushes().is_empty());
    assert_eq!(chart.visible_rows().len(), 4);
}

#[test]
fn test_reload_replaces_dataset_and_brushes() {
    let mut chart = chart();
    chart.brush("hp", Some((0.0, 100.0))).unwrap();

    let planets = vec![
        Record::new().with("planet", "mercury").with("mass", 0.33),
        Record::new().with("planet", "earth").with("mass", 5.97),
        Record::new().with("planet", "jupiter").with("mass", 1898.0),
    ];
    chart.reload(&planets).unwrap();
    assert!(chart.brushes().is_empty());
    assert_eq!(chart.dataset().len(), 3);
    assert_eq!(chart.axes(), vec!["planet", "mass"]);
    assert_eq!(chart.color_axis(), Some("planet"));
    assert_eq!(chart.dataset().attribute_type("mass"), Some(AttributeType::NumberLog));

    // a failed reload keeps the previous dataset
    assert!(chart.reload(&[]).is_err());
    assert_eq!(chart.dataset().len(), 3);
}

#[test]
fn test_log_scale_disabled_by_config() {
    let records = vec![
        Record::new().with("m", 1),
        Record::new().with("m", 10),
        Record::new().with("m", 100),
        Record::new().with("m", 1000),
    ];
    let config = ChartConfig {
        log_scale: LogScaleMode::Never,
        ..Default::default()
    };
    let chart = ParallelChart::new(&records, config).unwrap();
    assert_eq!(
        chart.dataset().attribute_type("m"),
        Some(AttributeType::NumberLinear)
    );
}

#[test]
fn test_only_axes_can_be_brushed() {
    let mut chart = chart();

    // constant column: every car has four wheels
    assert_eq!(
        chart.brush("wheels", Some((0.0, 1.0))),
        Err(ChartError::NotBrushable("wheels".to_string()))
    );
    // excluded by the config
    assert_eq!(
        chart.brush("name", Some((0.0, 0.0))),
        Err(ChartError::NotBrushable("name".to_string()))
    );
    assert!(chart.brushes().is_empty());
    assert_eq!(chart.visible_rows(), vec![0, 1, 2, 3]);

    // clearing is always accepted
    chart.brush("wheels", None).unwrap();
}

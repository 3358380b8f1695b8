mod test_utils;

use bs_curves::{
    price_curves, render_svg, render_svg_string, sweep_maturities, write_csv, ChartOptions,
    CurveConfig,
};
use test_utils::{default_contract, default_grid, labels};

/// The default configuration gives four curves of twenty points.
#[test]
fn test_price_curves_default_config() {
    let curves = price_curves(&CurveConfig::default()).expect("default config prices");

    assert_eq!(labels(&curves), vec!["4", "3", "2", "1"]);
    assert!(curves.iter().all(|c| c.curve.points.len() == 20));
}

#[test]
fn test_price_curves_wide_preset() {
    let curves = price_curves(&CurveConfig::wide()).expect("wide preset prices");

    assert_eq!(labels(&curves), vec!["5", "4", "3", "2", "1"]);
    assert_eq!(curves[0].curve.points.len(), 200);
    assert_eq!(curves[0].curve.points[0].0, 50.0);
}

#[test]
fn test_price_curves_reports_config_section() {
    let mut config = CurveConfig::default();
    config.contract.strike = 0.0;

    let err = price_curves(&config).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("[contract]"), "unexpected error: {}", message);
    assert!(message.contains("strike"), "unexpected error: {}", message);
}

#[test]
fn test_config_load_from_file() {
    let path = std::env::temp_dir().join(format!("bs_curves_config_{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
        [grid]
        low = 80.0
        high = 120.0
        delta = 2.0

        [contract]
        strike = 100.0
        rate = 0.01
        volatility = 0.2

        [maturities]
        values = [1.0, 0.5]

        [output]
        csv_path = "curves.csv"
        "#,
    )
    .unwrap();

    let config = CurveConfig::load(&path).expect("config loads");
    std::fs::remove_file(&path).ok();

    assert_eq!(config.contract.rate, 0.01);
    assert_eq!(config.output.csv_path.as_deref(), Some(std::path::Path::new("curves.csv")));
    assert!(config.output.svg);

    let curves = price_curves(&config).unwrap();
    assert_eq!(labels(&curves), vec!["1", "0.5"]);
    assert_eq!(curves[0].curve.points.len(), 20);
}

#[test]
fn test_config_load_missing_file() {
    let err = CurveConfig::load("/nonexistent/bs_curves.toml").unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read config file"));
}

#[test]
fn test_csv_export_rows() {
    let curves = sweep_maturities(&default_grid(), &default_contract(), &[2.0, 1.0]).unwrap();

    let mut buf = Vec::new();
    write_csv(&curves, &mut buf).unwrap();

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["label", "maturity", "spot", "price"]);

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 40);
    assert_eq!(&records[0][0], "2");
    assert_eq!(records[0][2].parse::<f64>().unwrap(), 90.0);
    assert_eq!(&records[20][0], "1");

    let price: f64 = records[10][3].parse().unwrap();
    assert_eq!(price, curves[0].curve.points[10].1);
}

#[test]
fn test_csv_export_empty_has_header() {
    let mut buf = Vec::new();
    write_csv(&[], &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap().trim(), "label,maturity,spot,price");
}

#[test]
fn test_svg_contains_caption() {
    let curves = price_curves(&CurveConfig::default()).unwrap();
    let options = ChartOptions {
        caption: "ATM value curves".to_string(),
        ..ChartOptions::default()
    };

    let svg = render_svg_string(&curves, &options).expect("chart renders");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("ATM value curves"));
}

#[test]
fn test_svg_requires_points() {
    assert!(render_svg_string(&[], &ChartOptions::default()).is_err());
}

#[test]
fn test_svg_written_to_file() {
    let curves = price_curves(&CurveConfig::default()).unwrap();
    let path = std::env::temp_dir().join(format!("bs_curves_chart_{}.svg", std::process::id()));

    render_svg(&curves, &ChartOptions::default(), &path).expect("chart written");
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(text.contains("<svg"));
}

#[test]
fn test_shipped_wide_config_matches_preset() {
    let from_file = price_curves(&CurveConfig::load("configs/wide.toml").unwrap()).unwrap();
    let preset = price_curves(&CurveConfig::wide()).unwrap();
    assert_eq!(from_file, preset);
}

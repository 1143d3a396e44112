use measureit::config::Config;
use measureit::units::{
    format_value, parse_quantity, render, units_for, Category, ConversionEngine, ConversionError,
    ConversionRequest, OutputFormat, Report, Unit, UnitPolicy,
};

#[test]
fn test_form_submission_pounds_to_ounces() {
    let request = ConversionRequest::from_labels("Weight", "Pounds", "Ounces", "1").unwrap();
    let result = ConversionEngine::default().run(request).unwrap();

    assert!((result.result - 16.0).abs() < 1e-3);
    assert_eq!(result.formatted(2), "16.00");
}

#[test]
fn test_category_selection_defaults_target() {
    for category in Category::ALL {
        let units = units_for(category);
        assert_eq!(category.default_target(), units[1]);
    }

    let request = ConversionRequest::new(
        Category::Temperature,
        Unit::Celsius,
        Category::Temperature.default_target(),
        100.0,
    )
    .unwrap();
    let result = ConversionEngine::default().run(request).unwrap();
    assert_eq!(result.formatted(2), "212.00");
}

#[test]
fn test_invalid_input_is_reported_before_conversion() {
    for raw in ["", "  ", "abc", "1,5", "NaN", "-inf"] {
        let err = ConversionRequest::from_labels("Distance", "Meters", "Miles", raw).unwrap_err();
        assert!(err.is_input_error(), "{:?} should be an input error", raw);
    }
}

#[test]
fn test_quantity_expression_to_json() {
    let quantity = parse_quantity("5 km").unwrap();
    let category = quantity.unit.category();
    let request =
        ConversionRequest::new(category, quantity.unit, Unit::Miles, quantity.value).unwrap();
    let result = ConversionEngine::default().run(request).unwrap();

    let json = render(&Report::from_result(&result, 3), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["category"], "Distance");
    assert_eq!(value["from"], "Kilometers");
    assert_eq!(value["formatted"], "3.107");
}

#[test]
fn test_policy_from_config_controls_unknown_units() {
    let config = Config::from_toml(r#"unit_policy = "passthrough""#).unwrap();
    let engine = ConversionEngine::new(config.unit_policy);
    assert_eq!(engine.policy(), UnitPolicy::Passthrough);

    let value = engine
        .convert_labels("Weight", "Stones", "Grams", "2")
        .unwrap();
    assert_eq!(value, 2000.0);

    let strict = ConversionEngine::new(Config::default().unit_policy);
    assert!(matches!(
        strict.convert_labels("Weight", "Stones", "Grams", "2"),
        Err(ConversionError::UnknownUnit { .. })
    ));
}

#[test]
fn test_notices_follow_the_error_kind() {
    let bad_number = ConversionRequest::from_labels("Weight", "Grams", "Kilograms", "12kg")
        .unwrap_err();
    assert_eq!(bad_number.notice(), "Please enter a valid value");

    let bad_unit = parse_quantity("3 furlongs").unwrap_err();
    assert!(bad_unit.notice().starts_with("Conversion error"));

    let overflow = ConversionEngine::default()
        .convert_labels("Weight", "Kilograms", "Grams", "1e308")
        .unwrap_err();
    assert!(overflow.notice().starts_with("Conversion error"));
}

#[test]
fn test_display_rounding_matches_half_up() {
    let request = ConversionRequest::from_labels("Weight", "Grams", "Kilograms", "125").unwrap();
    let result = ConversionEngine::default().run(request).unwrap();
    assert_eq!(result.formatted(2), "0.13");
    assert_eq!(format_value(-1.005, 2), "-1.01");
}

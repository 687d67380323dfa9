use approx::assert_relative_eq;
use hooke_components::{
    ForceError,
    spring::{CheckedSpring, SpringConfig},
};
use hooke_core::Model;
use hooke_units::Dimension;
use uom::si::force::newton;

#[test]
fn evaluate_toml_config() {
    let config: SpringConfig = toml::from_str(
        r#"
        displacement = "10 cm"
        spring_constant = "2.5 kN/m"
        "#,
    )
    .unwrap();

    let output = CheckedSpring.call(&config).unwrap();
    assert_relative_eq!(output.force.get::<newton>(), -250.0, max_relative = 1e-12);

    let kn = output.force_in("kN").unwrap();
    assert_relative_eq!(kn.value(), -0.25, max_relative = 1e-12);
    assert_eq!(kn.unit().map(|unit| unit.symbol()), Some("kN"));
}

#[test]
fn evaluate_json_configs() {
    let test_cases = [
        (r#"{"displacement": "0.2 m", "spring_constant": "100 N/m"}"#, -20.0),
        (r#"{"displacement": "0.1 m", "spring_constant": "100 N/m"}"#, -10.0),
        (r#"{"displacement": "-0.1 m", "spring_constant": "100 N/m"}"#, 10.0),
        (r#"{"displacement": "0 m", "spring_constant": "100 N/m"}"#, 0.0),
    ];

    for (json, expected) in test_cases {
        let config: SpringConfig = serde_json::from_str(json).unwrap();
        let output = CheckedSpring.call(&config).unwrap();
        assert_relative_eq!(output.force.get::<newton>(), expected, epsilon = 1e-12);
    }
}

#[test]
fn config_with_wrong_dimension_fails_on_call() {
    let config: SpringConfig =
        serde_json::from_str(r#"{"displacement": "3 min", "spring_constant": "100 N/m"}"#)
            .unwrap();

    let error = CheckedSpring.call(&config).unwrap_err();
    assert_eq!(
        error,
        ForceError::DimensionMismatch {
            parameter: "displacement",
            expected: Dimension::LENGTH,
            found: Dimension::TIME,
        }
    );
    assert_eq!(
        error.to_string(),
        "dimension mismatch for `displacement`: expected length, got time"
    );
}

#[test]
fn config_with_malformed_magnitude_fails_to_load() {
    let result = toml::from_str::<SpringConfig>(
        r#"
        displacement = "ten cm"
        spring_constant = "100 N/m"
        "#,
    );
    assert!(result.is_err());

    let result = serde_json::from_str::<SpringConfig>(
        r#"{"displacement": "1 m", "spring_constant": "100 N/zorkmid"}"#,
    );
    let message = result.unwrap_err().to_string();
    assert!(message.contains("zorkmid"), "{message}");
}

#[test]
fn config_roundtrips_through_toml() {
    let config = SpringConfig::new("0.25 m".parse().unwrap(), "40 N/m".parse().unwrap());
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains(r#"displacement = "0.25 m""#), "{text}");

    let back: SpringConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

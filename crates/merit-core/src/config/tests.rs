use std::str::FromStr;

use super::*;

#[test]
fn test_relative_defaults() {
    let config = ScalarizerConfig::relative(&[0.2, 0.4]);
    assert!(config.validate().is_ok());
    assert_eq!(config.tier_count(), 2);
    assert_eq!(config.softness(), DEFAULT_SOFTNESS);
    for spec in config.objectives() {
        assert_eq!(spec.goal, Goal::Minimize);
        assert!(matches!(spec.tolerance, Tolerance::Relative(_)));
    }
}

#[test]
fn test_from_parts_defaults_to_relative_minimize() {
    let config = ScalarizerConfig::from_parts(&[0.5, 0.1], None, None, None, 1e-3).unwrap();
    assert_eq!(config.objectives()[0].tolerance, Tolerance::Relative(0.5));
    assert_eq!(config.objectives()[1].goal, Goal::Minimize);
}

#[test]
fn test_from_parts_mixed_kinds() {
    let config = ScalarizerConfig::from_parts(
        &[0.5, 7.0, 0.9],
        Some(&[false, true, false]),
        Some(&[false, false, true]),
        Some(&[Goal::Minimize, Goal::Maximize, Goal::Minimize]),
        1e-3,
    )
    .unwrap();
    assert_eq!(config.objectives()[0].tolerance, Tolerance::Relative(0.5));
    assert_eq!(config.objectives()[1].tolerance, Tolerance::Absolute(7.0));
    assert_eq!(config.objectives()[2].tolerance, Tolerance::Percentile(0.9));
    assert_eq!(config.objectives()[1].goal, Goal::Maximize);
}

#[test]
fn test_from_parts_length_mismatch() {
    let err = ScalarizerConfig::from_parts(&[0.5, 0.5], Some(&[true]), None, None, 1e-3)
        .unwrap_err();
    assert!(matches!(
        err,
        MeritError::LengthMismatch {
            field: "absolutes",
            expected: 2,
            actual: 1,
        }
    ));

    let err = ScalarizerConfig::from_parts(&[0.5], None, Some(&[true, false]), None, 1e-3)
        .unwrap_err();
    assert!(matches!(
        err,
        MeritError::LengthMismatch {
            field: "percentiles",
            ..
        }
    ));

    let err = ScalarizerConfig::from_parts(&[0.5], None, None, Some(&[]), 1e-3).unwrap_err();
    assert!(matches!(err, MeritError::LengthMismatch { field: "goals", .. }));
}

#[test]
fn test_from_parts_conflicting_flags() {
    let err = ScalarizerConfig::from_parts(
        &[0.5, 0.5],
        Some(&[false, true]),
        Some(&[false, true]),
        None,
        1e-3,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        MeritError::ConflictingToleranceKind { tier: 1 }
    ));
}

#[test]
fn test_relative_tolerance_out_of_range() {
    let err = ScalarizerConfig::from_parts(&[1.5], None, None, None, 1e-3).unwrap_err();
    assert!(matches!(
        err,
        MeritError::ToleranceOutOfRange { tier: 0, .. }
    ));

    // Negative relative tolerances are rejected too
    let config = ScalarizerConfig::relative(&[-0.1]);
    assert!(config.validate().is_err());
}

#[test]
fn test_percentile_tolerance_out_of_range() {
    let config = ScalarizerConfig::new(
        vec![ObjectiveSpec::minimize(Tolerance::Percentile(1.2))],
        1e-3,
    );
    assert!(matches!(
        config.validate().unwrap_err(),
        MeritError::ToleranceOutOfRange { tier: 0, .. }
    ));
}

#[test]
fn test_absolute_tolerance_unconstrained() {
    let config = ScalarizerConfig::new(
        vec![ObjectiveSpec::minimize(Tolerance::Absolute(-273.15))],
        1e-3,
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_non_finite_tolerance_rejected() {
    let config = ScalarizerConfig::new(
        vec![ObjectiveSpec::minimize(Tolerance::Absolute(f64::NAN))],
        1e-3,
    );
    assert!(config.validate().is_err());
}

#[test]
fn test_empty_objectives_rejected() {
    let config = ScalarizerConfig::new(vec![], 1e-3);
    assert!(matches!(
        config.validate().unwrap_err(),
        MeritError::EmptyObjectives
    ));
}

#[test]
fn test_softness_validation() {
    let spec = ObjectiveSpec::minimize(Tolerance::Relative(0.5));

    // Zero softness is valid: hard-step behavior
    assert!(ScalarizerConfig::new(vec![spec], 0.0).validate().is_ok());

    let err = ScalarizerConfig::new(vec![spec], -1e-3)
        .validate()
        .unwrap_err();
    assert!(matches!(err, MeritError::InvalidSoftness { .. }));

    let err = ScalarizerConfig::new(vec![spec], f64::INFINITY)
        .validate()
        .unwrap_err();
    assert!(matches!(err, MeritError::InvalidSoftness { .. }));
}

#[test]
fn test_goal_from_str() {
    assert_eq!(Goal::from_str("min").unwrap(), Goal::Minimize);
    assert_eq!(Goal::from_str("MINIMIZE").unwrap(), Goal::Minimize);
    assert_eq!(Goal::from_str("max").unwrap(), Goal::Maximize);
    assert_eq!(Goal::from_str("Maximize").unwrap(), Goal::Maximize);
    assert!(matches!(
        Goal::from_str("sideways").unwrap_err(),
        MeritError::InvalidGoal(_)
    ));
}

#[test]
fn test_json_round_trip() {
    let config = ScalarizerConfig::from_parts(
        &[0.5, 2.0],
        Some(&[false, true]),
        None,
        Some(&[Goal::Minimize, Goal::Maximize]),
        1e-4,
    )
    .unwrap();

    let json = config.to_json_string().unwrap();
    let loaded = ScalarizerConfig::from_json_str(&json).unwrap();
    assert_eq!(config, loaded);
}

#[test]
fn test_from_json_rejects_invalid() {
    assert!(matches!(
        ScalarizerConfig::from_json_str("{ nope").unwrap_err(),
        MeritError::Serialization(_)
    ));

    // Well-formed JSON but semantically invalid config
    let json = r#"{"objectives":[{"tolerance":{"kind":"relative","value":2.0},"goal":"minimize"}],"softness":0.001}"#;
    assert!(matches!(
        ScalarizerConfig::from_json_str(json).unwrap_err(),
        MeritError::ToleranceOutOfRange { .. }
    ));
}

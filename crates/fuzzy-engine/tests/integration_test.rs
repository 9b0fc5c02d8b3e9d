//! 推理引擎集成测试
//!
//! 用一个独立的风扇控制系统覆盖完整流程：构建、校验、推理、
//! 去模糊化。该系统与任何业务规则库无关。

use std::collections::HashMap;

use fuzzy_engine::{
    FuzzyError, InferenceEngine, LinguisticVariable, MembershipFunction, Rule, RuleExpression,
    Universe,
};

fn temperature() -> LinguisticVariable {
    LinguisticVariable::new("temperature", Universe::new(0.0, 40.0, 0.5).unwrap())
        .with_term("cold", MembershipFunction::trapezoidal(0.0, 0.0, 10.0, 18.0).unwrap())
        .unwrap()
        .with_term("comfortable", MembershipFunction::triangular(15.0, 22.0, 28.0).unwrap())
        .unwrap()
        .with_term("hot", MembershipFunction::trapezoidal(25.0, 32.0, 40.0, 40.0).unwrap())
        .unwrap()
}

fn humidity() -> LinguisticVariable {
    LinguisticVariable::new("humidity", Universe::new(0.0, 100.0, 1.0).unwrap())
        .with_term("dry", MembershipFunction::triangular(0.0, 0.0, 50.0).unwrap())
        .unwrap()
        .with_term("humid", MembershipFunction::triangular(40.0, 100.0, 100.0).unwrap())
        .unwrap()
}

fn fan_speed() -> LinguisticVariable {
    LinguisticVariable::new("fan_speed", Universe::new(0.0, 100.0, 1.0).unwrap())
        .with_term("slow", MembershipFunction::triangular(0.0, 0.0, 50.0).unwrap())
        .unwrap()
        .with_term("medium", MembershipFunction::triangular(25.0, 50.0, 75.0).unwrap())
        .unwrap()
        .with_term("fast", MembershipFunction::triangular(50.0, 100.0, 100.0).unwrap())
        .unwrap()
}

fn fan_controller() -> InferenceEngine {
    InferenceEngine::builder(fan_speed())
        .input(temperature())
        .input(humidity())
        .rules([
            Rule::new(RuleExpression::is("temperature", "cold"), "slow"),
            Rule::new(RuleExpression::is("temperature", "comfortable"), "medium"),
            Rule::new(
                RuleExpression::is("temperature", "hot")
                    .or(RuleExpression::is("humidity", "humid")),
                "fast",
            ),
        ])
        .build()
        .unwrap()
}

fn readings(temperature: f64, humidity: f64) -> HashMap<String, f64> {
    HashMap::from([
        ("temperature".to_string(), temperature),
        ("humidity".to_string(), humidity),
    ])
}

#[test]
fn test_cold_dry_room_slows_the_fan() {
    let engine = fan_controller();
    let score = engine.compute(&readings(5.0, 10.0)).unwrap();
    assert!(score < 30.0, "expected slow fan, got {score}");
}

#[test]
fn test_hot_humid_room_speeds_up_the_fan() {
    let engine = fan_controller();
    let score = engine.compute(&readings(38.0, 90.0)).unwrap();
    assert!(score > 70.0, "expected fast fan, got {score}");
}

#[test]
fn test_comfortable_room_stays_in_the_middle() {
    let engine = fan_controller();
    let score = engine.compute(&readings(22.0, 20.0)).unwrap();
    assert!((40.0..=60.0).contains(&score), "expected medium fan, got {score}");
}

#[test]
fn test_humidity_alone_can_drive_the_or_rule() {
    let engine = fan_controller();
    // 舒适温度 + 高湿度：OR 规则仍应拉高转速
    let dry = engine.compute(&readings(22.0, 20.0)).unwrap();
    let humid = engine.compute(&readings(22.0, 95.0)).unwrap();
    assert!(humid > dry, "humid {humid} should exceed dry {dry}");
}

#[test]
fn test_inference_exposes_firings_and_aggregate() {
    let engine = fan_controller();
    let inference = engine.infer(&readings(30.0, 60.0)).unwrap();

    assert_eq!(inference.firings.len(), engine.rules().len());
    assert_eq!(
        inference.aggregated.len(),
        engine.output_variable().universe().len()
    );
    assert!(inference.firings.iter().all(|&s| (0.0..=1.0).contains(&s)));
}

#[test]
fn test_missing_and_out_of_range_inputs() {
    let engine = fan_controller();

    let partial = HashMap::from([("temperature".to_string(), 22.0)]);
    assert!(matches!(
        engine.compute(&partial),
        Err(FuzzyError::MissingInput(name)) if name == "humidity"
    ));

    assert!(matches!(
        engine.compute(&readings(55.0, 50.0)),
        Err(FuzzyError::InputOutOfRange { variable, .. }) if variable == "temperature"
    ));
}

#[test]
fn test_build_time_validation_catches_bad_references() {
    let result = InferenceEngine::builder(fan_speed())
        .input(temperature())
        .rule(Rule::new(RuleExpression::is("pressure", "high"), "fast"))
        .build();
    assert!(matches!(result, Err(FuzzyError::UnknownVariable(_))));

    let result = InferenceEngine::builder(fan_speed())
        .input(temperature())
        .rule(Rule::new(RuleExpression::is("temperature", "freezing"), "slow"))
        .build();
    assert!(matches!(result, Err(FuzzyError::UnknownTerm { .. })));
}

#[test]
fn test_gap_in_rule_coverage_is_reported() {
    // 只保留 hot 规则，低温输入不触发任何规则
    let engine = InferenceEngine::builder(fan_speed())
        .input(temperature())
        .rule(Rule::new(RuleExpression::is("temperature", "hot"), "fast"))
        .build()
        .unwrap();

    let values = HashMap::from([("temperature".to_string(), 5.0)]);
    assert!(matches!(
        engine.compute(&values),
        Err(FuzzyError::NoRuleFired)
    ));
}

#[test]
fn test_same_inputs_give_bit_identical_scores() {
    let engine = fan_controller();
    let first = engine.compute(&readings(27.5, 63.0)).unwrap();
    let second = engine.compute(&readings(27.5, 63.0)).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

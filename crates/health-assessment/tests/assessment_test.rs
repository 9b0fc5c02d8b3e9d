//! 健康度评估端到端测试
//!
//! 场景分数是参考规则库在步长 1.0 下的实测重心值，容差覆盖
//! 离散化误差。

use health_assessment::{Classification, HealthAssessor};

fn assessor() -> HealthAssessor {
    HealthAssessor::new(1.0).unwrap()
}

#[test]
fn test_healthy_project_scores_good() {
    let report = assessor().evaluate_percentages(20.0, 20.0, 90.0).unwrap();

    assert!(
        (report.score - 74.2).abs() < 1.0,
        "unexpected score {}",
        report.score
    );
    assert_eq!(report.classification, Classification::Good);
    assert_eq!(report.recommendations.len(), 1);
    assert!(report.recommendations[0].contains("on track"));
}

#[test]
fn test_distressed_project_scores_concerning() {
    let report = assessor().evaluate_percentages(95.0, 95.0, 10.0).unwrap();

    assert!(
        (report.score - 21.0).abs() < 1.0,
        "unexpected score {}",
        report.score
    );
    assert_eq!(report.classification, Classification::Concerning);

    let joined = report.recommendations.join(" | ");
    assert!(joined.contains("Review the project budget"));
    assert!(joined.contains("Review the schedule"));
    assert!(joined.contains("review project management immediately"));
}

#[test]
fn test_midway_project_scores_regular() {
    let report = assessor().evaluate_percentages(50.0, 50.0, 50.0).unwrap();

    assert!(
        (report.score - 42.0).abs() < 1.0,
        "unexpected score {}",
        report.score
    );
    assert_eq!(report.classification, Classification::Regular);

    let joined = report.recommendations.join(" | ");
    assert!(joined.contains("Watch the schedule"));
    assert!(joined.contains("Watch the budget"));
}

#[test]
fn test_completion_boundary_is_deterministic() {
    // 完成率 50 恰在 low/medium 边界，重复评估必须逐位一致
    let assessor = assessor();
    let first = assessor.evaluate_percentages(30.0, 30.0, 50.0).unwrap();
    let second = assessor.evaluate_percentages(30.0, 30.0, 50.0).unwrap();
    assert_eq!(first.score.to_bits(), second.score.to_bits());
}

#[test]
fn test_rule_coverage_has_no_gaps() {
    // 工期变量的高斯项处处为正，论域内任何组合都至少触发一条规则
    let assessor = assessor();
    let mut value = 0.0;
    let mut samples = Vec::new();
    while value <= 100.0 {
        samples.push(value);
        value += 5.0;
    }

    for &cost in &samples {
        for &schedule in &samples {
            for &completion in &samples {
                let report = assessor
                    .evaluate_percentages(cost, schedule, completion)
                    .unwrap_or_else(|err| {
                        panic!("({cost}, {schedule}, {completion}) failed: {err}")
                    });
                assert!((0.0..=100.0).contains(&report.score));
            }
        }
    }
}

#[test]
fn test_finer_step_stays_close_to_default() {
    let coarse = HealthAssessor::new(1.0).unwrap();
    let fine = HealthAssessor::new(0.1).unwrap();

    let a = coarse.evaluate_percentages(20.0, 20.0, 90.0).unwrap();
    let b = fine.evaluate_percentages(20.0, 20.0, 90.0).unwrap();
    assert!((a.score - b.score).abs() < 1.0);
    assert_eq!(a.classification, b.classification);
}

#[test]
fn test_report_serializes_for_the_api() {
    let report = assessor().evaluate_percentages(50.0, 50.0, 50.0).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["classification"], "Regular");
    assert!(json["score"].is_f64());
    assert!(json["breakdown"]["cost_pct"].is_f64());
    assert!(json["recommendations"].is_array());
}

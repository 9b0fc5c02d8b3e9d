//! 健康度规则库
//!
//! 十二条规则，顺序固定。混合 AND/OR 前件以显式表达式树编码，
//! AND 比 OR 结合更紧。

use fuzzy_engine::{Rule, RuleExpression};

use crate::variables::{COMPLETION, COST, SCHEDULE};

fn cost(term: &str) -> RuleExpression {
    RuleExpression::is(COST, term)
}

fn schedule(term: &str) -> RuleExpression {
    RuleExpression::is(SCHEDULE, term)
}

fn completion(term: &str) -> RuleExpression {
    RuleExpression::is(COMPLETION, term)
}

/// 完整规则库（顺序即评估顺序）
pub fn rule_base() -> Vec<Rule> {
    vec![
        // 成本低、工期低、完成率高：最理想
        Rule::new(
            cost("low").and(schedule("low")).and(completion("high")),
            "very_high",
        ),
        Rule::new(
            cost("low").and(schedule("medium")).and(completion("high")),
            "high",
        ),
        Rule::new(
            cost("low").and(schedule("low")).and(completion("medium")),
            "very_high",
        ),
        Rule::new(
            cost("medium").and(schedule("medium")).and(completion("medium")),
            "moderate",
        ),
        // 与第 2 条前件相同但后件更保守，聚合取逐点最大后两者同时生效
        Rule::new(
            cost("low").and(schedule("medium")).and(completion("high")),
            "moderate",
        ),
        Rule::new(cost("high").or(schedule("high")), "low"),
        Rule::new(completion("low"), "low"),
        Rule::new(
            cost("high").and(schedule("high")).and(completion("medium")),
            "very_low",
        ),
        Rule::new(
            cost("high").or(schedule("high")).and(completion("low")),
            "very_low",
        ),
        Rule::new(
            completion("high").and(cost("medium")).and(schedule("medium")),
            "high",
        ),
        Rule::new(
            cost("high").or(cost("medium").and(completion("low"))),
            "very_low",
        ),
        Rule::new(
            schedule("high").or(schedule("medium").and(completion("low"))),
            "very_low",
        ),
    ]
}

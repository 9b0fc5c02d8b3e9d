//! 模糊规则与前件表达式
//!
//! 前件是显式的二叉表达式树：叶子为（变量，术语）命题，内部节点
//! 为模糊 AND/OR。树形结构在构建时就固定了组合顺序，不依赖任何
//! 文本解析约定。

use serde::{Deserialize, Serialize};

/// 规则前件表达式树
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleExpression {
    /// 叶子命题：变量取某术语
    Is { variable: String, term: String },
    /// 模糊与（min）
    And {
        left: Box<RuleExpression>,
        right: Box<RuleExpression>,
    },
    /// 模糊或（max）
    Or {
        left: Box<RuleExpression>,
        right: Box<RuleExpression>,
    },
}

impl RuleExpression {
    pub fn is(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self::Is {
            variable: variable.into(),
            term: term.into(),
        }
    }

    pub fn and(self, other: RuleExpression) -> Self {
        Self::And {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    pub fn or(self, other: RuleExpression) -> Self {
        Self::Or {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// 按固定顺序访问全部叶子命题
    pub fn for_each_leaf<'a>(&'a self, f: &mut impl FnMut(&'a str, &'a str)) {
        match self {
            Self::Is { variable, term } => f(variable, term),
            Self::And { left, right } | Self::Or { left, right } => {
                left.for_each_leaf(f);
                right.for_each_leaf(f);
            }
        }
    }
}

/// 模糊规则：前件表达式 + 输出变量上的后件术语
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub antecedent: RuleExpression,
    pub consequent: String,
}

impl Rule {
    pub fn new(antecedent: RuleExpression, consequent: impl Into<String>) -> Self {
        Self {
            antecedent,
            consequent: consequent.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinators_build_expected_tree() {
        // a AND b OR c 链式写法从左往右结合：(a AND b) OR c
        let expr = RuleExpression::is("x", "a")
            .and(RuleExpression::is("y", "b"))
            .or(RuleExpression::is("z", "c"));

        match expr {
            RuleExpression::Or { left, right } => {
                assert!(matches!(*left, RuleExpression::And { .. }));
                assert!(matches!(*right, RuleExpression::Is { .. }));
            }
            other => panic!("unexpected tree: {other:?}"),
        }
    }

    #[test]
    fn test_leaf_visit_order_is_deterministic() {
        let expr = RuleExpression::is("x", "a")
            .or(RuleExpression::is("y", "b").and(RuleExpression::is("z", "c")));

        let mut leaves = Vec::new();
        expr.for_each_leaf(&mut |variable, term| leaves.push((variable, term)));
        assert_eq!(leaves, vec![("x", "a"), ("y", "b"), ("z", "c")]);
    }

    #[test]
    fn test_rule_serialization_round_trip() {
        let rule = Rule::new(
            RuleExpression::is("cost", "high").or(RuleExpression::is("schedule", "high")),
            "low",
        );

        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"type\":\"or\""));

        let parsed: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule);
    }
}

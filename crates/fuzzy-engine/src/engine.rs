//! 推理引擎
//!
//! 编排一次完整的 Mamdani 推理：模糊化、规则强度计算、削顶蕴含、
//! 逐点取最大聚合与去模糊化。引擎在构建时完成全部结构校验，之后
//! 不可变；单次调用的中间状态全部保存在调用栈上，同一引擎可被
//! 并发复用。

use std::collections::HashMap;

use tracing::trace;

use crate::defuzz::Defuzzifier;
use crate::error::{FuzzyError, Result};
use crate::rules::{Rule, RuleExpression};
use crate::variable::LinguisticVariable;

/// 单次推理的完整结果
#[derive(Debug, Clone)]
pub struct Inference {
    /// 去模糊化后的清晰输出值
    pub score: f64,
    /// 每条规则的触发强度，顺序与规则库一致
    pub firings: Vec<f64>,
    /// 聚合后的输出模糊集，与输出论域逐点对应
    pub aggregated: Vec<f64>,
}

/// 推理引擎构建器
///
/// 在 [`build`](Self::build) 时校验每条规则引用的变量与术语都存在，
/// 引用错误属于配置缺陷，在构建期立即暴露。
pub struct InferenceEngineBuilder {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: Vec<Rule>,
    defuzzifier: Defuzzifier,
}

impl InferenceEngineBuilder {
    /// 添加一个输入变量
    pub fn input(mut self, variable: LinguisticVariable) -> Self {
        self.inputs.push(variable);
        self
    }

    /// 追加一条规则
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// 批量追加规则（保持给定顺序）
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn defuzzifier(mut self, defuzzifier: Defuzzifier) -> Self {
        self.defuzzifier = defuzzifier;
        self
    }

    pub fn build(self) -> Result<InferenceEngine> {
        if self.inputs.is_empty() {
            return Err(FuzzyError::NoInputVariables);
        }
        if self.rules.is_empty() {
            return Err(FuzzyError::EmptyRuleBase);
        }

        for (index, variable) in self.inputs.iter().enumerate() {
            if self.inputs[..index].iter().any(|v| v.name() == variable.name()) {
                return Err(FuzzyError::DuplicateVariable(variable.name().to_string()));
            }
        }

        for rule in &self.rules {
            self.validate_expression(&rule.antecedent)?;
            if self.output.term(&rule.consequent).is_none() {
                return Err(FuzzyError::UnknownTerm {
                    variable: self.output.name().to_string(),
                    term: rule.consequent.clone(),
                });
            }
        }

        Ok(InferenceEngine {
            inputs: self.inputs,
            output: self.output,
            rules: self.rules,
            defuzzifier: self.defuzzifier,
        })
    }

    fn validate_expression(&self, expression: &RuleExpression) -> Result<()> {
        let mut error = None;
        expression.for_each_leaf(&mut |variable, term| {
            if error.is_some() {
                return;
            }
            match self.inputs.iter().find(|v| v.name() == variable) {
                None => error = Some(FuzzyError::UnknownVariable(variable.to_string())),
                Some(input) if input.term(term).is_none() => {
                    error = Some(FuzzyError::UnknownTerm {
                        variable: variable.to_string(),
                        term: term.to_string(),
                    });
                }
                Some(_) => {}
            }
        });
        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Mamdani 推理引擎
pub struct InferenceEngine {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: Vec<Rule>,
    defuzzifier: Defuzzifier,
}

impl InferenceEngine {
    pub fn builder(output: LinguisticVariable) -> InferenceEngineBuilder {
        InferenceEngineBuilder {
            inputs: Vec::new(),
            output,
            rules: Vec::new(),
            defuzzifier: Defuzzifier::default(),
        }
    }

    /// 输入变量（只读，供图表渲染复用同一组曲线）
    pub fn input_variables(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    /// 输出变量（只读）
    pub fn output_variable(&self) -> &LinguisticVariable {
        &self.output
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// 校验输入并执行一次完整推理
    pub fn infer(&self, inputs: &HashMap<String, f64>) -> Result<Inference> {
        // 所有声明的输入变量都必须给定，且落在各自论域内
        for variable in &self.inputs {
            let value = *inputs
                .get(variable.name())
                .ok_or_else(|| FuzzyError::MissingInput(variable.name().to_string()))?;
            if !variable.universe().contains(value) {
                return Err(FuzzyError::InputOutOfRange {
                    variable: variable.name().to_string(),
                    value,
                    min: variable.universe().min(),
                    max: variable.universe().max(),
                });
            }
        }

        let points = self.output.universe().points();
        let mut aggregated = vec![0.0_f64; points.len()];
        let mut firings = Vec::with_capacity(self.rules.len());

        for (index, rule) in self.rules.iter().enumerate() {
            let strength = self.strength(&rule.antecedent, inputs)?;
            trace!(rule = index, consequent = %rule.consequent, strength, "规则触发强度");
            firings.push(strength);

            if strength <= 0.0 {
                continue;
            }

            let term = self
                .output
                .term(&rule.consequent)
                .ok_or_else(|| FuzzyError::UnknownTerm {
                    variable: self.output.name().to_string(),
                    term: rule.consequent.clone(),
                })?;

            // 蕴含：将后件曲线削顶到触发强度；聚合：逐点取最大
            for (aggregate, &x) in aggregated.iter_mut().zip(points) {
                let clipped = term.curve().evaluate(x).min(strength);
                if clipped > *aggregate {
                    *aggregate = clipped;
                }
            }
        }

        if aggregated.iter().all(|&m| m == 0.0) {
            return Err(FuzzyError::NoRuleFired);
        }

        let score = self.defuzzifier.defuzzify(points, &aggregated)?;
        Ok(Inference {
            score,
            firings,
            aggregated,
        })
    }

    /// 推理并仅返回清晰输出值
    pub fn compute(&self, inputs: &HashMap<String, f64>) -> Result<f64> {
        self.infer(inputs).map(|inference| inference.score)
    }

    /// 递归计算前件表达式的触发强度（Zadeh min/max）
    fn strength(&self, expression: &RuleExpression, inputs: &HashMap<String, f64>) -> Result<f64> {
        match expression {
            RuleExpression::Is { variable, term } => {
                let input = self
                    .input_variable(variable)
                    .ok_or_else(|| FuzzyError::UnknownVariable(variable.clone()))?;
                let value = *inputs
                    .get(variable)
                    .ok_or_else(|| FuzzyError::MissingInput(variable.clone()))?;
                // 模糊化：清晰值化为该术语的真实度
                input.membership(term, value)
            }
            RuleExpression::And { left, right } => {
                Ok(self.strength(left, inputs)?.min(self.strength(right, inputs)?))
            }
            RuleExpression::Or { left, right } => {
                Ok(self.strength(left, inputs)?.max(self.strength(right, inputs)?))
            }
        }
    }

    fn input_variable(&self, name: &str) -> Option<&LinguisticVariable> {
        self.inputs.iter().find(|v| v.name() == name)
    }
}

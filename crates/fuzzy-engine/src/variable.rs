//! 语言变量
//!
//! 一个语言变量由名称、论域和若干术语组成，每个术语对应一条
//! 隶属函数曲线。术语按加入顺序保存，保证遍历顺序确定，蕴含
//! 计算与图表渲染共用同一份曲线定义。

use serde::Serialize;

use crate::error::{FuzzyError, Result};
use crate::membership::MembershipFunction;
use crate::universe::Universe;

/// 语言变量中的一个术语
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    name: String,
    curve: MembershipFunction,
}

impl Term {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn curve(&self) -> &MembershipFunction {
        &self.curve
    }
}

/// 语言变量
#[derive(Debug, Clone, PartialEq)]
pub struct LinguisticVariable {
    name: String,
    universe: Universe,
    terms: Vec<Term>,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>, universe: Universe) -> Self {
        Self {
            name: name.into(),
            universe,
            terms: Vec::new(),
        }
    }

    /// 链式添加术语，名称在变量内必须唯一
    pub fn with_term(mut self, name: impl Into<String>, curve: MembershipFunction) -> Result<Self> {
        self.add_term(name, curve)?;
        Ok(self)
    }

    /// 添加术语，名称在变量内必须唯一
    pub fn add_term(&mut self, name: impl Into<String>, curve: MembershipFunction) -> Result<()> {
        let name = name.into();
        if self.terms.iter().any(|t| t.name == name) {
            return Err(FuzzyError::DuplicateTerm {
                variable: self.name.clone(),
                term: name,
            });
        }
        self.terms.push(Term { name, curve });
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// 全部术语（按加入顺序）
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term(&self, name: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.name == name)
    }

    /// 求清晰值在指定术语下的隶属度
    pub fn membership(&self, term: &str, x: f64) -> Result<f64> {
        let term = self.term(term).ok_or_else(|| FuzzyError::UnknownTerm {
            variable: self.name.clone(),
            term: term.to_string(),
        })?;
        Ok(term.curve.evaluate(x))
    }

    /// 在整个论域上逐点采样术语曲线
    pub fn sample(&self, term: &str) -> Result<Vec<f64>> {
        let term = self.term(term).ok_or_else(|| FuzzyError::UnknownTerm {
            variable: self.name.clone(),
            term: term.to_string(),
        })?;
        Ok(self
            .universe
            .points()
            .iter()
            .map(|&x| term.curve.evaluate(x))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent_variable() -> LinguisticVariable {
        LinguisticVariable::new("quality", Universe::new(0.0, 100.0, 1.0).unwrap())
            .with_term("low", MembershipFunction::triangular(0.0, 0.0, 50.0).unwrap())
            .unwrap()
            .with_term("high", MembershipFunction::triangular(50.0, 100.0, 100.0).unwrap())
            .unwrap()
    }

    #[test]
    fn test_duplicate_term_rejected() {
        let result = percent_variable()
            .with_term("low", MembershipFunction::gaussian(10.0, 5.0).unwrap());
        assert!(matches!(result, Err(FuzzyError::DuplicateTerm { .. })));
    }

    #[test]
    fn test_membership_lookup() {
        let variable = percent_variable();
        assert_eq!(variable.membership("low", 0.0).unwrap(), 1.0);
        assert_eq!(variable.membership("high", 100.0).unwrap(), 1.0);
        assert!((variable.membership("low", 25.0).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_term_errors() {
        let variable = percent_variable();
        assert!(matches!(
            variable.membership("missing", 10.0),
            Err(FuzzyError::UnknownTerm { .. })
        ));
        assert!(matches!(
            variable.sample("missing"),
            Err(FuzzyError::UnknownTerm { .. })
        ));
    }

    #[test]
    fn test_sample_covers_whole_universe() {
        let variable = percent_variable();
        let samples = variable.sample("low").unwrap();
        assert_eq!(samples.len(), variable.universe().len());
        assert_eq!(samples[0], 1.0);
        assert_eq!(samples[100], 0.0);
    }

    #[test]
    fn test_terms_keep_insertion_order() {
        let variable = percent_variable();
        let names: Vec<&str> = variable.terms().iter().map(Term::name).collect();
        assert_eq!(names, vec!["low", "high"]);
    }
}

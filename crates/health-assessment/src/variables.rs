//! 健康度语言变量定义
//!
//! 唯一的曲线参数来源。推理引擎与图表渲染都从这里取同一组
//! `LinguisticVariable` 实例，避免参数在两处漂移。

use fuzzy_engine::{FuzzyError, LinguisticVariable, MembershipFunction, Universe};

/// 成本占比输入变量名
pub const COST: &str = "cost_ratio";
/// 工期占比输入变量名
pub const SCHEDULE: &str = "schedule_ratio";
/// 完成率输入变量名
pub const COMPLETION: &str = "completion_rate";
/// 成功水平输出变量名
pub const SUCCESS: &str = "success_level";

/// 百分比论域 [0, 100]，步长由服务配置决定
pub fn percent_universe(step: f64) -> Result<Universe, FuzzyError> {
    Universe::new(0.0, 100.0, step)
}

/// 成本占比：项目成本占预算的百分比
pub fn cost_ratio(step: f64) -> Result<LinguisticVariable, FuzzyError> {
    Ok(LinguisticVariable::new(COST, percent_universe(step)?)
        .with_term("low", MembershipFunction::triangular(10.0, 10.0, 25.0)?)?
        .with_term("medium", MembershipFunction::gaussian(50.0, 25.0)?)?
        .with_term("high", MembershipFunction::trapezoidal(70.0, 80.0, 90.0, 90.0)?)?)
}

/// 工期占比：已用工期占计划工期的百分比
pub fn schedule_ratio(step: f64) -> Result<LinguisticVariable, FuzzyError> {
    Ok(LinguisticVariable::new(SCHEDULE, percent_universe(step)?)
        .with_term("low", MembershipFunction::gaussian(0.0, 25.0)?)?
        .with_term("medium", MembershipFunction::gaussian(50.0, 15.0)?)?
        .with_term("high", MembershipFunction::gaussian(100.0, 25.0)?)?)
}

/// 完成率：已交付工作的百分比
pub fn completion_rate(step: f64) -> Result<LinguisticVariable, FuzzyError> {
    Ok(LinguisticVariable::new(COMPLETION, percent_universe(step)?)
        .with_term("low", MembershipFunction::trapezoidal(0.0, 0.0, 30.0, 50.0)?)?
        .with_term("medium", MembershipFunction::gaussian(50.0, 15.0)?)?
        .with_term("high", MembershipFunction::trapezoidal(60.0, 70.0, 90.0, 100.0)?)?)
}

/// 成功水平输出变量
pub fn success_level(step: f64) -> Result<LinguisticVariable, FuzzyError> {
    Ok(LinguisticVariable::new(SUCCESS, percent_universe(step)?)
        .with_term("very_low", MembershipFunction::triangular(0.0, 0.0, 25.0)?)?
        .with_term("low", MembershipFunction::triangular(15.0, 35.0, 45.0)?)?
        .with_term("moderate", MembershipFunction::triangular(35.0, 50.0, 65.0)?)?
        .with_term("high", MembershipFunction::triangular(55.0, 75.0, 85.0)?)?
        .with_term("very_high", MembershipFunction::triangular(75.0, 100.0, 100.0)?)?)
}

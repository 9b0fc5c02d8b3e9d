//! 模糊推理引擎错误类型

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    // 配置错误：构建阶段产生，运行期不可恢复
    #[error("论域定义无效: {0}")]
    MalformedUniverse(String),

    #[error("隶属函数参数无效: {0}")]
    InvalidShape(String),

    #[error("变量 '{variable}' 中术语 '{term}' 重复定义")]
    DuplicateTerm { variable: String, term: String },

    #[error("输入变量 '{0}' 重复定义")]
    DuplicateVariable(String),

    #[error("推理引擎至少需要一个输入变量")]
    NoInputVariables,

    #[error("规则库不能为空")]
    EmptyRuleBase,

    #[error("未知变量: {0}")]
    UnknownVariable(String),

    #[error("变量 '{variable}' 中不存在术语 '{term}'")]
    UnknownTerm { variable: String, term: String },

    // 校验错误：调用方输入问题，修正后可重试
    #[error("缺少输入变量: {0}")]
    MissingInput(String),

    #[error("变量 '{variable}' 的输入值 {value} 超出论域 [{min}, {max}]")]
    InputOutOfRange {
        variable: String,
        value: f64,
        min: f64,
        max: f64,
    },

    // 推理错误：规则库对该输入组合存在覆盖缺口，应视为配置缺陷
    #[error("没有规则被触发，聚合输出恒为零，无法去模糊化")]
    NoRuleFired,
}

pub type Result<T> = std::result::Result<T, FuzzyError>;

//! Mamdani 模糊推理引擎
//!
//! 提供可复用的模糊推理能力，支持：
//! - 三角形、梯形、高斯隶属函数
//! - 语言变量与均匀离散化论域
//! - AND/OR 表达式树形式的规则前件（Zadeh min/max 语义）
//! - 削顶蕴含、逐点取最大聚合、重心去模糊化
//!
//! 引擎构建完成后不可变，单次推理的全部中间状态都保存在调用栈上，
//! 同一引擎可被多个调用方并发使用。

pub mod defuzz;
pub mod engine;
pub mod error;
pub mod membership;
pub mod rules;
pub mod universe;
pub mod variable;

pub use defuzz::Defuzzifier;
pub use engine::{Inference, InferenceEngine, InferenceEngineBuilder};
pub use error::{FuzzyError, Result};
pub use membership::MembershipFunction;
pub use rules::{Rule, RuleExpression};
pub use universe::Universe;
pub use variable::{LinguisticVariable, Term};

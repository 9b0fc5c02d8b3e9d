//! 评估错误定义

use thiserror::Error;

/// 健康度评估错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    // ========== 输入校验错误 ==========
    /// 原始量纲非法（预算、周期必须为正）
    #[error("指标 {name} 的取值非法: {value}（必须为正数）")]
    InvalidMagnitude { name: &'static str, value: f64 },

    // ========== 引擎错误 ==========
    /// 底层模糊推理失败
    #[error("模糊推理失败: {0}")]
    Engine(#[from] fuzzy_engine::FuzzyError),
}

pub type Result<T> = std::result::Result<T, AssessmentError>;

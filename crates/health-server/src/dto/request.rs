//! 请求 DTO 定义
//!
//! 所有 REST API 的请求体结构

use serde::Deserialize;
use validator::Validate;

use health_assessment::ProjectIndicators;

/// 健康度评估请求
///
/// 预算与工期用调用方自己的单位（金额、月数等），服务内部只用比值。
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    #[validate(range(exclusive_min = 0.0, message = "预算必须为正数"))]
    pub budget: f64,
    #[validate(range(exclusive_min = 0.0, message = "计划工期必须为正数"))]
    pub budget_period: f64,
    #[validate(range(exclusive_min = 0.0, message = "项目成本必须为正数"))]
    pub project_cost: f64,
    #[validate(range(exclusive_min = 0.0, message = "已用工期必须为正数"))]
    pub project_period: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "完成率必须在 0 到 100 之间"))]
    pub completion_rate: f64,
}

impl EvaluateRequest {
    /// 转为评估库的输入结构
    pub fn indicators(&self) -> ProjectIndicators {
        ProjectIndicators {
            budget: self.budget,
            budget_period: self.budget_period,
            project_cost: self.project_cost,
            project_period: self.project_period,
            completion_rate: self.completion_rate,
        }
    }
}

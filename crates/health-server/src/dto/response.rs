//! 响应 DTO 定义
//!
//! 所有 REST API 的响应体结构

use serde::Serialize;

use fuzzy_engine::{LinguisticVariable, MembershipFunction};
use health_assessment::HealthReport;

/// API 统一响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }
}

/// 指标百分比明细
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownDto {
    pub cost_pct: f64,
    pub schedule_pct: f64,
    pub completion_pct: f64,
}

/// 评估结果
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDto {
    /// 健康分，[0, 100]
    pub score: f64,
    /// 分级标签
    pub classification: String,
    /// 建议清单，按固定顺序用 " | " 连接
    pub recommendations: String,
    pub breakdown: BreakdownDto,
}

impl From<HealthReport> for EvaluationDto {
    fn from(report: HealthReport) -> Self {
        Self {
            score: report.score,
            classification: report.classification.label().to_string(),
            recommendations: report.recommendations.join(" | "),
            breakdown: BreakdownDto {
                cost_pct: report.breakdown.cost_pct,
                schedule_pct: report.breakdown.schedule_pct,
                completion_pct: report.breakdown.completion_pct,
            },
        }
    }
}

/// 论域描述
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseDto {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// 术语曲线描述
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDto {
    pub name: String,
    /// 曲线定义（tagged，shape 字段区分形状）
    pub curve: MembershipFunction,
    /// 在论域上逐点采样的隶属度，与推理使用的曲线完全一致
    pub samples: Vec<f64>,
}

/// 语言变量的只读导出
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDto {
    pub name: String,
    pub universe: UniverseDto,
    pub terms: Vec<TermDto>,
}

impl VariableDto {
    /// 从推理实际使用的变量实例导出
    pub fn from_variable(variable: &LinguisticVariable) -> Self {
        let universe = variable.universe();
        Self {
            name: variable.name().to_string(),
            universe: UniverseDto {
                min: universe.min(),
                max: universe.max(),
                step: universe.step(),
            },
            terms: variable
                .terms()
                .iter()
                .map(|term| TermDto {
                    name: term.name().to_string(),
                    curve: *term.curve(),
                    samples: universe
                        .points()
                        .iter()
                        .map(|&x| term.curve().evaluate(x))
                        .collect(),
                })
                .collect(),
        }
    }
}

/// 图表生成结果
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartCreatedDto {
    /// 落盘文件名，下载端点以此为标识
    pub filename: String,
    pub score: f64,
    pub classification: String,
}

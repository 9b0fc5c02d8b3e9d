//! 服务错误类型定义
//!
//! 把库层错误映射为带状态码和错误码的 HTTP 响应

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use fuzzy_engine::FuzzyError;
use health_assessment::AssessmentError;

/// REST 服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    // 请求校验错误
    #[error("参数验证失败: {0}")]
    Validation(String),
    #[error("图表文件名非法: {0}")]
    InvalidChartName(String),

    // 资源不存在
    #[error("图表不存在: {0}")]
    ChartNotFound(String),

    // 系统错误
    #[error("规则库对该输入组合没有覆盖")]
    RuleCoverageGap,
    #[error("推理引擎错误: {0}")]
    Engine(FuzzyError),
    #[error("文件操作失败: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidChartName(_) => StatusCode::BAD_REQUEST,
            Self::ChartNotFound(_) => StatusCode::NOT_FOUND,
            Self::RuleCoverageGap | Self::Engine(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidChartName(_) => "INVALID_CHART_NAME",
            Self::ChartNotFound(_) => "CHART_NOT_FOUND",
            Self::RuleCoverageGap => "RULE_COVERAGE_GAP",
            Self::Engine(_) => "INFERENCE_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志，防止信息泄露
        let message = match &self {
            Self::Engine(e) => {
                tracing::error!(error = %e, "推理引擎错误");
                "服务内部错误，请稍后重试".to_string()
            }
            Self::Io(e) => {
                tracing::error!(error = %e, "文件操作失败");
                "服务内部错误，请稍后重试".to_string()
            }
            Self::RuleCoverageGap => {
                tracing::error!("规则库覆盖缺口，应作为配置缺陷排查");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从评估库错误转换
///
/// 输入类错误由调用方修正后重试，归为 400；覆盖缺口与其余
/// 引擎错误属于服务端缺陷，归为 500。
impl From<AssessmentError> for ServerError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::InvalidMagnitude { .. } => Self::Validation(err.to_string()),
            AssessmentError::Engine(engine) => match engine {
                FuzzyError::MissingInput(_) | FuzzyError::InputOutOfRange { .. } => {
                    Self::Validation(engine.to_string())
                }
                FuzzyError::NoRuleFired => Self::RuleCoverageGap,
                other => Self::Engine(other),
            },
        }
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for ServerError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;

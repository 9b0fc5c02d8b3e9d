//! 评估与变量自省 API 处理器

use axum::{Json, extract::State};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{ApiResponse, EvaluateRequest, EvaluationDto, VariableDto};
use crate::error::Result;
use crate::state::AppState;

/// 评估一个项目的健康度
#[instrument(skip(state, request))]
pub async fn evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<ApiResponse<EvaluationDto>>> {
    request.validate()?;

    let report = state.assessor.evaluate(&request.indicators())?;
    info!(
        score = report.score,
        classification = %report.classification,
        "健康度评估完成"
    );

    Ok(Json(ApiResponse::success(EvaluationDto::from(report))))
}

/// 导出全部语言变量的论域与术语曲线（只读）
#[instrument(skip(state))]
pub async fn list_variables(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<VariableDto>>> {
    let engine = state.assessor.engine();
    let mut variables: Vec<VariableDto> = engine
        .input_variables()
        .iter()
        .map(VariableDto::from_variable)
        .collect();
    variables.push(VariableDto::from_variable(engine.output_variable()));

    Json(ApiResponse::success(variables))
}

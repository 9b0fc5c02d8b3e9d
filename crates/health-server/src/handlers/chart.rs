//! 图表生成与下载 API 处理器

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{info, instrument};
use validator::Validate;

use crate::chart;
use crate::dto::{ApiResponse, ChartCreatedDto, EvaluateRequest};
use crate::error::Result;
use crate::state::AppState;

/// 评估并生成隶属度图表，落盘后返回文件名
#[instrument(skip(state, request))]
pub async fn create_chart(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<ApiResponse<ChartCreatedDto>>> {
    request.validate()?;

    let report = state.assessor.evaluate(&request.indicators())?;
    // 标记线用推理实际看到的夹紧值，与曲线同一坐标系
    let markers = [
        report.breakdown.cost_pct.clamp(0.0, 100.0),
        report.breakdown.schedule_pct.clamp(0.0, 100.0),
        report.breakdown.completion_pct.clamp(0.0, 100.0),
    ];
    let svg = chart::render_panels(state.assessor.engine(), &markers, report.score);
    let filename = state.charts.store(&svg)?;
    info!(%filename, score = report.score, "图表已生成");

    Ok(Json(ApiResponse::success(ChartCreatedDto {
        filename,
        score: report.score,
        classification: report.classification.label().to_string(),
    })))
}

/// 按文件名下载已生成的图表
#[instrument(skip(state))]
pub async fn download_chart(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response> {
    let bytes = state.charts.load(&filename)?;
    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml")],
        bytes,
    )
        .into_response())
}

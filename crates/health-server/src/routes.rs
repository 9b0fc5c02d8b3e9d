//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// 构建完整的 API 路由
///
/// 不含前缀，由调用方在 main.rs 中挂载到 /api
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/evaluate", post(handlers::evaluate::evaluate))
        .route("/variables", get(handlers::evaluate::list_variables))
        .route("/charts", post(handlers::chart::create_chart))
        .route("/charts/{filename}", get(handlers::chart::download_chart))
}

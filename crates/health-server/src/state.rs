//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use health_assessment::HealthAssessor;

use crate::chart::ChartStore;

/// Axum 应用共享状态
///
/// 评估器与图表存储都是启动时构建一次的只读对象，
/// 通过 Arc 在 handler 间共享。
#[derive(Clone)]
pub struct AppState {
    /// 健康度评估器（内含推理引擎）
    pub assessor: Arc<HealthAssessor>,
    /// 图表文件存储
    pub charts: Arc<ChartStore>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(assessor: Arc<HealthAssessor>, charts: Arc<ChartStore>) -> Self {
        Self { assessor, charts }
    }
}

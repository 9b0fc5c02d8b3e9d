//! 项目健康度评估服务
//!
//! 在健康度评估库之上提供 REST API。
//!
//! ## 核心功能
//!
//! - **健康度评估**：根据预算、工期与完成率计算健康分与建议
//! - **变量自省**：只读导出推理实际使用的隶属曲线
//! - **图表导出**：渲染 SVG 隶属度图并按保留上限落盘
//! - **图表下载**：按文件名取回已生成的图表
//!
//! ## 模块结构
//!
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `chart`: SVG 渲染与文件存取
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据验证：validator
//! - 序列化：serde (camelCase)

pub mod chart;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use chart::ChartStore;
pub use dto::{ApiResponse, ChartCreatedDto, EvaluateRequest, EvaluationDto, VariableDto};
pub use error::{Result, ServerError};
pub use state::AppState;

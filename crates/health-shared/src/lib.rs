//! 共享基础设施：配置加载与可观测性初始化

pub mod config;
pub mod observability;

pub use config::{AppConfig, ChartConfig, EngineConfig, ObservabilityConfig, ServerConfig};

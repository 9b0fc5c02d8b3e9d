//! HTTP 请求处理器

pub mod chart;
pub mod evaluate;
pub mod health;

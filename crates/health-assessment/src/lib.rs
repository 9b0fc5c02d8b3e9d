//! 项目健康度评估领域库
//!
//! 在通用模糊推理引擎之上固化项目健康度业务：三个输入指标
//! （成本占比、工期占比、完成率）、十二条规则、分数分级与
//! 建议清单。变量定义只在此处构造一次，推理与图表渲染共用。

pub mod assessment;
pub mod classify;
pub mod error;
pub mod recommend;
pub mod rules;
pub mod variables;

pub use assessment::{HealthAssessor, HealthReport, IndicatorBreakdown, ProjectIndicators};
pub use classify::Classification;
pub use error::{AssessmentError, Result};
pub use recommend::recommendations;

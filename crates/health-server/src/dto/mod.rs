//! 数据传输对象

pub mod request;
pub mod response;

pub use request::EvaluateRequest;
pub use response::{
    ApiResponse, BreakdownDto, ChartCreatedDto, EvaluationDto, TermDto, UniverseDto, VariableDto,
};

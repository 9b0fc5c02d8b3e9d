//! 隶属函数定义
//!
//! 每种形状都是清晰值到 [0, 1] 隶属度的纯函数。构造函数负责
//! 参数校验，求值阶段不再产生错误。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FuzzyError, Result};

/// 隶属函数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MembershipFunction {
    /// 三角形：在 b 处取峰值 1，支撑区间 [a, c]
    Triangular { a: f64, b: f64, c: f64 },
    /// 梯形：平台区间 [b, c] 取值 1，支撑区间 [a, d]
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    /// 高斯：exp(-(x-mean)² / (2·std_dev²))，峰值恒为 1
    Gaussian { mean: f64, std_dev: f64 },
}

impl MembershipFunction {
    /// 构建三角形隶属函数，要求 a <= b <= c
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self> {
        if ![a, b, c].iter().all(|v| v.is_finite()) || !(a <= b && b <= c) {
            return Err(FuzzyError::InvalidShape(format!(
                "三角形参数必须满足 a <= b <= c: ({a}, {b}, {c})"
            )));
        }
        Ok(Self::Triangular { a, b, c })
    }

    /// 构建梯形隶属函数，要求 a <= b <= c <= d
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        if ![a, b, c, d].iter().all(|v| v.is_finite()) || !(a <= b && b <= c && c <= d) {
            return Err(FuzzyError::InvalidShape(format!(
                "梯形参数必须满足 a <= b <= c <= d: ({a}, {b}, {c}, {d})"
            )));
        }
        Ok(Self::Trapezoidal { a, b, c, d })
    }

    /// 构建高斯隶属函数，要求标准差为正
    pub fn gaussian(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(FuzzyError::InvalidShape(format!(
                "高斯参数无效: mean = {mean}, std_dev = {std_dev}（标准差必须为正）"
            )));
        }
        Ok(Self::Gaussian { mean, std_dev })
    }

    /// 求清晰值 x 的隶属度，结果恒在 [0, 1] 内
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Triangular { a, b, c } => {
                if x < a || x > c {
                    0.0
                } else if x < b {
                    ramp_up(x, a, b)
                } else if x > b {
                    ramp_down(x, b, c)
                } else {
                    1.0
                }
            }
            Self::Trapezoidal { a, b, c, d } => {
                if x < a || x > d {
                    0.0
                } else if x < b {
                    ramp_up(x, a, b)
                } else if x > c {
                    ramp_down(x, c, d)
                } else {
                    1.0
                }
            }
            Self::Gaussian { mean, std_dev } => {
                let z = x - mean;
                (-(z * z) / (2.0 * std_dev * std_dev)).exp()
            }
        }
    }
}

impl fmt::Display for MembershipFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Triangular { a, b, c } => write!(f, "tri({a}, {b}, {c})"),
            Self::Trapezoidal { a, b, c, d } => write!(f, "trap({a}, {b}, {c}, {d})"),
            Self::Gaussian { mean, std_dev } => write!(f, "gauss({mean}, {std_dev})"),
        }
    }
}

// 零宽斜坡按阶跃到 1 处理，避免除零
fn ramp_up(x: f64, from: f64, to: f64) -> f64 {
    if to <= from {
        1.0
    } else {
        (x - from) / (to - from)
    }
}

fn ramp_down(x: f64, from: f64, to: f64) -> f64 {
    if to <= from {
        1.0
    } else {
        (to - x) / (to - from)
    }
}

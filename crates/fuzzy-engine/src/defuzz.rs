//! 去模糊化
//!
//! 将聚合后的离散模糊集合坍缩为单一清晰值。累加始终使用 f64，
//! 精度由论域步长决定。

use crate::error::{FuzzyError, Result};

/// 去模糊化方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Defuzzifier {
    /// 重心法：Σ(x·μ) / Σμ
    #[default]
    Centroid,
}

impl Defuzzifier {
    pub fn defuzzify(&self, points: &[f64], memberships: &[f64]) -> Result<f64> {
        match self {
            Self::Centroid => centroid(points, memberships),
        }
    }
}

fn centroid(points: &[f64], memberships: &[f64]) -> Result<f64> {
    if points.len() != memberships.len() {
        return Err(FuzzyError::MalformedUniverse(format!(
            "论域点数 {} 与隶属度数组长度 {} 不一致",
            points.len(),
            memberships.len()
        )));
    }

    let mut numerator = 0.0_f64;
    let mut denominator = 0.0_f64;
    for (&x, &m) in points.iter().zip(memberships) {
        numerator += x * m;
        denominator += m;
    }

    // 分母为零即所有规则触发强度为零，必须由调用方作为覆盖缺口处理
    if denominator == 0.0 {
        return Err(FuzzyError::NoRuleFired);
    }

    Ok(numerator / denominator)
}

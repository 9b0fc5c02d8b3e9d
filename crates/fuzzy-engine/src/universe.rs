//! 论域（universe of discourse）定义
//!
//! 论域是闭区间上的均匀离散化栅格，变量的所有隶属函数与
//! 去模糊化都在同一份栅格上求值。构建后不可变。

use crate::error::{FuzzyError, Result};

/// 均匀离散化的闭区间论域
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
    points: Vec<f64>,
}

impl Universe {
    /// 构建论域
    ///
    /// 步长决定重心法精度与计算量之间的权衡，由调用方配置。
    /// 当区间长度不是步长的整数倍时，栅格只覆盖不超过上界的点。
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(FuzzyError::MalformedUniverse(format!(
                "区间 [{min}, {max}] 无效"
            )));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(FuzzyError::MalformedUniverse(format!(
                "步长 {step} 必须为有限正数"
            )));
        }

        let count = ((max - min) / step + 1e-9).floor() as usize;
        let points: Vec<f64> = (0..=count).map(|i| min + i as f64 * step).collect();

        Ok(Self {
            min,
            max,
            step,
            points,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// 栅格点（升序）
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 判断清晰值是否落在论域区间内
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_universe_has_inclusive_endpoints() {
        let universe = Universe::new(0.0, 100.0, 1.0).unwrap();
        assert_eq!(universe.len(), 101);
        assert_eq!(universe.points()[0], 0.0);
        assert_eq!(universe.points()[100], 100.0);
    }

    #[test]
    fn test_non_divisible_span_stays_inside_bounds() {
        let universe = Universe::new(0.0, 10.0, 4.0).unwrap();
        assert_eq!(universe.points(), &[0.0, 4.0, 8.0]);
    }

    #[test]
    fn test_rejects_non_positive_step() {
        assert!(matches!(
            Universe::new(0.0, 100.0, 0.0),
            Err(FuzzyError::MalformedUniverse(_))
        ));
        assert!(matches!(
            Universe::new(0.0, 100.0, -1.0),
            Err(FuzzyError::MalformedUniverse(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_interval() {
        assert!(matches!(
            Universe::new(100.0, 0.0, 1.0),
            Err(FuzzyError::MalformedUniverse(_))
        ));
        assert!(matches!(
            Universe::new(5.0, 5.0, 1.0),
            Err(FuzzyError::MalformedUniverse(_))
        ));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let universe = Universe::new(0.0, 100.0, 1.0).unwrap();
        assert!(universe.contains(0.0));
        assert!(universe.contains(100.0));
        assert!(!universe.contains(-0.1));
        assert!(!universe.contains(100.1));
    }
}

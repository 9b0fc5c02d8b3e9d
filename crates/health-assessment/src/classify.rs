//! 分数分级
//!
//! 按固定阈值自高向低匹配，纯函数，不对输入做夹紧。

use serde::Serialize;
use std::fmt;

/// 健康度分级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Excellent,
    Good,
    Regular,
    Concerning,
    Critical,
}

impl Classification {
    /// 阈值自高向低：>=80 / >=60 / >=40 / >=20 / 其余
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Regular
        } else if score >= 20.0 {
            Self::Concerning
        } else {
            Self::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Regular => "Regular",
            Self::Concerning => "Concerning",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! 建议清单
//!
//! 对三个原始百分比做独立阈值检查，与模糊分级互不影响。检查
//! 顺序固定，输出顺序因此可复现；没有命中任何条件时给出单条
//! 正常推进的兜底建议。

use crate::assessment::IndicatorBreakdown;

const SEVERE_COST: &str = "Project cost severely strains the agreed budget and the remaining \
    funds may not cover the work ahead. Review the project budget and look for resource \
    optimizations";
const SEVERE_SCHEDULE: &str = "Project duration severely strains the agreed timeline and the \
    remaining time may not cover the work ahead. Review the schedule and identify opportunities \
    to accelerate";
const MODERATE_SCHEDULE: &str = "Project duration is putting noticeable pressure on the agreed \
    timeline. Watch the schedule and identify opportunities to accelerate";
const MODERATE_COST: &str = "Project cost is putting noticeable pressure on the agreed budget. \
    Watch the budget and identify optimization opportunities";
const LOW_COMPLETION: &str = "Reinforce management practices to improve delivery performance";
const CRITICAL_COMBINED: &str = "Key indicators are at critical levels, review project management \
    immediately";
const ON_TRACK: &str = "Project is on track. Keep up the current practices.";

/// 按固定顺序生成建议（作用于未夹紧的原始百分比）
pub fn recommendations(breakdown: &IndicatorBreakdown) -> Vec<String> {
    let mut advice = Vec::new();

    if breakdown.cost_pct > 75.0 {
        advice.push(SEVERE_COST.to_string());
    }
    if breakdown.schedule_pct > 80.0 {
        advice.push(SEVERE_SCHEDULE.to_string());
    }
    if breakdown.schedule_pct > 45.0 && breakdown.schedule_pct < 80.0 {
        advice.push(MODERATE_SCHEDULE.to_string());
    }
    if breakdown.cost_pct > 45.0 && breakdown.cost_pct < 80.0 {
        advice.push(MODERATE_COST.to_string());
    }
    if breakdown.completion_pct < 50.0 {
        advice.push(LOW_COMPLETION.to_string());
    }
    if breakdown.cost_pct > 80.0 && breakdown.schedule_pct > 80.0 {
        advice.push(CRITICAL_COMBINED.to_string());
    }

    if advice.is_empty() {
        advice.push(ON_TRACK.to_string());
    }
    advice
}

//! 评估门面
//!
//! `HealthAssessor` 在启动时构建一次推理引擎并长期复用；每次
//! 评估只读引擎配置，可安全并发调用。

use serde::Serialize;
use tracing::{debug, instrument};

use fuzzy_engine::InferenceEngine;

use crate::classify::Classification;
use crate::error::{AssessmentError, Result};
use crate::recommend::recommendations;
use crate::rules::rule_base;
use crate::variables::{self, COMPLETION, COST, SCHEDULE};

/// 原始项目量纲（货币与时间单位由调用方自洽，内部只用比值）
#[derive(Debug, Clone, Copy)]
pub struct ProjectIndicators {
    pub budget: f64,
    pub budget_period: f64,
    pub project_cost: f64,
    pub project_period: f64,
    pub completion_rate: f64,
}

/// 三个指标的原始百分比，未夹紧，原样返回给调用方
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorBreakdown {
    pub cost_pct: f64,
    pub schedule_pct: f64,
    pub completion_pct: f64,
}

/// 一次评估的完整结果
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub score: f64,
    pub classification: Classification,
    pub recommendations: Vec<String>,
    pub breakdown: IndicatorBreakdown,
}

/// 项目健康度评估器
pub struct HealthAssessor {
    engine: InferenceEngine,
}

impl HealthAssessor {
    /// 用给定论域步长构建评估器（变量与规则库固定）
    pub fn new(universe_step: f64) -> Result<Self> {
        let engine = InferenceEngine::builder(variables::success_level(universe_step)?)
            .input(variables::cost_ratio(universe_step)?)
            .input(variables::schedule_ratio(universe_step)?)
            .input(variables::completion_rate(universe_step)?)
            .rules(rule_base())
            .build()?;
        Ok(Self { engine })
    }

    /// 底层引擎（只读），图表渲染从这里取推理实际使用的曲线
    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// 从原始量纲评估：先换算百分比，再推理
    #[instrument(skip(self))]
    pub fn evaluate(&self, indicators: &ProjectIndicators) -> Result<HealthReport> {
        for (name, value) in [
            ("budget", indicators.budget),
            ("budget_period", indicators.budget_period),
            ("project_cost", indicators.project_cost),
            ("project_period", indicators.project_period),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AssessmentError::InvalidMagnitude { name, value });
            }
        }

        let breakdown = IndicatorBreakdown {
            cost_pct: indicators.project_cost / indicators.budget * 100.0,
            schedule_pct: indicators.project_period / indicators.budget_period * 100.0,
            completion_pct: indicators.completion_rate,
        };
        self.evaluate_breakdown(breakdown)
    }

    /// 直接用三个百分比评估
    pub fn evaluate_percentages(
        &self,
        cost_pct: f64,
        schedule_pct: f64,
        completion_pct: f64,
    ) -> Result<HealthReport> {
        self.evaluate_breakdown(IndicatorBreakdown {
            cost_pct,
            schedule_pct,
            completion_pct,
        })
    }

    fn evaluate_breakdown(&self, breakdown: IndicatorBreakdown) -> Result<HealthReport> {
        // 推理输入夹紧到论域内；建议清单用未夹紧的原始百分比
        let inputs = std::collections::HashMap::from([
            (COST.to_string(), clamp_percent(breakdown.cost_pct)),
            (SCHEDULE.to_string(), clamp_percent(breakdown.schedule_pct)),
            (COMPLETION.to_string(), clamp_percent(breakdown.completion_pct)),
        ]);

        let score = self.engine.compute(&inputs)?;
        let classification = Classification::from_score(score);
        debug!(score, %classification, "健康度评估完成");

        Ok(HealthReport {
            score,
            classification,
            recommendations: recommendations(&breakdown),
            breakdown,
        })
    }
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

// ==========================================
// OEE 分析引擎 - 指标计算器
// ==========================================
// 职责: 单个生产单元的 Availability / Performance / Quality / OEE
// 输入: 单元 + 停机事件
// 输出: OeeMetrics
// 红线: 除零不报错,统一降级为 0
// ==========================================

use crate::domain::metrics::OeeMetrics;
use crate::domain::production::{DowntimeEvent, ProductionUnit};

// ==========================================
// MetricCalculator - 指标计算器
// ==========================================
// 无状态引擎,所有方法都是纯函数
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricCalculator;

impl MetricCalculator {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 比率计算
    // ==========================================

    /// 可用率 = (计划时间 - 停机时间) / 计划时间,截断到 [0, 1]
    ///
    /// `planned_minutes == 0` 时返回 0
    pub fn availability(&self, planned_minutes: f64, downtime_minutes: f64) -> f64 {
        if planned_minutes == 0.0 {
            return 0.0;
        }
        ((planned_minutes - downtime_minutes) / planned_minutes).clamp(0.0, 1.0)
    }

    /// 性能率 = min(1, 实际产量 / 目标产量)
    ///
    /// 不做下限截断: 负的实际产量 (畸形输入) 会得到负比率,由调用方负责。
    /// `target == 0` 时返回 0
    pub fn performance(&self, actual: f64, target: f64) -> f64 {
        if target == 0.0 {
            return 0.0;
        }
        (actual / target).min(1.0)
    }

    /// 良品率 = 良品数 / 实际产量,`actual == 0` 时精确返回 0
    pub fn quality(&self, good: f64, actual: f64) -> f64 {
        if actual == 0.0 {
            return 0.0;
        }
        good / actual
    }

    /// OEE = A × P × Q
    pub fn oee(&self, availability: f64, performance: f64, quality: f64) -> f64 {
        availability * performance * quality
    }

    /// 由汇总量计算完整指标
    pub fn metrics_from_totals(
        &self,
        description: impl Into<String>,
        planned_minutes: f64,
        downtime_minutes: f64,
        target: f64,
        actual: f64,
        good: f64,
    ) -> OeeMetrics {
        let availability = self.availability(planned_minutes, downtime_minutes);
        let performance = self.performance(actual, target);
        let quality = self.quality(good, actual);
        let total_oee = self.oee(availability, performance, quality);

        OeeMetrics::new(description, availability, performance, quality, total_oee)
    }

    // ==========================================
    // 单元 OEE
    // ==========================================

    /// 计算单个单元的 OEE
    ///
    /// 只累计 `unit_id` 与该单元匹配的事件时长 (计划与非计划停机都计入)
    pub fn unit_oee(&self, unit: &ProductionUnit, events: &[DowntimeEvent]) -> OeeMetrics {
        let downtime: f64 = events
            .iter()
            .filter(|e| e.unit_id == unit.id)
            .map(|e| e.duration_minutes)
            .sum();

        let metrics = self.metrics_from_totals(
            format!("{} OEE", unit.name),
            unit.planned_production_time,
            downtime,
            unit.target_quantity,
            unit.actual_quantity,
            unit.good_quantity,
        );

        tracing::debug!(
            unit_id = %unit.id,
            downtime_minutes = downtime,
            total_oee = metrics.total_oee,
            "单元 OEE 计算完成"
        );

        metrics
    }
}

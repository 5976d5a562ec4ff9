// ==========================================
// OEE 分析引擎 - 环比比较器
// ==========================================
// 职责: 当前周期 vs 上一周期的差值 / 相对变化 / 改善判定
// 红线: previous == 0 时相对变化降级为 0%,不报错 (缺基准周期)
// ==========================================
// 注: delta() 固定 "越高越好" 口径,适用于 OEE 及三个分项比率。
//     停机分钟数等 "越低越好" 指标必须使用 delta_with_polarity。
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::metrics::{OeeMetrics, PeriodComparison, PeriodDelta};

// ==========================================
// MetricPolarity - 指标方向
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricPolarity {
    #[default]
    HigherIsBetter,
    LowerIsBetter,
}

// ==========================================
// PeriodComparator - 环比比较器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodComparator;

impl PeriodComparator {
    pub fn new() -> Self {
        Self
    }

    /// 环比差值 ("越高越好")
    ///
    /// `is_improvement = delta >= 0`
    pub fn delta(&self, current: f64, previous: f64) -> PeriodDelta {
        self.delta_with_polarity(current, previous, MetricPolarity::HigherIsBetter)
    }

    /// 环比差值 (显式指标方向)
    pub fn delta_with_polarity(
        &self,
        current: f64,
        previous: f64,
        polarity: MetricPolarity,
    ) -> PeriodDelta {
        let delta = current - previous;
        let delta_percent = if previous != 0.0 {
            delta / previous * 100.0
        } else {
            0.0
        };
        let is_improvement = match polarity {
            MetricPolarity::HigherIsBetter => delta >= 0.0,
            MetricPolarity::LowerIsBetter => delta <= 0.0,
        };

        PeriodDelta {
            current,
            previous,
            delta,
            delta_percent,
            is_improvement,
        }
    }

    /// 四项核心比率的环比
    pub fn compare_metrics(&self, current: &OeeMetrics, previous: &OeeMetrics) -> PeriodComparison {
        PeriodComparison {
            oee: self.delta(current.total_oee, previous.total_oee),
            availability: self.delta(current.availability, previous.availability),
            performance: self.delta(current.performance, previous.performance),
            quality: self.delta(current.quality, previous.quality),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_identical_values() {
        let comparator = PeriodComparator::new();

        for x in [0.0, 0.42, 1.0, -3.5] {
            let d = comparator.delta(x, x);
            assert_eq!(d.delta, 0.0);
            assert_eq!(d.delta_percent, 0.0);
            assert!(d.is_improvement);
        }
    }

    #[test]
    fn test_delta_percent_of_previous() {
        let comparator = PeriodComparator::new();

        let up = comparator.delta(0.75, 0.5);
        assert_eq!(up.delta, 0.25);
        assert_eq!(up.delta_percent, 50.0);
        assert!(up.is_improvement);

        let down = comparator.delta(0.5, 0.8);
        assert!(down.delta < 0.0);
        assert!((down.delta_percent + 37.5).abs() < 1e-9);
        assert!(!down.is_improvement);
    }

    #[test]
    fn test_delta_zero_previous_degrades_to_zero_percent() {
        let comparator = PeriodComparator::new();
        let d = comparator.delta(0.6, 0.0);

        assert_eq!(d.delta, 0.6);
        assert_eq!(d.delta_percent, 0.0);
        assert!(d.is_improvement);
    }

    #[test]
    fn test_lower_is_better_polarity() {
        let comparator = PeriodComparator::new();

        let less_downtime = comparator.delta_with_polarity(90.0, 120.0, MetricPolarity::LowerIsBetter);
        assert!(less_downtime.is_improvement);
        assert_eq!(less_downtime.delta, -30.0);
        assert_eq!(less_downtime.delta_percent, -25.0);

        let more_downtime = comparator.delta_with_polarity(150.0, 120.0, MetricPolarity::LowerIsBetter);
        assert!(!more_downtime.is_improvement);

        let flat = comparator.delta_with_polarity(120.0, 120.0, MetricPolarity::LowerIsBetter);
        assert!(flat.is_improvement);
    }

    #[test]
    fn test_compare_metrics() {
        let comparator = PeriodComparator::new();
        let current = OeeMetrics::new("Overall OEE", 0.9, 0.8, 0.95, 0.684);
        let previous = OeeMetrics::new("Previous Week", 0.85, 0.85, 0.95, 0.686_375);

        let cmp = comparator.compare_metrics(&current, &previous);

        assert_eq!(cmp.oee.current, 0.684);
        assert!(!cmp.oee.is_improvement);
        assert!(cmp.availability.is_improvement);
        assert!(!cmp.performance.is_improvement);
        assert_eq!(cmp.quality.delta, 0.0);
        assert!(cmp.quality.is_improvement);
    }
}

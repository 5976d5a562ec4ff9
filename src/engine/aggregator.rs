// ==========================================
// OEE 分析引擎 - 汇总引擎
// ==========================================
// 职责: 全周期 OEE 汇总 + 停机分组统计
// 输入: 单元列表 + 停机事件
// 输出: OeeMetrics / DowntimeGroup / ReasonGroup
// ==========================================
// 红线: 先求总量再套公式,不对各单元 OEE 取平均
// ==========================================

use std::collections::HashMap;

use crate::domain::metrics::{DowntimeGroup, OeeMetrics, ReasonGroup};
use crate::domain::production::{DowntimeEvent, ProductionUnit};
use crate::domain::types::{DowntimeCategory, DowntimeType};
use crate::engine::metric_calculator::MetricCalculator;
use crate::engine::pareto::ParetoRanker;

pub const OVERALL_DESCRIPTION: &str = "Overall OEE";

// ==========================================
// DowntimeAggregator - 汇总引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct DowntimeAggregator {
    calculator: MetricCalculator,
}

impl DowntimeAggregator {
    pub fn new() -> Self {
        Self {
            calculator: MetricCalculator::new(),
        }
    }

    // ==========================================
    // 全周期 OEE
    // ==========================================

    /// 全周期 OEE
    ///
    /// 停机时间累计全部事件 (不按所属单元过滤),
    /// 计划时间与各数量字段累计全部单元,再套用四个公式。
    /// 大单元因此获得正确权重。
    pub fn overall_oee(&self, units: &[ProductionUnit], events: &[DowntimeEvent]) -> OeeMetrics {
        let planned: f64 = units.iter().map(|u| u.planned_production_time).sum();
        let downtime: f64 = events.iter().map(|e| e.duration_minutes).sum();
        let target: f64 = units.iter().map(|u| u.target_quantity).sum();
        let actual: f64 = units.iter().map(|u| u.actual_quantity).sum();
        let good: f64 = units.iter().map(|u| u.good_quantity).sum();

        tracing::debug!(
            unit_count = units.len(),
            event_count = events.len(),
            planned_minutes = planned,
            downtime_minutes = downtime,
            "汇总全周期 OEE"
        );

        self.calculator.metrics_from_totals(
            OVERALL_DESCRIPTION,
            planned,
            downtime,
            target,
            actual,
            good,
        )
    }

    // ==========================================
    // 停机分组
    // ==========================================

    /// 按类别分组
    ///
    /// # 参数
    /// - `events`: 停机事件
    /// - `unplanned_only`: 仅保留非计划停机
    ///
    /// # 返回
    /// 按时长降序的分组 (含占比与累计占比); 过滤后为空则返回空序列
    pub fn group_downtime_by_category(
        &self,
        events: &[DowntimeEvent],
        unplanned_only: bool,
    ) -> Vec<DowntimeGroup> {
        let mut index: HashMap<DowntimeCategory, usize> = HashMap::new();
        let mut groups: Vec<DowntimeGroup> = Vec::new();

        for event in filter_events(events, unplanned_only) {
            match index.get(&event.category) {
                Some(&i) => {
                    groups[i].total_duration_minutes += event.duration_minutes;
                    groups[i].event_count += 1;
                }
                None => {
                    index.insert(event.category, groups.len());
                    groups.push(DowntimeGroup {
                        category: event.category,
                        total_duration_minutes: event.duration_minutes,
                        event_count: 1,
                        percentage: 0.0,
                        cumulative_percentage: 0.0,
                    });
                }
            }
        }

        tracing::debug!(group_count = groups.len(), unplanned_only, "停机按类别分组");
        ParetoRanker::new().rank(groups)
    }

    /// 按 (类别, 原因) 分组
    ///
    /// 复合键使用元组,原因文本中出现任何分隔符都不会串键。
    /// 每组保留第一条贡献事件的单元 ID。
    pub fn group_downtime_by_reason(
        &self,
        events: &[DowntimeEvent],
        unplanned_only: bool,
    ) -> Vec<ReasonGroup> {
        let mut index: HashMap<(DowntimeCategory, &str), usize> = HashMap::new();
        let mut groups: Vec<ReasonGroup> = Vec::new();

        for event in filter_events(events, unplanned_only) {
            let key = (event.category, event.reason.as_str());
            match index.get(&key) {
                Some(&i) => {
                    groups[i].total_duration_minutes += event.duration_minutes;
                    groups[i].event_count += 1;
                }
                None => {
                    index.insert(key, groups.len());
                    groups.push(ReasonGroup {
                        category: event.category,
                        reason: event.reason.clone(),
                        unit_id: event.unit_id.clone(),
                        total_duration_minutes: event.duration_minutes,
                        event_count: 1,
                        percentage: 0.0,
                        cumulative_percentage: 0.0,
                    });
                }
            }
        }

        tracing::debug!(group_count = groups.len(), unplanned_only, "停机按原因分组");
        ParetoRanker::new().rank(groups)
    }

    // ==========================================
    // 事件筛选
    // ==========================================

    pub fn events_for_unit<'a>(
        &self,
        events: &'a [DowntimeEvent],
        unit_id: &str,
    ) -> Vec<&'a DowntimeEvent> {
        events.iter().filter(|e| e.unit_id == unit_id).collect()
    }

    pub fn events_by_category<'a>(
        &self,
        events: &'a [DowntimeEvent],
        category: DowntimeCategory,
    ) -> Vec<&'a DowntimeEvent> {
        events.iter().filter(|e| e.category == category).collect()
    }

    pub fn events_by_type<'a>(
        &self,
        events: &'a [DowntimeEvent],
        event_type: DowntimeType,
    ) -> Vec<&'a DowntimeEvent> {
        events.iter().filter(|e| e.event_type == event_type).collect()
    }

    /// 单元名称; 未知 ID 原样返回
    pub fn unit_name<'a>(&self, units: &'a [ProductionUnit], unit_id: &'a str) -> &'a str {
        units
            .iter()
            .find(|u| u.id == unit_id)
            .map(|u| u.name.as_str())
            .unwrap_or(unit_id)
    }
}

fn filter_events(
    events: &[DowntimeEvent],
    unplanned_only: bool,
) -> impl Iterator<Item = &DowntimeEvent> {
    events
        .iter()
        .filter(move |e| !unplanned_only || e.is_unplanned())
}

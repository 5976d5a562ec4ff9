// ==========================================
// OEE 分析引擎 - 结构化导出文档
// ==========================================
// 职责: 生产快照 → 完整计算、自包含的导出快照
// 红线: 百分比字段只在 MetricsWithPercent::from_metrics 一处派生 (ratio × 100),
//       JSON 与 CSV 两种渲染共用同一份计算结果,不会出现口径分叉
// 红线: 导出时间由调用方注入,构建过程是纯函数
// ==========================================

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::metrics::{DowntimeGroup, OeeMetrics, PeriodComparison, ReasonGroup};
use crate::domain::production::{DowntimeEvent, ProductionData, ProductionUnit};
use crate::domain::types::DowntimeCategory;
use crate::engine::{DowntimeAggregator, MetricCalculator, ParetoRanker, PeriodComparator};

/// 导出 Top 原因条数
pub const DEFAULT_EXPORT_TOP_REASONS: i32 = 10;

// ==========================================
// 导出文档结构
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub site: String,
    pub department: String,
    pub report_date: String,
    pub production_line: String,
    /// YYYY-MM-DD (UTC)
    pub export_date: String,
    /// RFC 3339, 毫秒精度, 'Z' 后缀
    pub export_time: String,
}

/// 指标 + 预乘百分比字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsWithPercent {
    #[serde(flatten)]
    pub metrics: OeeMetrics,

    #[serde(rename = "totalOEEPercent")]
    pub total_oee_percent: f64,
    pub availability_percent: f64,
    pub performance_percent: f64,
    pub quality_percent: f64,
}

impl MetricsWithPercent {
    pub fn from_metrics(metrics: OeeMetrics) -> Self {
        Self {
            total_oee_percent: metrics.total_oee * 100.0,
            availability_percent: metrics.availability * 100.0,
            performance_percent: metrics.performance * 100.0,
            quality_percent: metrics.quality * 100.0,
            metrics,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitExport {
    #[serde(flatten)]
    pub unit: ProductionUnit,
    pub oee: MetricsWithPercent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasonSummary {
    pub category: DowntimeCategory,
    pub reason: String,
    #[serde(serialize_with = "crate::domain::json_number::serialize")]
    pub total_duration_minutes: f64,
    pub event_count: u32,
}

impl From<ReasonGroup> for ReasonSummary {
    fn from(group: ReasonGroup) -> Self {
        Self {
            category: group.category,
            reason: group.reason,
            total_duration_minutes: group.total_duration_minutes,
            event_count: group.event_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: DowntimeCategory,
    #[serde(serialize_with = "crate::domain::json_number::serialize")]
    pub total_duration_minutes: f64,
    pub event_count: u32,
    pub percentage: f64,
}

impl From<DowntimeGroup> for CategorySummary {
    fn from(group: DowntimeGroup) -> Self {
        Self {
            category: group.category,
            total_duration_minutes: group.total_duration_minutes,
            event_count: group.event_count,
            percentage: group.percentage,
        }
    }
}

/// 结构化导出文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub metadata: ExportMetadata,

    #[serde(rename = "overallOEE")]
    pub overall_oee: MetricsWithPercent,

    #[serde(rename = "shifts")]
    pub units: Vec<UnitExport>,

    pub downtime_events: Vec<DowntimeEvent>,
    pub top_downtime_reasons: Vec<ReasonSummary>,
    pub downtime_by_category: Vec<CategorySummary>,
    pub previous_period: MetricsWithPercent,
    pub period_comparison: PeriodComparison,
}

// ==========================================
// ExportBuilder - 导出文档构建器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct ExportBuilder {
    calculator: MetricCalculator,
    aggregator: DowntimeAggregator,
    ranker: ParetoRanker,
    comparator: PeriodComparator,
    top_reasons_limit: i32,
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self {
            calculator: MetricCalculator::new(),
            aggregator: DowntimeAggregator::new(),
            ranker: ParetoRanker::new(),
            comparator: PeriodComparator::new(),
            top_reasons_limit: DEFAULT_EXPORT_TOP_REASONS,
        }
    }

    pub fn with_top_reasons_limit(mut self, limit: i32) -> Self {
        self.top_reasons_limit = limit;
        self
    }

    /// 构建导出文档
    ///
    /// Top 原因与类别分布只统计非计划停机
    pub fn build(&self, data: &ProductionData, exported_at: DateTime<Utc>) -> ExportDocument {
        let overall = self
            .aggregator
            .overall_oee(&data.units, &data.downtime_events);
        let period_comparison = self
            .comparator
            .compare_metrics(&overall, &data.previous_period);

        let units = data
            .units
            .iter()
            .map(|unit| UnitExport {
                unit: unit.clone(),
                oee: MetricsWithPercent::from_metrics(
                    self.calculator.unit_oee(unit, &data.downtime_events),
                ),
            })
            .collect();

        let top_downtime_reasons = self
            .ranker
            .top_reasons(&data.downtime_events, self.top_reasons_limit, true)
            .into_iter()
            .map(ReasonSummary::from)
            .collect();

        let downtime_by_category = self
            .aggregator
            .group_downtime_by_category(&data.downtime_events, true)
            .into_iter()
            .map(CategorySummary::from)
            .collect();

        tracing::debug!(
            report_date = %data.metadata.report_date,
            unit_count = data.units.len(),
            event_count = data.downtime_events.len(),
            "导出文档构建完成"
        );

        ExportDocument {
            metadata: ExportMetadata {
                site: data.metadata.site.clone(),
                department: data.metadata.department.clone(),
                report_date: data.metadata.report_date.clone(),
                production_line: data.production_line.name.clone(),
                export_date: exported_at.format("%Y-%m-%d").to_string(),
                export_time: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
            overall_oee: MetricsWithPercent::from_metrics(overall),
            units,
            downtime_events: data.downtime_events.clone(),
            top_downtime_reasons,
            downtime_by_category,
            previous_period: MetricsWithPercent::from_metrics(data.previous_period.clone()),
            period_comparison,
        }
    }
}

/// 构建导出文档 (默认 Top 10 原因)
pub fn build_export_document(data: &ProductionData, exported_at: DateTime<Utc>) -> ExportDocument {
    ExportBuilder::new().build(data, exported_at)
}

/// 以当前 UTC 时间构建导出文档
pub fn build_export_document_now(data: &ProductionData) -> ExportDocument {
    build_export_document(data, Utc::now())
}

// ==========================================
// OEE 分析引擎 - 看板 API
// ==========================================
// 职责: 封装一份已校验的生产快照,为看板提供查询与导出入口
// 架构: API 层 → 引擎层 (计算器 / 汇总 / 排名 / 环比) → 导出层
// 说明: 班次筛选 (None = 全部) 与看板行为一致:
//       选中班次时指标取单元 OEE,停机分析只看该班次事件
// ==========================================

use chrono::{DateTime, Utc};

use crate::config::AnalyticsConfig;
use crate::domain::metrics::{DowntimeGroup, OeeMetrics, PeriodComparison, ReasonGroup};
use crate::domain::production::{DowntimeEvent, ProductionData};
use crate::domain::types::OeeStatus;
use crate::engine::error::AnalyticsResult;
use crate::engine::validator::validate_production_data;
use crate::engine::{DowntimeAggregator, MetricCalculator, ParetoRanker, PeriodComparator};
use crate::export::{ExportArtifact, ExportBuilder, ExportDocument, ExportResult};

// ==========================================
// OeeAnalyticsApi - 看板 API
// ==========================================
pub struct OeeAnalyticsApi {
    data: ProductionData,
    config: AnalyticsConfig,
    calculator: MetricCalculator,
    aggregator: DowntimeAggregator,
    ranker: ParetoRanker,
    comparator: PeriodComparator,
}

impl OeeAnalyticsApi {
    /// 创建 API 实例
    ///
    /// # 参数
    /// - data: 生产快照 (在此处完成边界校验)
    /// - config: 分析配置
    ///
    /// # 返回
    /// - Err(MalformedInput / InvalidConfig): 输入或配置不合法
    pub fn new(data: ProductionData, config: AnalyticsConfig) -> AnalyticsResult<Self> {
        config.validate()?;
        validate_production_data(&data)?;

        tracing::info!(
            line = %data.production_line.name,
            report_date = %data.metadata.report_date,
            unit_count = data.units.len(),
            event_count = data.downtime_events.len(),
            "看板 API 初始化"
        );

        Ok(Self {
            data,
            config,
            calculator: MetricCalculator::new(),
            aggregator: DowntimeAggregator::new(),
            ranker: ParetoRanker::new(),
            comparator: PeriodComparator::new(),
        })
    }

    pub fn data(&self) -> &ProductionData {
        &self.data
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    // ==========================================
    // OEE 查询
    // ==========================================

    pub fn overall_oee(&self) -> OeeMetrics {
        self.aggregator
            .overall_oee(&self.data.units, &self.data.downtime_events)
    }

    /// 单元 OEE; 未知单元返回 None
    pub fn unit_oee(&self, unit_id: &str) -> Option<OeeMetrics> {
        self.data
            .find_unit(unit_id)
            .map(|unit| self.calculator.unit_oee(unit, &self.data.downtime_events))
    }

    /// 当前筛选下的 OEE (选中且存在的班次 → 单元 OEE,否则总体 OEE)
    pub fn selected_oee(&self, unit_id: Option<&str>) -> OeeMetrics {
        unit_id
            .and_then(|id| self.unit_oee(id))
            .unwrap_or_else(|| self.overall_oee())
    }

    /// 当前筛选下的停机事件
    pub fn scoped_events(&self, unit_id: Option<&str>) -> Vec<DowntimeEvent> {
        match unit_id {
            Some(id) => self
                .aggregator
                .events_for_unit(&self.data.downtime_events, id)
                .into_iter()
                .cloned()
                .collect(),
            None => self.data.downtime_events.clone(),
        }
    }

    // ==========================================
    // 停机分析
    // ==========================================

    /// 非计划停机的类别帕累托
    pub fn category_breakdown(&self, unit_id: Option<&str>) -> Vec<DowntimeGroup> {
        let events = self.scoped_events(unit_id);
        self.aggregator.group_downtime_by_category(&events, true)
    }

    /// 看板 Top 原因 (非计划停机,条数取配置)
    pub fn top_reasons(&self, unit_id: Option<&str>) -> Vec<ReasonGroup> {
        let events = self.scoped_events(unit_id);
        self.ranker
            .top_reasons(&events, self.config.dashboard_top_reasons_limit, true)
    }

    /// 重点类别累计占比 (配置的 pareto_top_categories 个)
    pub fn top_category_share(&self, unit_id: Option<&str>) -> f64 {
        let groups = self.category_breakdown(unit_id);
        self.ranker
            .top_share(&groups, self.config.pareto_top_categories)
    }

    /// 总停机分钟数 (计划 + 非计划)
    pub fn total_downtime_minutes(&self, unit_id: Option<&str>) -> f64 {
        self.scoped_events(unit_id)
            .iter()
            .map(|e| e.duration_minutes)
            .sum()
    }

    // ==========================================
    // 环比与状态
    // ==========================================

    /// 当前筛选下的指标 vs 上一周期
    ///
    /// 选中班次时以该班次 OEE 为当前值,基准始终是快照的 previous_period
    pub fn period_comparison(&self, unit_id: Option<&str>) -> PeriodComparison {
        self.comparator
            .compare_metrics(&self.selected_oee(unit_id), &self.data.previous_period)
    }

    /// 状态分级,阈值取快照元数据
    pub fn status(&self, oee: f64) -> OeeStatus {
        OeeStatus::classify(oee, &self.data.metadata.thresholds())
    }

    // ==========================================
    // 导出
    // ==========================================

    pub fn export_document(&self, exported_at: DateTime<Utc>) -> ExportDocument {
        ExportBuilder::new()
            .with_top_reasons_limit(self.config.export_top_reasons_limit)
            .build(&self.data, exported_at)
    }

    pub fn export_json(&self, exported_at: DateTime<Utc>) -> ExportResult<ExportArtifact> {
        ExportArtifact::json(&self.export_document(exported_at))
    }

    pub fn export_csv(&self, exported_at: DateTime<Utc>) -> ExportResult<ExportArtifact> {
        ExportArtifact::csv(&self.export_document(exported_at))
    }
}

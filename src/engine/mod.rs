// ==========================================
// OEE 分析引擎 - 引擎层
// ==========================================
// 数据流: 指标计算 → 汇总 → 排名/环比 → 导出
// 红线: 引擎无状态、无 I/O,不修改调用方输入
// ==========================================

pub mod aggregator;
pub mod error;
pub mod metric_calculator;
pub mod pareto;
pub mod period_comparator;
pub mod validator;

// 重导出核心引擎
pub use aggregator::DowntimeAggregator;
pub use error::{AnalyticsError, AnalyticsResult};
pub use metric_calculator::MetricCalculator;
pub use pareto::{ParetoEntry, ParetoRanker};
pub use period_comparator::{MetricPolarity, PeriodComparator};
pub use validator::{
    collect_warnings, parse_production_data, validate_production_data, InputViolation,
};

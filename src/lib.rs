// ==========================================
// OEE 分析引擎 - 核心库
// ==========================================
// 系统定位: 设备综合效率 (OEE) 与停机分析的纯计算层
// 数据流: 生产快照 → 指标计算 → 汇总 → 排名/环比 → 导出
// 红线: 无持久化、无 I/O (导出交付除外)、无共享可变状态
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与值对象
pub mod domain;

// 引擎层 - 计算规则
pub mod engine;

// 导出层 - JSON / CSV
pub mod export;

// 配置层 - 分析配置
pub mod config;

// API 层 - 看板入口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DowntimeCategory, DowntimeType, OeeStatus};

// 领域实体
pub use domain::{
    DowntimeEvent, DowntimeGroup, OeeMetrics, PeriodComparison, PeriodDelta, ProductionData,
    ProductionLine, ProductionMetadata, ProductionUnit, ReasonGroup, Thresholds,
};

// 引擎
pub use engine::{
    AnalyticsError, AnalyticsResult, DowntimeAggregator, MetricCalculator, MetricPolarity,
    ParetoRanker, PeriodComparator,
};

// 导出
pub use export::{ExportArtifact, ExportDocument, ExportError, ExportFormat, ExportResult};

// 配置
pub use config::AnalyticsConfig;

// API
pub use api::OeeAnalyticsApi;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "OEE 分析引擎";

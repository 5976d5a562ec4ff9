// ==========================================
// OEE 分析引擎 - 领域层
// ==========================================
// 职责: 输入实体与计算结果值对象,全部为不可变值
// ==========================================

pub mod json_number;
pub mod metrics;
pub mod production;
pub mod types;

pub use metrics::{
    DowntimeGroup, OeeMetrics, PeriodComparison, PeriodDelta, ReasonGroup, Thresholds,
};
pub use production::{
    DowntimeEvent, ProductionData, ProductionLine, ProductionMetadata, ProductionUnit,
};
pub use types::{DowntimeCategory, DowntimeType, OeeStatus};

// ==========================================
// OEE 分析引擎 - API 层
// ==========================================
// 职责: 面向看板 (外部展示层) 的查询与导出入口
// ==========================================

pub mod oee_api;

pub use oee_api::OeeAnalyticsApi;

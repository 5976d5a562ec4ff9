// ==========================================
// OEE 分析引擎 - 配置层
// ==========================================
// 职责: 分析配置 (阈值 / Top-N / 帕累托分档提示),支持默认值与覆写
// ==========================================

pub mod analytics_config;

pub use analytics_config::{config_keys, AnalyticsConfig};

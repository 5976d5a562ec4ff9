// ==========================================
// OEE 分析引擎 - 分析配置
// ==========================================
// 职责: 状态阈值 / Top-N 条数 / 帕累托展示分档提示
// 来源: 默认值 → JSON 或 key-value 覆写 (缺省键回落默认值)
// ==========================================

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::metrics::Thresholds;
use crate::engine::error::{AnalyticsError, AnalyticsResult};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    // 状态阈值
    pub const WORLD_CLASS_OEE_TARGET: &str = "world_class_oee_target";
    pub const MINIMUM_ACCEPTABLE_OEE: &str = "minimum_acceptable_oee";

    // Top-N
    pub const EXPORT_TOP_REASONS_LIMIT: &str = "export_top_reasons_limit";
    pub const DASHBOARD_TOP_REASONS_LIMIT: &str = "dashboard_top_reasons_limit";

    // 帕累托分档 (展示层使用,引擎不打标签)
    pub const PARETO_TOP_CATEGORIES: &str = "pareto_top_categories";
    pub const PARETO_SECONDARY_CATEGORIES: &str = "pareto_secondary_categories";
}

/// 分析配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// 世界级 OEE 目标 (0~1)
    pub world_class_oee_target: f64,

    /// 最低可接受 OEE (0~1)
    pub minimum_acceptable_oee: f64,

    /// 导出文档 Top 原因条数
    pub export_top_reasons_limit: i32,

    /// 看板 Top 原因条数
    pub dashboard_top_reasons_limit: i32,

    /// 帕累托重点类别数
    pub pareto_top_categories: usize,

    /// 帕累托次要类别上界
    pub pareto_secondary_categories: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            world_class_oee_target: 0.85,
            minimum_acceptable_oee: 0.65,
            export_top_reasons_limit: 10,
            dashboard_top_reasons_limit: 3,
            pareto_top_categories: 2,
            pareto_secondary_categories: 4,
        }
    }
}

impl AnalyticsConfig {
    /// 从 JSON 读取 (缺省字段取默认值)
    pub fn from_json_str(json: &str) -> AnalyticsResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| AnalyticsError::InvalidConfig {
            key: "<json>".to_string(),
            value: String::new(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 从 key-value 读取
    ///
    /// # 参数
    /// - kv: 配置键 → 字符串值 (键见 `config_keys`)
    pub fn from_kv(kv: &HashMap<String, String>) -> AnalyticsResult<Self> {
        use config_keys::*;

        let defaults = Self::default();
        let config = Self {
            world_class_oee_target: get_or_default(
                kv,
                WORLD_CLASS_OEE_TARGET,
                defaults.world_class_oee_target,
            )?,
            minimum_acceptable_oee: get_or_default(
                kv,
                MINIMUM_ACCEPTABLE_OEE,
                defaults.minimum_acceptable_oee,
            )?,
            export_top_reasons_limit: get_or_default(
                kv,
                EXPORT_TOP_REASONS_LIMIT,
                defaults.export_top_reasons_limit,
            )?,
            dashboard_top_reasons_limit: get_or_default(
                kv,
                DASHBOARD_TOP_REASONS_LIMIT,
                defaults.dashboard_top_reasons_limit,
            )?,
            pareto_top_categories: get_or_default(
                kv,
                PARETO_TOP_CATEGORIES,
                defaults.pareto_top_categories,
            )?,
            pareto_secondary_categories: get_or_default(
                kv,
                PARETO_SECONDARY_CATEGORIES,
                defaults.pareto_secondary_categories,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// 配置校验
    pub fn validate(&self) -> AnalyticsResult<()> {
        use config_keys::*;

        for (key, value) in [
            (WORLD_CLASS_OEE_TARGET, self.world_class_oee_target),
            (MINIMUM_ACCEPTABLE_OEE, self.minimum_acceptable_oee),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(key, value, "必须在 [0, 1] 范围内"));
            }
        }

        if self.minimum_acceptable_oee > self.world_class_oee_target {
            return Err(invalid(
                MINIMUM_ACCEPTABLE_OEE,
                self.minimum_acceptable_oee,
                "不能高于世界级目标",
            ));
        }

        if self.pareto_secondary_categories < self.pareto_top_categories {
            return Err(invalid(
                PARETO_SECONDARY_CATEGORIES,
                self.pareto_secondary_categories,
                "不能小于重点类别数",
            ));
        }

        Ok(())
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.world_class_oee_target, self.minimum_acceptable_oee)
    }
}

fn get_or_default<T>(kv: &HashMap<String, String>, key: &str, default: T) -> AnalyticsResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match kv.get(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| AnalyticsError::InvalidConfig {
            key: key.to_string(),
            value: raw.clone(),
            message: e.to_string(),
        }),
    }
}

fn invalid(key: &str, value: impl ToString, message: &str) -> AnalyticsError {
    AnalyticsError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

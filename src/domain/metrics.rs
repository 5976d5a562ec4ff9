// ==========================================
// OEE 分析引擎 - 计算结果值对象
// ==========================================
// 职责: OEE 指标 / 停机分组 / 环比差值 / 分级阈值
// 红线: 每次查询重新计算,构造后不可变
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::DowntimeCategory;

// ==========================================
// OeeMetrics - OEE 指标
// ==========================================
// 四个比率均在 [0,1] (performance 在输入畸形时可能为负)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OeeMetrics {
    pub description: String,

    #[serde(rename = "totalOEE")]
    pub total_oee: f64,

    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
}

impl OeeMetrics {
    pub fn new(
        description: impl Into<String>,
        availability: f64,
        performance: f64,
        quality: f64,
        total_oee: f64,
    ) -> Self {
        Self {
            description: description.into(),
            total_oee,
            availability,
            performance,
            quality,
        }
    }
}

// ==========================================
// DowntimeGroup - 按类别分组的停机统计
// ==========================================
// percentage / cumulative_percentage 仅相对于产生它的过滤条件和排序有效
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeGroup {
    pub category: DowntimeCategory,
    #[serde(serialize_with = "crate::domain::json_number::serialize")]
    pub total_duration_minutes: f64,
    pub event_count: u32,

    /// 占过滤后总时长的百分比 (0-100)
    pub percentage: f64,

    /// 排序后累计百分比 (0-100)
    pub cumulative_percentage: f64,
}

// ==========================================
// ReasonGroup - 按 (类别, 原因) 分组的停机统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasonGroup {
    pub category: DowntimeCategory,
    pub reason: String,

    /// 代表单元 (第一条贡献事件所属单元,用于追溯)
    #[serde(rename = "shiftId")]
    pub unit_id: String,

    #[serde(serialize_with = "crate::domain::json_number::serialize")]
    pub total_duration_minutes: f64,
    pub event_count: u32,
    pub percentage: f64,
    pub cumulative_percentage: f64,
}

// ==========================================
// PeriodDelta - 环比差值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDelta {
    pub current: f64,
    pub previous: f64,
    pub delta: f64,

    /// 相对上一周期的变化百分比 (previous == 0 时为 0)
    pub delta_percent: f64,

    pub is_improvement: bool,
}

// ==========================================
// PeriodComparison - 四项核心比率的环比
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub oee: PeriodDelta,
    pub availability: PeriodDelta,
    pub performance: PeriodDelta,
    pub quality: PeriodDelta,
}

// ==========================================
// Thresholds - OEE 分级阈值
// ==========================================
// 外部提供,仅用于状态分级,不属于任何指标
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    pub world_class: f64,
    pub minimum_acceptable: f64,
}

impl Thresholds {
    pub fn new(world_class: f64, minimum_acceptable: f64) -> Self {
        Self {
            world_class,
            minimum_acceptable,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(0.85, 0.65)
    }
}

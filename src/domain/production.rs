// ==========================================
// OEE 分析引擎 - 生产数据实体
// ==========================================
// 职责: 调用方提供的生产快照 (产线 / 班次 / 停机事件 / 元数据)
// 红线: 引擎只读,不修改调用方输入
// JSON 字段: camelCase (与看板数据文件一致)
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::metrics::{OeeMetrics, Thresholds};
use crate::domain::types::{DowntimeCategory, DowntimeType};

// ==========================================
// ProductionLine - 产线描述
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionLine {
    pub id: String,
    pub name: String,
    /// 目标节拍 (秒/件)
    #[serde(serialize_with = "crate::domain::json_number::serialize")]
    pub target_cycle_time: f64,
    #[serde(default)]
    pub description: String,
}

// ==========================================
// ProductionUnit - 生产单元 (班次)
// ==========================================
// 注: actual = good + defect 是预期关系,引擎不强制,三个数量字段独立使用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionUnit {
    pub id: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,

    /// 计划生产时间 (分钟)
    #[serde(serialize_with = "crate::domain::json_number::serialize")]
    pub planned_production_time: f64,

    #[serde(serialize_with = "crate::domain::json_number::serialize")]
    pub target_quantity: f64,
    #[serde(serialize_with = "crate::domain::json_number::serialize")]
    pub actual_quantity: f64,
    #[serde(serialize_with = "crate::domain::json_number::serialize")]
    pub good_quantity: f64,
    #[serde(serialize_with = "crate::domain::json_number::serialize")]
    pub defect_quantity: f64,
}

// ==========================================
// DowntimeEvent - 停机事件
// ==========================================
// 注: duration_minutes 由调用方提供,引擎不根据时间窗重算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeEvent {
    pub id: String,

    /// 所属单元 ID (非拥有引用)
    #[serde(rename = "shiftId")]
    pub unit_id: String,

    pub category: DowntimeCategory,
    pub reason: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(serialize_with = "crate::domain::json_number::serialize")]
    pub duration_minutes: f64,

    #[serde(rename = "type")]
    pub event_type: DowntimeType,
}

impl DowntimeEvent {
    pub fn is_unplanned(&self) -> bool {
        self.event_type == DowntimeType::Unplanned
    }
}

// ==========================================
// ProductionMetadata - 报表元数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionMetadata {
    pub site: String,
    pub department: String,
    pub report_date: String,

    #[serde(rename = "worldClassOEETarget")]
    pub world_class_oee_target: f64,

    #[serde(rename = "minimumAcceptableOEE")]
    pub minimum_acceptable_oee: f64,
}

impl ProductionMetadata {
    /// 状态分级阈值
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.world_class_oee_target, self.minimum_acceptable_oee)
    }
}

// ==========================================
// ProductionData - 生产快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionData {
    pub production_line: ProductionLine,

    #[serde(rename = "shifts")]
    pub units: Vec<ProductionUnit>,

    pub downtime_events: Vec<DowntimeEvent>,

    /// 上一周期指标 (环比基准)
    pub previous_period: OeeMetrics,

    pub metadata: ProductionMetadata,
}

impl ProductionData {
    /// 按 ID 查找单元
    pub fn find_unit(&self, unit_id: &str) -> Option<&ProductionUnit> {
        self.units.iter().find(|u| u.id == unit_id)
    }
}

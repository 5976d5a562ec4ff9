// ==========================================
// OEE 分析引擎 - 领域类型定义
// ==========================================
// 停机类别 / 停机类型 / OEE 状态均为封闭枚举,
// 编译期穷尽匹配,不做运行时字符串比较
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::metrics::Thresholds;

// ==========================================
// 停机类别 (Downtime Category)
// ==========================================
// 序列化格式: 展示名称 (与看板数据文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DowntimeCategory {
    #[serde(rename = "Machine Failure")]
    MachineFailure, // 设备故障
    #[serde(rename = "Material Shortage")]
    MaterialShortage, // 缺料
    #[serde(rename = "Planned Maintenance")]
    PlannedMaintenance, // 计划检修
    #[serde(rename = "Changeover")]
    Changeover, // 换型
    #[serde(rename = "Quality Issue")]
    QualityIssue, // 质量问题
    #[serde(rename = "Labor Shortage")]
    LaborShortage, // 缺员
}

impl DowntimeCategory {
    /// 全部类别 (声明顺序)
    pub const ALL: [DowntimeCategory; 6] = [
        DowntimeCategory::MachineFailure,
        DowntimeCategory::MaterialShortage,
        DowntimeCategory::PlannedMaintenance,
        DowntimeCategory::Changeover,
        DowntimeCategory::QualityIssue,
        DowntimeCategory::LaborShortage,
    ];

    /// 展示名称
    pub fn label(&self) -> &'static str {
        match self {
            DowntimeCategory::MachineFailure => "Machine Failure",
            DowntimeCategory::MaterialShortage => "Material Shortage",
            DowntimeCategory::PlannedMaintenance => "Planned Maintenance",
            DowntimeCategory::Changeover => "Changeover",
            DowntimeCategory::QualityIssue => "Quality Issue",
            DowntimeCategory::LaborShortage => "Labor Shortage",
        }
    }

    /// 从展示名称解析 (大小写敏感,未知名称返回 None)
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == s)
    }
}

impl fmt::Display for DowntimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 停机类型 (Downtime Type)
// ==========================================
// 序列化格式: lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DowntimeType {
    Planned,   // 计划停机
    Unplanned, // 非计划停机
}

impl fmt::Display for DowntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DowntimeType::Planned => write!(f, "planned"),
            DowntimeType::Unplanned => write!(f, "unplanned"),
        }
    }
}

// ==========================================
// OEE 状态 (OEE Status)
// ==========================================
// 顺序: Poor < Acceptable < Excellent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OeeStatus {
    Poor,       // 需关注
    Acceptable, // 可接受
    Excellent,  // 世界级
}

impl OeeStatus {
    /// 按阈值分级
    ///
    /// - `oee >= world_class` → Excellent
    /// - `oee >= minimum` → Acceptable
    /// - 其余 → Poor
    pub fn classify(oee: f64, thresholds: &Thresholds) -> Self {
        if oee >= thresholds.world_class {
            OeeStatus::Excellent
        } else if oee >= thresholds.minimum_acceptable {
            OeeStatus::Acceptable
        } else {
            OeeStatus::Poor
        }
    }

    /// 看板展示标签
    pub fn label(&self) -> &'static str {
        match self {
            OeeStatus::Excellent => "World-Class",
            OeeStatus::Acceptable => "Acceptable",
            OeeStatus::Poor => "Needs Attention",
        }
    }
}

impl fmt::Display for OeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OeeStatus::Excellent => write!(f, "excellent"),
            OeeStatus::Acceptable => write!(f, "acceptable"),
            OeeStatus::Poor => write!(f, "poor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_uses_label() {
        let json = serde_json::to_string(&DowntimeCategory::MaterialShortage).unwrap();
        assert_eq!(json, "\"Material Shortage\"");

        let parsed: DowntimeCategory = serde_json::from_str("\"Quality Issue\"").unwrap();
        assert_eq!(parsed, DowntimeCategory::QualityIssue);

        assert!(serde_json::from_str::<DowntimeCategory>("\"quality issue\"").is_err());
    }

    #[test]
    fn test_category_label_roundtrip() {
        for category in DowntimeCategory::ALL {
            assert_eq!(DowntimeCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(DowntimeCategory::from_label("Power Outage"), None);
    }

    #[test]
    fn test_downtime_type_serde() {
        assert_eq!(serde_json::to_string(&DowntimeType::Unplanned).unwrap(), "\"unplanned\"");
        assert_eq!(DowntimeType::Planned.to_string(), "planned");
    }

    #[test]
    fn test_oee_status_classify() {
        let thresholds = Thresholds::new(0.85, 0.65);

        assert_eq!(OeeStatus::classify(0.90, &thresholds), OeeStatus::Excellent);
        assert_eq!(OeeStatus::classify(0.85, &thresholds), OeeStatus::Excellent);
        assert_eq!(OeeStatus::classify(0.70, &thresholds), OeeStatus::Acceptable);
        assert_eq!(OeeStatus::classify(0.65, &thresholds), OeeStatus::Acceptable);
        assert_eq!(OeeStatus::classify(0.40, &thresholds), OeeStatus::Poor);

        assert_eq!(OeeStatus::Excellent.label(), "World-Class");
        assert_eq!(OeeStatus::Poor.label(), "Needs Attention");
    }
}

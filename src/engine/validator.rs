// ==========================================
// OEE 分析引擎 - 输入边界校验
// ==========================================
// 职责: 在计算开始前拒绝结构畸形的输入,内部算术可假定字段齐全且有限
// 说明: 缺字段 / 类型不符 / 未知枚举值在反序列化阶段即被拒绝;
//       本模块只补充非有限数值检查 (NaN / ±∞ 无法参与计算)
// 红线: 类型正确的数据一律放行,可疑之处只记录 warn:
//       空文本、阈值越界或倒置、actual ≠ good + defect、负数量、
//       重复单元、悬空单元引用
// ==========================================

use std::collections::HashSet;

use crate::domain::metrics::OeeMetrics;
use crate::domain::production::ProductionData;
use crate::engine::error::{AnalyticsError, AnalyticsResult};

/// 单条校验结果 (违规或可疑项)
#[derive(Debug, Clone, PartialEq)]
pub struct InputViolation {
    pub field: String,
    pub message: String,
}

impl InputViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 解析 JSON 生产快照并校验
pub fn parse_production_data(json: &str) -> AnalyticsResult<ProductionData> {
    let data: ProductionData = serde_json::from_str(json)?;
    validate_production_data(&data)?;
    Ok(data)
}

/// 校验生产快照
///
/// # 返回
/// - Ok(()): 校验通过 (可疑项已记录 warn)
/// - Err(MalformedInput): 所有违规合并为一个错误
pub fn validate_production_data(data: &ProductionData) -> AnalyticsResult<()> {
    let violations = collect_violations(data);

    if violations.is_empty() {
        warn_on_suspicious_data(data);
        return Ok(());
    }

    tracing::warn!(violation_count = violations.len(), "生产快照校验失败");

    let field = violations
        .iter()
        .map(|v| v.field.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let message = violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ");

    Err(AnalyticsError::malformed(field, message))
}

/// 收集全部违规 (不在首个违规处中断)
///
/// 违规只有一种: 数值字段非有限
pub fn collect_violations(data: &ProductionData) -> Vec<InputViolation> {
    let mut violations = Vec::new();

    require_finite(
        &mut violations,
        "productionLine.targetCycleTime",
        data.production_line.target_cycle_time,
    );

    let metadata = &data.metadata;
    require_finite(
        &mut violations,
        "metadata.worldClassOEETarget",
        metadata.world_class_oee_target,
    );
    require_finite(
        &mut violations,
        "metadata.minimumAcceptableOEE",
        metadata.minimum_acceptable_oee,
    );

    for (i, unit) in data.units.iter().enumerate() {
        for (name, value) in [
            ("plannedProductionTime", unit.planned_production_time),
            ("targetQuantity", unit.target_quantity),
            ("actualQuantity", unit.actual_quantity),
            ("goodQuantity", unit.good_quantity),
            ("defectQuantity", unit.defect_quantity),
        ] {
            require_finite(&mut violations, &format!("shifts[{}].{}", i, name), value);
        }
    }

    for (i, event) in data.downtime_events.iter().enumerate() {
        require_finite(
            &mut violations,
            &format!("downtimeEvents[{}].durationMinutes", i),
            event.duration_minutes,
        );
    }

    check_metrics(&mut violations, "previousPeriod", &data.previous_period);

    violations
}

/// 收集可疑项 (不拒绝,只用于告警)
pub fn collect_warnings(data: &ProductionData) -> Vec<InputViolation> {
    let mut warnings = Vec::new();

    flag_blank(&mut warnings, "productionLine.id", &data.production_line.id);
    flag_blank(&mut warnings, "productionLine.name", &data.production_line.name);

    // ===== 阈值 (只影响状态分级) =====
    let metadata = &data.metadata;
    flag_blank(&mut warnings, "metadata.reportDate", &metadata.report_date);
    for (field, value) in [
        ("metadata.worldClassOEETarget", metadata.world_class_oee_target),
        ("metadata.minimumAcceptableOEE", metadata.minimum_acceptable_oee),
    ] {
        if !(0.0..=1.0).contains(&value) {
            warnings.push(InputViolation::new(
                field,
                format!("值 {} 超出范围 [0, 1],状态分级可能失真", value),
            ));
        }
    }
    if metadata.minimum_acceptable_oee > metadata.world_class_oee_target {
        warnings.push(InputViolation::new(
            "metadata.minimumAcceptableOEE",
            format!(
                "最低可接受 OEE ({}) 高于世界级目标 ({})",
                metadata.minimum_acceptable_oee, metadata.world_class_oee_target
            ),
        ));
    }

    // ===== 生产单元 =====
    let mut seen = HashSet::new();
    for (i, unit) in data.units.iter().enumerate() {
        flag_blank(&mut warnings, &format!("shifts[{}].id", i), &unit.id);
        flag_blank(&mut warnings, &format!("shifts[{}].name", i), &unit.name);
        if !seen.insert(unit.id.as_str()) {
            warnings.push(InputViolation::new(format!("shifts[{}].id", i), "单元 ID 重复"));
        }
        if unit.actual_quantity < 0.0 || unit.good_quantity < 0.0 || unit.target_quantity < 0.0 {
            warnings.push(InputViolation::new(
                format!("shifts[{}]", i),
                "单元数量为负,比率可能超出 [0,1]",
            ));
        }
    }

    // ===== 停机事件 =====
    for (i, event) in data.downtime_events.iter().enumerate() {
        flag_blank(&mut warnings, &format!("downtimeEvents[{}].id", i), &event.id);
        if !seen.contains(event.unit_id.as_str()) {
            warnings.push(InputViolation::new(
                format!("downtimeEvents[{}].shiftId", i),
                format!("引用了不存在的单元 {}", event.unit_id),
            ));
        }
    }

    warnings
}

fn check_metrics(violations: &mut Vec<InputViolation>, path: &str, metrics: &OeeMetrics) {
    for (name, value) in [
        ("totalOEE", metrics.total_oee),
        ("availability", metrics.availability),
        ("performance", metrics.performance),
        ("quality", metrics.quality),
    ] {
        require_finite(violations, &format!("{}.{}", path, name), value);
    }
}

fn require_finite(violations: &mut Vec<InputViolation>, field: &str, value: f64) {
    if !value.is_finite() {
        violations.push(InputViolation::new(
            field,
            format!("必须为有限数值,实际 {}", value),
        ));
    }
}

fn flag_blank(warnings: &mut Vec<InputViolation>, field: &str, value: &str) {
    if value.trim().is_empty() {
        warnings.push(InputViolation::new(field, "为空"));
    }
}

fn warn_on_suspicious_data(data: &ProductionData) {
    for warning in collect_warnings(data) {
        tracing::warn!(field = %warning.field, "{}", warning.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_JSON: &str = r#"{
        "productionLine": { "id": "L1", "name": "Line 1", "targetCycleTime": 30, "description": "Assembly" },
        "shifts": [{
            "id": "S1", "name": "Morning", "startTime": "06:00", "endTime": "14:00",
            "plannedProductionTime": 480, "targetQuantity": 1000, "actualQuantity": 900,
            "goodQuantity": 850, "defectQuantity": 50
        }],
        "downtimeEvents": [{
            "id": "D1", "shiftId": "S1", "category": "Machine Failure", "reason": "Jam",
            "startTime": "07:00", "endTime": "08:00", "durationMinutes": 60, "type": "unplanned"
        }],
        "previousPeriod": {
            "description": "Previous Week", "totalOEE": 0.7, "availability": 0.85,
            "performance": 0.9, "quality": 0.92
        },
        "metadata": {
            "site": "Plant A", "department": "Assembly", "reportDate": "2024-01-15",
            "worldClassOEETarget": 0.85, "minimumAcceptableOEE": 0.65
        }
    }"#;

    #[test]
    fn test_parse_valid_snapshot() {
        let data = parse_production_data(VALID_JSON).unwrap();
        assert_eq!(data.units.len(), 1);
        assert_eq!(data.downtime_events[0].unit_id, "S1");
    }

    #[test]
    fn test_missing_field_is_malformed_input() {
        let json = VALID_JSON.replace("\"goodQuantity\": 850,", "");
        let err = parse_production_data(&json).unwrap_err();

        match err {
            AnalyticsError::MalformedInput { message, .. } => {
                assert!(message.contains("goodQuantity"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category_is_malformed_input() {
        let json = VALID_JSON.replace("Machine Failure", "Alien Abduction");
        assert!(matches!(
            parse_production_data(&json),
            Err(AnalyticsError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_collects_all_violations() {
        let mut data = parse_production_data(VALID_JSON).unwrap();
        data.units[0].planned_production_time = f64::NAN;
        data.downtime_events[0].duration_minutes = f64::INFINITY;
        data.metadata.world_class_oee_target = f64::NAN;

        let violations = collect_violations(&data);
        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();

        assert_eq!(
            fields,
            vec![
                "metadata.worldClassOEETarget",
                "shifts[0].plannedProductionTime",
                "downtimeEvents[0].durationMinutes",
            ]
        );

        match validate_production_data(&data) {
            Err(AnalyticsError::MalformedInput { field, .. }) => {
                assert!(field.contains("shifts[0].plannedProductionTime"));
                assert!(field.contains("downtimeEvents[0].durationMinutes"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_blank_text_and_odd_thresholds_only_warn() {
        let mut data = parse_production_data(VALID_JSON).unwrap();
        data.production_line.id = String::new();
        data.units[0].name = "  ".to_string();
        data.metadata.report_date = String::new();
        data.metadata.world_class_oee_target = 85.0;
        data.metadata.minimum_acceptable_oee = 90.0;

        assert!(collect_violations(&data).is_empty());
        assert!(validate_production_data(&data).is_ok());

        let warnings = collect_warnings(&data);
        let fields: Vec<_> = warnings.iter().map(|w| w.field.as_str()).collect();
        assert!(fields.contains(&"productionLine.id"));
        assert!(fields.contains(&"shifts[0].name"));
        assert!(fields.contains(&"metadata.reportDate"));
        assert!(fields.contains(&"metadata.worldClassOEETarget"));
        assert_eq!(
            fields
                .iter()
                .filter(|f| **f == "metadata.minimumAcceptableOEE")
                .count(),
            2
        );
    }

    #[test]
    fn test_inconsistent_quantities_are_accepted() {
        let mut data = parse_production_data(VALID_JSON).unwrap();
        data.units[0].defect_quantity = 999.0;
        data.downtime_events[0].unit_id = "UNKNOWN".to_string();

        assert!(validate_production_data(&data).is_ok());

        let warnings = collect_warnings(&data);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "downtimeEvents[0].shiftId");
    }
}

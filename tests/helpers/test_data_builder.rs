// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use oee_analytics::domain::metrics::OeeMetrics;
use oee_analytics::domain::production::{
    DowntimeEvent, ProductionData, ProductionLine, ProductionMetadata, ProductionUnit,
};
use oee_analytics::domain::types::{DowntimeCategory, DowntimeType};

// ==========================================
// ProductionUnit 构建器
// ==========================================

pub struct UnitBuilder {
    id: String,
    name: String,
    start_time: String,
    end_time: String,
    planned: f64,
    target: f64,
    actual: f64,
    good: f64,
    defect: Option<f64>,
}

impl UnitBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Shift {}", id),
            start_time: "2024-01-15T06:00:00".to_string(),
            end_time: "2024-01-15T14:00:00".to_string(),
            planned: 480.0,
            target: 1000.0,
            actual: 1000.0,
            good: 1000.0,
            defect: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn window(mut self, start: &str, end: &str) -> Self {
        self.start_time = start.to_string();
        self.end_time = end.to_string();
        self
    }

    pub fn planned(mut self, minutes: f64) -> Self {
        self.planned = minutes;
        self
    }

    pub fn quantities(mut self, target: f64, actual: f64, good: f64) -> Self {
        self.target = target;
        self.actual = actual;
        self.good = good;
        self
    }

    pub fn defect(mut self, defect: f64) -> Self {
        self.defect = Some(defect);
        self
    }

    pub fn build(self) -> ProductionUnit {
        ProductionUnit {
            id: self.id,
            name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
            planned_production_time: self.planned,
            target_quantity: self.target,
            actual_quantity: self.actual,
            good_quantity: self.good,
            defect_quantity: self.defect.unwrap_or(self.actual - self.good),
        }
    }
}

// ==========================================
// DowntimeEvent 构建器
// ==========================================

pub struct EventBuilder {
    id: String,
    unit_id: String,
    category: DowntimeCategory,
    reason: String,
    minutes: f64,
    event_type: DowntimeType,
}

impl EventBuilder {
    pub fn new(id: &str, unit_id: &str) -> Self {
        Self {
            id: id.to_string(),
            unit_id: unit_id.to_string(),
            category: DowntimeCategory::MachineFailure,
            reason: "Unspecified".to_string(),
            minutes: 10.0,
            event_type: DowntimeType::Unplanned,
        }
    }

    pub fn category(mut self, category: DowntimeCategory) -> Self {
        self.category = category;
        self
    }

    pub fn reason(mut self, reason: &str) -> Self {
        self.reason = reason.to_string();
        self
    }

    pub fn minutes(mut self, minutes: f64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn planned(mut self) -> Self {
        self.event_type = DowntimeType::Planned;
        self
    }

    pub fn build(self) -> DowntimeEvent {
        DowntimeEvent {
            id: self.id,
            unit_id: self.unit_id,
            category: self.category,
            reason: self.reason,
            start_time: "2024-01-15T08:00:00".to_string(),
            end_time: "2024-01-15T08:30:00".to_string(),
            duration_minutes: self.minutes,
            event_type: self.event_type,
        }
    }
}

// ==========================================
// 标准测试快照
// ==========================================
// 三个班次,六条停机事件 (四条非计划 / 两条计划)
// 非计划: 设备故障 70 分钟 (2 条) / 缺料 30 / 质量 10

pub const REPORT_DATE: &str = "2024-01-15";
pub const SUPPLIER_REASON: &str = "Late delivery, supplier \"Acme\"";

pub fn sample_units() -> Vec<ProductionUnit> {
    vec![
        UnitBuilder::new("S1")
            .name("Morning Shift")
            .quantities(1000.0, 900.0, 850.0)
            .build(),
        UnitBuilder::new("S2")
            .name("Afternoon Shift")
            .window("2024-01-15T14:00:00", "2024-01-15T22:00:00")
            .quantities(1000.0, 950.0, 920.0)
            .build(),
        UnitBuilder::new("S3")
            .name("Night Shift")
            .window("2024-01-15T22:00:00", "2024-01-16T06:00:00")
            .quantities(800.0, 700.0, 690.0)
            .build(),
    ]
}

pub fn sample_events() -> Vec<DowntimeEvent> {
    vec![
        EventBuilder::new("D1", "S1")
            .category(DowntimeCategory::MachineFailure)
            .reason("Conveyor belt jam")
            .minutes(45.0)
            .build(),
        EventBuilder::new("D2", "S1")
            .category(DowntimeCategory::PlannedMaintenance)
            .reason("Scheduled lubrication")
            .minutes(15.0)
            .planned()
            .build(),
        EventBuilder::new("D3", "S2")
            .category(DowntimeCategory::MaterialShortage)
            .reason(SUPPLIER_REASON)
            .minutes(30.0)
            .build(),
        EventBuilder::new("D4", "S2")
            .category(DowntimeCategory::Changeover)
            .reason("Product changeover")
            .minutes(20.0)
            .planned()
            .build(),
        EventBuilder::new("D5", "S3")
            .category(DowntimeCategory::MachineFailure)
            .reason("Conveyor belt jam")
            .minutes(25.0)
            .build(),
        EventBuilder::new("D6", "S3")
            .category(DowntimeCategory::QualityIssue)
            .reason("Dimension out of tolerance")
            .minutes(10.0)
            .build(),
    ]
}

pub fn previous_period() -> OeeMetrics {
    OeeMetrics::new("Previous Week", 0.88, 0.90, 0.91, 0.72)
}

pub fn sample_production_data() -> ProductionData {
    ProductionData {
        production_line: ProductionLine {
            id: "LINE-01".to_string(),
            name: "Assembly Line 1".to_string(),
            target_cycle_time: 28.8,
            description: "Final assembly".to_string(),
        },
        units: sample_units(),
        downtime_events: sample_events(),
        previous_period: previous_period(),
        metadata: ProductionMetadata {
            site: "Plant A".to_string(),
            department: "Assembly".to_string(),
            report_date: REPORT_DATE.to_string(),
            world_class_oee_target: 0.85,
            minimum_acceptable_oee: 0.65,
        },
    }
}

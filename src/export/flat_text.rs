// ==========================================
// OEE 分析引擎 - 扁平文本 (CSV) 渲染
// ==========================================
// 职责: ExportDocument → 分节 CSV 文本行
// 分节顺序: 抬头 / 总体 OEE / 环比 / 班次 / Top 原因 / 类别分布 / 事件明细
// 每个表格分节先输出固定列顺序的表头行
// ==========================================

use crate::domain::metrics::PeriodDelta;
use crate::export::document::{ExportDocument, MetricsWithPercent};
use crate::export::format::{
    escape_field, format_number, format_percent, format_ratio, DELIMITER,
};

pub const TITLE: &str = "OEE Dashboard Export";

pub const OVERALL_SECTION: &str = "Overall OEE";
pub const OVERALL_HEADER: &str = "Metric,Value,Percentage";

pub const COMPARISON_SECTION: &str = "Period Comparison (Week-over-Week)";
pub const COMPARISON_HEADER: &str = "Metric,Current,Previous,Delta,Delta %";

pub const UNITS_SECTION: &str = "Shifts";
pub const UNITS_HEADER: &str = "Shift Name,Start Time,End Time,Planned Time (min),Target Qty,Actual Qty,Good Qty,Defect Qty,OEE %,Availability %,Performance %,Quality %";

pub const TOP_REASONS_SECTION: &str = "Top Downtime Reasons";
pub const TOP_REASONS_HEADER: &str = "Category,Reason,Duration (min),Event Count";

pub const CATEGORY_SECTION: &str = "Downtime by Category";
pub const CATEGORY_HEADER: &str = "Category,Total Duration (min),Event Count,Percentage";

pub const EVENTS_SECTION: &str = "Downtime Events";
pub const EVENTS_HEADER: &str = "ID,Shift ID,Category,Reason,Type,Start Time,End Time,Duration (min)";

/// 渲染为文本行 (不含行尾换行符)
pub fn to_flat_text(document: &ExportDocument) -> Vec<String> {
    let mut lines = Vec::new();

    // 抬头
    let metadata = &document.metadata;
    lines.push(TITLE.to_string());
    lines.push(format!("Report Date: {}", metadata.report_date));
    lines.push(format!("Export Date: {}", metadata.export_date));
    lines.push(format!("Site: {}", metadata.site));
    lines.push(format!("Department: {}", metadata.department));
    lines.push(format!("Production Line: {}", metadata.production_line));
    lines.push(String::new());

    // 总体 OEE
    lines.push(OVERALL_SECTION.to_string());
    lines.push(OVERALL_HEADER.to_string());
    lines.extend(overall_rows(&document.overall_oee));
    lines.push(String::new());

    // 环比
    let comparison = &document.period_comparison;
    lines.push(COMPARISON_SECTION.to_string());
    lines.push(COMPARISON_HEADER.to_string());
    lines.push(comparison_row("OEE", &comparison.oee));
    lines.push(comparison_row("Availability", &comparison.availability));
    lines.push(comparison_row("Performance", &comparison.performance));
    lines.push(comparison_row("Quality", &comparison.quality));
    lines.push(String::new());

    // 班次
    lines.push(UNITS_SECTION.to_string());
    lines.push(UNITS_HEADER.to_string());
    for entry in &document.units {
        let unit = &entry.unit;
        let oee = &entry.oee;
        lines.push(join_row([
            escape_field(&unit.name).into_owned(),
            escape_field(&unit.start_time).into_owned(),
            escape_field(&unit.end_time).into_owned(),
            format_number(unit.planned_production_time),
            format_number(unit.target_quantity),
            format_number(unit.actual_quantity),
            format_number(unit.good_quantity),
            format_number(unit.defect_quantity),
            format_percent(oee.total_oee_percent),
            format_percent(oee.availability_percent),
            format_percent(oee.performance_percent),
            format_percent(oee.quality_percent),
        ]));
    }
    lines.push(String::new());

    // Top 原因
    lines.push(TOP_REASONS_SECTION.to_string());
    lines.push(TOP_REASONS_HEADER.to_string());
    for reason in &document.top_downtime_reasons {
        lines.push(join_row([
            escape_field(reason.category.label()).into_owned(),
            escape_field(&reason.reason).into_owned(),
            format_number(reason.total_duration_minutes),
            reason.event_count.to_string(),
        ]));
    }
    lines.push(String::new());

    // 类别分布
    lines.push(CATEGORY_SECTION.to_string());
    lines.push(CATEGORY_HEADER.to_string());
    for category in &document.downtime_by_category {
        lines.push(join_row([
            escape_field(category.category.label()).into_owned(),
            format_number(category.total_duration_minutes),
            category.event_count.to_string(),
            format_percent(category.percentage),
        ]));
    }
    lines.push(String::new());

    // 事件明细
    lines.push(EVENTS_SECTION.to_string());
    lines.push(EVENTS_HEADER.to_string());
    for event in &document.downtime_events {
        lines.push(join_row([
            escape_field(&event.id).into_owned(),
            escape_field(&event.unit_id).into_owned(),
            escape_field(event.category.label()).into_owned(),
            escape_field(&event.reason).into_owned(),
            escape_field(&event.event_type.to_string()).into_owned(),
            escape_field(&event.start_time).into_owned(),
            escape_field(&event.end_time).into_owned(),
            format_number(event.duration_minutes),
        ]));
    }

    lines
}

fn overall_rows(overall: &MetricsWithPercent) -> [String; 4] {
    let m = &overall.metrics;
    [
        metric_row("Total OEE", m.total_oee, overall.total_oee_percent),
        metric_row("Availability", m.availability, overall.availability_percent),
        metric_row("Performance", m.performance, overall.performance_percent),
        metric_row("Quality", m.quality, overall.quality_percent),
    ]
}

fn metric_row(label: &str, ratio: f64, percent: f64) -> String {
    join_row([
        label.to_string(),
        format_ratio(ratio),
        format!("{}%", format_percent(percent)),
    ])
}

fn comparison_row(label: &str, delta: &PeriodDelta) -> String {
    join_row([
        label.to_string(),
        format_ratio(delta.current),
        format_ratio(delta.previous),
        format_ratio(delta.delta),
        format!("{}%", format_percent(delta.delta_percent)),
    ])
}

fn join_row<const N: usize>(fields: [String; N]) -> String {
    let delimiter = DELIMITER.to_string();
    fields.join(delimiter.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_row_format() {
        assert_eq!(metric_row("Availability", 0.875, 87.5), "Availability,0.8750,87.50%");
    }

    #[test]
    fn test_comparison_row_format() {
        let delta = PeriodDelta {
            current: 0.75,
            previous: 0.5,
            delta: 0.25,
            delta_percent: 50.0,
            is_improvement: true,
        };
        assert_eq!(comparison_row("OEE", &delta), "OEE,0.7500,0.5000,0.2500,50.00%");
    }

    #[test]
    fn test_headers_column_counts() {
        assert_eq!(UNITS_HEADER.split(',').count(), 12);
        assert_eq!(EVENTS_HEADER.split(',').count(), 8);
        assert_eq!(TOP_REASONS_HEADER.split(',').count(), 4);
        assert_eq!(CATEGORY_HEADER.split(',').count(), 4);
    }
}

// ==========================================
// OEE 分析引擎 - 导出层
// ==========================================
// 职责: 同一份计算结果 → 结构化文档 (JSON) + 扁平文本 (CSV)
// ==========================================

pub mod artifact;
pub mod document;
pub mod error;
pub mod flat_text;
pub mod format;

pub use artifact::{export_csv, export_json, report_file_name, ExportArtifact, ExportFormat};
pub use document::{
    build_export_document, build_export_document_now, CategorySummary, ExportBuilder,
    ExportDocument, ExportMetadata, MetricsWithPercent, ReasonSummary, UnitExport,
};
pub use error::{ExportError, ExportResult};
pub use flat_text::to_flat_text;
pub use format::{
    escape_field, format_delta, format_duration, format_oee_as_percentage, FormattedDelta,
};

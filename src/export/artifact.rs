// ==========================================
// OEE 分析引擎 - 导出产物
// ==========================================
// 职责: 将导出文档渲染为可下载产物 (oee-report-<reportDate>.<ext>)
// 说明: 内容缓冲区只在本次调用内存在,交付 (写入) 后随产物释放
// ==========================================

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::production::ProductionData;
use crate::engine::validator::validate_production_data;
use crate::export::document::{ExportBuilder, ExportDocument};
use crate::export::error::ExportResult;
use crate::export::flat_text::to_flat_text;

// ==========================================
// ExportFormat - 导出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv;charset=utf-8;",
        }
    }
}

// ==========================================
// ExportArtifact - 导出产物
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub format: ExportFormat,
    pub content: String,
}

impl ExportArtifact {
    /// JSON 产物 (两空格缩进)
    pub fn json(document: &ExportDocument) -> ExportResult<Self> {
        let content = serde_json::to_string_pretty(document)?;
        Ok(Self::new(document, ExportFormat::Json, content))
    }

    /// CSV 产物 (行以 '\n' 连接,末行无换行)
    pub fn csv(document: &ExportDocument) -> ExportResult<Self> {
        let content = to_flat_text(document).join("\n");
        Ok(Self::new(document, ExportFormat::Csv, content))
    }

    fn new(document: &ExportDocument, format: ExportFormat, content: String) -> Self {
        Self {
            file_name: report_file_name(&document.metadata.report_date, format),
            format,
            content,
        }
    }

    /// 覆盖下载文件名; 空白名称保留默认的 oee-report-<reportDate>.<ext>
    ///
    /// 路径分隔符同样替换为 '-'
    pub fn with_file_name(mut self, file_name: &str) -> Self {
        if !file_name.trim().is_empty() {
            self.file_name = strip_separators(file_name);
        }
        self
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// 写入任意输出流 (由宿主提供)
    pub fn write_to<W: Write>(&self, writer: &mut W) -> ExportResult<()> {
        writer.write_all(self.content.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// 保存到目录,返回完整路径
    pub fn save_to_dir(&self, dir: &Path) -> ExportResult<PathBuf> {
        let path = dir.join(&self.file_name);
        let mut writer = BufWriter::new(File::create(&path)?);
        self.write_to(&mut writer)?;

        tracing::info!(path = %path.display(), bytes = self.content.len(), "导出文件已写入");
        Ok(path)
    }
}

/// 下载文件名: oee-report-<reportDate>.<ext>
///
/// 路径分隔符替换为 '-',文件名始终落在目标目录内
pub fn report_file_name(report_date: &str, format: ExportFormat) -> String {
    format!("oee-report-{}.{}", strip_separators(report_date), format.extension())
}

fn strip_separators(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect()
}

// ==========================================
// 导出入口
// ==========================================

/// 导出 JSON (先做边界校验)
pub fn export_json(data: &ProductionData, exported_at: DateTime<Utc>) -> ExportResult<ExportArtifact> {
    validate_production_data(data)?;
    let document = ExportBuilder::new().build(data, exported_at);
    ExportArtifact::json(&document)
}

/// 导出 CSV (先做边界校验)
pub fn export_csv(data: &ProductionData, exported_at: DateTime<Utc>) -> ExportResult<ExportArtifact> {
    validate_production_data(data)?;
    let document = ExportBuilder::new().build(data, exported_at);
    ExportArtifact::csv(&document)
}

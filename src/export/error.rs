// ==========================================
// OEE 分析引擎 - 导出层错误类型
// ==========================================

use thiserror::Error;

use crate::engine::error::AnalyticsError;

/// 导出层错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error("序列化失败: {0}")]
    Serialization(String),

    #[error("导出文件写入失败: {0}")]
    Io(String),
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;

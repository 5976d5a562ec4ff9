// ==========================================
// OEE 分析引擎 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 算术函数全部为全函数 (除零降级为 0),
//       唯一合法失败是调用方输入结构畸形,在边界处提前拒绝
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    // ===== 输入错误 =====
    #[error("输入数据格式错误 (字段 {field}): {message}")]
    MalformedInput { field: String, message: String },

    // ===== 配置错误 =====
    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    InvalidConfig {
        key: String,
        value: String,
        message: String,
    },
}

impl AnalyticsError {
    pub fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        AnalyticsError::MalformedInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

// 实现 From<serde_json::Error>
// 反序列化失败 (缺字段 / 类型不符 / 未知枚举值) 均视为输入结构畸形
impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::MalformedInput {
            field: format!("line {}, column {}", err.line(), err.column()),
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

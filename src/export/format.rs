// ==========================================
// OEE 分析引擎 - 数值与文本格式化
// ==========================================
// 展示契约 (往返比较依赖,不可随意改动):
// - 比率: 4 位小数
// - 百分比: 2 位小数
// - 顶部 OEE 展示值: 1 位小数 + '%'
// - CSV 字段: 含分隔符 / 引号 / 换行时整体加引号,内部引号双写
// - 舍入: 恰好落在中点时取绝对值较大者 (与看板 toFixed 一致),
//   标准库 `{:.N}` 对中点取偶,不能直接使用
// ==========================================

use std::borrow::Cow;

pub const DELIMITER: char = ',';
const QUOTE: char = '"';

// 超出位数后多展开的精确位数; f64 与任意中点的距离远大于 10^-(N+25)
const GUARD_DIGITS: usize = 25;

/// 定点小数,中点远离零舍入
///
/// 先按 N + GUARD_DIGITS 位精确展开,再对十进制数字串手工进位
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let expanded = format!("{:.*}", digits + GUARD_DIGITS, value.abs());
    let (int_part, frac_part) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part.as_bytes().get(digits).map_or(false, |d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|d| *d as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|d| *d as char));
    }
    out
}

/// 比率 (4 位小数)
pub fn format_ratio(value: f64) -> String {
    to_fixed(value, 4)
}

/// 百分比数值 (2 位小数,不带 '%')
pub fn format_percent(value: f64) -> String {
    to_fixed(value, 2)
}

/// 顶部 OEE 展示值,如 0.7438 → "74.4%"
pub fn format_oee_as_percentage(ratio: f64) -> String {
    format!("{}%", to_fixed(ratio * 100.0, 1))
}

/// 普通数量 / 时长: 最短表示,整数不带小数部分
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// CSV 字段转义
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains(DELIMITER) || value.contains(QUOTE) || value.contains('\n') {
        Cow::Owned(format!("\"{}\"", value.replace(QUOTE, "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// 时长展示,如 150 → "2h 30m", 45 → "45m"
pub fn format_duration(minutes: f64) -> String {
    let hours = (minutes / 60.0).floor();
    let mins = minutes % 60.0;
    if hours > 0.0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

// ==========================================
// FormattedDelta - 带符号的差值展示
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDelta {
    pub value: String,
    /// "+" / "-" / ""
    pub sign: &'static str,
    pub is_improvement: bool,
}

/// 差值展示
///
/// - 百分比形式: 1 位小数 + '%'
/// - 数值形式: 2 位小数
pub fn format_delta(delta: f64, is_percentage: bool) -> FormattedDelta {
    let sign = if delta > 0.0 {
        "+"
    } else if delta < 0.0 {
        "-"
    } else {
        ""
    };
    let abs = delta.abs();
    let value = if is_percentage {
        format!("{}{}%", sign, to_fixed(abs, 1))
    } else {
        format!("{}{}", sign, to_fixed(abs, 2))
    };

    FormattedDelta {
        value,
        sign,
        is_improvement: delta >= 0.0,
    }
}

// ==========================================
// OEE 分析引擎 - JSON 数值输出
// ==========================================
// 数量 / 时长在内部统一用 f64,输出时整数值写成整数 (480 而非 480.0),
// 与看板数据文件保持一致; 读入不受影响
// ==========================================

use serde::Serializer;

// 超出此范围的整数 f64 已无法精确对应 i64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// `#[serde(serialize_with = "...")]` 用: 整数值输出为整数,其余原样
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        #[serde(serialize_with = "super::serialize")]
        value: f64,
    }

    fn render(value: f64) -> String {
        serde_json::to_string(&Sample { value }).unwrap()
    }

    #[test]
    fn test_integral_values_drop_fraction() {
        assert_eq!(render(480.0), r#"{"value":480}"#);
        assert_eq!(render(-0.0), r#"{"value":0}"#);
        assert_eq!(render(-15.0), r#"{"value":-15}"#);
    }

    #[test]
    fn test_fractional_and_non_finite_values() {
        assert_eq!(render(28.8), r#"{"value":28.8}"#);
        assert_eq!(render(f64::NAN), r#"{"value":null}"#);
        assert_eq!(render(1e300), r#"{"value":1e300}"#);
    }
}

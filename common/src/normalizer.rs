//! 假别规范化
//!
//! 固定对照表：`调休→调休（加班补）`、`年假→休年假`、`事假→请事假`，
//! 其余假别原样通过。

use crate::types::CanonicalType;

impl CanonicalType {
    /// 原始假别 → 规范假别
    pub fn from_label(label: &str) -> Self {
        match label {
            "调休" => CanonicalType::CompensatoryLeave,
            "年假" => CanonicalType::AnnualLeave,
            "事假" => CanonicalType::PersonalLeave,
            other => CanonicalType::Other(other.to_string()),
        }
    }

    /// 显示用标签
    pub fn label(&self) -> &str {
        match self {
            CanonicalType::CompensatoryLeave => "调休（加班补）",
            CanonicalType::AnnualLeave => "休年假",
            CanonicalType::PersonalLeave => "请事假",
            CanonicalType::Other(label) => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_mapped() {
        assert_eq!(CanonicalType::from_label("调休"), CanonicalType::CompensatoryLeave);
        assert_eq!(CanonicalType::from_label("年假"), CanonicalType::AnnualLeave);
        assert_eq!(CanonicalType::from_label("事假"), CanonicalType::PersonalLeave);
    }

    #[test]
    fn test_from_label_pass_through() {
        let other = CanonicalType::from_label("婚假");
        assert_eq!(other, CanonicalType::Other("婚假".to_string()));
        assert_eq!(other.label(), "婚假");
    }

    #[test]
    fn test_label() {
        assert_eq!(CanonicalType::CompensatoryLeave.label(), "调休（加班补）");
        assert_eq!(CanonicalType::AnnualLeave.label(), "休年假");
        assert_eq!(CanonicalType::PersonalLeave.to_string(), "请事假");
    }

    #[test]
    fn test_exact_match_only() {
        // 只按整体匹配，包含关系不算
        assert_eq!(
            CanonicalType::from_label("请事假"),
            CanonicalType::Other("请事假".to_string())
        );
    }
}

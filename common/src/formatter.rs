//! 备注文本生成
//!
//! 汇总表 → `10.05请事假4.5小时，10.06-07调休16小时（加班补）`

use crate::aggregator::{aggregate, AggregationMap};
use crate::types::{CanonicalType, DateKey};

/// 片段之间的分隔符
pub const PART_SEPARATOR: &str = "，";

/// 小时数 → 文本（去掉小数末尾的 0 和小数点）
///
/// `8.0 → "8"`, `4.5 → "4.5"`, `80.0 → "80"`
pub fn format_hours(hours: f64) -> String {
    let text = hours.to_string();
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// 一个 (日期, 假别, 小时数) 的显示文本
pub fn render_part(date: &DateKey, kind: &CanonicalType, hours: f64) -> String {
    let hours = format_hours(hours);
    match kind {
        // 括号移到末尾
        CanonicalType::CompensatoryLeave => format!("{}调休{}小时（加班补）", date, hours),
        _ => format!("{}{}{}小时", date, kind.label(), hours),
    }
}

/// 汇总表 → 备注文本
pub fn format_record(map: &AggregationMap) -> String {
    let mut parts = Vec::new();
    for (date, types) in map.sorted_dates() {
        for (kind, hours) in types {
            parts.push(render_part(date, kind, *hours));
        }
    }

    match parts.len() {
        0 => String::new(),
        1 => parts.swap_remove(0),
        _ => parts.join(PART_SEPARATOR),
    }
}

/// 一个考勤文本 → 备注文本（匹配・规范化・汇总・生成）
pub fn summarize(text: &str) -> String {
    format_record(&aggregate(text))
}

//! 日期规范化与排序键
//!
//! - `MM-DD` → `MM.DD`
//! - 跨天区间只保留结束日期的「日」：`10-05`〜`10-06` → `10.05-06`
//! - 排序键: 文本中第一个 `MM.DD` → `month * 100 + day`

use crate::types::{DateKey, SegmentDates};
use regex::Regex;

lazy_static::lazy_static! {
    static ref RANK_RE: Regex = Regex::new(r"([0-9]{2})\.([0-9]{2})(?:-[0-9]{2})?").unwrap();
}

impl DateKey {
    /// 片段日期 → 日期键
    pub fn from_dates(dates: &SegmentDates) -> Self {
        match dates {
            SegmentDates::Single { date } => DateKey::new(dot_date(date)),
            SegmentDates::Range { start, end } => {
                let start = dot_date(start);
                let end_day = day_part(end);
                if day_part(&start) == end_day {
                    // 同一天的不同时间段
                    DateKey::new(start)
                } else {
                    DateKey::new(format!("{}-{}", start, end_day))
                }
            }
        }
    }

    /// 排序键
    pub fn rank(&self) -> u32 {
        date_rank(self.as_str())
    }
}

/// `MM-DD` → `MM.DD`
fn dot_date(date: &str) -> String {
    date.replace('-', ".")
}

/// 日期的「日」部分（`-` / `.` 之后）
fn day_part(date: &str) -> &str {
    date.rsplit(&['-', '.'][..]).next().unwrap_or(date)
}

/// 从日期或备注文本中取排序键
///
/// 找不到 `MM.DD` 时返回 0（排在最前）。
pub fn date_rank(text: &str) -> u32 {
    RANK_RE
        .captures(text)
        .and_then(|caps| {
            let month: u32 = caps[1].parse().ok()?;
            let day: u32 = caps[2].parse().ok()?;
            Some(month * 100 + day)
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> SegmentDates {
        SegmentDates::Range {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn test_single_date() {
        let key = DateKey::from_dates(&SegmentDates::Single { date: "11-04".to_string() });
        assert_eq!(key.as_str(), "11.04");
    }

    #[test]
    fn test_range_different_days() {
        assert_eq!(DateKey::from_dates(&range("10-05", "10-06")).as_str(), "10.05-06");
    }

    #[test]
    fn test_range_same_day_collapses() {
        assert_eq!(DateKey::from_dates(&range("10-05", "10-05")).as_str(), "10.05");
    }

    #[test]
    fn test_range_end_month_not_rendered() {
        assert_eq!(DateKey::from_dates(&range("10-30", "11-02")).as_str(), "10.30-02");
        // 月份不同但日相同时也视为同一天
        assert_eq!(DateKey::from_dates(&range("10-05", "11-05")).as_str(), "10.05");
    }

    #[test]
    fn test_date_rank() {
        assert_eq!(date_rank("11.04"), 1104);
        assert_eq!(date_rank("10.20-22"), 1020);
        assert_eq!(date_rank("10.05请事假4.5小时"), 1005);
        assert_eq!(date_rank("备注"), 0);
        assert_eq!(date_rank(""), 0);
    }

    #[test]
    fn test_date_rank_ordering() {
        let mut dates = vec!["10.05", "10.01", "10.20-22"];
        dates.sort_by_key(|d| date_rank(d));
        assert_eq!(dates, vec!["10.01", "10.05", "10.20-22"]);
    }

    #[test]
    fn test_key_rank() {
        assert_eq!(DateKey::from_dates(&range("09-28", "09-30")).rank(), 928);
    }
}

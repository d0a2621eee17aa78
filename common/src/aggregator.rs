//! 小时数汇总
//!
//! 一个考勤文本内，按 (日期键, 规范假别) 累加小时数。
//! 同一组合的小时数是所有片段之和，不会被覆盖。

use crate::matcher::extract_segments;
use crate::types::{CanonicalType, DateKey, RawSegment};
use std::collections::HashMap;

/// 日期键 → (假别 → 小时数)
///
/// 内层按首次出现的顺序保存。
#[derive(Debug, Clone, Default)]
pub struct AggregationMap {
    entries: HashMap<DateKey, Vec<(CanonicalType, f64)>>,
}

impl AggregationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加小时数（首次访问时初始化）
    pub fn add(&mut self, date: DateKey, kind: CanonicalType, hours: f64) {
        let types = self.entries.entry(date).or_default();
        match types.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, total)) => *total += hours,
            None => types.push((kind, hours)),
        }
    }

    /// 规范化一个片段后累加
    pub fn add_segment(&mut self, segment: &RawSegment) {
        self.add(
            DateKey::from_dates(&segment.dates),
            CanonicalType::from_label(&segment.label),
            segment.hours,
        );
    }

    #[cfg(test)]
    fn get(&self, date: &DateKey, kind: &CanonicalType) -> Option<f64> {
        self.entries
            .get(date)?
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, hours)| *hours)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 日期键的个数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 按排序键升序（同键时按文本）
    pub fn sorted_dates(&self) -> Vec<(&DateKey, &[(CanonicalType, f64)])> {
        let mut dates: Vec<_> = self
            .entries
            .iter()
            .map(|(date, types)| (date, types.as_slice()))
            .collect();
        dates.sort_by(|(a, _), (b, _)| a.rank().cmp(&b.rank()).then_with(|| a.cmp(b)));
        dates
    }

    /// 全部小时数之和
    pub fn total_hours(&self) -> f64 {
        self.entries
            .values()
            .flat_map(|types| types.iter().map(|(_, hours)| *hours))
            .sum()
    }
}

/// 一个考勤文本 → 汇总表
pub fn aggregate(text: &str) -> AggregationMap {
    let mut map = AggregationMap::new();
    for segment in extract_segments(text) {
        map.add_segment(&segment);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SegmentDates;

    fn key(s: &str) -> DateKey {
        DateKey::new(s.to_string())
    }

    #[test]
    fn test_add_accumulates() {
        let mut map = AggregationMap::new();
        map.add(key("10.05"), CanonicalType::PersonalLeave, 2.0);
        map.add(key("10.05"), CanonicalType::PersonalLeave, 2.5);
        map.add(key("10.05"), CanonicalType::AnnualLeave, 8.0);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&key("10.05"), &CanonicalType::PersonalLeave), Some(4.5));
        assert_eq!(map.get(&key("10.05"), &CanonicalType::AnnualLeave), Some(8.0));
        assert_eq!(map.get(&key("10.06"), &CanonicalType::AnnualLeave), None);
    }

    #[test]
    fn test_no_aliasing_between_keys() {
        let mut map = AggregationMap::new();
        map.add(key("10.05"), CanonicalType::PersonalLeave, 1.0);
        map.add(key("10.06"), CanonicalType::PersonalLeave, 3.0);

        assert_eq!(map.get(&key("10.05"), &CanonicalType::PersonalLeave), Some(1.0));
        assert_eq!(map.get(&key("10.06"), &CanonicalType::PersonalLeave), Some(3.0));
    }

    #[test]
    fn test_add_segment_normalizes() {
        let mut map = AggregationMap::new();
        map.add_segment(&RawSegment {
            label: "调休".to_string(),
            dates: SegmentDates::Range {
                start: "10-05".to_string(),
                end: "10-06".to_string(),
            },
            hours: 8.0,
        });
        assert_eq!(
            map.get(&key("10.05-06"), &CanonicalType::CompensatoryLeave),
            Some(8.0)
        );
    }

    #[test]
    fn test_aggregate_sums_same_day() {
        let map = aggregate("事假10-05 2小时，事假10-05 1.5小时，年假10-06 8小时");
        assert_eq!(map.get(&key("10.05"), &CanonicalType::PersonalLeave), Some(3.5));
        assert_eq!(map.get(&key("10.06"), &CanonicalType::AnnualLeave), Some(8.0));
        assert_eq!(map.total_hours(), 11.5);
    }

    #[test]
    fn test_aggregate_skips_overtime() {
        let map = aggregate("加班10-05 3小时，事假10-06 1小时");
        assert_eq!(map.len(), 1);
        assert_eq!(map.total_hours(), 1.0);
    }

    #[test]
    fn test_sorted_dates_by_rank() {
        let mut map = AggregationMap::new();
        map.add(key("10.20-22"), CanonicalType::AnnualLeave, 24.0);
        map.add(key("10.05"), CanonicalType::AnnualLeave, 8.0);
        map.add(key("09.30"), CanonicalType::AnnualLeave, 8.0);

        let order: Vec<&str> = map.sorted_dates().iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(order, vec!["09.30", "10.05", "10.20-22"]);
    }
}

//! 考勤文本的片段匹配
//!
//! 先按「跨天」形式匹配（假别 + 日期 + …到… + 日期 + …小时）。
//! 整段文本只要有一处跨天匹配，就只采用跨天结果，
//! 其余单日形式的片段一律不再匹配；没有跨天匹配时才退回「单日」形式。
//! 假别中含「加班」的片段在离开本模块前丢弃。

use crate::types::{RawSegment, SegmentDates};
use regex::{Captures, Regex};

/// 加班标记
pub const OVERTIME_MARKER: &str = "加班";

lazy_static::lazy_static! {
    static ref CROSS_DAY_RE: Regex = Regex::new(
        r"([\x{4e00}-\x{9fa5}]+)([0-9]{2}-[0-9]{2}).*?到.*?([0-9]{2}-[0-9]{2}).*?([0-9]+\.?[0-9]*)小时"
    ).unwrap();
    static ref SINGLE_DAY_RE: Regex = Regex::new(
        r"([\x{4e00}-\x{9fa5}]+)([0-9]{2}-[0-9]{2}).*?([0-9]+\.?[0-9]*)小时"
    ).unwrap();
}

/// 假别是否为加班
pub fn is_overtime(label: &str) -> bool {
    label.contains(OVERTIME_MARKER)
}

/// 从一个考勤文本中提取片段（已去除加班）
pub fn extract_segments(text: &str) -> Vec<RawSegment> {
    let cross_day = cross_day_matches(text);
    let segments = if cross_day.is_empty() {
        single_day_matches(text)
    } else {
        cross_day
    };

    segments
        .into_iter()
        .filter(|s| !is_overtime(&s.label))
        .collect()
}

/// 跨天形式的全部匹配（含加班）
fn cross_day_matches(text: &str) -> Vec<RawSegment> {
    CROSS_DAY_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let hours = parse_hours(&caps, 4)?;
            Some(RawSegment {
                label: caps[1].to_string(),
                dates: SegmentDates::Range {
                    start: caps[2].to_string(),
                    end: caps[3].to_string(),
                },
                hours,
            })
        })
        .collect()
}

/// 单日形式的全部匹配（含加班）
fn single_day_matches(text: &str) -> Vec<RawSegment> {
    SINGLE_DAY_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let hours = parse_hours(&caps, 3)?;
            Some(RawSegment {
                label: caps[1].to_string(),
                dates: SegmentDates::Single {
                    date: caps[2].to_string(),
                },
                hours,
            })
        })
        .collect()
}

fn parse_hours(caps: &Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse::<f64>().ok()
}

//! 考勤数据的类型定义
//!
//! - RawSegment: 从单个考勤文本中匹配出的原始片段
//! - CanonicalType: 规范化后的假别
//! - DateKey: 汇总和排序用的日期键（单日 `MM.DD` 或区间 `MM.DD-DD`）

use std::fmt;

/// 片段的日期部分（均为 `MM-DD` 形式）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentDates {
    /// 单日匹配
    Single { date: String },
    /// 跨天匹配（开始日期、结束日期）
    Range { start: String, end: String },
}

/// 匹配出的原始片段，只在处理一个单元格期间存在
#[derive(Debug, Clone, PartialEq)]
pub struct RawSegment {
    /// 假别原文（连续汉字）
    pub label: String,
    pub dates: SegmentDates,
    /// 小时数
    pub hours: f64,
}

/// 规范化后的假别
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalType {
    /// 调休（加班补）
    CompensatoryLeave,
    /// 休年假
    AnnualLeave,
    /// 请事假
    PersonalLeave,
    /// 未登记的假别，原样保留
    Other(String),
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 日期键
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(String);

impl DateKey {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Attendance Remarks Common Library
//!
//! 考勤结果文本的解析、汇总与备注生成（不含文件读写）

pub mod types;
pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod date;
pub mod aggregator;
pub mod formatter;
pub mod collator;
pub mod progress;

pub use types::{CanonicalType, DateKey, RawSegment, SegmentDates};
pub use error::{Error, Result};
pub use matcher::extract_segments;
pub use date::date_rank;
pub use aggregator::{aggregate, AggregationMap};
pub use formatter::{format_hours, format_record, summarize};
pub use collator::{
    collate, CollationReport, ColumnId, ColumnLayout, PersonDetail, PersonKey, PersonRecord,
    PersonSummary, SheetRow,
};
pub use progress::{LogLevel, ProgressLog};

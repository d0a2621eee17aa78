//! 按人员汇总备注
//!
//! 每一行（人员 + 源行号）对应一条记录。同名人员出现在不同行时不会合并。
//! 列的角色由读取表格的一方预先确定，这里只按列句柄取值。

use crate::date::date_rank;
use crate::error::{Error, Result};
use crate::formatter::summarize;
use crate::progress::ProgressLog;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// 备注之间的分隔符
pub const REMARK_SEPARATOR: &str = "；";

/// 休息日标记
const REST_DAY_MARKER: &str = "休息";
/// 默认班次标记
const DEFAULT_SHIFT_MARKER: &str = "默认班次";
/// 明细中统计的假别
const LEAVE_KINDS: [&str; 3] = ["调休", "年假", "事假"];
/// 每处理多少条有效记录输出一次进度
const PROGRESS_INTERVAL: usize = 5;

/// 列句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(pub usize);

/// 列角色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    name: ColumnId,
    attendance: Vec<ColumnId>,
    sick_leave: Vec<ColumnId>,
}

impl ColumnLayout {
    /// 列角色的构建
    ///
    /// 姓名列缺失时返回 [`Error::MissingNameColumn`]。
    pub fn build(
        name: Option<ColumnId>,
        attendance: Vec<ColumnId>,
        sick_leave: Vec<ColumnId>,
    ) -> Result<Self> {
        let name = name.ok_or(Error::MissingNameColumn)?;
        if attendance.contains(&name) || sick_leave.contains(&name) {
            return Err(Error::Layout(format!("姓名列 {} 不能兼作数据列", name.0)));
        }
        if let Some(col) = attendance.iter().find(|c| sick_leave.contains(c)) {
            return Err(Error::Layout(format!(
                "第 {} 列同时被识别为考勤结果列和事假列",
                col.0
            )));
        }
        Ok(Self {
            name,
            attendance,
            sick_leave,
        })
    }

    pub fn name(&self) -> ColumnId {
        self.name
    }

    /// 考勤结果列
    pub fn attendance(&self) -> &[ColumnId] {
        &self.attendance
    }

    /// 事假（小时）列
    pub fn sick_leave(&self) -> &[ColumnId] {
        &self.sick_leave
    }
}

/// 源表格的一行
#[derive(Debug, Clone, Default)]
pub struct SheetRow {
    /// 数据行号（从 0 开始）
    pub index: usize,
    cells: HashMap<ColumnId, String>,
}

impl SheetRow {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            cells: HashMap::new(),
        }
    }

    pub fn with_cell(mut self, col: ColumnId, value: impl Into<String>) -> Self {
        self.set(col, value);
        self
    }

    pub fn set(&mut self, col: ColumnId, value: impl Into<String>) {
        self.cells.insert(col, value.into());
    }

    /// 单元格内容（空白视为空）
    pub fn cell(&self, col: ColumnId) -> Option<&str> {
        self.cells
            .get(&col)
            .map(|v| v.as_str())
            .filter(|v| !v.trim().is_empty())
    }
}

/// 人员记录的键: (姓名, 源行号)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonKey {
    pub name: String,
    pub row: usize,
}

/// 一行的汇总过程
#[derive(Debug, Clone)]
pub struct PersonRecord {
    pub key: PersonKey,
    remarks: BTreeSet<String>,
    sick_leave_hours: Option<String>,
}

impl PersonRecord {
    pub fn new(key: PersonKey) -> Self {
        Self {
            key,
            remarks: BTreeSet::new(),
            sick_leave_hours: None,
        }
    }

    /// 追加备注（相同文本只保留一条）
    pub fn add_remark(&mut self, remark: String) -> bool {
        self.remarks.insert(remark)
    }

    /// 事假小时数：后出现的非空值覆盖前值
    pub fn set_sick_leave(&mut self, value: &str) {
        if !value.trim().is_empty() {
            self.sick_leave_hours = Some(value.to_string());
        }
    }

    pub fn sick_leave_hours(&self) -> Option<&str> {
        self.sick_leave_hours.as_deref()
    }

    /// 按日期排序后的备注
    pub fn sorted_remarks(&self) -> Vec<&str> {
        let mut remarks: Vec<&str> = self.remarks.iter().map(|r| r.as_str()).collect();
        remarks.sort_by_key(|r| date_rank(r));
        remarks
    }

    pub fn finalize(self) -> PersonSummary {
        let remarks = self.sorted_remarks().join(REMARK_SEPARATOR);
        PersonSummary {
            name: self.key.name,
            row: self.key.row,
            remarks,
            sick_leave_hours: self.sick_leave_hours.unwrap_or_default(),
        }
    }
}

/// 输出用的一行（`process --json` 时原样输出）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub name: String,
    pub row: usize,
    /// `；` 连接的备注
    pub remarks: String,
    /// 没有时为空字符串
    pub sick_leave_hours: String,
}

/// 人员处理明细（仅用于日志）
#[derive(Debug, Clone, PartialEq)]
pub struct PersonDetail {
    pub name: String,
    pub row: usize,
    /// 产生备注的考勤单元格数
    pub attendance_count: usize,
    pub leave_kinds: Vec<&'static str>,
    pub sick_leave_hours: Option<String>,
}

/// 汇总结果
#[derive(Debug, Clone, Default)]
pub struct CollationReport {
    pub summaries: Vec<PersonSummary>,
    pub details: Vec<PersonDetail>,
    pub total_rows: usize,
    /// 至少产生一条备注的行数
    pub valid_rows: usize,
}

/// 考勤单元格是否需要解析
fn is_attendance_text(text: &str) -> bool {
    !text.contains(REST_DAY_MARKER) && !text.contains(DEFAULT_SHIFT_MARKER)
}

/// 原文中出现的第一个假别
fn leave_kind(text: &str) -> Option<&'static str> {
    LEAVE_KINDS.iter().copied().find(|kind| text.contains(kind))
}

/// 全部行 → 每人一条汇总
pub fn collate(rows: &[SheetRow], layout: &ColumnLayout, log: &mut ProgressLog<'_>) -> CollationReport {
    let mut report = CollationReport {
        total_rows: rows.len(),
        ..Default::default()
    };
    let mut records: Vec<PersonRecord> = Vec::new();

    log.info("开始处理考勤数据...");
    log.separator(50);

    for (processed, row) in rows.iter().enumerate().map(|(i, r)| (i + 1, r)) {
        let Some(name) = row.cell(layout.name()) else {
            continue;
        };

        let mut record: Option<PersonRecord> = None;
        let mut attendance_count = 0;
        let mut leave_kinds: Vec<&'static str> = Vec::new();
        let key = || PersonKey {
            name: name.to_string(),
            row: row.index,
        };

        for &col in layout.attendance() {
            let Some(text) = row.cell(col).filter(|t| is_attendance_text(t)) else {
                continue;
            };
            let remark = summarize(text);
            if remark.is_empty() {
                continue;
            }

            attendance_count += 1;
            record
                .get_or_insert_with(|| PersonRecord::new(key()))
                .add_remark(remark);
            if let Some(kind) = leave_kind(text) {
                if !leave_kinds.contains(&kind) {
                    leave_kinds.push(kind);
                }
            }
        }

        for &col in layout.sick_leave() {
            if let Some(value) = row.cell(col) {
                record
                    .get_or_insert_with(|| PersonRecord::new(key()))
                    .set_sick_leave(value);
            }
        }

        if attendance_count > 0 {
            report.valid_rows += 1;
            report.details.push(PersonDetail {
                name: name.to_string(),
                row: row.index,
                attendance_count,
                leave_kinds,
                sick_leave_hours: record
                    .as_ref()
                    .and_then(|r| r.sick_leave_hours())
                    .map(str::to_string),
            });

            if report.valid_rows % PROGRESS_INTERVAL == 0 {
                let progress = processed as f64 / report.total_rows as f64 * 100.0;
                log.info(&format!(
                    "处理进度: {:.1}% ({}/{})",
                    progress, processed, report.total_rows
                ));
            }
        }

        if let Some(record) = record {
            records.push(record);
        }
    }

    log_statistics(&report, log);

    log.info("正在生成结果表格...");
    for record in records {
        log.info(&format!(
            "处理 [{}] 的考勤记录: {} 条",
            record.key.name,
            record.remarks.len()
        ));
        report.summaries.push(record.finalize());
    }

    report
}

fn log_statistics(report: &CollationReport, log: &mut ProgressLog<'_>) {
    log.separator(50);
    log.success("数据处理完成");
    log.info(&format!("总记录数: {}", report.total_rows));
    log.info(&format!("有效记录数: {}", report.valid_rows));
    log.separator(50);

    log.info("人员处理详情:");
    for detail in &report.details {
        log.info(&format!("姓名: {}", detail.name));
        log.info(&format!("  - 考勤记录数: {}", detail.attendance_count));
        log.info(&format!("  - 考勤类型: {}", detail.leave_kinds.join(", ")));
        if let Some(hours) = &detail.sick_leave_hours {
            log.info(&format!("  - 事假时长: {}小时", hours));
        }
        log.separator(30);
    }
}

//! 考勤表读取
//!
//! 第一张工作表，两行表头（分组 / 子项），表头之后为数据行。
//! 分组表头为空时沿用左侧的值（合并单元格）。

mod columns;

pub use columns::resolve_layout;

use crate::error::{AttendanceError, Result};
use attendance_remarks_common::{format_hours, ColumnId, SheetRow};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// 一列的两级表头
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub id: ColumnId,
    pub group: String,
    pub sub: String,
}

/// 读取后的表格
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub headers: Vec<ColumnHeader>,
    pub rows: Vec<SheetRow>,
}

/// 读取工作簿的第一张工作表
pub fn read_workbook(path: &Path, header_row: usize) -> Result<SheetTable> {
    if !path.exists() {
        return Err(AttendanceError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AttendanceError::EmptyWorkbook(path.display().to_string()))??;

    table_from_range(&range, header_row)
}

/// 单元格区域 → 表格
pub fn table_from_range(range: &Range<Data>, header_row: usize) -> Result<SheetTable> {
    let sub_row = header_row + 1;
    let (last_row, last_col) = match range.end() {
        Some((row, col)) if row as usize >= sub_row => (row as usize, col as usize),
        _ => return Err(AttendanceError::MissingHeader(sub_row)),
    };

    let mut headers = Vec::with_capacity(last_col + 1);
    let mut group = String::new();
    for col in 0..=last_col {
        if let Some(text) = cell_at(range, header_row, col) {
            group = text;
        }
        headers.push(ColumnHeader {
            id: ColumnId(col),
            group: group.clone(),
            sub: cell_at(range, sub_row, col).unwrap_or_default(),
        });
    }

    let rows = (sub_row + 1..=last_row)
        .enumerate()
        .map(|(index, row)| {
            let mut sheet_row = SheetRow::new(index);
            for col in 0..=last_col {
                if let Some(text) = cell_at(range, row, col) {
                    sheet_row.set(ColumnId(col), text);
                }
            }
            sheet_row
        })
        .collect();

    Ok(SheetTable { headers, rows })
}

/// 绝对位置的单元格文本
fn cell_at(range: &Range<Data>, row: usize, col: usize) -> Option<String> {
    range
        .get_value((row as u32, col as u32))
        .and_then(cell_text)
}

/// 单元格 → 文本（空单元格和错误值为 None）
pub fn cell_text(data: &Data) -> Option<String> {
    let text = match data {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => format_hours(*f),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (5, 4));
        range.set_value((0, 0), Data::String("2024年10月考勤汇总".into()));
        range.set_value((2, 0), Data::String("序号".into()));
        range.set_value((2, 1), Data::String("姓名".into()));
        range.set_value((2, 2), Data::String("考勤结果".into()));
        range.set_value((2, 4), Data::String("请假".into()));
        range.set_value((3, 2), Data::String("10-01".into()));
        range.set_value((3, 3), Data::String("10-02".into()));
        range.set_value((3, 4), Data::String("事假(小时)".into()));
        range.set_value((4, 0), Data::Float(1.0));
        range.set_value((4, 1), Data::String("张三".into()));
        range.set_value((4, 2), Data::String("事假10-01 4小时".into()));
        range.set_value((4, 4), Data::Float(4.0));
        range.set_value((5, 1), Data::String("李四".into()));
        range
    }

    #[test]
    fn test_headers_forward_filled() {
        let table = table_from_range(&sample_range(), 2).unwrap();
        assert_eq!(table.headers.len(), 5);
        assert_eq!(table.headers[2].group, "考勤结果");
        assert_eq!(table.headers[3].group, "考勤结果");
        assert_eq!(table.headers[3].sub, "10-02");
        assert_eq!(table.headers[4].group, "请假");
    }

    #[test]
    fn test_rows_read() {
        let table = table_from_range(&sample_range(), 2).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].index, 0);
        assert_eq!(table.rows[0].cell(ColumnId(1)), Some("张三"));
        assert_eq!(table.rows[0].cell(ColumnId(4)), Some("4"));
        assert_eq!(table.rows[1].cell(ColumnId(2)), None);
    }

    #[test]
    fn test_missing_header_rows() {
        let range: Range<Data> = Range::new((0, 0), (1, 1));
        let result = table_from_range(&range, 2);
        assert!(matches!(result, Err(AttendanceError::MissingHeader(3))));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::String("  ".into())), None);
        assert_eq!(cell_text(&Data::Float(6.5)), Some("6.5".to_string()));
        assert_eq!(cell_text(&Data::Float(8.0)), Some("8".to_string()));
        assert_eq!(cell_text(&Data::Int(3)), Some("3".to_string()));
    }
}

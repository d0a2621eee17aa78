//! 结果表写入
//!
//! 宋体 9 号、细边框、居中；备注列自动换行，`；` 换成换行符。
//! 工作簿在内存中生成后一次性保存。

use super::{output_row, OutputValue, OUTPUT_HEADERS};
use crate::config::Config;
use crate::error::Result;
use attendance_remarks_common::collator::REMARK_SEPARATOR;
use attendance_remarks_common::PersonSummary;
use rust_xlsxwriter::*;
use std::path::Path;

const SHEET_NAME: &str = "Sheet1";
const FONT_NAME: &str = "宋体";
const FONT_SIZE: f64 = 9.0;
const DEFAULT_WIDTH: f64 = 12.0;
/// (列, 宽度)
const COLUMN_WIDTHS: [(u16, f64); 3] = [(1, 15.0), (4, 15.0), (20, 50.0)];
const REMARKS_COL: u16 = (OUTPUT_HEADERS.len() - 1) as u16;

struct Formats {
    header: Format,
    header_remarks: Format,
    cell: Format,
    remarks: Format,
}

impl Formats {
    fn new() -> Self {
        let base = Format::new()
            .set_font_name(FONT_NAME)
            .set_font_size(FONT_SIZE)
            .set_border(FormatBorder::Thin);
        let centered = base
            .clone()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
        let wrapped = base.set_text_wrap().set_align(FormatAlign::VerticalCenter);

        Self {
            header: centered.clone().set_bold(),
            header_remarks: wrapped.clone().set_bold(),
            cell: centered,
            remarks: wrapped,
        }
    }
}

/// 结果表 → xlsx 文件
pub fn write_summaries(summaries: &[PersonSummary], config: &Config, output_path: &Path) -> Result<()> {
    let mut workbook = build_workbook(summaries, config)?;
    workbook.save(output_path)?;
    Ok(())
}

/// 结果表 → 工作簿（未保存）
pub fn build_workbook(summaries: &[PersonSummary], config: &Config) -> Result<Workbook> {
    let formats = Formats::new();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for col in 0..OUTPUT_HEADERS.len() as u16 {
        worksheet.set_column_width(col, DEFAULT_WIDTH)?;
    }
    for (col, width) in COLUMN_WIDTHS {
        worksheet.set_column_width(col, width)?;
    }

    for (col, header) in OUTPUT_HEADERS.iter().enumerate() {
        let col = col as u16;
        let format = if col == REMARKS_COL {
            &formats.header_remarks
        } else {
            &formats.header
        };
        worksheet.write_string_with_format(0, col, *header, format)?;
    }

    for (i, summary) in summaries.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in output_row(i + 1, summary, config).into_iter().enumerate() {
            let col = col as u16;
            let format = if col == REMARKS_COL {
                &formats.remarks
            } else {
                &formats.cell
            };
            match value {
                OutputValue::Number(number) => {
                    worksheet.write_number_with_format(row, col, number, format)?;
                }
                OutputValue::Text(text) if col == REMARKS_COL => {
                    let text = text.replace(REMARK_SEPARATOR, "\n");
                    worksheet.write_string_with_format(row, col, text, format)?;
                }
                OutputValue::Text(text) => {
                    worksheet.write_string_with_format(row, col, text, format)?;
                }
                OutputValue::Blank => {
                    worksheet.write_blank(row, col, format)?;
                }
            }
        }
    }

    Ok(workbook)
}

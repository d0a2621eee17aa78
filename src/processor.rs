//! 考勤表一次完整处理
//!
//! 读取 → 列角色识别 → 按人员汇总 → 写出结果表。
//! 任何一步失败都会终止，结果文件只在最后一次性写出。

use crate::config::Config;
use crate::error::Result;
use crate::export::excel;
use crate::sheet;
use attendance_remarks_common::{collate, CollationReport, PersonSummary, ProgressLog};
use std::path::{Path, PathBuf};

pub const SUCCESS_MESSAGE: &str = "处理完成！";

/// 默认输出路径: 输入文件同目录下的 `{prefix}{stem}.xlsx`
pub fn default_output_path(input: &Path, prefix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{}{}.xlsx", prefix, stem))
}

/// 处理考勤表并写出结果
///
/// 失败时在日志中输出 ERROR 行后返回错误。
pub fn run(
    input: &Path,
    output: &Path,
    config: &Config,
    log: &mut ProgressLog<'_>,
) -> Result<CollationReport> {
    process_workbook(input, output, config, log).map_err(|e| {
        log.error(&format!("发生错误: {}", e));
        e
    })
}

/// 失败时的提示文本
pub fn failure_message(error: &crate::error::AttendanceError) -> String {
    format!("处理出错：{}", error)
}

fn process_workbook(
    input: &Path,
    output: &Path,
    config: &Config,
    log: &mut ProgressLog<'_>,
) -> Result<CollationReport> {
    log.info("开始读取Excel文件...");
    let table = sheet::read_workbook(input, config.header_row)?;
    log.info(&format!("成功读取文件: {}", file_name(input)));
    log.info(&format!("总行数: {}", table.rows.len()));

    log.info("正在识别表格结构...");
    let layout = sheet::resolve_layout(&table.headers)?;

    let report = collate(&table.rows, &layout, log);
    if report.summaries.is_empty() {
        log.warn("未找到任何考勤备注或事假记录，结果表只有表头");
    }

    log.info("正在保存Excel文件...");
    excel::write_summaries(&report.summaries, config, output)?;
    log.success(&format!("文件已保存: {}", file_name(output)));

    Ok(report)
}

/// 汇总结果 → JSON 数组
pub fn summaries_json(summaries: &[PersonSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

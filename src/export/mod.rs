pub mod excel;

use crate::config::Config;
use attendance_remarks_common::PersonSummary;

/// 输出表的列（顺序固定）
pub const OUTPUT_HEADERS: [&str; 21] = [
    "序号", "考勤月份", "职员代码", "姓名", "组织单元名称", "职位名称",
    "应出勤工时", "入离职出勤天", "病假小时", "事假小时",
    "迟到次数", "迟到分钟", "旷工次数", "旷工小时",
    "平时加班", "周末加班", "合计加班时",
    "平时加班费", "周末加班费", "合计加班费", "备注",
];

/// 输出单元格的值
#[derive(Debug, Clone, PartialEq)]
pub enum OutputValue {
    Number(f64),
    Text(String),
    Blank,
}

impl OutputValue {
    fn text(value: &str) -> Self {
        if value.is_empty() {
            OutputValue::Blank
        } else {
            OutputValue::Text(value.to_string())
        }
    }

    /// 能解析为数字时按数字写入
    fn number_or_text(value: &str) -> Self {
        match value.parse::<f64>().ok().filter(|n| n.is_finite()) {
            Some(number) => OutputValue::Number(number),
            None => Self::text(value),
        }
    }
}

/// 汇总 → 输出表的一行
///
/// `serial` 为 1 开始的序号。
pub fn output_row(serial: usize, summary: &PersonSummary, config: &Config) -> Vec<OutputValue> {
    let mut row = vec![OutputValue::Blank; OUTPUT_HEADERS.len()];
    row[0] = OutputValue::Number(serial as f64);
    row[1] = OutputValue::text(&config.attendance_month);
    row[2] = OutputValue::text(&config.employee_code);
    row[3] = OutputValue::text(&summary.name);
    row[4] = OutputValue::text(&config.organization);
    row[5] = OutputValue::text(&config.position);
    row[9] = OutputValue::number_or_text(&summary.sick_leave_hours);
    row[20] = OutputValue::text(&summary.remarks);
    row
}

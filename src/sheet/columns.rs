//! 列角色识别
//!
//! 表头文本只在这里检查一次，引擎只接收列句柄。

use super::ColumnHeader;
use crate::error::Result;
use attendance_remarks_common::ColumnLayout;

const NAME_HEADER: &str = "姓名";
const ATTENDANCE_GROUP: &str = "考勤结果";
const LEAVE_GROUP: &str = "请假";
const PERSONAL_LEAVE_SUB: &str = "事假(小时)";

/// 表头 → 列角色
///
/// - 姓名列: 分组或子项含「姓名」的第一列
/// - 考勤结果列: 分组含「考勤结果」
/// - 事假列: 分组含「请假」且子项含「事假(小时)」
pub fn resolve_layout(headers: &[ColumnHeader]) -> Result<ColumnLayout> {
    let name = headers
        .iter()
        .find(|h| h.group.contains(NAME_HEADER) || h.sub.contains(NAME_HEADER))
        .map(|h| h.id);

    let data_columns = headers.iter().filter(|h| Some(h.id) != name);

    let mut attendance = Vec::new();
    let mut sick_leave = Vec::new();
    for header in data_columns {
        if header.group.contains(ATTENDANCE_GROUP) {
            attendance.push(header.id);
        } else if header.group.contains(LEAVE_GROUP) && header.sub.contains(PERSONAL_LEAVE_SUB) {
            sick_leave.push(header.id);
        }
    }

    Ok(ColumnLayout::build(name, attendance, sick_leave)?)
}

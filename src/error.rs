use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error("设置错误: {0}")]
    Config(String),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("工作簿中没有工作表: {0}")]
    EmptyWorkbook(String),

    #[error("表头不完整: 第 {0} 行不存在")]
    MissingHeader(usize),

    #[error("Excel读取错误: {0}")]
    ExcelRead(#[from] calamine::Error),

    #[error("Excel生成错误: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] attendance_remarks_common::Error),
}

pub type Result<T> = std::result::Result<T, AttendanceError>;

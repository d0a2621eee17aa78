//! 错误类型定义

use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("未找到姓名列，请检查Excel文件格式")]
    MissingNameColumn,

    #[error("列配置错误: {0}")]
    Layout(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;

//! 处理日志
//!
//! 调用方传入一个回调，引擎同步地把带时间戳和级别的文本行交给它。
//! 日志只用于展示，不影响处理结果。

use std::fmt;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Success => write!(f, "SUCCESS"),
            LogLevel::Warn => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// 日志输出口
pub struct ProgressLog<'a> {
    sink: Option<Box<dyn FnMut(&str) + 'a>>,
}

impl<'a> ProgressLog<'a> {
    pub fn new(sink: impl FnMut(&str) + 'a) -> Self {
        Self {
            sink: Some(Box::new(sink)),
        }
    }

    /// 不输出任何内容
    pub fn silent() -> Self {
        Self { sink: None }
    }

    /// `[HH:MM:SS] [LEVEL] message` 形式输出一行
    pub fn log(&mut self, message: &str, level: LogLevel) {
        if let Some(sink) = self.sink.as_mut() {
            let timestamp = chrono::Local::now().format("%H:%M:%S");
            sink(&format_line(&timestamp.to_string(), level, message));
        }
    }

    pub fn info(&mut self, message: &str) {
        self.log(message, LogLevel::Info);
    }

    pub fn success(&mut self, message: &str) {
        self.log(message, LogLevel::Success);
    }

    pub fn warn(&mut self, message: &str) {
        self.log(message, LogLevel::Warn);
    }

    pub fn error(&mut self, message: &str) {
        self.log(message, LogLevel::Error);
    }

    /// 分隔线
    pub fn separator(&mut self, width: usize) {
        self.info(&"-".repeat(width));
    }
}

impl fmt::Debug for ProgressLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressLog")
            .field("enabled", &self.sink.is_some())
            .finish()
    }
}

fn format_line(timestamp: &str, level: LogLevel, message: &str) -> String {
    format!("[{}] [{}] {}", timestamp, level, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line("09:30:00", LogLevel::Success, "数据处理完成"),
            "[09:30:00] [SUCCESS] 数据处理完成"
        );
    }

    #[test]
    fn test_log_levels() {
        let mut lines = Vec::new();
        {
            let mut log = ProgressLog::new(|line: &str| lines.push(line.to_string()));
            log.info("开始");
            log.warn("注意");
            log.error("失败");
        }
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("[INFO] 开始"));
        assert!(lines[1].ends_with("[WARNING] 注意"));
        assert!(lines[2].ends_with("[ERROR] 失败"));
        assert!(lines[0].starts_with('['));
    }

    #[test]
    fn test_separator() {
        let mut lines = Vec::new();
        {
            let mut log = ProgressLog::new(|line: &str| lines.push(line.to_string()));
            log.separator(5);
        }
        assert!(lines[0].ends_with("-----"));
    }

    #[test]
    fn test_silent() {
        let mut log = ProgressLog::silent();
        log.info("无输出");
        assert!(format!("{:?}", log).contains("false"));
    }
}

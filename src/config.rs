use crate::error::{AttendanceError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 考勤月份（输出表的固定列）
    pub attendance_month: String,
    pub organization: String,
    pub position: String,
    /// 职员代码占位
    pub employee_code: String,
    /// 第一行表头的行号（从 0 开始，第二行表头紧随其后）
    pub header_row: usize,
    /// 默认输出文件名前缀
    pub output_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attendance_month: "2024年10月".into(),
            organization: "研发中心".into(),
            position: "软件工程师".into(),
            employee_code: "(空)".into(),
            header_row: 2,
            output_prefix: "考勤结果统计_".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// 本次运行的覆盖值（不保存）
    pub fn with_overrides(mut self, month: Option<String>, header_row: Option<usize>) -> Self {
        if let Some(month) = month {
            self.attendance_month = month;
        }
        if let Some(header_row) = header_row {
            self.header_row = header_row;
        }
        self
    }

    /// 修改输出表的固定列，返回是否有变更
    pub fn update(
        &mut self,
        month: Option<String>,
        organization: Option<String>,
        position: Option<String>,
    ) -> bool {
        let mut changed = false;
        for (field, value) in [
            (&mut self.attendance_month, month),
            (&mut self.organization, organization),
            (&mut self.position, position),
        ] {
            if let Some(value) = value {
                *field = value;
                changed = true;
            }
        }
        changed
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AttendanceError::Config("找不到用户主目录".into()))?;
        Ok(home.join(".config").join("attendance-remarks").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.attendance_month, "2024年10月");
        assert_eq!(config.header_row, 2);
        assert_eq!(config.output_prefix, "考勤结果统计_");
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::default().with_overrides(Some("2024年11月".into()), None);
        assert_eq!(config.attendance_month, "2024年11月");
        assert_eq!(config.header_row, 2);

        let config = Config::default().with_overrides(None, Some(0));
        assert_eq!(config.attendance_month, "2024年10月");
        assert_eq!(config.header_row, 0);
    }

    #[test]
    fn test_update() {
        let mut config = Config::default();
        assert!(!config.update(None, None, None));
        assert_eq!(config.organization, "研发中心");

        assert!(config.update(None, Some("测试部".into()), Some("测试工程师".into())));
        assert_eq!(config.attendance_month, "2024年10月");
        assert_eq!(config.organization, "测试部");
        assert_eq!(config.position, "测试工程师");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"attendance_month": "2024年11月"}"#).unwrap();
        assert_eq!(config.attendance_month, "2024年11月");
        assert_eq!(config.organization, "研发中心");
        assert_eq!(config.employee_code, "(空)");
    }
}

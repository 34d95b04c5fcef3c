use std::path::Path;
use std::time::Duration;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::errors::{ScreenplayError, ScreenplayResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 连续空行在预览中合并为一个
    pub merge_empty_lines: bool,
    /// 是否打印标题页
    pub print_title_page: bool,
    /// 是否加粗场景标题
    pub embolden_scene_headers: bool,
    /// 是否为场景标题添加下划线
    pub underline_scene_headers: bool,
    /// 是否加粗角色名
    pub embolden_character_names: bool,
    /// 导出完整 HTML 时是否内嵌默认样式表
    pub include_stylesheet: bool,
    /// 页数估算: 每页字符数(经验值)
    pub chars_per_page: usize,
    /// 对白中每字符耗时预估(不含标点)
    pub dial_sec_per_char: f64,
    /// 对白中每个短标点耗时预估(逗号分号等)
    pub dial_sec_per_punc_short: f64,
    /// 对白中每个长标点耗时预估(句号问号等)
    pub dial_sec_per_punc_long: f64,
    /// action文本中每字符转化成影片时长预估(不含标点)
    pub action_sec_per_char: f64,
    /// 实时预览重新解析的防抖间隔(毫秒)
    pub reparse_debounce_ms: u64,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            merge_empty_lines: false,
            print_title_page: true,
            embolden_scene_headers: true,
            underline_scene_headers: false,
            embolden_character_names: false,
            include_stylesheet: true,
            chars_per_page: 1800,
            dial_sec_per_char: 0.3,
            dial_sec_per_punc_short: 0.3,
            dial_sec_per_punc_long: 0.75,
            action_sec_per_char: 0.4,
            reparse_debounce_ms: 300,
        }
    }
}

impl Conf {
    /// 从 JSON 文件加载配置，缺省字段使用默认值
    pub fn load(path: impl AsRef<Path>) -> ScreenplayResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let conf: Conf = serde_json::from_str(&content)?;
        conf.validate()?;
        debug!("已加载配置: {}", path.display());
        Ok(conf)
    }

    pub fn reparse_debounce(&self) -> Duration {
        Duration::from_millis(self.reparse_debounce_ms)
    }

    pub fn validate(&self) -> ScreenplayResult<()> {
        if self.chars_per_page == 0 {
            return Err(ScreenplayError::InvalidConfig(
                "chars_per_page 必须大于 0".to_string(),
            ));
        }
        let rates = [
            ("dial_sec_per_char", self.dial_sec_per_char),
            ("dial_sec_per_punc_short", self.dial_sec_per_punc_short),
            ("dial_sec_per_punc_long", self.dial_sec_per_punc_long),
            ("action_sec_per_char", self.action_sec_per_char),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ScreenplayError::InvalidConfig(format!(
                    "{} 必须为非负数: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let conf: Conf = serde_json::from_str(r#"{ "chars_per_page": 2500 }"#).unwrap();
        assert_eq!(conf.chars_per_page, 2500);
        assert!(conf.print_title_page);
        assert_eq!(conf.reparse_debounce_ms, 300);
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let conf = Conf {
            chars_per_page: 0,
            ..Conf::default()
        };
        assert!(matches!(conf.validate(), Err(ScreenplayError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let conf = Conf {
            dial_sec_per_char: -1.0,
            ..Conf::default()
        };
        assert!(conf.validate().is_err());
    }

    #[test]
    fn load_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "merge_empty_lines": true }}"#).unwrap();
        let conf = Conf::load(file.path()).unwrap();
        assert!(conf.merge_empty_lines);
    }

    #[test]
    fn load_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(Conf::load(file.path()), Err(ScreenplayError::Json(_))));
    }
}

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// 标题页可识别的关键字，按渲染顺序排列
pub const TITLE_PAGE_KEYS: [&str; 4] = ["title", "author", "draft date", "contact"];

/// 标题页
///
/// 键为小写关键字，值为去除首尾空白后的内容。重复的键后者覆盖前者。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitlePage {
    entries: HashMap<String, String>,
}

impl TitlePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.trim().to_lowercase(), value.trim().to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.get("author")
    }

    pub fn draft_date(&self) -> Option<&str> {
        self.get("draft date")
    }

    pub fn contact(&self) -> Option<&str> {
        self.get("contact")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按固定顺序返回已填写的标题页条目
    pub fn ordered_entries(&self) -> Vec<(&'static str, &str)> {
        TITLE_PAGE_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut page = TitlePage::new();
        page.insert("Title", "First");
        page.insert(" title ", "Second");
        assert_eq!(page.len(), 1);
        assert_eq!(page.title(), Some("Second"));
    }

    #[test]
    fn ordered_entries_skip_missing_keys() {
        let mut page = TitlePage::new();
        page.insert("contact", "jane@example.com");
        page.insert("title", "My Script");
        assert_eq!(
            page.ordered_entries(),
            vec![("title", "My Script"), ("contact", "jane@example.com")]
        );
    }
}

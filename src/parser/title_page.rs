use crate::models::TitlePage;
use crate::parser::line_classifier::is_scene_heading;
use crate::utils::ScreenplayConstants;

/// 标题页扫描结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlePageScan {
    pub title_page: Option<TitlePage>,
    /// 被标题页吃掉的行数(含其中的空行)
    pub consumed: usize,
}

/// 是否为标题页关键字行，如 `Title: My Script`
pub fn is_title_page_line(trimmed: &str) -> bool {
    let lower = trimmed.to_lowercase();
    ScreenplayConstants::TITLE_PAGE_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

fn is_fade_in(trimmed: &str) -> bool {
    trimmed.to_lowercase() == ScreenplayConstants::FADE_IN
}

/// 检测开头的标题页
///
/// 连续读取空行和关键字行，遇到场景标题、`FADE IN:` 或其他内容时停止，
/// 停止的那一行不被消耗。一个关键字都没有时不产生标题页，也不消耗任何行。
pub fn detect_title_page(lines: &[&str]) -> TitlePageScan {
    let mut title_page = TitlePage::new();
    let mut consumed = 0;

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            consumed += 1;
            continue;
        }
        if is_scene_heading(trimmed) || is_fade_in(trimmed) || !is_title_page_line(trimmed) {
            break;
        }
        if let Some((key, value)) = trimmed.split_once(':') {
            title_page.insert(key, value);
        }
        consumed += 1;
    }

    if title_page.is_empty() {
        return TitlePageScan {
            title_page: None,
            consumed: 0,
        };
    }

    TitlePageScan {
        title_page: Some(title_page),
        consumed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_before_scene_heading() {
        let lines = ["Title: My Script", "Author: Jane", "", "INT. ROOM - DAY"];
        let scan = detect_title_page(&lines);
        assert_eq!(scan.consumed, 3);
        let page = scan.title_page.unwrap();
        assert_eq!(page.title(), Some("My Script"));
        assert_eq!(page.author(), Some("Jane"));
    }

    #[test]
    fn stops_before_fade_in() {
        let lines = ["title: Night Shift", "", "Fade In:", "A dark room."];
        let scan = detect_title_page(&lines);
        assert_eq!(scan.consumed, 2);
        assert_eq!(scan.title_page.unwrap().title(), Some("Night Shift"));
    }

    #[test]
    fn no_keys_means_no_title_page() {
        let lines = ["", "", "INT. ROOM - DAY"];
        let scan = detect_title_page(&lines);
        assert_eq!(scan.title_page, None);
        assert_eq!(scan.consumed, 0);
    }

    #[test]
    fn value_keeps_text_after_first_colon() {
        let lines = ["Contact:  jane@example.com, tel: 555-0100  ", "Draft Date: 1/2/2024"];
        let page = detect_title_page(&lines).title_page.unwrap();
        assert_eq!(page.contact(), Some("jane@example.com, tel: 555-0100"));
        assert_eq!(page.draft_date(), Some("1/2/2024"));
    }

    #[test]
    fn unknown_key_ends_title_page() {
        let lines = ["Title: A", "Credit: written by", "Author: B"];
        let scan = detect_title_page(&lines);
        assert_eq!(scan.consumed, 1);
        assert_eq!(scan.title_page.unwrap().author(), None);
    }
}

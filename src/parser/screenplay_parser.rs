use log::trace;
use crate::models::ParsedDocument;
use crate::parser::line_classifier::classify_lines;
use crate::parser::title_page::detect_title_page;

/// 剧本解析器
///
/// 无状态，可在多个编辑器实例间共享；每次调用都从头重新解析。
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenplayParser;

impl ScreenplayParser {
    pub fn new() -> Self {
        ScreenplayParser
    }

    /// 解析剧本文本
    ///
    /// # Arguments
    ///
    /// * `script` - 以 `\n` 分行的完整剧本文本
    ///
    /// # Returns
    ///
    /// 标题页(如有)加上逐行分类的元素列表。除被标题页消耗的行外，
    /// 每一行恰好对应一个元素。
    pub fn parse(&self, script: &str) -> ParsedDocument {
        let lines: Vec<&str> = script.split('\n').collect();

        let scan = detect_title_page(&lines);
        let elements = classify_lines(lines[scan.consumed..].iter().copied());

        trace!(
            "解析完成: {} 行, 标题页 {} 行, {} 个元素",
            lines.len(),
            scan.consumed,
            elements.len()
        );

        ParsedDocument::new(scan.title_page, elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementType;

    #[test]
    fn empty_script_is_one_empty_line() {
        let doc = ScreenplayParser::new().parse("");
        assert_eq!(doc.title_page, None);
        assert_eq!(doc.elements.len(), 1);
        assert_eq!(doc.elements[0].element_type, ElementType::Empty);
    }

    #[test]
    fn title_page_only() {
        let doc = ScreenplayParser::new().parse("Title: Only a title\n");
        assert_eq!(doc.title_page.unwrap().title(), Some("Only a title"));
        assert!(doc.elements.is_empty());
    }

    #[test]
    fn crlf_input_is_trimmed() {
        let doc = ScreenplayParser::new().parse("INT. ROOM - DAY\r\n\r\nJANE\r\nHi.\r\n");
        let types: Vec<ElementType> = doc.elements.iter().map(|e| e.element_type).collect();
        assert_eq!(
            types,
            vec![
                ElementType::SceneHeading,
                ElementType::Empty,
                ElementType::Character,
                ElementType::Dialogue,
                ElementType::Empty,
            ]
        );
        assert_eq!(doc.elements[0].text, "INT. ROOM - DAY");
    }
}

use log::warn;
use crate::errors::{ScreenplayError, ScreenplayResult};
use crate::models::{Conf, ParsedDocument};
use crate::parser::{generate_document_html, ScreenplayParser};

/// 实时预览状态
///
/// 保存最近一次成功渲染的结果。输入缺失时保留上一次的预览。
#[derive(Debug, Clone)]
pub struct LivePreview {
    parser: ScreenplayParser,
    conf: Conf,
    document: Option<ParsedDocument>,
    html: String,
}

impl LivePreview {
    pub fn new(conf: Conf) -> Self {
        LivePreview {
            parser: ScreenplayParser::new(),
            conf,
            document: None,
            html: String::new(),
        }
    }

    /// 用新文本刷新预览，返回新的 HTML
    pub fn update(&mut self, text: Option<&str>) -> ScreenplayResult<&str> {
        let text = match text {
            Some(text) => text,
            None => {
                warn!("预览更新失败: 没有剧本文本，保留上一次的预览");
                return Err(ScreenplayError::MissingInput);
            }
        };

        let document = self.parser.parse(text);
        self.html = generate_document_html(&document, &self.conf);
        self.document = Some(document);
        Ok(&self.html)
    }

    /// 应用已经解析好的文档(例如来自防抖任务)
    pub fn apply(&mut self, document: ParsedDocument) -> &str {
        self.html = generate_document_html(&document, &self.conf);
        self.document = Some(document);
        &self.html
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn document(&self) -> Option<&ParsedDocument> {
        self.document.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_previous_state_on_missing_input() {
        let mut preview = LivePreview::new(Conf::default());
        let first = preview.update(Some("INT. ROOM - DAY")).unwrap().to_string();

        let result = preview.update(None);
        assert!(matches!(result, Err(ScreenplayError::MissingInput)));
        assert_eq!(preview.html(), first);
        assert_eq!(preview.document().unwrap().elements.len(), 1);
    }

    #[test]
    fn update_replaces_document() {
        let mut preview = LivePreview::new(Conf::default());
        preview.update(Some("JANE\nHi.")).unwrap();
        preview.update(Some("She leaves.")).unwrap();
        assert!(preview.html().contains("class=\"action\""));
        assert!(!preview.html().contains("class=\"character\""));
    }

    #[test]
    fn apply_renders_parsed_document() {
        let mut preview = LivePreview::new(Conf::default());
        let document = ScreenplayParser::new().parse("cut to:");
        assert!(preview.apply(document).contains("<div class=\"transition\">CUT TO:</div>"));
    }
}

use crate::models::{Conf, ElementType, ParsedDocument, ScreenplayElement, TitlePage};
use crate::utils::escape_html;

/// 默认预览样式，按标准剧本格式排版
pub const SCREENPLAY_CSS: &str = r#".screenplay { font-family: "Courier Prime", "Courier New", monospace; font-size: 12pt; line-height: 1.2; max-width: 6in; margin: 0 auto; }
.screenplay .scene-heading { margin-top: 1.2em; text-transform: uppercase; }
.screenplay .action { margin: 0; }
.screenplay .character { margin: 1em 0 0 2.2in; text-transform: uppercase; }
.screenplay .dialogue { margin: 0 1.5in 0 1in; max-width: 3.5in; }
.screenplay .parenthetical { margin: 0 2in 0 1.6in; font-style: italic; }
.screenplay .transition { margin-top: 1em; text-align: right; text-transform: uppercase; }
.screenplay .empty { min-height: 1.2em; }
.title-page { text-align: center; margin: 2in 0; page-break-after: always; }
.title-page .title-page-title { font-size: 14pt; text-transform: uppercase; }
.title-page .title-page-draft-date, .title-page .title-page-contact { text-align: left; margin-top: 1em; }
"#;

// 转换为HTML格式(用于预览)
pub fn element_to_html(element: &ScreenplayElement, cfg: &Conf) -> String {
    let class = element.element_type.css_class();
    let mut inner = escape_html(&element.text);

    match element.element_type {
        ElementType::Empty => inner = "<br>".to_string(),
        ElementType::SceneHeading => {
            if cfg.underline_scene_headers {
                inner = format!("<u>{}</u>", inner);
            }
            if cfg.embolden_scene_headers {
                inner = format!("<b>{}</b>", inner);
            }
        }
        ElementType::Character if cfg.embolden_character_names => {
            inner = format!("<b>{}</b>", inner);
        }
        _ => {}
    }

    format!("<div class=\"{}\">{}</div>", class, inner)
}

// 生成HTML输出
pub fn generate_html(elements: &[ScreenplayElement], cfg: &Conf) -> String {
    let mut buffer = String::new();
    let mut last_was_empty = false;
    for element in elements {
        let is_empty = element.element_type == ElementType::Empty;
        if cfg.merge_empty_lines && is_empty && last_was_empty {
            continue;
        }
        last_was_empty = is_empty;
        buffer.push_str(&element_to_html(element, cfg));
        buffer.push('\n');
    }
    buffer
}

// 生成标题页HTML输出
pub fn generate_title_html(title_page: &TitlePage) -> String {
    let mut buffer = String::from("<div class=\"title-page\">\n");
    for (key, value) in title_page.ordered_entries() {
        buffer.push_str(&format!(
            "<div class=\"title-page-{}\">{}</div>\n",
            key.replace(' ', "-"),
            escape_html(value)
        ));
    }
    buffer.push_str("</div>\n");
    buffer
}

/// 标题页(按配置)加正文，包在 `.screenplay` 容器里
pub fn generate_document_html(document: &ParsedDocument, cfg: &Conf) -> String {
    let mut buffer = String::new();
    if cfg.print_title_page {
        if let Some(title_page) = &document.title_page {
            buffer.push_str(&generate_title_html(title_page));
        }
    }
    buffer.push_str("<div class=\"screenplay\">\n");
    buffer.push_str(&generate_html(&document.elements, cfg));
    buffer.push_str("</div>\n");
    buffer
}

/// 生成可独立打开的完整 HTML 页面
pub fn generate_standalone_html(document: &ParsedDocument, cfg: &Conf) -> String {
    let title = document
        .title_page
        .as_ref()
        .and_then(|page| page.title())
        .unwrap_or("Screenplay");

    let mut buffer = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    buffer.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    if cfg.include_stylesheet {
        buffer.push_str("<style>\n");
        buffer.push_str(SCREENPLAY_CSS);
        buffer.push_str("</style>\n");
    }
    buffer.push_str("</head>\n<body>\n");
    buffer.push_str(&generate_document_html(document, cfg));
    buffer.push_str("</body>\n</html>\n");
    buffer
}

pub mod screenplay_constants;

use unicode_segmentation::UnicodeSegmentation;
pub use screenplay_constants::{ScreenplayConstants, LINE_REGEX, LOCATION_REGEX, DURATION_REGEX};

/// 按字素簇统计文本长度
///
/// 组合字符(如带声调的字母、emoji 序列)只计一次。
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// 大小写不敏感的前缀判断
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.to_uppercase().starts_with(&prefix.to_uppercase())
}

/// 转义 HTML 特殊字符
pub fn escape_html(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => buffer.push_str("&amp;"),
            '<' => buffer.push_str("&lt;"),
            '>' => buffer.push_str("&gt;"),
            '"' => buffer.push_str("&quot;"),
            '\'' => buffer.push_str("&#39;"),
            _ => buffer.push(c),
        }
    }
    buffer
}

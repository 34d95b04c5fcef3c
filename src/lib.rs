pub mod models;
pub mod utils;
pub mod parser;
pub mod preview;
pub mod errors;
pub mod api;

pub use models::{
    ElementType,
    ScreenplayElement,
    TitlePage,
    ParsedDocument,
    Location,
    ScreenplayProperties,
    SceneInfo,
    Conf
};

pub use parser::{
    ScreenplayParser,
    analyze,
    generate_document_html,
    generate_standalone_html
};

pub use preview::{LivePreview, spawn_debounced_parser};

pub use errors::{ScreenplayError, ScreenplayResult};

pub use api::{
    ParseResponse,
    ExportResult,
    parse_screenplay_text,
    export_to_html,
    export_to_html_base64,
    test_connection
};

/// 解析剧本文本
///
/// # Arguments
///
/// * `script` - 以 `\n` 分行的剧本文本
///
/// # Returns
///
/// 解析后的文档，纯函数，相同输入得到相同结果
pub fn parse(script: &str) -> ParsedDocument {
    ScreenplayParser::new().parse(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let result = parse("INT. ROOM - DAY\n\nHello, world!");
        assert_eq!(result.elements.len(), 3);
        assert_eq!(result.elements[2].element_type, ElementType::Action);
    }
}

pub mod screenplay_parser;
pub mod title_page;
pub mod line_classifier;
pub mod properties;
pub mod text_processor;

pub use screenplay_parser::ScreenplayParser;
pub use title_page::{detect_title_page, TitlePageScan};
pub use line_classifier::{classify_line, classify_lines};
pub use properties::{analyze, estimate_page_count, parse_location_information};
pub use text_processor::{
    element_to_html,
    generate_html,
    generate_title_html,
    generate_document_html,
    generate_standalone_html,
    SCREENPLAY_CSS
};

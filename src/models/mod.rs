pub mod screenplay_element;
pub mod title_page;
pub mod parsed_document;
pub mod location;
pub mod screenplay_properties;
pub mod conf;

pub use screenplay_element::{ElementType, ScreenplayElement};
pub use title_page::{TitlePage, TITLE_PAGE_KEYS};
pub use parsed_document::ParsedDocument;
pub use location::Location;
pub use screenplay_properties::{ScreenplayProperties, SceneInfo};
pub use conf::Conf;

use serde::{Deserialize, Serialize};
use crate::models::screenplay_element::{ElementType, ScreenplayElement};
use crate::models::title_page::TitlePage;

/// 解析后的剧本文档
///
/// 每次源文本变化都会重新完整生成，不做增量修改。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub title_page: Option<TitlePage>,
    pub elements: Vec<ScreenplayElement>,
}

impl ParsedDocument {
    pub fn new(title_page: Option<TitlePage>, elements: Vec<ScreenplayElement>) -> Self {
        ParsedDocument { title_page, elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// 返回指定类型的元素及其下标
    pub fn elements_of(&self, element_type: ElementType) -> impl Iterator<Item = (usize, &ScreenplayElement)> {
        self.elements
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.element_type == element_type)
    }

    pub fn scene_headings(&self) -> impl Iterator<Item = &ScreenplayElement> {
        self.elements_of(ElementType::SceneHeading).map(|(_, e)| e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_of_keeps_indices() {
        let doc = ParsedDocument::new(
            None,
            vec![
                ScreenplayElement::new(ElementType::SceneHeading, "INT. A"),
                ScreenplayElement::empty(),
                ScreenplayElement::new(ElementType::SceneHeading, "EXT. B"),
            ],
        );
        let indices: Vec<usize> = doc.elements_of(ElementType::SceneHeading).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(doc.scene_headings().count(), 2);
    }
}

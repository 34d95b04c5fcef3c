use std::fmt;
use serde::{Deserialize, Serialize};

/// 剧本元素类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    Empty,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::SceneHeading => "scene_heading",
            ElementType::Action => "action",
            ElementType::Character => "character",
            ElementType::Dialogue => "dialogue",
            ElementType::Parenthetical => "parenthetical",
            ElementType::Transition => "transition",
            ElementType::Empty => "empty",
        }
    }

    /// HTML 预览中使用的 css class
    pub fn css_class(&self) -> &'static str {
        match self {
            ElementType::SceneHeading => "scene-heading",
            ElementType::Action => "action",
            ElementType::Character => "character",
            ElementType::Dialogue => "dialogue",
            ElementType::Parenthetical => "parenthetical",
            ElementType::Transition => "transition",
            ElementType::Empty => "empty",
        }
    }

    // 紧跟在这些类型之后的普通文本行归为对白
    pub fn opens_dialogue(&self) -> bool {
        matches!(
            self,
            ElementType::Character | ElementType::Parenthetical | ElementType::Dialogue
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenplayElement {
    #[serde(rename = "type")]
    pub element_type: ElementType, // 元素类型
    pub text: String,              // 显示文本(已按类型规范大小写)
}

impl ScreenplayElement {
    pub fn new(element_type: ElementType, text: impl Into<String>) -> Self {
        ScreenplayElement {
            element_type,
            text: text.into(),
        }
    }

    // 创建一个空行元素
    pub fn empty() -> Self {
        ScreenplayElement {
            element_type: ElementType::Empty,
            text: String::new(),
        }
    }

    // 检查元素类型是否匹配
    pub fn is_type(&self, types: &[ElementType]) -> bool {
        types.contains(&self.element_type)
    }
}

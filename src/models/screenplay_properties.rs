use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::models::location::Location;

/// 单个场景的统计信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneInfo {
    pub number: usize,
    pub heading: String,
    pub element_index: usize,
    pub location: Option<Location>,
    /// 场景内动作预估时长(秒)
    pub action_length: f64,
    /// 场景内对白预估时长(秒)
    pub dialogue_length: f64,
    pub end_play_sec: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenplayProperties {
    pub scenes: Vec<SceneInfo>,
    /// 角色名 -> 角色提示行的元素下标
    pub characters: HashMap<String, Vec<usize>>,
    pub locations: HashMap<String, Vec<Location>>,
    pub length_action: f64,
    pub length_dialogue: f64,
    pub first_scene_index: Option<usize>,
    /// 所有元素文本的字符数(按字素簇计)
    pub char_count: usize,
    /// 预估页数
    pub page_count: usize,
}

impl ScreenplayProperties {
    pub fn new() -> Self {
        ScreenplayProperties {
            scenes: Vec::new(),
            characters: HashMap::new(),
            locations: HashMap::new(),
            length_action: 0.0,
            length_dialogue: 0.0,
            first_scene_index: None,
            char_count: 0,
            page_count: 0,
        }
    }

    pub fn total_length(&self) -> f64 {
        self.length_action + self.length_dialogue
    }
}

impl Default for ScreenplayProperties {
    fn default() -> Self {
        Self::new()
    }
}

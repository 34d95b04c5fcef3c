use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub interior: bool,
    pub exterior: bool,
    pub time_of_day: String,
    pub scene_number: usize,
    /// 场景标题在元素列表中的下标
    pub element_index: usize,
    pub start_play_sec: f64,
}

impl Location {
    pub fn new(
        name: String,
        interior: bool,
        exterior: bool,
        time_of_day: String
    ) -> Self {
        Location {
            name,
            interior,
            exterior,
            time_of_day,
            scene_number: 0,
            element_index: 0,
            start_play_sec: 0.0,
        }
    }
}

use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

pub struct ScreenplayConstants;

impl ScreenplayConstants {
    /// 标题页关键字(带冒号，小写)
    pub const TITLE_PAGE_PREFIXES: [&'static str; 4] =
        ["title:", "author:", "draft date:", "contact:"];

    /// 不能作为角色名的转场前缀
    pub const RESERVED_CHARACTER_PREFIXES: [&'static str; 4] =
        ["FADE IN", "FADE OUT", "CUT TO", "DISSOLVE TO"];

    /// 转场前缀(大写)
    pub const TRANSITION_PREFIXES: [&'static str; 6] = [
        "FADE IN:",
        "FADE OUT.",
        "CUT TO:",
        "DISSOLVE TO:",
        "MATCH CUT:",
        "JUMP CUT:",
    ];

    /// 标题页结束标记
    pub const FADE_IN: &'static str = "fade in:";

    /// 角色名长度上限(不含)
    pub const MAX_CHARACTER_LEN: usize = 40;
}

lazy_static! {
    // 行分类正则
    pub static ref LINE_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("scene_heading", Regex::new(r"(?i)^(INT\.|EXT\.|EST\.|INT/EXT\.|I/E\.)").unwrap());
        map
    };

    // 场景标题拆分: group 1 内外景, group 2 地点和时间
    pub static ref LOCATION_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("heading", Regex::new(r"(?i)^(INT/EXT\.|I/E\.|INT\.|EXT\.|EST\.)\s*(.*)$").unwrap());
        map.insert("split_time", Regex::new(r"(.*?)\s[\-–—−]+\s(.*)").unwrap());
        map
    };

    // 时长计算正则
    pub static ref DURATION_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("non_chars", Regex::new(r"\s|\p{P}|\p{S}").unwrap());
        map.insert("punctuation", Regex::new(r"(\.|\?|!|:|。|？|！|：)|(,|，|;|；|、)").unwrap());
        map
    };
}

use crate::models::{Conf, ElementType, Location, ParsedDocument, SceneInfo, ScreenplayProperties};
use crate::utils::{grapheme_len, DURATION_REGEX, LOCATION_REGEX};

// 去除空格、标点和特殊字符
pub fn calculate_chars(text: &str) -> String {
    DURATION_REGEX["non_chars"].replace_all(text, "").to_string()
}

// 计算动作持续时间
pub fn calculate_action_duration(text: &str, config_x: Option<f64>) -> f64 {
    let x = config_x.unwrap_or(0.4); // 默认值: 0.4秒/字符

    let sanitized = calculate_chars(text);
    sanitized.chars().count() as f64 * x
}

// 计算对话持续时间
pub fn calculate_dialogue_duration(
    text: &str,
    config_x: Option<f64>,
    config_long: Option<f64>,
    config_short: Option<f64>
) -> f64 {
    let x = config_x.unwrap_or(0.3); // 默认值: 0.3秒/字符
    let long = config_long.unwrap_or(0.75); // 长标点默认值: 0.75秒
    let short = config_short.unwrap_or(0.3); // 短标点默认值: 0.3秒

    let sanitized = calculate_chars(text);
    let mut duration = sanitized.chars().count() as f64 * x;

    // 处理标点符号
    for cap in DURATION_REGEX["punctuation"].captures_iter(text) {
        if cap.get(1).is_some() {
            duration += long;
        } else if cap.get(2).is_some() {
            duration += short;
        }
    }

    duration
}

/// 解析场景标题中的内外景、地点和时间
///
/// `INT. KITCHEN - NIGHT` -> 内景, `KITCHEN`, `NIGHT`
pub fn parse_location_information(scene_heading: &str) -> Option<Location> {
    let match_result = LOCATION_REGEX["heading"].captures(scene_heading)?;

    let group1 = match_result.get(1)?.as_str().to_uppercase();
    let rest = match_result.get(2).map_or("", |m| m.as_str());

    let interior = group1.contains('I');
    let exterior = group1.contains("EX") || group1.contains("E.");

    let split_location_from_time = LOCATION_REGEX["split_time"].captures(rest);

    let (name, time_of_day) = match &split_location_from_time {
        Some(time_match) => (
            time_match.get(1).map_or("", |m| m.as_str()),
            time_match.get(2).map_or("", |m| m.as_str()),
        ),
        None => (rest, ""),
    };

    Some(Location::new(
        normalize(name),
        interior,
        exterior,
        normalize(time_of_day),
    ))
}

// 标准化文本: 大写，空白统一为单个空格
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// 按经验常数估算页数，向上取整
pub fn estimate_page_count(char_count: usize, chars_per_page: usize) -> usize {
    if char_count == 0 || chars_per_page == 0 {
        return 0;
    }
    (char_count + chars_per_page - 1) / chars_per_page
}

/// 统计场景、角色、地点和预估时长
///
/// 第一个场景之前的内容不计入时长。
pub fn analyze(document: &ParsedDocument, cfg: &Conf) -> ScreenplayProperties {
    let mut properties = ScreenplayProperties::new();
    let mut play_time_sec = 0.0;
    let mut length_action_so_far = 0.0;
    let mut length_dialogue_so_far = 0.0;

    for (index, element) in document.elements.iter().enumerate() {
        properties.char_count += grapheme_len(&element.text);

        match element.element_type {
            ElementType::SceneHeading => {
                update_previous_scene_length(
                    &mut properties,
                    &mut length_action_so_far,
                    &mut length_dialogue_so_far,
                    play_time_sec,
                );

                let number = properties.scenes.len() + 1;
                let location = parse_location_information(&element.text).map(|mut location| {
                    location.scene_number = number;
                    location.element_index = index;
                    location.start_play_sec = play_time_sec;
                    location
                });

                if let Some(location) = &location {
                    properties
                        .locations
                        .entry(location.name.clone())
                        .or_default()
                        .push(location.clone());
                }

                if properties.first_scene_index.is_none() {
                    properties.first_scene_index = Some(index);
                }

                properties.scenes.push(SceneInfo {
                    number,
                    heading: element.text.clone(),
                    element_index: index,
                    location,
                    action_length: 0.0,
                    dialogue_length: 0.0,
                    end_play_sec: play_time_sec,
                });
            }
            ElementType::Character => {
                properties
                    .characters
                    .entry(element.text.clone())
                    .or_default()
                    .push(index);
            }
            ElementType::Dialogue if !properties.scenes.is_empty() => {
                let time = calculate_dialogue_duration(
                    &element.text,
                    Some(cfg.dial_sec_per_char),
                    Some(cfg.dial_sec_per_punc_long),
                    Some(cfg.dial_sec_per_punc_short),
                );
                properties.length_dialogue += time;
                play_time_sec += time;
            }
            ElementType::Action if !properties.scenes.is_empty() => {
                let time = calculate_action_duration(&element.text, Some(cfg.action_sec_per_char));
                properties.length_action += time;
                play_time_sec += time;
            }
            _ => {}
        }
    }

    update_previous_scene_length(
        &mut properties,
        &mut length_action_so_far,
        &mut length_dialogue_so_far,
        play_time_sec,
    );

    properties.page_count = estimate_page_count(properties.char_count, cfg.chars_per_page);
    properties
}

// 更新前一个场景的长度
fn update_previous_scene_length(
    properties: &mut ScreenplayProperties,
    length_action_so_far: &mut f64,
    length_dialogue_so_far: &mut f64,
    play_time_sec: f64,
) {
    let action = properties.length_action - *length_action_so_far;
    let dialogue = properties.length_dialogue - *length_dialogue_so_far;
    *length_action_so_far = properties.length_action;
    *length_dialogue_so_far = properties.length_dialogue;

    if let Some(scene) = properties.scenes.last_mut() {
        scene.action_length = action;
        scene.dialogue_length = dialogue;
        scene.end_play_sec = play_time_sec;
    }
}

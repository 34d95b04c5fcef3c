use crate::models::{ElementType, ScreenplayElement};
use crate::utils::{grapheme_len, starts_with_ignore_case, ScreenplayConstants, LINE_REGEX};

// 场景标题: INT. / EXT. / EST. / INT/EXT. / I/E.
pub fn is_scene_heading(trimmed: &str) -> bool {
    LINE_REGEX["scene_heading"].is_match(trimmed)
}

// 角色名: 全大写，无 '.' 和 '('，长度小于 40，且不是转场词
pub fn is_character(trimmed: &str) -> bool {
    if trimmed.to_uppercase() != trimmed {
        return false;
    }
    if trimmed.contains('.') || trimmed.contains('(') {
        return false;
    }
    let len = grapheme_len(trimmed);
    if len < 1 || len >= ScreenplayConstants::MAX_CHARACTER_LEN {
        return false;
    }
    !ScreenplayConstants::RESERVED_CHARACTER_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

pub fn is_parenthetical(trimmed: &str) -> bool {
    trimmed.starts_with('(') && trimmed.ends_with(')')
}

pub fn is_transition(trimmed: &str) -> bool {
    ScreenplayConstants::TRANSITION_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(trimmed, prefix))
}

/// 对单行分类
///
/// `previous` 为上一个已分类元素的类型，只用于判断对白。
/// 规则按顺序匹配，先中先得；任何输入都会落到某个类型，不会失败。
pub fn classify_line(line: &str, previous: Option<ElementType>) -> ScreenplayElement {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return ScreenplayElement::empty();
    }
    if is_scene_heading(trimmed) {
        return ScreenplayElement::new(ElementType::SceneHeading, trimmed.to_uppercase());
    }
    if is_character(trimmed) {
        return ScreenplayElement::new(ElementType::Character, trimmed);
    }
    if is_parenthetical(trimmed) {
        return ScreenplayElement::new(ElementType::Parenthetical, trimmed);
    }
    if is_transition(trimmed) {
        return ScreenplayElement::new(ElementType::Transition, trimmed.to_uppercase());
    }
    if previous.map_or(false, |t| t.opens_dialogue()) {
        return ScreenplayElement::new(ElementType::Dialogue, trimmed);
    }
    ScreenplayElement::new(ElementType::Action, trimmed)
}

/// 单遍贪心分类，已分类的行不会回头修改
pub fn classify_lines<'a, I>(lines: I) -> Vec<ScreenplayElement>
where
    I: IntoIterator<Item = &'a str>,
{
    let (elements, _) = lines.into_iter().fold(
        (Vec::new(), None),
        |(mut elements, previous): (Vec<ScreenplayElement>, Option<ElementType>), line| {
            let element = classify_line(line, previous);
            let last = Some(element.element_type);
            elements.push(element);
            (elements, last)
        },
    );
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(lines: &[&str]) -> Vec<ElementType> {
        classify_lines(lines.iter().copied())
            .into_iter()
            .map(|e| e.element_type)
            .collect()
    }

    #[test]
    fn scene_heading_prefixes() {
        for line in ["INT. HOUSE", "ext. park - night", "EST. CITY", "INT/EXT. CAR", "i/e. car"] {
            assert!(is_scene_heading(line), "{}", line);
        }
        assert!(!is_scene_heading("INTERIOR HOUSE"));
        assert!(!is_scene_heading("INT HOUSE"));
    }

    #[test]
    fn character_rules() {
        assert!(is_character("JANE"));
        assert!(is_character("DR WHO"));
        assert!(is_character("顾清"));
        assert!(!is_character("Jane"));
        assert!(!is_character("DR. WHO"));
        assert!(!is_character("JANE (V"));
        assert!(!is_character("CUT TO:"));
        assert!(!is_character("FADE IN"));
        assert!(!is_character(&"A".repeat(40)));
        assert!(is_character(&"A".repeat(39)));
    }

    #[test]
    fn uppercase_prose_is_taken_as_character() {
        let element = classify_line("THE END", Some(ElementType::Action));
        assert_eq!(element.element_type, ElementType::Character);
    }

    #[test]
    fn match_cut_in_caps_is_character() {
        assert_eq!(classify_line("MATCH CUT:", None).element_type, ElementType::Character);
        let lower = classify_line("match cut:", None);
        assert_eq!(lower.element_type, ElementType::Transition);
        assert_eq!(lower.text, "MATCH CUT:");
    }

    #[test]
    fn fade_out_is_transition() {
        let element = classify_line("Fade out.", None);
        assert_eq!(element.element_type, ElementType::Transition);
        assert_eq!(element.text, "FADE OUT.");
    }

    #[test]
    fn uppercase_parenthetical_is_not_character() {
        let element = classify_line("(V.O.)", Some(ElementType::Character));
        assert_eq!(element.element_type, ElementType::Parenthetical);
    }

    #[test]
    fn dialogue_follows_cue_and_parenthetical() {
        assert_eq!(
            types(&["JANE", "(quietly)", "I'm here.", "Still here."]),
            vec![
                ElementType::Character,
                ElementType::Parenthetical,
                ElementType::Dialogue,
                ElementType::Dialogue,
            ]
        );
    }

    #[test]
    fn blank_line_ends_dialogue() {
        assert_eq!(
            types(&["JANE", "Hello.", "", "She leaves."]),
            vec![
                ElementType::Character,
                ElementType::Dialogue,
                ElementType::Empty,
                ElementType::Action,
            ]
        );
    }

    #[test]
    fn parenthetical_without_cue_is_still_parenthetical() {
        assert_eq!(classify_line("(beat)", None).element_type, ElementType::Parenthetical);
    }

    #[test]
    fn text_is_trimmed() {
        let element = classify_line("   She runs.\r", None);
        assert_eq!(element, ScreenplayElement::new(ElementType::Action, "She runs."));
    }
}

/// Script of a content line, decided by its first character only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Chinese,
    Other,
}

const CJK_FIRST: char = '\u{4E00}';
const CJK_LAST: char = '\u{9FA5}';

/// Classify a line by its leading character.
///
/// A line that starts with a CJK unified ideograph is `Chinese` even when
/// Latin text follows it. Empty lines are `Other`.
pub fn classify(line: &str) -> Script {
    match line.chars().next() {
        Some(ch) if (CJK_FIRST..=CJK_LAST).contains(&ch) => Script::Chinese,
        _ => Script::Other,
    }
}

pub fn is_chinese(line: &str) -> bool {
    classify(line) == Script::Chinese
}

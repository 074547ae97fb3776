use super::gloss::normalize_gloss;
use super::script::{classify, Script};
use super::soundmark::split_headword;
use super::VocabularyEntry;
use crate::config::ParserConfig;

/// Phase of a single row extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingState {
    /// Consuming the Chinese gloss lines of a row
    AccumulatingGloss,
    /// Consuming the headword and transcription lines of a row
    AccumulatingHeadword,
}

impl GroupingState {
    fn accepts(self) -> Script {
        match self {
            GroupingState::AccumulatingGloss => Script::Chinese,
            GroupingState::AccumulatingHeadword => Script::Other,
        }
    }
}

/// Groups filtered content lines into table rows.
///
/// Every row runs both phases once, gloss first. A phase that finds no
/// matching line at the cursor leaves its fields empty.
pub struct EntryGrouper<'a> {
    lines: &'a [&'a str],
    cursor: usize,
    config: &'a ParserConfig,
}

impl<'a> EntryGrouper<'a> {
    pub fn new(lines: &'a [&'a str], config: &'a ParserConfig) -> Self {
        Self {
            lines,
            cursor: 0,
            config,
        }
    }

    /// Consume the run of lines accepted by `state`, starting at the cursor
    fn accumulate(&mut self, state: GroupingState) -> &'a [&'a str] {
        let lines = self.lines;
        let start = self.cursor;
        while self.cursor < lines.len() && classify(lines[self.cursor]) == state.accepts() {
            self.cursor += 1;
        }
        &lines[start..self.cursor]
    }
}

impl<'a> Iterator for EntryGrouper<'a> {
    type Item = VocabularyEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.lines.len() {
            return None;
        }

        let mut entry = VocabularyEntry::default();

        let gloss = self.accumulate(GroupingState::AccumulatingGloss);
        entry.chinese = normalize_gloss(
            gloss,
            &self.config.gloss_separator,
            self.config.preserve_gloss_separator,
        );

        let headword = self.accumulate(GroupingState::AccumulatingHeadword);
        if !headword.is_empty() {
            let (english, soundmark) = split_headword(&headword.join(" "));
            entry.english = english;
            entry.soundmark = soundmark;
        }

        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(lines: &[&str]) -> Vec<VocabularyEntry> {
        let config = ParserConfig::default();
        EntryGrouper::new(lines, &config).collect()
    }

    #[test]
    fn test_single_row() {
        let entries = group(&["快乐", "happy", "/hæpi/"]);
        assert_eq!(entries, vec![VocabularyEntry::new("快乐", "happy", "/hæpi/")]);
    }

    #[test]
    fn test_wrapped_gloss() {
        let entries = group(&["快乐", "高兴", "happy", "/hæpi/"]);
        assert_eq!(entries, vec![VocabularyEntry::new("快乐高兴", "happy", "/hæpi/")]);
    }

    #[test]
    fn test_rows_keep_source_order() {
        let entries = group(&["快乐", "happy /hæpi/", "开始", "begin /bɪˈɡɪn/", "苹果", "apple", "/ˈæpl/"]);
        let heads: Vec<&str> = entries.iter().map(|e| e.english.as_str()).collect();
        assert_eq!(heads, vec!["happy", "begin", "apple"]);
    }

    #[test]
    fn test_leading_headword_without_gloss() {
        let entries = group(&["happy /hæpi/", "快乐", "glad /ɡlæd/"]);
        assert_eq!(
            entries,
            vec![
                VocabularyEntry::new("", "happy", "/hæpi/"),
                VocabularyEntry::new("快乐", "glad", "/ɡlæd/"),
            ]
        );
    }

    #[test]
    fn test_trailing_gloss_without_headword() {
        let entries = group(&["快乐", "happy /hæpi/", "高兴"]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], VocabularyEntry::new("高兴", "", ""));
    }

    #[test]
    fn test_empty_input() {
        assert!(group(&[]).is_empty());
    }

    #[test]
    fn test_preserved_separator() {
        let config = ParserConfig {
            preserve_gloss_separator: true,
            ..ParserConfig::default()
        };
        let lines = ["快乐", "高兴", "happy /hæpi/"];
        let entries: Vec<_> = EntryGrouper::new(&lines, &config).collect();
        assert_eq!(entries[0].chinese, "快乐，高兴");
    }
}

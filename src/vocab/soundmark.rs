use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Split a space-joined "headword /transcription/" buffer.
///
/// Everything before the first token starting with `/` is the headword. When
/// no such token exists the whole buffer is the headword and the transcription
/// degenerates to `//`.
pub fn split_headword(buffer: &str) -> (String, String) {
    let tokens: Vec<&str> = buffer.split(' ').collect();
    let transcription_start = tokens
        .iter()
        .position(|token| token.starts_with('/'))
        .unwrap_or(tokens.len());

    let english = tokens[..transcription_start]
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let soundmark = rebuild_transcription(&tokens[transcription_start..].join(" "));

    (english, soundmark)
}

/// Re-delimit alternate pronunciations: `/a/ /b/` (in any spacing) becomes
/// exactly `/a/ /b/`.
fn rebuild_transcription(raw: &str) -> String {
    let joined = raw
        .split('/')
        .map(|piece| WHITESPACE_RUN.replace_all(piece.trim(), " ").into_owned())
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    format!("/{}/", joined.replace(',', "/ /"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_entry() {
        let (english, soundmark) = split_headword("happy /hæpi/");
        assert_eq!(english, "happy");
        assert_eq!(soundmark, "/hæpi/");
    }

    #[test]
    fn test_split_multi_word_headword() {
        let (english, soundmark) = split_headword("look  forward to /lʊk ˈfɔrwɚd tu/");
        assert_eq!(english, "look forward to");
        assert_eq!(soundmark, "/lʊk ˈfɔrwɚd tu/");
    }

    #[test]
    fn test_split_alternate_pronunciations() {
        let (english, soundmark) = split_headword("either /ˈiðɚ/ /ˈaɪðɚ/");
        assert_eq!(english, "either");
        assert_eq!(soundmark, "/ˈiðɚ/ /ˈaɪðɚ/");
    }

    #[test]
    fn test_split_collapses_wrapped_transcription() {
        let (english, soundmark) = split_headword("photograph /ˈfotə   græf/");
        assert_eq!(english, "photograph");
        assert_eq!(soundmark, "/ˈfotə græf/");
    }

    #[test]
    fn test_split_without_slash_is_degenerate() {
        let (english, soundmark) = split_headword("begin bigin");
        assert_eq!(english, "begin bigin");
        assert_eq!(soundmark, "//");
    }

    #[test]
    fn test_split_transcription_only() {
        let (english, soundmark) = split_headword("/hæpi/");
        assert_eq!(english, "");
        assert_eq!(soundmark, "/hæpi/");
    }
}

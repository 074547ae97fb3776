/// Join the lines of a gloss run with `separator`, then strip every
/// occurrence of it unless `preserve_separator` is set.
///
/// Stripping also removes separators that were already part of the source
/// text, so a multi-line gloss comes out concatenated.
pub fn normalize_gloss(lines: &[&str], separator: &str, preserve_separator: bool) -> String {
    let joined = lines.join(separator);

    if preserve_separator {
        joined
    } else {
        joined.replace(separator, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_gloss() {
        assert_eq!(normalize_gloss(&["快乐"], "，", false), "快乐");
    }

    #[test]
    fn test_multi_line_gloss_is_concatenated() {
        assert_eq!(normalize_gloss(&["快乐", "高兴"], "，", false), "快乐高兴");
    }

    #[test]
    fn test_inline_separator_is_stripped_too() {
        assert_eq!(normalize_gloss(&["快乐，高兴"], "，", false), "快乐高兴");
    }

    #[test]
    fn test_preserved_separator() {
        assert_eq!(normalize_gloss(&["快乐", "高兴"], "，", true), "快乐，高兴");
    }

    #[test]
    fn test_empty_run() {
        assert_eq!(normalize_gloss(&[], "，", false), "");
    }
}

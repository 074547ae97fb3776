/// Drop empty lines and page-number footers from the table region
pub fn content_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .copied()
        .filter(|line| !line.is_empty() && !is_page_number(line))
        .collect()
}

/// A line whose whole content parses as a finite number.
///
/// `inf`/`NaN` spellings parse as floats but carry no digits, so they stay.
pub fn is_page_number(line: &str) -> bool {
    line.trim()
        .parse::<f64>()
        .map(|value| value.is_finite())
        .unwrap_or(false)
}

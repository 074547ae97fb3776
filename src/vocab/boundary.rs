/// Line range of the vocabulary table inside a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBounds {
    /// Index of the start marker line
    pub marker: usize,
    /// First table line (inclusive)
    pub start: usize,
    /// End of the table (exclusive); the end marker line when one was found
    pub end: usize,
    pub end_marker_found: bool,
}

impl TableBounds {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Locate the table between the start marker (exact line match) and the end
/// marker (line prefix match).
///
/// Returns `None` when the start marker is missing. The end marker is only
/// searched for after the start marker; without one the table runs to the
/// end of the document.
pub fn locate_table(lines: &[&str], start_marker: &str, end_marker: &str) -> Option<TableBounds> {
    let marker = lines.iter().position(|line| *line == start_marker)?;
    let start = marker + 1;

    let end = lines[start..]
        .iter()
        .position(|line| line.starts_with(end_marker))
        .map(|offset| start + offset);

    Some(TableBounds {
        marker,
        start,
        end: end.unwrap_or(lines.len()),
        end_marker_found: end.is_some(),
    })
}

//! Row classification and cell parsing.
//!
//! All functions here are total over arbitrary string input: malformed table
//! rows degrade into ordinary cell sequences rather than errors.

/// Returns true if the line is part of a pipe-table.
///
/// A table row is any line whose whitespace-trimmed form starts and ends
/// with `|`. Empty and whitespace-only lines never qualify.
pub fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Returns true if the line is a separator row (`|---|:--:|` and friends).
///
/// Every cell must consist solely of dashes with optional leading/trailing
/// colons; empty cells pass vacuously. The check is purely structural and
/// makes no assumption about the row's position within a block.
pub fn is_separator_row(line: &str) -> bool {
    parse_cells(line).iter().all(|cell| {
        cell.is_empty() || cell.trim_matches(|c| c == ':' || c == '-').is_empty()
    })
}

/// Split a raw row line into trimmed cell strings.
///
/// Strips exactly one leading and one trailing pipe (each independently
/// optional, so rows missing a boundary pipe still parse), then splits the
/// remainder on `|`. A row with no interior pipes yields exactly one
/// (possibly empty) cell.
pub fn parse_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('|').unwrap_or(trimmed);

    trimmed.split('|').map(|part| part.trim().to_string()).collect()
}

/// Display width of a cell: Unicode codepoint count.
///
/// Deliberately not byte length and not rendered terminal width; the tool
/// aligns on codepoints only.
pub fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

//! Block alignment: width computation and row rebuilding.

use crate::row::{cell_width, is_separator_row, parse_cells};

/// Minimum interior width of any column.
///
/// Three is the smallest dash count that still renders an informative
/// separator cell (`---`).
const MIN_COLUMN_WIDTH: usize = 3;

/// Align a block of consecutive table rows.
///
/// Returns a same-length vector of rebuilt lines. Ragged rows (fewer cells
/// than the widest row) are padded with empty cells rather than rejected, so
/// this never fails on malformed tables. The caller compares the result
/// against the originals to decide whether the block actually changed.
pub fn align_block(lines: &[String]) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }

    // Parse all rows into cells.
    let mut rows: Vec<Vec<String>> = lines.iter().map(|line| parse_cells(line)).collect();
    let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);

    // Normalize row lengths.
    for row in &mut rows {
        row.resize(max_cols, String::new());
    }

    // Per-column max width over non-separator rows only.
    let mut col_widths = vec![0usize; max_cols];
    for (row, line) in rows.iter().zip(lines) {
        if is_separator_row(line) {
            continue;
        }
        for (j, cell) in row.iter().enumerate() {
            col_widths[j] = col_widths[j].max(cell_width(cell));
        }
    }

    for width in &mut col_widths {
        *width = (*width).max(MIN_COLUMN_WIDTH);
    }

    tracing::trace!(rows = lines.len(), cols = max_cols, "aligning table block");

    lines
        .iter()
        .zip(&rows)
        .map(|(line, row)| {
            if is_separator_row(line) {
                build_separator_row(line, &col_widths)
            } else {
                build_data_row(row, &col_widths)
            }
        })
        .collect()
}

/// Rebuild a separator row, preserving the original colon markers.
///
/// Dash counts match the interior width of data cells (`width + 2` for the
/// surrounding spaces), minus one per colon, floored at 1.
fn build_separator_row(original_line: &str, widths: &[usize]) -> String {
    let original_cells = parse_cells(original_line);

    let parts: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(j, &width)| {
            let original = original_cells.get(j).map(String::as_str).unwrap_or("");
            let left_colon = original.starts_with(':');
            let right_colon = original.ends_with(':');

            let total_width = width + 2;
            let colons = usize::from(left_colon) + usize::from(right_colon);
            let dash_count = total_width.saturating_sub(colons).max(1);

            let mut cell = String::with_capacity(total_width);
            if left_colon {
                cell.push(':');
            }
            cell.extend(std::iter::repeat_n('-', dash_count));
            if right_colon {
                cell.push(':');
            }
            cell
        })
        .collect();

    format!("|{}|", parts.join("|"))
}

/// Rebuild a data row as `| cell | cell |`, left-justifying each cell.
fn build_data_row(cells: &[String], widths: &[usize]) -> String {
    let parts: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let padding = width - cell_width(cell);
            format!(" {}{} ", cell, " ".repeat(padding))
        })
        .collect();

    format!("|{}|", parts.join("|"))
}

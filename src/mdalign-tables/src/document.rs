//! Whole-document realignment.
//!
//! Partitions a document into alternating runs of table and non-table lines,
//! feeds each table run through [`align_block`](crate::align_block), and
//! reassembles the text. Pure transformation: all file I/O stays with the
//! caller.

use crate::align::align_block;
use crate::row::is_table_row;

/// Result of realigning a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealignOutcome {
    /// The realigned text, with the input's line-ending style preserved.
    pub text: String,
    /// Whether `text` differs from the input.
    pub changed: bool,
}

/// Realign every pipe-table in a document.
///
/// Non-table lines pass through byte-identical. Line endings are preserved:
/// if the input contains `\r\n`, carriage returns are stripped during
/// splitting and the output is rejoined with `\r\n`; otherwise with `\n`.
pub fn realign_document(input: &str) -> RealignOutcome {
    let crlf = input.contains("\r\n");
    let ending = if crlf { "\r\n" } else { "\n" };

    let lines: Vec<&str> = input
        .split('\n')
        .map(|line| if crlf { line.strip_suffix('\r').unwrap_or(line) } else { line })
        .collect();

    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        if is_table_row(lines[i]) {
            // Collect the maximal run of consecutive table rows.
            let start = i;
            while i < lines.len() && is_table_row(lines[i]) {
                i += 1;
            }
            let block: Vec<String> = lines[start..i].iter().map(|s| s.to_string()).collect();
            result.extend(align_block(&block));
        } else {
            result.push(lines[i].to_string());
            i += 1;
        }
    }

    let text = result.join(ending);
    let changed = text != input;
    if changed {
        tracing::debug!("document changed after realignment");
    }

    RealignOutcome { text, changed }
}

//! Line classification for the markdown subset.
//!
//! Every source line maps to exactly one [`LineKind`]. The match order is
//! significant: pipe-prefixed lines are inspected before the bullet and
//! bold prefixes, and the separator check suppresses only that one line —
//! it neither opens nor closes a table group (the grouping state machine
//! lives in [`crate::blocks`], not here).

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `|A|B|C|` — one row of the current table group, cells trimmed.
    TableRow(Vec<String>),
    /// `|---|---|---|` — the header/body separator, discarded.
    Separator,
    /// `* item` — leading marker already stripped.
    Bullet(String),
    /// `**Session 1: … (60 mins)**` — all `**` markers already stripped.
    Bold(String),
    /// Anything else, verbatim.
    Plain(String),
}

/// Classify a single line. First match wins.
pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with('|') {
        if line.contains("---") {
            return LineKind::Separator;
        }
        return LineKind::TableRow(split_cells(line));
    }

    if let Some(rest) = line.strip_prefix("* ") {
        return LineKind::Bullet(rest.to_string());
    }

    if line.starts_with("**") {
        return LineKind::Bold(line.replace("**", ""));
    }

    LineKind::Plain(line.to_string())
}

/// Split a pipe row into cells: drop the empty fields produced by the
/// leading and trailing pipe, trim the rest.
fn split_cells(line: &str) -> Vec<String> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() <= 2 {
        return Vec::new();
    }
    fields[1..fields.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

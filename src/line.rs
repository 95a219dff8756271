//! Line classification: one raw line in, one `LineKind` out.

/// What a single line of input looks like on its own, with all
/// block-structural characters already stripped. Classification never
/// looks at surrounding lines; assembling multi-line constructs is the
/// parser's job.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    Heading {
        level: u8,
        text: &'a str,
    },
    TableRow {
        cells: Vec<&'a str>,
        /// True when the raw line contains a `|`, three-or-more `-`, `|`
        /// run anywhere. The two-pipe window makes the check fire on rows
        /// like `|ok|---|ok|` as well; callers rely on that.
        separator: bool,
    },
    ListItem {
        ordered: bool,
        text: &'a str,
    },
    Blank,
    Paragraph(&'a str),
}

/// Classify one line (no trailing newline). First match wins:
/// heading, table row, list item, blank, paragraph.
pub fn classify(line: &str) -> LineKind<'_> {
    // Longest prefix first so "### " is not read as "# " plus text
    if let Some(text) = line.strip_prefix("### ") {
        return LineKind::Heading { level: 3, text };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return LineKind::Heading { level: 2, text };
    }
    if let Some(text) = line.strip_prefix("# ") {
        return LineKind::Heading { level: 1, text };
    }

    // A table row is bounded by pipes at both ends. The length check keeps
    // a lone "|" from becoming a zero-cell row.
    if line.len() >= 2 && line.starts_with('|') && line.ends_with('|') {
        let inner = &line[1..line.len() - 1];
        let cells = inner.split('|').map(str::trim).collect();
        return LineKind::TableRow {
            cells,
            separator: has_separator_run(line),
        };
    }

    if let Some((ordered, text)) = list_item(line) {
        return LineKind::ListItem { ordered, text };
    }

    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    LineKind::Paragraph(line)
}

/// Check for a `|---|` run (three or more dashes between two pipes)
/// anywhere in the line. This is a substring scan, not a whole-row
/// check: one qualifying window marks the entire row as a separator.
fn has_separator_run(line: &str) -> bool {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'|' {
            continue;
        }
        let mut j = i + 1;
        while j < bytes.len() && bytes[j] == b'-' {
            j += 1;
        }
        if j - i > 3 && j < bytes.len() && bytes[j] == b'|' {
            return true;
        }
    }
    false
}

/// Match a list marker: optional leading whitespace, then either `"- "`
/// or digits followed by `". "`. The remainder after the single marker
/// space is the item text, kept as written.
fn list_item(line: &str) -> Option<(bool, &str)> {
    let trimmed = line.trim_start();

    if let Some(text) = trimmed.strip_prefix("- ") {
        return Some((false, text));
    }

    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits > 0
        && let Some(text) = trimmed[digits..].strip_prefix(". ")
    {
        return Some((true, text));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_prefixes() {
        assert_eq!(classify("# a"), LineKind::Heading { level: 1, text: "a" });
        assert_eq!(classify("## a"), LineKind::Heading { level: 2, text: "a" });
        assert_eq!(classify("### a"), LineKind::Heading { level: 3, text: "a" });
    }

    #[test]
    fn heading_requires_space_and_line_start() {
        assert_eq!(classify("#a"), LineKind::Paragraph("#a"));
        assert_eq!(classify(" # a"), LineKind::Paragraph(" # a"));
        // Four hashes match none of the three prefixes
        assert_eq!(classify("#### a"), LineKind::Paragraph("#### a"));
    }

    #[test]
    fn table_row_cells_are_trimmed() {
        assert_eq!(
            classify("| a | b |"),
            LineKind::TableRow {
                cells: vec!["a", "b"],
                separator: false,
            }
        );
    }

    #[test]
    fn table_row_keeps_interior_empty_cells() {
        assert_eq!(
            classify("|a||b|"),
            LineKind::TableRow {
                cells: vec!["a", "", "b"],
                separator: false,
            }
        );
    }

    #[test]
    fn lone_pipe_is_a_paragraph() {
        assert_eq!(classify("|"), LineKind::Paragraph("|"));
    }

    #[test]
    fn separator_rows() {
        assert!(matches!(
            classify("|---|---|"),
            LineKind::TableRow { separator: true, .. }
        ));
        // Two dashes are not enough
        assert!(matches!(
            classify("|--|--|"),
            LineKind::TableRow { separator: false, .. }
        ));
    }

    #[test]
    fn spaced_dashes_are_not_a_separator() {
        // The dash run must sit directly between two pipes; padding
        // spaces turn the row into ordinary data cells
        assert!(matches!(
            classify("| --- | --- |"),
            LineKind::TableRow { separator: false, .. }
        ));
    }

    #[test]
    fn separator_check_fires_on_any_two_pipe_window() {
        // Only the middle cell is dashes, yet the whole row counts as a
        // separator. Downstream behavior depends on this.
        assert!(matches!(
            classify("|ok|---|ok|"),
            LineKind::TableRow { separator: true, .. }
        ));
    }

    #[test]
    fn list_markers() {
        assert_eq!(
            classify("- a"),
            LineKind::ListItem { ordered: false, text: "a" }
        );
        assert_eq!(
            classify("  - a"),
            LineKind::ListItem { ordered: false, text: "a" }
        );
        assert_eq!(
            classify("1. a"),
            LineKind::ListItem { ordered: true, text: "a" }
        );
        assert_eq!(
            classify("  12. a"),
            LineKind::ListItem { ordered: true, text: "a" }
        );
    }

    #[test]
    fn marker_needs_the_trailing_space() {
        assert_eq!(classify("-a"), LineKind::Paragraph("-a"));
        assert_eq!(classify("1.a"), LineKind::Paragraph("1.a"));
        assert_eq!(classify("-"), LineKind::Paragraph("-"));
    }

    #[test]
    fn blank_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t"), LineKind::Blank);
    }

    #[test]
    fn table_row_wins_over_list_marker() {
        // Pipes bound the line, so the dash inside is cell text
        assert!(matches!(
            classify("|- a|"),
            LineKind::TableRow { separator: false, .. }
        ));
    }
}

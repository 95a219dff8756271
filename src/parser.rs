/// Block assembly: classified lines in, finished blocks out.
use crate::ast::{Block, Document, Run};
use crate::inline::parse_inline;
use crate::line::{LineKind, classify};

/// An in-progress list: items accumulated since the first marker line.
struct OpenList {
    ordered: bool,
    items: Vec<Vec<Run>>,
}

/// An in-progress table: the header row is captured when the table
/// opens, data rows accumulate after it.
struct OpenTable {
    header: Vec<Vec<Run>>,
    rows: Vec<Vec<Vec<Run>>>,
}

/// Single-pass state machine over classified lines. At most one of
/// `open_list`/`open_table` is live at a time; every transition that
/// starts a different construct closes the current one first.
pub struct Parser {
    blocks: Vec<Block>,
    open_list: Option<OpenList>,
    open_table: Option<OpenTable>,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            blocks: Vec::new(),
            open_list: None,
            open_table: None,
        }
    }

    /// Parse the whole input in one top-to-bottom pass. Never fails:
    /// any line that matches no structural pattern becomes a paragraph.
    pub fn parse(&mut self, input: &str) -> Document {
        self.blocks.clear();
        self.open_list = None;
        self.open_table = None;

        for line in input.lines() {
            self.handle_line(line);
        }

        // End of input force-closes whatever is still accumulating
        self.close_list();
        self.close_table();

        Document {
            blocks: std::mem::take(&mut self.blocks),
        }
    }

    fn handle_line(&mut self, line: &str) {
        match classify(line) {
            LineKind::Heading { level, text } => {
                self.close_list();
                self.close_table();
                self.blocks.push(Block::Heading {
                    level,
                    text: parse_inline(text),
                });
            }
            LineKind::TableRow { cells, separator } => {
                if separator {
                    // Inside a table the separator row carries no data and
                    // is dropped. With no table above it, the line is just
                    // prose that happens to look like a divider.
                    if self.open_table.is_none() {
                        self.paragraph(line);
                    }
                } else {
                    self.close_list();
                    let cells: Vec<Vec<Run>> =
                        cells.iter().map(|cell| parse_inline(cell)).collect();
                    match &mut self.open_table {
                        Some(table) => table.rows.push(cells),
                        None => {
                            self.open_table = Some(OpenTable {
                                header: cells,
                                rows: Vec::new(),
                            });
                        }
                    }
                }
            }
            LineKind::ListItem { ordered, text } => {
                self.close_table();
                // A marker-type change ends the current list and starts
                // a fresh one of the new kind
                if self
                    .open_list
                    .as_ref()
                    .is_some_and(|list| list.ordered != ordered)
                {
                    self.close_list();
                }
                let list = self.open_list.get_or_insert_with(|| OpenList {
                    ordered,
                    items: Vec::new(),
                });
                list.items.push(parse_inline(text));
            }
            LineKind::Blank => {
                self.close_list();
                self.close_table();
            }
            LineKind::Paragraph(text) => self.paragraph(text),
        }
    }

    /// Paragraph fallback: closes anything open; whitespace-only lines
    /// emit nothing.
    fn paragraph(&mut self, line: &str) {
        self.close_list();
        self.close_table();
        if !line.trim().is_empty() {
            self.blocks.push(Block::Paragraph(parse_inline(line)));
        }
    }

    /// Flush the open list into the document, if it accumulated anything.
    fn close_list(&mut self) {
        if let Some(list) = self.open_list.take()
            && !list.items.is_empty()
        {
            self.blocks.push(Block::List {
                ordered: list.ordered,
                items: list.items,
            });
        }
    }

    /// Flush the open table into the document. An open table always has
    /// its header, so it materializes even with zero data rows.
    fn close_table(&mut self) {
        if let Some(table) = self.open_table.take() {
            self.blocks.push(Block::Table {
                header: table.header,
                rows: table.rows,
            });
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

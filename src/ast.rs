/// Node types for parsed documents
use serde::{Deserialize, Serialize};

/// A parsed document: finished blocks in reading order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Heading {
        level: u8, // 1-3; the dialect does not distinguish deeper levels
        text: Vec<Run>,
    },
    Paragraph(Vec<Run>),
    List {
        ordered: bool,
        items: Vec<Vec<Run>>, // one entry per item, same marker type throughout
    },
    Table {
        header: Vec<Vec<Run>>,    // exactly one row of cells
        rows: Vec<Vec<Vec<Run>>>, // data rows; may be ragged vs the header
    },
}

/// A contiguous span of plain or formatted text within a block.
/// Delimiters are already stripped: `Strong("x")` came from `**x**`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Run {
    Text(String),
    Strong(String),   // <strong> tag
    Emphasis(String), // <em> tag
    Code(String),     // inline code span
}

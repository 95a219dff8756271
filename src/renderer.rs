/// HTML renderer for parsed documents
use crate::ast::{Block, Document, Run};

pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }

    pub fn render(&self, document: &Document) -> String {
        document.blocks.iter().map(render_block).collect()
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            format!("<h{}>{}</h{}>\n", level, render_runs(text), level)
        }
        Block::Paragraph(text) => {
            format!("<p>{}</p>\n", render_runs(text))
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let mut html = format!("<{}>\n", tag);
            for item in items {
                html.push_str(&format!("<li>{}</li>\n", render_runs(item)));
            }
            html.push_str(&format!("</{}>\n", tag));
            html
        }
        Block::Table { header, rows } => {
            let mut html = String::from("<table>\n<thead>\n<tr>\n");
            for cell in header {
                html.push_str(&format!("<th>{}</th>\n", render_runs(cell)));
            }
            html.push_str("</tr>\n</thead>\n");
            if !rows.is_empty() {
                html.push_str("<tbody>\n");
                for row in rows {
                    html.push_str("<tr>\n");
                    for cell in row {
                        html.push_str(&format!("<td>{}</td>\n", render_runs(cell)));
                    }
                    html.push_str("</tr>\n");
                }
                html.push_str("</tbody>\n");
            }
            html.push_str("</table>\n");
            html
        }
    }
}

fn render_runs(runs: &[Run]) -> String {
    runs.iter()
        .map(|run| match run {
            Run::Text(text) => escape_html(text),
            Run::Strong(text) => format!("<strong>{}</strong>", escape_html(text)),
            Run::Emphasis(text) => format!("<em>{}</em>", escape_html(text)),
            Run::Code(text) => format!("<code>{}</code>", escape_html(text)),
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '&' => "&amp;".to_string(),
            '"' => "&quot;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

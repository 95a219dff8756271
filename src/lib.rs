/// A line-oriented parser for a restricted Markdown dialect
pub mod ast;
pub mod inline;
pub mod line;
pub mod parser;
pub mod renderer;

use ast::Document;
use parser::Parser;
use renderer::HtmlRenderer;

/// Parse markdown text into a structured document
pub fn parse_document(input: &str) -> Document {
    Parser::new().parse(input)
}

/// Parse markdown text and render to HTML
pub fn markdown_to_html(input: &str) -> String {
    let document = parse_document(input);
    let renderer = HtmlRenderer::new();
    renderer.render(&document)
}

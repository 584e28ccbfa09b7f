//! Markdown rendering, consumed as an opaque collaborator.
//!
//! The rest of the server treats this as a `render(text) -> html` black box;
//! nothing here is load-bearing for persistence or caching semantics.

use pulldown_cmark::{html as md_html, Parser};

/// Render Markdown text to an HTML fragment.
pub fn render(text: &str) -> String {
    let parser = Parser::new(text);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_heading_and_paragraph() {
        let html = render("# Hello\nworld");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("world"));
    }
}

//! Fragment renderers.
//!
//! HTML for the docs pages, ANSI colour for the terminal.

use colored::*;

use crate::catalog::Example;
use crate::modes::Mode;
use crate::prefs::{Preferences, SyntaxMode, Theme};
use crate::tagger::{Fragment, Tag, tag};

/// Trait for turning tagged fragments into display text.
pub trait Render {
    /// Render fragments in order. Concatenated plain text equals the source.
    fn render(&self, fragments: &[Fragment<'_>]) -> String;

    /// Tag `source` with `mode` and render the result.
    fn highlight(&self, source: &str, mode: Mode) -> String {
        self.render(&tag(source, mode))
    }
}

/// Escape text for an HTML body or attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders `<span>` runs with the site's `code-*` classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Render for HtmlRenderer {
    fn render(&self, fragments: &[Fragment<'_>]) -> String {
        let mut html = String::new();
        let mut plain = String::new();

        for fragment in fragments {
            match fragment.tag {
                Some(t) => {
                    flush_plain(&mut html, &mut plain);
                    html.push_str(&format!(
                        "<span class=\"{}\">{}</span>",
                        t.css_class(),
                        escape_html(fragment.text)
                    ));
                }
                None => plain.push_str(fragment.text),
            }
        }
        flush_plain(&mut html, &mut plain);
        html
    }
}

// Adjacent untagged fragments share one span.
fn flush_plain(html: &mut String, plain: &mut String) {
    if !plain.is_empty() {
        html.push_str(&format!("<span>{}</span>", escape_html(plain)));
        plain.clear();
    }
}

/// A query-builder sample as the docs pages display it.
///
/// Carries both spellings; the reader's [`SyntaxMode`] picks which one is
/// shown unless `show_both` puts them side by side.
#[derive(Debug, Clone, Copy)]
pub struct CodeBlock<'a> {
    pub classic: &'a str,
    pub gen_alpha: &'a str,
    pub title: Option<&'a str>,
    /// Pre-baked SQL shown under the source.
    pub output: Option<&'a str>,
    pub show_both: bool,
}

impl<'a> CodeBlock<'a> {
    pub fn new(classic: &'a str, gen_alpha: &'a str) -> Self {
        Self {
            classic,
            gen_alpha,
            title: None,
            output: None,
            show_both: false,
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_output(mut self, sql: &'a str) -> Self {
        self.output = Some(sql);
        self
    }

    pub fn side_by_side(mut self) -> Self {
        self.show_both = true;
        self
    }

    /// The spelling shown for `syntax`.
    pub fn source(&self, syntax: SyntaxMode) -> &'a str {
        match syntax {
            SyntaxMode::Classic => self.classic,
            SyntaxMode::GenAlpha => self.gen_alpha,
        }
    }
}

impl<'a> From<&'a Example> for CodeBlock<'a> {
    fn from(ex: &'a Example) -> Self {
        CodeBlock::new(ex.classic, ex.gen_alpha)
            .with_title(ex.name)
            .with_output(ex.sql)
    }
}

impl HtmlRenderer {
    /// Wrap a highlighted sample in the terminal-window markup.
    pub fn code_block(&self, block: &CodeBlock<'_>, prefs: &Preferences) -> String {
        let terminal = if prefs.theme.is_dark() {
            "terminal"
        } else {
            "terminal light-mode"
        };

        if block.show_both {
            let mut html = String::from("<div class=\"grid md:grid-cols-2 gap-4 mb-6\">");
            for (title, source) in [
                ("Classic Syntax", block.classic),
                ("Gen Alpha", block.gen_alpha),
            ] {
                html.push_str(&format!("<div class=\"{}\">", terminal));
                push_header(&mut html, title, None);
                html.push_str("<div class=\"terminal-body\">");
                html.push_str(&self.pre(source, Mode::Dsl, None));
                html.push_str("</div></div>");
            }
            html.push_str("</div>");
            return html;
        }

        let title = block.title.unwrap_or(prefs.syntax.label());
        let badge = prefs.syntax.to_string().to_uppercase();

        let mut html = format!("<div class=\"{} mb-6\">", terminal);
        push_header(&mut html, title, Some(&badge));
        html.push_str("<div class=\"terminal-body\">");
        html.push_str(&self.pre(block.source(prefs.syntax), Mode::Dsl, None));

        if let Some(sql) = block.output {
            html.push_str("<div class=\"mt-4 pt-4 border-t border-elevated\">");
            html.push_str("<div class=\"text-text-muted text-xs mb-2\">SQL Output:</div>");
            html.push_str(&self.pre(sql, Mode::Sql, Some("code-string")));
            html.push_str("</div>");
        }

        html.push_str("</div></div>");
        html
    }

    fn pre(&self, source: &str, mode: Mode, class: Option<&str>) -> String {
        let open = match class {
            Some(c) => format!("<code class=\"{}\">", c),
            None => String::from("<code>"),
        };
        format!(
            "<pre class=\"text-sm whitespace-pre-wrap break-all\">{}{}</code></pre>",
            open,
            self.highlight(source, mode)
        )
    }
}

// Window dots, title and optional mode badge.
fn push_header(html: &mut String, title: &str, badge: Option<&str>) {
    html.push_str("<div class=\"terminal-header\">");
    for color in ["#ff5f57", "#febc2e", "#28c840"] {
        html.push_str(&format!(
            "<div class=\"terminal-dot bg-[{}]\"></div>",
            color
        ));
    }
    html.push_str(&format!(
        "<span class=\"ml-4 text-text-muted text-sm\">{}</span>",
        escape_html(title)
    ));
    if let Some(badge) = badge {
        html.push_str(&format!(
            "<span class=\"ml-auto badge badge-lime text-xs\">{}</span>",
            escape_html(badge)
        ));
    }
    html.push_str("</div>");
}

/// Colours tagged fragments for a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer {
    pub theme: Theme,
}

impl AnsiRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn paint(&self, text: &str, t: Tag) -> ColoredString {
        match (self.theme, t) {
            (Theme::Dark, Tag::Keyword) => text.bright_green().bold(),
            (Theme::Dark, Tag::Operator) => text.bright_magenta(),
            (Theme::Dark, Tag::Number) => text.bright_cyan(),
            (Theme::Dark, Tag::Function) => text.bright_yellow(),
            (Theme::Light, Tag::Keyword) => text.green().bold(),
            (Theme::Light, Tag::Operator) => text.magenta(),
            (Theme::Light, Tag::Number) => text.blue(),
            (Theme::Light, Tag::Function) => text.red(),
        }
    }
}

impl Render for AnsiRenderer {
    fn render(&self, fragments: &[Fragment<'_>]) -> String {
        let mut out = String::new();
        for fragment in fragments {
            match fragment.tag {
                Some(t) => out.push_str(&self.paint(fragment.text, t).to_string()),
                None => out.push_str(fragment.text),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_html_spans() {
        let html = HtmlRenderer.highlight("main:users bet:5", Mode::Dsl);
        assert_eq!(
            html,
            "<span class=\"code-keyword\">main:</span><span>users </span>\
             <span class=\"code-keyword\">bet:</span><span>5</span>"
        );
    }

    #[test]
    fn test_html_escapes_text() {
        let html = HtmlRenderer.highlight("sus:a<b&c", Mode::Dsl);
        assert_eq!(
            html,
            "<span class=\"code-keyword\">sus:</span><span>a&lt;b&amp;c</span>"
        );
    }

    #[test]
    fn test_html_empty() {
        assert_eq!(HtmlRenderer.highlight("", Mode::Sql), "");
    }

    #[test]
    fn test_html_subslice_fragments() {
        let source = "xx SELECT 1";
        let fragments = tag(source, Mode::Sql);
        let html = HtmlRenderer.render(&fragments[3..]);
        assert_eq!(html, "<span class=\"code-keyword\">SELECT</span><span> 1</span>");
    }

    #[test]
    fn test_code_block_default_title() {
        let block =
            CodeBlock::new("del:sessions", "yeet:sessions").with_output("DELETE FROM sessions");
        let html = HtmlRenderer.code_block(&block, &Preferences::default());
        assert!(html.contains(">Gen Alpha</span>"));
        assert!(html.contains(">GENALPHA</span>"));
        assert!(html.contains("SQL Output:"));
        assert!(html.contains("<span class=\"code-keyword\">DELETE</span>"));
    }

    #[test]
    fn test_code_block_classic_without_output() {
        let block = CodeBlock::new("del:sessions", "yeet:sessions").with_title("Delete");
        let prefs = Preferences::new(Theme::Light, SyntaxMode::Classic);
        let html = HtmlRenderer.code_block(&block, &prefs);
        assert!(html.starts_with("<div class=\"terminal light-mode mb-6\">"));
        assert!(html.contains(">Delete</span>"));
        assert!(html.contains(">CLASSIC</span>"));
        assert!(!html.contains("SQL Output:"));
    }

    #[test]
    fn test_code_block_source_follows_syntax() {
        let block = CodeBlock::new("del:sessions", "yeet:sessions");
        assert_eq!(block.source(SyntaxMode::Classic), "del:sessions");
        assert_eq!(block.source(SyntaxMode::GenAlpha), "yeet:sessions");

        let classic = HtmlRenderer.code_block(
            &block,
            &Preferences::new(Theme::Dark, SyntaxMode::Classic),
        );
        assert!(classic.contains("<span class=\"code-keyword\">del:</span>"));
        assert!(!classic.contains("yeet:"));

        let gen_alpha = HtmlRenderer.code_block(&block, &Preferences::default());
        assert!(gen_alpha.contains("<span class=\"code-keyword\">yeet:</span>"));
        assert!(!gen_alpha.contains("del:"));
    }

    #[test]
    fn test_code_block_side_by_side() {
        let block = CodeBlock::new("sel:name", "slay:name")
            .with_output("SELECT name")
            .side_by_side();
        let html = HtmlRenderer.code_block(&block, &Preferences::default());

        assert!(html.starts_with("<div class=\"grid md:grid-cols-2 gap-4 mb-6\">"));
        assert_eq!(html.matches("<div class=\"terminal\">").count(), 2);
        let classic = html.find(">Classic Syntax</span>").unwrap();
        let gen_alpha = html.find(">Gen Alpha</span>").unwrap();
        assert!(classic < gen_alpha);
        assert!(html.contains("<span class=\"code-keyword\">sel:</span>"));
        assert!(html.contains("<span class=\"code-keyword\">slay:</span>"));
        // no badge, no SQL pane
        assert!(!html.contains("badge"));
        assert!(!html.contains("SQL Output:"));
    }

    #[test]
    fn test_code_block_from_example() {
        let ex = crate::catalog::find_playground("sorting").unwrap();
        let block = CodeBlock::from(ex);
        assert_eq!(block.title, Some(ex.name));
        assert_eq!(block.output, Some(ex.sql));
        assert_eq!(block.source(SyntaxMode::Classic), ex.classic);
        assert!(!block.show_both);
    }

    #[test]
    fn test_ansi_keeps_text() {
        colored::control::set_override(false);
        let out = AnsiRenderer::new(Theme::Dark).highlight("SELECT * FROM t", Mode::Sql);
        assert_eq!(out, "SELECT * FROM t");
    }
}

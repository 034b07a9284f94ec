//! HTML rendering for parsed articles
//!
//! Rendering is bottom-up: each hook produces the HTML for one node
//! from the already-rendered HTML of its children. The default method
//! bodies implement the standard article styling, so a concrete
//! renderer overrides only the hooks it treats differently. Citations
//! have no default because every renderer handles them its own way.

use std::collections::{HashMap, HashSet};

use crate::spans::{ParsedArticle, Paragraph, Span};
use crate::titles::filesafe_title;

pub trait Renderer {
    fn render_article(&mut self, article: &ParsedArticle) -> String {
        let paragraphs: Vec<String> = article
            .paragraphs
            .iter()
            .map(|paragraph| self.render_paragraph(paragraph))
            .collect();
        paragraphs.join("\n")
    }

    fn render_paragraph(&mut self, paragraph: &Paragraph) -> String {
        match paragraph {
            Paragraph::Body { spans } => self.render_body_paragraph(spans),
            Paragraph::Signature { spans } => self.render_signature_paragraph(spans),
        }
    }

    fn render_body_paragraph(&mut self, spans: &[Span]) -> String {
        format!("<p>{}</p>", self.render_spans(spans))
    }

    fn render_signature_paragraph(&mut self, spans: &[Span]) -> String {
        format!(
            "<hr><span class=\"signature\"><p>{}</p></span>",
            self.render_spans(spans)
        )
    }

    fn render_spans(&mut self, spans: &[Span]) -> String {
        spans.iter().map(|span| self.render_span(span)).collect()
    }

    fn render_span(&mut self, span: &Span) -> String {
        match span {
            Span::Text { text } => self.render_text(text),
            Span::LineBreak => self.render_line_break(),
            Span::Bold { spans } => self.render_bold(spans),
            Span::Italic { spans } => self.render_italic(spans),
            Span::Citation { spans, target } => self.render_citation(spans, target),
        }
    }

    fn render_text(&mut self, text: &str) -> String {
        html_escape::encode_text(text).into_owned()
    }

    fn render_line_break(&mut self) -> String {
        "<br>".to_string()
    }

    fn render_bold(&mut self, spans: &[Span]) -> String {
        format!("<b>{}</b>", self.render_spans(spans))
    }

    fn render_italic(&mut self, spans: &[Span]) -> String {
        format!("<i>{}</i>", self.render_spans(spans))
    }

    fn render_citation(&mut self, spans: &[Span], target: &str) -> String;
}

/// Renders published articles, linking citations to their targets
///
/// Citations of titles outside the written set get a `phantom` class so
/// the page can style links to articles nobody has written yet.
#[derive(Debug)]
pub struct HtmlRenderer {
    lexicon: String,
    written: HashSet<String>,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(lexicon: impl Into<String>, written: HashSet<String>) -> Self {
        Self {
            lexicon: lexicon.into(),
            written,
        }
    }
}

impl Renderer for HtmlRenderer {
    fn render_citation(&mut self, spans: &[Span], target: &str) -> String {
        let link_class = if self.written.contains(target) {
            ""
        } else {
            " class=\"phantom\""
        };
        let inner = self.render_spans(spans);
        format!(
            "<a href=\"/lexicon/{}/article/{}\"{}>{}</a>",
            self.lexicon,
            filesafe_title(target),
            link_class,
            inner
        )
    }
}

/// Renders a draft for the editor preview
///
/// Citations are underlined and numbered instead of linked, and each
/// one adds an annotation describing whether its target is an extant
/// article, a phantom (cited but unwritten), or new to this draft.
#[derive(Debug)]
pub struct PreviewHtmlRenderer {
    /// Known article titles mapped to their author, or `None` for
    /// phantom entries
    articles: HashMap<String, Option<String>>,
    citations: Vec<String>,
}

impl PreviewHtmlRenderer {
    #[must_use]
    pub fn new(articles: HashMap<String, Option<String>>) -> Self {
        Self {
            articles,
            citations: Vec::new(),
        }
    }

    /// The annotated citation list, in the order the citations were
    /// rendered
    #[must_use]
    pub fn citations(&self) -> &[String] {
        &self.citations
    }
}

impl Renderer for PreviewHtmlRenderer {
    fn render_citation(&mut self, spans: &[Span], target: &str) -> String {
        let status = match self.articles.get(target) {
            Some(Some(_author)) => "extant",
            Some(None) => "phantom",
            None => "new",
        };
        self.citations.push(format!("{target} [{status}]"));
        format!(
            "<u>{}</u>[{}]",
            self.render_spans(spans),
            self.citations.len()
        )
    }
}

/// Renders stylistic markup into HTML without links
///
/// Used for social-feed posts, which must not create article
/// cross-links: citations come out as their plain display text.
#[derive(Debug, Default)]
pub struct PostFormatter;

impl Renderer for PostFormatter {
    fn render_citation(&mut self, spans: &[Span], _target: &str) -> String {
        self.render_spans(spans)
    }
}

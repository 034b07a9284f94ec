//! Visitor dispatch over the span tree
//!
//! Implement [`Visitor`] to walk a parsed article. Each `visit_*`
//! method corresponds to a node variant, and every default
//! implementation recurses into the node's children in order, so a
//! visitor only overrides the methods it cares about. An override that
//! still wants the children visited calls the matching `walk_*`
//! function itself.

use crate::spans::{ParsedArticle, Paragraph, Span};

pub trait Visitor {
    fn visit_article(&mut self, article: &ParsedArticle) {
        walk_article(self, article);
    }

    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        walk_paragraph(self, paragraph);
    }

    fn visit_body_paragraph(&mut self, spans: &[Span]) {
        walk_spans(self, spans);
    }

    fn visit_signature_paragraph(&mut self, spans: &[Span]) {
        walk_spans(self, spans);
    }

    fn visit_span(&mut self, span: &Span) {
        walk_span(self, span);
    }

    fn visit_text(&mut self, _text: &str) {}

    fn visit_line_break(&mut self) {}

    fn visit_bold(&mut self, spans: &[Span]) {
        walk_spans(self, spans);
    }

    fn visit_italic(&mut self, spans: &[Span]) {
        walk_spans(self, spans);
    }

    fn visit_citation(&mut self, spans: &[Span], _target: &str) {
        walk_spans(self, spans);
    }
}

/// Visit every paragraph of an article in order
pub fn walk_article<V: Visitor + ?Sized>(visitor: &mut V, article: &ParsedArticle) {
    for paragraph in &article.paragraphs {
        visitor.visit_paragraph(paragraph);
    }
}

/// Dispatch a paragraph to its variant hook
pub fn walk_paragraph<V: Visitor + ?Sized>(visitor: &mut V, paragraph: &Paragraph) {
    match paragraph {
        Paragraph::Body { spans } => visitor.visit_body_paragraph(spans),
        Paragraph::Signature { spans } => visitor.visit_signature_paragraph(spans),
    }
}

/// Visit a sequence of spans in order
pub fn walk_spans<V: Visitor + ?Sized>(visitor: &mut V, spans: &[Span]) {
    for span in spans {
        visitor.visit_span(span);
    }
}

/// Dispatch a span to its variant hook
pub fn walk_span<V: Visitor + ?Sized>(visitor: &mut V, span: &Span) {
    match span {
        Span::Text { text } => visitor.visit_text(text),
        Span::LineBreak => visitor.visit_line_break(),
        Span::Bold { spans } => visitor.visit_bold(spans),
        Span::Italic { spans } => visitor.visit_italic(spans),
        Span::Citation { spans, target } => visitor.visit_citation(spans, target),
    }
}

impl ParsedArticle {
    /// Accept a visitor for traversing this article
    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_article(self);
    }
}

impl Paragraph {
    /// Accept a visitor for traversing this paragraph
    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_paragraph(self);
    }
}

impl Span {
    /// Accept a visitor for traversing this span
    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_span(self);
    }
}

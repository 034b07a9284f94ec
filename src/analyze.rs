//! Visitors that compute metrics on parsed articles
//!
//! These accumulate into their own state and leave the tree untouched,
//! so any number of them can walk the same article independently.

use crate::spans::Span;
use crate::visit::{Visitor, walk_spans};

/// Collects every citation target in the order it appears
///
/// Duplicates are kept; callers deduplicate if they need to.
#[derive(Debug, Default)]
pub struct CitationCollector {
    citations: Vec<String>,
}

impl CitationCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The citation targets collected so far, in document order
    #[must_use]
    pub fn citations(&self) -> &[String] {
        &self.citations
    }

    /// Consume the collector and return the citation targets
    #[must_use]
    pub fn into_citations(self) -> Vec<String> {
        self.citations
    }
}

impl Visitor for CitationCollector {
    fn visit_citation(&mut self, spans: &[Span], target: &str) {
        self.citations.push(target.to_string());
        // A citation's display text cannot cite, but walk it anyway so
        // the traversal order stays uniform
        walk_spans(self, spans);
    }
}

/// Counts the features of an article that constraints are checked
/// against: words, citations, and signature paragraphs
#[derive(Debug, Default)]
pub struct FeatureCounter {
    pub word_count: usize,
    pub citation_count: usize,
    pub signature_count: usize,
}

impl FeatureCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for FeatureCounter {
    fn visit_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count();
    }

    fn visit_citation(&mut self, spans: &[Span], _target: &str) {
        self.citation_count += 1;
        walk_spans(self, spans);
    }

    fn visit_signature_paragraph(&mut self, spans: &[Span]) {
        self.signature_count += 1;
        walk_spans(self, spans);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_raw_markdown;

    #[test]
    fn test_citations_in_document_order() {
        let text = "First [[A]] then [[B|b target]]\n\nLater [[A]] again";
        let article = parse_raw_markdown(text).unwrap();
        let mut collector = CitationCollector::new();
        article.accept(&mut collector);
        assert_eq!(collector.citations(), &["A", "B target", "A"]);
    }

    #[test]
    fn test_citations_found_at_any_depth() {
        let article = parse_raw_markdown("**bold [[Deep]]**").unwrap();
        let mut collector = CitationCollector::new();
        article.accept(&mut collector);
        assert_eq!(collector.into_citations(), vec!["Deep"]);
    }

    #[test]
    fn test_word_count_splits_on_whitespace_runs() {
        let article = parse_raw_markdown("one two three").unwrap();
        let mut counter = FeatureCounter::new();
        article.accept(&mut counter);
        assert_eq!(counter.word_count, 3);

        let article = parse_raw_markdown("one  two").unwrap();
        let mut counter = FeatureCounter::new();
        article.accept(&mut counter);
        assert_eq!(counter.word_count, 2);
    }

    #[test]
    fn test_word_count_spans_formatting() {
        let article = parse_raw_markdown("plain **bold words** //italic//").unwrap();
        let mut counter = FeatureCounter::new();
        article.accept(&mut counter);
        assert_eq!(counter.word_count, 4);
    }

    #[test]
    fn test_citation_and_signature_counts() {
        let text = "Cites [[One]] and [[Two]]\n\n~Signed\n\n~Twice";
        let article = parse_raw_markdown(text).unwrap();
        let mut counter = FeatureCounter::new();
        article.accept(&mut counter);
        assert_eq!(counter.citation_count, 2);
        assert_eq!(counter.signature_count, 2);
    }

    #[test]
    fn test_empty_article_counts_nothing() {
        let article = parse_raw_markdown("").unwrap();
        let mut counter = FeatureCounter::new();
        article.accept(&mut counter);
        assert_eq!(counter.word_count, 0);
        assert_eq!(counter.citation_count, 0);
        assert_eq!(counter.signature_count, 0);
    }
}

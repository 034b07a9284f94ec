//! `UniFFI` bindings for the article parser
//!
//! This module exposes the parse, render, and analysis entry points to
//! host applications (web backends, mobile clients, etc.) that embed
//! the library over FFI.
#![allow(clippy::cast_possible_truncation)]

use std::collections::{HashMap, HashSet};

use crate::analyze::{CitationCollector, FeatureCounter};
use crate::error::ParseError;
use crate::parser::parse_raw_markdown;
use crate::render::{HtmlRenderer, PostFormatter, PreviewHtmlRenderer, Renderer};
use crate::spans::ParsedArticle;
use crate::titles;

/// Feature counts for an article body
#[derive(Debug, Clone, uniffi::Record)]
pub struct ArticleAnalysis {
    pub word_count: u32,
    pub citation_count: u32,
    pub signature_count: u32,
}

/// A rendered draft preview with its annotated citation list
#[derive(Debug, Clone, uniffi::Record)]
pub struct ArticlePreview {
    pub rendered: String,
    pub citations: Vec<String>,
}

/// Parse raw article markup into a span tree
///
/// # Errors
///
/// Returns an error if formatting nests past the depth limit
#[uniffi::export]
pub fn parse_article(text: &str) -> Result<ParsedArticle, ParseError> {
    parse_raw_markdown(text)
}

/// Parse and render an article for publication
///
/// Citations link into the named lexicon; targets missing from
/// `written` are marked as phantoms.
///
/// # Errors
///
/// Returns an error if formatting nests past the depth limit
#[uniffi::export]
pub fn render_article_html(
    text: &str,
    lexicon: &str,
    written: Vec<String>,
) -> Result<String, ParseError> {
    let article = parse_raw_markdown(text)?;
    let mut renderer = HtmlRenderer::new(lexicon, written.into_iter().collect::<HashSet<_>>());
    Ok(renderer.render_article(&article))
}

/// Parse and render a draft preview
///
/// `articles` maps known titles to their author, or to no author for
/// phantom entries.
///
/// # Errors
///
/// Returns an error if formatting nests past the depth limit
#[uniffi::export]
pub fn render_article_preview(
    text: &str,
    articles: HashMap<String, Option<String>>,
) -> Result<ArticlePreview, ParseError> {
    let article = parse_raw_markdown(text)?;
    let mut renderer = PreviewHtmlRenderer::new(articles);
    let rendered = renderer.render_article(&article);
    Ok(ArticlePreview {
        rendered,
        citations: renderer.citations().to_vec(),
    })
}

/// Parse and render a post body into link-free HTML
///
/// # Errors
///
/// Returns an error if formatting nests past the depth limit
#[uniffi::export]
pub fn render_post_html(text: &str) -> Result<String, ParseError> {
    let article = parse_raw_markdown(text)?;
    Ok(PostFormatter.render_article(&article))
}

/// Parse an article and list its citation targets in document order
///
/// # Errors
///
/// Returns an error if formatting nests past the depth limit
#[uniffi::export]
pub fn extract_citations(text: &str) -> Result<Vec<String>, ParseError> {
    let article = parse_raw_markdown(text)?;
    let mut collector = CitationCollector::new();
    article.accept(&mut collector);
    Ok(collector.into_citations())
}

/// Parse an article and count its constraint-relevant features
///
/// # Errors
///
/// Returns an error if formatting nests past the depth limit
#[uniffi::export]
pub fn analyze_article(text: &str) -> Result<ArticleAnalysis, ParseError> {
    let article = parse_raw_markdown(text)?;
    let mut counter = FeatureCounter::new();
    article.accept(&mut counter);
    Ok(ArticleAnalysis {
        word_count: counter.word_count as u32,
        citation_count: counter.citation_count as u32,
        signature_count: counter.signature_count as u32,
    })
}

/// Normalize a string as an article title
#[uniffi::export]
pub fn normalize_article_title(title: &str) -> String {
    titles::normalize_title(title)
}

/// Derive the sort key for an article title
#[uniffi::export]
pub fn article_title_sort_key(title: &str) -> String {
    titles::titlesort(title)
}

/// Derive the filename-safe slug for an article title
#[uniffi::export]
pub fn article_title_slug(title: &str) -> String {
    titles::filesafe_title(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_article_html() {
        let html = render_article_html(
            "See [[Alpha]]",
            "lex",
            vec!["Alpha".to_string()],
        )
        .unwrap();
        assert_eq!(
            html,
            "<p>See <a href=\"/lexicon/lex/article/Alpha\">Alpha</a></p>"
        );
    }

    #[test]
    fn test_render_article_preview() {
        let preview = render_article_preview("Cite [[Thing]]", HashMap::new()).unwrap();
        assert_eq!(preview.rendered, "<p>Cite <u>Thing</u>[1]</p>");
        assert_eq!(preview.citations, vec!["Thing [new]"]);
    }

    #[test]
    fn test_render_post_html_has_no_links() {
        let html = render_post_html("See [[Alpha]]").unwrap();
        assert_eq!(html, "<p>See Alpha</p>");
    }

    #[test]
    fn test_extract_citations() {
        let citations = extract_citations("[[A]] and [[B]]").unwrap();
        assert_eq!(citations, vec!["A", "B"]);
    }

    #[test]
    fn test_analyze_article() {
        let analysis = analyze_article("one two [[three]]\n\n~sig").unwrap();
        assert_eq!(analysis.word_count, 4);
        assert_eq!(analysis.citation_count, 1);
        assert_eq!(analysis.signature_count, 1);
    }
}

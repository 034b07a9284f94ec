//! Recursive descent parser for article markup
//!
//! The dialect supports bold (`**`), italic (`//`), citations of other
//! articles (`[[...]]`, optionally `[[display|target]]`), signature
//! paragraphs (leading `~`), and explicit line breaks (`\\` at the end
//! of a line). Formatting never crosses a blank-line paragraph boundary.
//!
//! The parser is total: unmatched or malformed marks fall through to
//! literal text. The only failure mode is the nesting depth guard.

use regex::Regex;

use crate::error::{ParseError, ParseResult};
use crate::spans::{ParsedArticle, Paragraph, Span, Spans};
use crate::titles::normalize_title;

/// Default bound on nested paired formatting
pub const DEFAULT_MAX_DEPTH: u32 = 64;

const CITE_OPEN: &str = "[[";
const CITE_CLOSE: &str = "]]";
const BOLD_MARK: &str = "**";
const ITALIC_MARK: &str = "//";
const BREAK_MARK: &str = "\\\\\n";

/// Parses a body of article markup into a span tree
///
/// # Errors
///
/// Returns [`ParseError::DepthExceeded`] if paired formatting nests
/// deeper than [`DEFAULT_MAX_DEPTH`].
pub fn parse_raw_markdown(text: &str) -> ParseResult<ParsedArticle> {
    parse_with_depth_limit(text, DEFAULT_MAX_DEPTH)
}

/// Parses a body of article markup with an explicit nesting bound
///
/// # Errors
///
/// Returns [`ParseError::DepthExceeded`] if paired formatting nests
/// deeper than `max_depth` levels.
pub fn parse_with_depth_limit(text: &str, max_depth: u32) -> ParseResult<ParsedArticle> {
    // Parse each paragraph individually, as no formatting applies
    // across paragraphs
    let blank_lines = Regex::new(r"\n\n+").unwrap();
    let paragraphs = blank_lines
        .split(text)
        .map(|paragraph| parse_paragraph(paragraph, max_depth))
        .collect::<ParseResult<Vec<_>>>()?;
    Ok(ParsedArticle::new(paragraphs))
}

/// Parses a block of text into a paragraph
fn parse_paragraph(text: &str, limit: u32) -> ParseResult<Paragraph> {
    let text = text.trim();
    if let Some(rest) = text.strip_prefix('~') {
        Ok(Paragraph::signature(parse_paired_formatting(
            rest,
            Eligible::ALL,
            0,
            limit,
        )?))
    } else {
        Ok(Paragraph::body(parse_paired_formatting(
            text,
            Eligible::ALL,
            0,
            limit,
        )?))
    }
}

/// Which paired constructs may still open at the current position.
/// Each construct is ineligible inside its own inner text, so a span
/// can never nest directly or indirectly inside another of its kind.
#[derive(Debug, Clone, Copy)]
struct Eligible {
    cite: bool,
    bold: bool,
    italic: bool,
}

impl Eligible {
    const ALL: Self = Self {
        cite: true,
        bold: true,
        italic: true,
    };

    const fn without_cite(self) -> Self {
        Self {
            cite: false,
            bold: self.bold,
            italic: self.italic,
        }
    }

    const fn without_bold(self) -> Self {
        Self {
            cite: self.cite,
            bold: false,
            italic: self.italic,
        }
    }

    const fn without_italic(self) -> Self {
        Self {
            cite: self.cite,
            bold: self.bold,
            italic: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PairKind {
    Citation,
    Bold,
    Italic,
}

/// Parses citations, bolds, and italics, which can be nested inside
/// each other
///
/// Resolves one construct at a time: the eligible pair whose open mark
/// occurs earliest wins, the text before it gets break parsing only,
/// and the text after its close mark is rescanned with every construct
/// eligible again.
fn parse_paired_formatting(
    text: &str,
    eligible: Eligible,
    depth: u32,
    limit: u32,
) -> ParseResult<Spans> {
    if depth >= limit {
        return Err(ParseError::depth_exceeded(limit));
    }
    let mut spans = Spans::new();
    let mut rest = text;
    let mut eligible = eligible;
    loop {
        let (mut parsed, remaining) = match earliest_pair(rest, eligible) {
            Some(PairKind::Citation) => parse_citation(rest, eligible, depth, limit)?,
            Some(PairKind::Bold) => parse_bold(rest, eligible, depth, limit)?,
            Some(PairKind::Italic) => parse_italic(rest, eligible, depth, limit)?,
            // Nothing paired left, move on to the next parsing step
            None => (parse_breaks(rest), ""),
        };
        spans.append(&mut parsed);
        if remaining.is_empty() {
            return Ok(spans);
        }
        rest = remaining;
        eligible = Eligible::ALL;
    }
}

/// Finds the eligible pair whose open mark occurs earliest
fn earliest_pair(text: &str, eligible: Eligible) -> Option<PairKind> {
    let cite = if eligible.cite {
        find_pair(text, CITE_OPEN, CITE_CLOSE)
    } else {
        None
    };
    let bold = if eligible.bold {
        find_pair(text, BOLD_MARK, BOLD_MARK)
    } else {
        None
    };
    let italic = if eligible.italic {
        find_pair(text, ITALIC_MARK, ITALIC_MARK)
    } else {
        None
    };
    [
        cite.map(|at| (at, PairKind::Citation)),
        bold.map(|at| (at, PairKind::Bold)),
        italic.map(|at| (at, PairKind::Italic)),
    ]
    .into_iter()
    .flatten()
    .min_by_key(|&(at, _)| at)
    .map(|(_, kind)| kind)
}

/// Finds the beginning of a pair of formatting marks
///
/// An open mark with no close mark after it is not a pair, so the text
/// is left for literal parsing instead.
fn find_pair(text: &str, open_mark: &str, close_mark: &str) -> Option<usize> {
    let first = text.find(open_mark)?;
    text[first + open_mark.len()..].find(close_mark)?;
    Some(first)
}

/// Parses the first citation pair in the text into a citation span
///
/// Returns the spans up to and including the citation, and the
/// unparsed text after its close mark.
fn parse_citation<'a>(
    text: &'a str,
    eligible: Eligible,
    depth: u32,
    limit: u32,
) -> ParseResult<(Spans, &'a str)> {
    let Some(open) = text.find(CITE_OPEN) else {
        return Ok((parse_breaks(text), ""));
    };
    let Some(close) = text[open + 2..].find(CITE_CLOSE).map(|at| at + open + 2) else {
        return Ok((parse_breaks(text), ""));
    };
    // Since pairs were searched from the beginning, there is no
    // undetected pair formatting before this one
    let mut spans = parse_breaks(&text[..open]);
    let inner = &text[open + 2..close];
    // Split off the citation target from the display text. Only the
    // first pipe splits; the target keeps any further pipes.
    let (display, raw_target) = inner.split_once('|').unwrap_or((inner, inner));
    let inner_spans = parse_paired_formatting(display, eligible.without_cite(), depth + 1, limit)?;
    spans.push(Span::citation(inner_spans, normalize_title(raw_target)));
    Ok((spans, &text[close + 2..]))
}

/// Parses the first bold pair in the text into a bold span
fn parse_bold<'a>(
    text: &'a str,
    eligible: Eligible,
    depth: u32,
    limit: u32,
) -> ParseResult<(Spans, &'a str)> {
    let Some(open) = text.find(BOLD_MARK) else {
        return Ok((parse_breaks(text), ""));
    };
    let Some(close) = text[open + 2..].find(BOLD_MARK).map(|at| at + open + 2) else {
        return Ok((parse_breaks(text), ""));
    };
    let mut spans = parse_breaks(&text[..open]);
    let inner = &text[open + 2..close];
    let inner_spans = parse_paired_formatting(inner, eligible.without_bold(), depth + 1, limit)?;
    spans.push(Span::bold(inner_spans));
    Ok((spans, &text[close + 2..]))
}

/// Parses the first italic pair in the text into an italic span
fn parse_italic<'a>(
    text: &'a str,
    eligible: Eligible,
    depth: u32,
    limit: u32,
) -> ParseResult<(Spans, &'a str)> {
    let Some(open) = text.find(ITALIC_MARK) else {
        return Ok((parse_breaks(text), ""));
    };
    let Some(close) = text[open + 2..].find(ITALIC_MARK).map(|at| at + open + 2) else {
        return Ok((parse_breaks(text), ""));
    };
    let mut spans = parse_breaks(&text[..open]);
    let inner = &text[open + 2..close];
    let inner_spans = parse_paired_formatting(inner, eligible.without_italic(), depth + 1, limit)?;
    spans.push(Span::italic(inner_spans));
    Ok((spans, &text[close + 2..]))
}

/// Parses intra-paragraph line breaks
///
/// Empty text parses into no spans at all, not an empty text span.
fn parse_breaks(text: &str) -> Spans {
    if text.is_empty() {
        return Spans::new();
    }
    let mut spans = Spans::new();
    for (i, piece) in text.split(BREAK_MARK).enumerate() {
        if i > 0 {
            spans.push(Span::line_break());
        }
        spans.push(Span::text(piece));
    }
    spans
}

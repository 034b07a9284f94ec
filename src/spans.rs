//! Token model for parsed article markup
//!
//! A parsed article is a tree of paragraphs and formatting spans. The
//! tree is immutable once built; visitors walk it and accumulate their
//! own state without modifying node contents.

use serde::{Deserialize, Serialize};

pub type Spans = Vec<Span>;

/// Token tree root, containing some number of paragraphs
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct ParsedArticle {
    pub paragraphs: Vec<Paragraph>,
}

impl ParsedArticle {
    #[must_use]
    pub const fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }
}

/// A top-level block of an article, delimited by blank lines
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Enum)]
pub enum Paragraph {
    /// A normal paragraph
    Body { spans: Spans },
    /// A paragraph whose source began with a signature mark (`~`)
    Signature { spans: Spans },
}

impl Paragraph {
    #[must_use]
    pub const fn body(spans: Spans) -> Self {
        Self::Body { spans }
    }

    #[must_use]
    pub const fn signature(spans: Spans) -> Self {
        Self::Signature { spans }
    }

    /// The ordered formatting spans of this paragraph
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        match self {
            Self::Body { spans } | Self::Signature { spans } => spans,
        }
    }

    #[must_use]
    pub const fn is_signature(&self) -> bool {
        matches!(self, Self::Signature { .. })
    }
}

/// One element of a paragraph's formatting tree
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Enum)]
pub enum Span {
    /// A length of unstyled text
    Text { text: String },
    /// A line break within a paragraph
    LineBreak,
    /// A span of text inside bold marks
    Bold { spans: Spans },
    /// A span of text inside italic marks
    Italic { spans: Spans },
    /// A citation of another article
    ///
    /// `target` is always the normalized form of the cited title, fixed
    /// at parse time; the child spans are the display text only.
    Citation { spans: Spans, target: String },
}

impl Span {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    #[must_use]
    pub const fn line_break() -> Self {
        Self::LineBreak
    }

    #[must_use]
    pub const fn bold(spans: Spans) -> Self {
        Self::Bold { spans }
    }

    #[must_use]
    pub const fn italic(spans: Spans) -> Self {
        Self::Italic { spans }
    }

    #[must_use]
    pub const fn citation(spans: Spans, target: String) -> Self {
        Self::Citation { spans, target }
    }
}

macro_rules! impl_span_helpers {
    ($($variant:ident $( { $($field:ident),* } )?),*) => {
        $(
            impl Span {
                paste::paste! {
                    #[must_use]
                    pub fn [<as_ $variant:snake>](&self) -> Option<Self> {
                        if let Self::$variant $( { $($field),* } )? = self {
                            Some(Self::$variant {
                                $(
                                    $(
                                        $field: $field.clone(),
                                    )*
                                )?
                            })
                        } else {
                            None
                        }
                    }

                    #[must_use]
                    pub fn [<is_ $variant:snake>](&self) -> bool {
                        self.[<as_ $variant:snake>]().is_some()
                    }
                }
            }
        )*
    };
}

impl_span_helpers!(
    Text { text },
    Bold { spans },
    Italic { spans },
    Citation { spans, target }
);

impl Span {
    #[must_use]
    pub const fn is_line_break(&self) -> bool {
        matches!(self, Self::LineBreak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_constructors() {
        assert_eq!(
            Span::text("hello"),
            Span::Text {
                text: "hello".to_string()
            }
        );
        assert_eq!(Span::line_break(), Span::LineBreak);
        assert_eq!(
            Span::bold(vec![Span::text("x")]),
            Span::Bold {
                spans: vec![Span::text("x")]
            }
        );
    }

    #[test]
    fn test_span_helpers() {
        let citation = Span::citation(vec![Span::text("display")], "Target".to_string());
        assert!(citation.is_citation());
        assert!(!citation.is_bold());
        assert_eq!(citation.as_citation(), Some(citation.clone()));
        assert!(Span::line_break().is_line_break());
    }

    #[test]
    fn test_paragraph_spans() {
        let body = Paragraph::body(vec![Span::text("a"), Span::line_break()]);
        assert_eq!(body.spans().len(), 2);
        assert!(!body.is_signature());
        assert!(Paragraph::signature(vec![]).is_signature());
    }
}

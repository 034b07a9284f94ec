#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

uniffi::setup_scaffolding!();

pub mod analyze;
pub mod error;
pub mod ffi;
pub mod parser;
pub mod render;
pub mod spans;
pub mod titles;
pub mod visit;

// Re-export the common entry points for convenience
pub use analyze::{CitationCollector, FeatureCounter};
pub use error::{ParseError, ParseResult};
pub use parser::{DEFAULT_MAX_DEPTH, parse_raw_markdown, parse_with_depth_limit};
pub use render::{HtmlRenderer, PostFormatter, PreviewHtmlRenderer, Renderer};
pub use spans::{ParsedArticle, Paragraph, Span, Spans};
pub use titles::{filesafe_title, normalize_title, titlesort};
pub use visit::Visitor;

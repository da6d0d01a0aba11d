//! i18n-core: Core library for merging paragraph translations between book documents
//!
//! This library provides functionality to:
//! - Load JSON book documents (chapters containing paragraphs)
//! - Match chapters and paragraphs between two documents by their `n` identifiers
//! - Copy translations for a fixed set of languages into existing `i18n` mappings
//! - Save the merged document and summarize its translation coverage

pub mod document;
pub mod error;
pub mod export;
pub mod merger;
pub mod parser;
pub mod stats;

pub use document::{Chapter, ChapterMut, Document, Paragraph, ParagraphMut, RecordKey};
pub use error::{Error, Result};
pub use export::{save_document, to_pretty_json};
pub use merger::{merge, MergeReport, LANGUAGES};
pub use parser::{load_document, parse_document};
pub use stats::Statistics;

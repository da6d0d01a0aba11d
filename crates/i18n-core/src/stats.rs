//! Summary statistics over a merged document

use crate::document::Document;
use std::fmt;

/// Chapter and paragraph totals plus English translation coverage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Entries in the `chapters` array
    pub total_chapters: usize,
    /// Entries across all `paragraphs` arrays
    pub total_paragraphs: usize,
    /// Paragraphs whose `i18n.en` is a non-empty string
    pub translated_paragraphs: usize,
}

impl Statistics {
    /// Gather statistics from a document
    pub fn collect(document: &Document) -> Self {
        let translated_paragraphs = document
            .chapters()
            .flat_map(|c| c.paragraphs())
            .filter(|p| p.translation("en").is_some())
            .count();

        Self {
            total_chapters: document.chapter_count(),
            total_paragraphs: document.paragraph_count(),
            translated_paragraphs,
        }
    }

    /// Percentage of paragraphs with an English translation, `None` if there are none
    pub fn coverage(&self) -> Option<f64> {
        if self.total_paragraphs == 0 {
            return None;
        }
        Some(self.translated_paragraphs as f64 / self.total_paragraphs as f64 * 100.0)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total chapters: {}", self.total_chapters)?;
        writeln!(f, "Total paragraphs: {}", self.total_paragraphs)?;
        writeln!(
            f,
            "Paragraphs with English translations: {}",
            self.translated_paragraphs
        )?;
        match self.coverage() {
            Some(pct) => write!(f, "Translation coverage: {:.1}%", pct),
            None => write!(f, "No paragraphs found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_counts() {
        let doc = Document::from_value(json!({
            "chapters": [
                {"n": 1, "paragraphs": [
                    {"n": 1, "i18n": {"en": "Hello"}},
                    {"n": 2, "i18n": {"en": ""}}
                ]},
                {"n": 2, "paragraphs": [{"n": 1}]},
                {"n": 3}
            ]
        }));

        let stats = Statistics::collect(&doc);

        assert_eq!(stats.total_chapters, 3);
        assert_eq!(stats.total_paragraphs, 3);
        assert_eq!(stats.translated_paragraphs, 1);
    }

    #[test]
    fn test_coverage_half() {
        let stats = Statistics {
            total_chapters: 1,
            total_paragraphs: 2,
            translated_paragraphs: 1,
        };

        assert_eq!(stats.coverage(), Some(50.0));
        assert!(stats.to_string().ends_with("Translation coverage: 50.0%"));
    }

    #[test]
    fn test_no_paragraphs() {
        let stats = Statistics::collect(&Document::from_value(json!({"chapters": [{"n": 1}]})));

        assert_eq!(stats.coverage(), None);
        assert_eq!(
            stats.to_string(),
            "Total chapters: 1\nTotal paragraphs: 0\nParagraphs with English translations: 0\nNo paragraphs found"
        );
    }
}

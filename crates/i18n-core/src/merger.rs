//! Merge engine for copying paragraph translations between documents

use crate::document::{Chapter, Document, Paragraph, ParagraphMut, RecordKey};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info};

/// Language codes copied from source to target, in merge order
pub const LANGUAGES: [&str; 6] = ["en", "de", "es", "ru", "ja", "zh"];

/// Counters describing what a merge did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Target chapters that found a source chapter with the same `n`
    pub chapters_matched: usize,
    /// Target paragraphs that found a source paragraph with the same `n`
    pub paragraphs_matched: usize,
    /// Translation values written into target `i18n` mappings
    pub values_written: usize,
}

/// Merge translations from `source` into `target` in place
///
/// Chapters are matched by `n`, then paragraphs by `n` within the matched
/// chapter. For each matched paragraph that already has an `i18n` mapping,
/// every language in [`LANGUAGES`] with a non-empty source value overwrites
/// the target value. Unmatched records, paragraphs without `i18n` and
/// chapter titles are left exactly as they were.
pub fn merge(target: &mut Document, source: &Document) -> MergeReport {
    let mut report = MergeReport::default();
    let source_chapters = index_by_key(source.chapters().map(|c| (c.id(), c)));
    debug!(chapters = source_chapters.len(), "indexed source chapters");

    for mut chapter in target.chapters_mut() {
        let Some(key) = chapter.id() else {
            continue;
        };
        let Some(source_chapter) = source_chapters.get(&key) else {
            debug!(chapter = %key, "no source chapter");
            continue;
        };
        report.chapters_matched += 1;

        // Chapter titles carry no translations in the source, so only paragraphs merge
        let source_paragraphs = index_paragraphs(source_chapter);

        for mut paragraph in chapter.paragraphs_mut() {
            let Some(para_key) = paragraph.id() else {
                continue;
            };
            let Some(source_paragraph) = source_paragraphs.get(&para_key) else {
                continue;
            };
            report.paragraphs_matched += 1;

            let written = merge_paragraph(&mut paragraph, source_paragraph);
            if written == 0 {
                debug!(chapter = %key, paragraph = %para_key, "nothing to merge");
            }
            report.values_written += written;
        }
    }

    info!(
        chapters_matched = report.chapters_matched,
        paragraphs_matched = report.paragraphs_matched,
        values_written = report.values_written,
        "merge finished"
    );
    report
}

fn index_paragraphs<'a>(chapter: &Chapter<'a>) -> HashMap<RecordKey, Paragraph<'a>> {
    index_by_key(chapter.paragraphs().map(|p| (p.id(), p)))
}

/// Build a lookup table; later records replace earlier ones with the same key
fn index_by_key<T>(records: impl Iterator<Item = (Option<RecordKey>, T)>) -> HashMap<RecordKey, T> {
    let mut index = HashMap::new();
    for (key, record) in records {
        if let Some(key) = key {
            index.insert(key, record);
        }
    }
    index
}

/// Copy translations into one paragraph, returning how many values were written
fn merge_paragraph(target: &mut ParagraphMut<'_>, source: &Paragraph<'_>) -> usize {
    let Some(i18n) = target.i18n_mut() else {
        return 0;
    };

    let mut written = 0;
    for lang in LANGUAGES {
        if let Some(text) = source.translation(lang) {
            i18n.insert(lang.to_string(), Value::String(text.to_string()));
            written += 1;
        }
    }
    written
}

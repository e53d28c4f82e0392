//! Context packing for generation prompts
//!
//! Ranked records become a numbered context block. The 1-based `[i]` label of
//! each packed entry is the citation contract: generated text cites `[i]`, and
//! the citation list maps the same `i` to the record title.

use crate::document::RankedRecord;

/// Citation index to source title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub index: usize,
    pub title: String,
}

/// One record's (truncated) text as it appears in the context block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedEntry {
    pub index: usize,
    pub text: String,
}

/// Packed context block plus its citation list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedContext {
    pub entries: Vec<PackedEntry>,
    pub citations: Vec<Citation>,
}

impl PackedContext {
    /// Context block: `[i] text` lines joined by newlines
    pub fn block(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("[{}] {}", e.index, e.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Citation list rendered as `[1] Title [2] Title`
    pub fn citation_line(&self) -> String {
        self.citations
            .iter()
            .map(|c| format!("[{}] {}", c.index, c.title))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Characters of record text packed, excluding labels and separators
    pub fn packed_chars(&self) -> usize {
        self.entries.iter().map(|e| e.text.chars().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Greedy, rank-ordered packer with per-record and total character caps
#[derive(Debug, Clone, Copy)]
pub struct ContextPacker {
    per_doc_limit: usize,
    total_limit: usize,
}

impl ContextPacker {
    pub fn new(per_doc_limit: usize, total_limit: usize) -> Self {
        Self {
            per_doc_limit,
            total_limit,
        }
    }

    /// Pack records in rank order
    ///
    /// Each text is cut to `per_doc_limit` characters first. Packing stops at
    /// the first record whose truncated text would push the running total past
    /// `total_limit`; smaller records further down are not tried.
    pub fn pack(&self, records: &[RankedRecord]) -> PackedContext {
        let mut packed = PackedContext::default();
        let mut total = 0usize;

        for ranked in records {
            let text: String = ranked.text().chars().take(self.per_doc_limit).collect();
            let len = text.chars().count();
            if total + len > self.total_limit {
                break;
            }
            total += len;

            let index = packed.entries.len() + 1;
            packed.entries.push(PackedEntry { index, text });
            packed.citations.push(Citation {
                index,
                title: ranked.title().to_string(),
            });
        }

        packed
    }
}

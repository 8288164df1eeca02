use indexmap::IndexMap;

use crate::vectorizer::token::TermFrequency;

/// Corpus-wide statistics of one term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermStats {
    /// number of documents containing the term at least once
    pub doc_freq: u64,
    /// occurrences across all documents
    pub total: u64,
}

/// Keeps document count and per-term statistics of a document collection.
/// Does not keep document text. Terms keep first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    doc_num: u64,
    term_stats: IndexMap<Box<str>, TermStats>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_stats: IndexMap::new(),
        }
    }

    /// Build from analyzed documents, in order
    pub fn from_docs<'a, I>(docs: I) -> Self
    where
        I: IntoIterator<Item = &'a TermFrequency>,
    {
        let mut corpus = Self::new();
        for doc in docs {
            corpus.add_doc(doc);
        }
        corpus
    }

    /// Add a document's terms to the corpus
    pub fn add_doc(&mut self, doc: &TermFrequency) {
        self.doc_num += 1;
        for (term, count) in doc.iter() {
            if let Some(stats) = self.term_stats.get_mut(term) {
                stats.doc_freq += 1;
                stats.total += count as u64;
            } else {
                self.term_stats.insert(
                    term.into(),
                    TermStats {
                        doc_freq: 1,
                        total: count as u64,
                    },
                );
            }
        }
    }

    /// Number of documents added, including those without terms
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Document frequency of `term`
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_stats.get(term).map_or(0, |s| s.doc_freq)
    }

    #[inline]
    pub fn get_term_stats(&self, term: &str) -> Option<TermStats> {
        self.term_stats.get(term).copied()
    }

    /// Number of distinct terms
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_stats.len()
    }

    /// `(term, stats)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, TermStats)> + '_ {
        self.term_stats.iter().map(|(term, &stats)| (term.as_ref(), stats))
    }
}

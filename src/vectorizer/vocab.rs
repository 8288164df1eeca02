use indexmap::IndexMap;

use crate::vectorizer::corpus::Corpus;

/// Term → dimension mapping for one scoring call.
///
/// Holds at most `max_features` terms. When the corpus has more, the terms with
/// the highest total occurrence count are kept; equal counts prefer the term seen
/// first. Kept terms are indexed in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    index: IndexMap<Box<str>, u32>,
    /// document frequency per dimension
    doc_freq: Vec<u64>,
    doc_num: u64,
}

impl Vocabulary {
    pub fn build(corpus: &Corpus, max_features: usize) -> Self {
        let mut entries: Vec<(usize, &str, u64, u64)> = corpus
            .iter()
            .enumerate()
            .map(|(pos, (term, stats))| (pos, term, stats.total, stats.doc_freq))
            .collect();

        if entries.len() > max_features {
            // stable: ties stay in first-seen order
            entries.sort_by(|a, b| b.2.cmp(&a.2));
            entries.truncate(max_features);
            entries.sort_by_key(|e| e.0);
            tracing::debug!(
                distinct = corpus.vocab_size(),
                kept = max_features,
                "vocabulary truncated by term frequency"
            );
        }

        let mut index = IndexMap::with_capacity(entries.len());
        let mut doc_freq = Vec::with_capacity(entries.len());
        for (dim, (_, term, _, df)) in entries.into_iter().enumerate() {
            index.insert(Box::<str>::from(term), dim as u32);
            doc_freq.push(df);
        }

        Self {
            index,
            doc_freq,
            doc_num: corpus.get_doc_num(),
        }
    }

    /// Dimension of `term`, if retained
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<u32> {
        self.index.get(term).copied()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Number of dimensions
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Document frequency of the term at `dim`
    #[inline]
    pub fn doc_freq(&self, dim: u32) -> u64 {
        self.doc_freq.get(dim as usize).copied().unwrap_or(0)
    }

    /// Number of documents the vocabulary was built from
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Terms in dimension order
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.keys().map(|t| t.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::token::TermFrequency;

    fn corpus(docs: &[&[&str]]) -> Corpus {
        let freqs: Vec<TermFrequency> = docs
            .iter()
            .map(|terms| {
                let mut freq = TermFrequency::new();
                freq.add_terms(terms);
                freq
            })
            .collect();
        Corpus::from_docs(&freqs)
    }

    #[test]
    fn indexes_in_first_seen_order() {
        let c = corpus(&[&["rust", "go"], &["go", "sql"]]);
        let vocab = Vocabulary::build(&c, 1000);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.terms().collect::<Vec<_>>(), vec!["rust", "go", "sql"]);
        assert_eq!(vocab.index_of("sql"), Some(2));
        assert_eq!(vocab.doc_freq(1), 2);
        assert_eq!(vocab.doc_num(), 2);
    }

    #[test]
    fn bounded_by_max_features_keeping_frequent_terms() {
        let c = corpus(&[&["a1", "b1", "b1", "c1"], &["c1", "d1", "b1"]]);
        // totals: a1=1 b1=3 c1=2 d1=1
        let vocab = Vocabulary::build(&c, 3);
        assert_eq!(vocab.terms().collect::<Vec<_>>(), vec!["a1", "b1", "c1"]);

        let vocab = Vocabulary::build(&c, 2);
        assert_eq!(vocab.terms().collect::<Vec<_>>(), vec!["b1", "c1"]);
        assert!(!vocab.contains("a1"));
    }

    #[test]
    fn empty_corpus_gives_empty_vocabulary() {
        let c = corpus(&[&[], &[]]);
        let vocab = Vocabulary::build(&c, 1000);
        assert!(vocab.is_empty());
        assert_eq!(vocab.doc_num(), 2);
    }
}

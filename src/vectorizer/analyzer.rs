use crate::vectorizer::{stop_words::is_stop_word, token::TermFrequency};

/// Splits a normalized document into terms.
///
/// A token is a maximal run of alphanumeric characters or `_`.
/// Stop words and tokens shorter than `min_token_len` chars are dropped,
/// then n-grams are formed from adjacent retained tokens and joined with a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analyzer {
    /// inclusive (min, max) n-gram length
    pub ngram_range: (usize, usize),
    pub min_token_len: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            ngram_range: (1, 2),
            min_token_len: 1,
        }
    }
}

impl Analyzer {
    pub fn new(ngram_range: (usize, usize), min_token_len: usize) -> Self {
        Self {
            ngram_range,
            min_token_len,
        }
    }

    /// Retained tokens in document order
    pub fn tokens<'a>(&self, doc: &'a str) -> Vec<&'a str> {
        doc.split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|tok| !tok.is_empty())
            .filter(|tok| tok.chars().count() >= self.min_token_len)
            .filter(|tok| !is_stop_word(tok))
            .collect()
    }

    /// Count every n-gram of the document.
    /// Shorter n-grams of a position come before longer ones, so first-seen
    /// order follows the text.
    ///
    /// # Examples
    /// ```
    /// use skill_match::vectorizer::analyzer::Analyzer;
    /// let freq = Analyzer::default().analyze("python and django");
    /// assert_eq!(freq.term_set_ref_str(), vec!["python", "django", "python django"]);
    /// ```
    pub fn analyze(&self, doc: &str) -> TermFrequency {
        let tokens = self.tokens(doc);
        let (min_n, max_n) = self.ngram_range;
        let mut freq = TermFrequency::new();
        for n in min_n.max(1)..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                if n == 1 {
                    freq.add_term(window[0]);
                } else {
                    freq.add_term(&window.join(" "));
                }
            }
        }
        freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        let a = Analyzer::default();
        assert_eq!(a.tokens("node.js  c++ ci/cd"), vec!["node", "js", "c", "ci", "cd"]);
    }

    #[test]
    fn drops_stop_words_and_short_tokens() {
        let a = Analyzer::new((1, 1), 2);
        assert_eq!(a.tokens("the r language and rust"), vec!["language", "rust"]);
    }

    #[test]
    fn bigrams_join_adjacent_tokens() {
        let freq = Analyzer::default().analyze("python  django rest api");
        assert_eq!(freq.term_count("python"), 1);
        assert_eq!(freq.term_count("python django"), 1);
        assert_eq!(freq.term_count("django rest"), 1);
        assert_eq!(freq.term_count("rest api"), 1);
        assert_eq!(freq.term_count("python rest"), 0);
        assert_eq!(freq.term_num(), 7);
    }

    #[test]
    fn bigrams_skip_over_removed_stop_words() {
        let freq = Analyzer::default().analyze("python and django");
        assert_eq!(freq.term_count("and"), 0);
        assert_eq!(freq.term_count("python django"), 1);
        assert_eq!(freq.term_num(), 3);
    }

    #[test]
    fn counts_repeated_terms() {
        let freq = Analyzer::default().analyze("sql sql sql");
        assert_eq!(freq.term_count("sql"), 3);
        assert_eq!(freq.term_count("sql sql"), 2);
        assert_eq!(freq.term_sum(), 5);
    }

    #[test]
    fn unigram_only_range() {
        let freq = Analyzer::new((1, 1), 1).analyze("aws docker");
        assert_eq!(freq.term_set_ref_str(), vec!["aws", "docker"]);
    }

    #[test]
    fn empty_and_stop_word_only_documents_have_no_terms() {
        let a = Analyzer::default();
        assert_eq!(a.analyze("").term_num(), 0);
        assert_eq!(a.analyze("the and of").term_num(), 0);
    }
}

use indexmap::IndexMap;

/// TermFrequency struct
/// Counts how many times each term appears in one document.
/// Terms keep the order in which they were first added.
///
/// # Examples
/// ```
/// use skill_match::vectorizer::token::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("rust");
/// term_freq.add_term("sql");
/// term_freq.add_term("rust");
///
/// assert_eq!(term_freq.term_count("rust"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

/// Adding terms
impl TermFrequency {
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// Add several terms
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// Reading counts
impl TermFrequency {
    /// Occurrences of `term` in the document
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total occurrences of all terms
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Distinct terms in first-seen order, borrowed
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// `(term, count)` pairs in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }
}

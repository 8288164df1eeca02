pub mod analyzer;
pub mod corpus;
pub mod evaluate;
pub mod stop_words;
pub mod tfidf;
pub mod token;
pub mod vocab;

use std::marker::PhantomData;

use num::Float;
use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        analyzer::Analyzer,
        corpus::Corpus,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::TermFrequency,
        vocab::Vocabulary,
    },
};

/// TF-IDF vector space fitted on one corpus.
///
/// Holds the vocabulary, the IDF vector and one L2-normalized vector per
/// corpus document, in corpus order. All vectors share the vocabulary's
/// dimension, so cosine similarity between any two is their dot product.
///
/// `VectorSpace<N, E>`:
/// - `N`: weight type (`f32` or `f64`)
/// - `E`: TF-IDF engine
#[derive(Debug, Clone)]
pub struct VectorSpace<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    pub vocab: Vocabulary,
    pub idf: Vec<N>,
    pub vectors: Vec<ZeroSpVec<N>>,
    _marker: PhantomData<E>,
}

impl<N, E> VectorSpace<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Fit vocabulary and IDF on `docs` and vectorize every document.
    ///
    /// # Errors
    /// `Error::EmptyVocabulary` when no document has a retained term.
    pub fn fit<S>(docs: &[S], analyzer: Analyzer, max_features: usize) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        let freqs: Vec<TermFrequency> = docs
            .par_iter()
            .map(|doc| analyzer.analyze(doc.as_ref()))
            .collect();
        let corpus = Corpus::from_docs(&freqs);
        let vocab = Vocabulary::build(&corpus, max_features);
        if vocab.is_empty() {
            return Err(Error::EmptyVocabulary {
                documents: docs.len(),
            });
        }
        tracing::debug!(
            documents = docs.len(),
            distinct_terms = corpus.vocab_size(),
            dimensions = vocab.len(),
            "fitted vector space"
        );

        let idf = E::idf_vec(&vocab);
        let vectors = freqs
            .par_iter()
            .map(|freq| Self::vectorize(freq, &vocab, &idf))
            .collect();

        Ok(Self {
            vocab,
            idf,
            vectors,
            _marker: PhantomData,
        })
    }

    fn vectorize(freq: &TermFrequency, vocab: &Vocabulary, idf: &[N]) -> ZeroSpVec<N> {
        let mut vec = E::tfidf_vec(freq, vocab, idf);
        vec.normalize();
        vec
    }

    /// Vector of the corpus document at `index`
    #[inline]
    pub fn vector(&self, index: usize) -> Option<&ZeroSpVec<N>> {
        self.vectors.get(index)
    }

    /// Number of vectorized documents
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.vectors.len()
    }

    /// Vector dimension (vocabulary size)
    #[inline]
    pub fn dim(&self) -> usize {
        self.vocab.len()
    }
}

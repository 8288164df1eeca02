use num::{Float, NumCast};

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{token::TermFrequency, vocab::Vocabulary},
};

/// TF-IDF calculation engine.
/// Implement this to plug a different weighting into `VectorSpace`.
pub trait TFIDFEngine<N>
where
    N: Float + Into<f64>,
{
    /// IDF per vocabulary dimension
    fn idf_vec(vocab: &Vocabulary) -> Vec<N>;

    /// Raw (not yet normalized) TF-IDF vector of one document
    ///
    /// # Arguments
    /// * `freq` - term counts of the document
    /// * `vocab` - dimensions to project onto; terms outside it are ignored
    /// * `idf` - output of `idf_vec` for the same vocabulary
    fn tfidf_vec(freq: &TermFrequency, vocab: &Vocabulary, idf: &[N]) -> ZeroSpVec<N>;
}

/// Default engine: raw count TF × smoothed IDF
///
/// idf(t) = ln((1 + n) / (1 + df(t))) + 1
///
/// Every weight is positive, and a term found in every document still weighs 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float + Into<f64>,
{
    fn idf_vec(vocab: &Vocabulary) -> Vec<N> {
        let doc_num = vocab.doc_num();
        (0..vocab.len() as u32)
            .map(|dim| {
                let idf = Self::idf_calc(doc_num, vocab.doc_freq(dim));
                <N as NumCast>::from(idf).unwrap_or_else(N::one)
            })
            .collect()
    }

    fn tfidf_vec(freq: &TermFrequency, vocab: &Vocabulary, idf: &[N]) -> ZeroSpVec<N> {
        let pairs: Vec<(u32, N)> = freq
            .iter()
            .filter_map(|(term, count)| {
                let dim = vocab.index_of(term)?;
                let tf = <N as NumCast>::from(count)?;
                Some((dim, tf * idf[dim as usize]))
            })
            .collect();
        ZeroSpVec::from_pairs(vocab.len(), pairs)
    }
}

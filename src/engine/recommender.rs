use std::marker::PhantomData;

use num::Float;
use rayon::prelude::*;

use crate::{
    config::RecommenderConfig,
    engine::{
        candidate::{Candidate, Document},
        explain::Explanation,
    },
    error::{Error, Result},
    utils::normalizer::normalize,
    vectorizer::{
        analyzer::Analyzer,
        evaluate::scoring::{Hits, ScoredResult},
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        VectorSpace,
    },
};

/// Ranks candidates against a skill query by TF-IDF cosine similarity.
///
/// Stateless across calls: every ranking fits its own vocabulary and vector
/// space over `[query, candidates...]` and drops it on return, so one
/// `Recommender` can be shared between threads.
#[derive(Debug, Clone)]
pub struct Recommender<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    config: RecommenderConfig,
    _marker: PhantomData<fn() -> (N, E)>,
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            config: RecommenderConfig::default(),
            _marker: PhantomData,
        }
    }
}

impl<N, E> Recommender<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// # Errors
    /// `Error::InvalidConfig` when the config does not validate.
    pub fn new(config: RecommenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            _marker: PhantomData,
        })
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    fn analyzer(&self) -> Analyzer {
        Analyzer::new(self.config.ngram_range, self.config.min_token_len)
    }

    /// Rank `candidates` against `query_skills`, keeping the configured `top_n`.
    ///
    /// Never fails. Empty input gives no results; an internal failure is
    /// logged and also gives no results. Zero-score candidates are included.
    pub fn rank<C>(&self, query_skills: &str, candidates: &[C]) -> Vec<ScoredResult<C::Id>>
    where
        C: Candidate,
    {
        self.rank_top(query_skills, candidates, self.config.top_n)
    }

    /// [`Recommender::rank`] with an explicit result count
    pub fn rank_top<C>(&self, query_skills: &str, candidates: &[C], top_n: usize) -> Vec<ScoredResult<C::Id>>
    where
        C: Candidate,
    {
        match self.try_rank(query_skills, candidates, top_n) {
            Ok(results) => results,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    candidates = candidates.len(),
                    "recommendation failed, returning no results"
                );
                Vec::new()
            }
        }
    }

    /// Ranking with the internal failure exposed.
    ///
    /// # Errors
    /// - `Error::EmptyVocabulary` when neither query nor candidates keep a term
    /// - `Error::NonFiniteScore` when the engine produces a NaN or infinite weight
    pub fn try_rank<C>(&self, query_skills: &str, candidates: &[C], top_n: usize) -> Result<Vec<ScoredResult<C::Id>>>
    where
        C: Candidate,
    {
        if query_skills.trim().is_empty() || candidates.is_empty() {
            return Ok(Vec::new());
        }

        let docs: Vec<Document<C::Id>> = candidates.iter().map(Document::from_candidate).collect();
        let mut corpus: Vec<&str> = Vec::with_capacity(docs.len() + 1);
        let query = normalize(query_skills);
        corpus.push(&query);
        corpus.extend(docs.iter().map(|doc| doc.normalized.as_str()));

        let space = VectorSpace::<N, E>::fit(&corpus, self.analyzer(), self.config.max_features)?;
        let query_vec = &space.vectors[0];

        let doc_vecs = &space.vectors[1..];
        debug_assert!(doc_vecs.iter().all(|v| v.len() == query_vec.len()));
        // both sides are unit length, so the dot product is the cosine
        let scores: Vec<f64> = doc_vecs.par_iter().map(|doc_vec| query_vec.dot(doc_vec)).collect();
        if let Some(candidate) = scores.iter().position(|s| !s.is_finite()) {
            return Err(Error::NonFiniteScore { candidate });
        }

        let thresholds = &self.config.thresholds;
        let mut hits = Hits::new(
            docs.into_iter()
                .zip(scores)
                .map(|(doc, score)| ScoredResult::new(doc.id, score, thresholds))
                .collect(),
        );
        hits.sort_by_score().top(top_n);
        tracing::debug!(
            candidates = candidates.len(),
            dimensions = space.dim(),
            returned = hits.len(),
            "ranked candidates"
        );
        Ok(hits.into_vec())
    }

    /// Overlap of the raw skill lists of the query and one candidate
    pub fn explain(&self, query_skills: &str, candidate_skills: &str) -> Explanation {
        Explanation::between(query_skills, candidate_skills)
    }
}

/// This crate is a skill matching engine built on a TF-IDF vectorizer.
/// It ranks job postings (or any record with a skill list) against a user's
/// free-text skills by cosine similarity.
pub mod config;
pub mod engine;
pub mod error;
pub mod utils;
pub mod vectorizer;

/// Recommender
/// The top-level struct of this crate.
/// It normalizes the query and candidate skill strings, fits a TF-IDF vector space
/// over `[query, candidates...]`, and ranks candidates by cosine similarity.
///
/// Nothing is cached between calls: each ranking builds its own vocabulary and
/// vectors and drops them on return.
///
/// `Recommender<N, E>` has the following generic parameters:
/// - `N`: Vector weight type (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// `rank` never returns an error: empty input and internal failures both give an
/// empty result list, the latter logged through `tracing`. Use `try_rank` to see
/// the failure.
pub use engine::recommender::Recommender;

/// Candidate trait and Job Posting record
/// `Candidate` is what `Recommender::rank` accepts: anything with an id and a
/// comma separated skill string. Implemented for `(id, skills)` tuples and for
/// `JobPosting`.
pub use engine::candidate::{Candidate, JobPosting};

/// Explanation
/// Matching and missing skills between a query and one candidate, computed on
/// whole comma separated skills without vectorization.
pub use engine::explain::Explanation;

/// Scored Result and Confidence label
/// - `ScoredResult`: candidate id, similarity in [0, 1], truncated percentage, confidence
/// - `Confidence`: Excellent / Good / Fair / Low bucket of the similarity
pub use vectorizer::evaluate::scoring::{Confidence, Hits, ScoredResult};

/// TF-IDF Vector Space
/// Vocabulary, IDF vector and unit-length document vectors fitted on one corpus.
pub use vectorizer::VectorSpace;

/// TF IDF Calculation Engine Trait
/// By implementing this trait, you can plug a different weighting into
/// `VectorSpace` and `Recommender`.
/// `DefaultTFIDFEngine` computes raw count TF × smoothed IDF.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Term Frequency structure
/// Counts term occurrences within one document, in first-seen order.
pub use vectorizer::token::TermFrequency;

pub use config::RecommenderConfig;
pub use error::{Error, Result};

use thiserror::Error;

/// Errors raised while building the vector space or scoring candidates.
///
/// `Recommender::rank` never lets these escape; they surface through
/// `Recommender::try_rank` and through the log.
#[derive(Debug, Error)]
pub enum Error {
    /// Every document reduced to zero retained terms
    /// (empty text, or only stop words).
    #[error("empty vocabulary: {documents} documents contain no retained terms")]
    EmptyVocabulary { documents: usize },

    /// A weight or similarity came out NaN or infinite,
    /// e.g. from a custom `TFIDFEngine`.
    #[error("non-finite similarity score for candidate #{candidate}")]
    NonFiniteScore { candidate: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

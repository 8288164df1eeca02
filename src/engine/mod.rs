pub mod candidate;
pub mod explain;
pub mod recommender;

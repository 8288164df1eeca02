use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::config::ConfidenceThresholds;

/// Scores are snapped to this grid so float drift cannot push a perfect
/// match below 1.0 or a threshold hit just under its bound.
const SCORE_GRID: f64 = 1e12;

/// Qualitative match bucket derived from a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "Low Match")]
    Low,
    #[serde(rename = "Fair Match")]
    Fair,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Excellent Match")]
    Excellent,
}

impl Confidence {
    /// Bucket a score with the default thresholds (0.7 / 0.5 / 0.3).
    /// Each bound is inclusive.
    ///
    /// # Examples
    /// ```
    /// use skill_match::Confidence;
    /// assert_eq!(Confidence::from_score(0.7), Confidence::Excellent);
    /// assert_eq!(Confidence::from_score(0.29), Confidence::Low);
    /// ```
    #[inline]
    pub fn from_score(score: f64) -> Self {
        Self::with_thresholds(score, &ConfidenceThresholds::default())
    }

    pub fn with_thresholds(score: f64, thresholds: &ConfidenceThresholds) -> Self {
        if score >= thresholds.excellent {
            Confidence::Excellent
        } else if score >= thresholds.good {
            Confidence::Good
        } else if score >= thresholds.fair {
            Confidence::Fair
        } else {
            Confidence::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Excellent => "Excellent Match",
            Confidence::Good => "Good Match",
            Confidence::Fair => "Fair Match",
            Confidence::Low => "Low Match",
        }
    }
}

impl Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Clamp a raw cosine into [0, 1] and snap it to the score grid
#[inline]
pub fn snap_score(raw: f64) -> f64 {
    ((raw * SCORE_GRID).round() / SCORE_GRID).clamp(0.0, 1.0)
}

/// floor(score * 100), within 0..=100
#[inline]
pub fn match_percentage(score: f64) -> u8 {
    (score * 100.0).floor().clamp(0.0, 100.0) as u8
}

/// One ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult<K> {
    pub candidate_id: K,
    /// cosine similarity in [0, 1]
    pub similarity_score: f64,
    /// floor(similarity_score * 100)
    pub match_percentage: u8,
    pub confidence: Confidence,
}

impl<K> ScoredResult<K> {
    pub fn new(candidate_id: K, raw_score: f64, thresholds: &ConfidenceThresholds) -> Self {
        let similarity_score = snap_score(raw_score);
        Self {
            candidate_id,
            similarity_score,
            match_percentage: match_percentage(similarity_score),
            confidence: Confidence::with_thresholds(similarity_score, thresholds),
        }
    }

    /// Whether the candidate shares anything with the query at all
    #[inline]
    pub fn is_match(&self) -> bool {
        self.similarity_score > 0.0
    }
}

/// Ranked result list
pub struct Hits<K> {
    pub list: Vec<ScoredResult<K>>,
}

impl<K> Hits<K> {
    pub fn new(list: Vec<ScoredResult<K>>) -> Self {
        Hits { list }
    }

    /// Sort by descending score.
    /// Stable: equal scores keep their input order.
    pub fn sort_by_score(&mut self) -> &mut Self {
        self.list
            .sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        self
    }

    /// Keep the first `n` results
    pub fn top(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    /// Results with a non-zero score
    pub fn matches(&self) -> impl Iterator<Item = &ScoredResult<K>> + '_ {
        self.list.iter().filter(|r| r.is_match())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn into_vec(self) -> Vec<ScoredResult<K>> {
        self.list
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // one hit per line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(
                    f,
                    "    {:?}: {:.6} ({}%, {})",
                    hit.candidate_id, hit.similarity_score, hit.match_percentage, hit.confidence
                )?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

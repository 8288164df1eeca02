use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::utils::normalizer::skill_list;

/// Set-based overlap between a query skill list and one candidate's skill list.
/// Works on whole comma-separated skills, not on vectorized terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// skills present on both sides
    pub matching_skills: BTreeSet<String>,
    /// skills the candidate requires that the query lacks
    pub missing_skills: BTreeSet<String>,
    pub match_count: usize,
    /// distinct skills the candidate requires
    pub total_required: usize,
}

impl Explanation {
    /// Compare two raw comma separated skill strings.
    /// Skills match on exact text after trimming and lower-casing.
    ///
    /// # Examples
    /// ```
    /// use skill_match::Explanation;
    /// let e = Explanation::between("Python, Django, REST API", "Python, Django, PostgreSQL");
    /// assert_eq!(e.match_count, 2);
    /// assert_eq!(e.total_required, 3);
    /// assert!(e.missing_skills.contains("postgresql"));
    /// ```
    pub fn between(query_skills: &str, candidate_skills: &str) -> Self {
        let query: BTreeSet<String> = skill_list(query_skills).into_iter().collect();
        let required: BTreeSet<String> = skill_list(candidate_skills).into_iter().collect();

        let matching_skills: BTreeSet<String> = query.intersection(&required).cloned().collect();
        let missing_skills: BTreeSet<String> = required.difference(&query).cloned().collect();

        Self {
            match_count: matching_skills.len(),
            total_required: required.len(),
            matching_skills,
            missing_skills,
        }
    }

    /// Fraction of required skills covered, 0.0 when nothing is required
    pub fn coverage(&self) -> f64 {
        if self.total_required == 0 {
            return 0.0;
        }
        self.match_count as f64 / self.total_required as f64
    }
}

use serde::{Deserialize, Serialize};

use crate::utils::normalizer::{normalize, skill_list, skills_display};

/// A record that can be ranked against a skill query.
///
/// Records whose skills field may be missing should map it to `""`.
pub trait Candidate {
    type Id: Clone;

    fn id(&self) -> Self::Id;
    fn required_skills(&self) -> &str;
}

impl<K, S> Candidate for (K, S)
where
    K: Clone,
    S: AsRef<str>,
{
    type Id = K;

    #[inline]
    fn id(&self) -> K {
        self.0.clone()
    }

    #[inline]
    fn required_skills(&self) -> &str {
        self.1.as_ref()
    }
}

/// A job posting as supplied by the surrounding application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u64,
    pub title: String,
    #[serde(default = "JobPosting::default_company")]
    pub company: String,
    /// comma separated, e.g. "Python, Django, REST API"
    #[serde(default)]
    pub required_skills: String,
    /// closed postings are kept on record but never recommended
    #[serde(default = "JobPosting::default_active")]
    pub is_active: bool,
}

impl JobPosting {
    fn default_company() -> String {
        "Not Specified".to_string()
    }

    fn default_active() -> bool {
        true
    }

    /// Required skills, trimmed and lower-cased
    pub fn skills_list(&self) -> Vec<String> {
        skill_list(&self.required_skills)
    }

    /// Required skills joined for display
    pub fn skills_display(&self) -> String {
        skills_display(&self.required_skills)
    }
}

impl Candidate for JobPosting {
    type Id = u64;

    #[inline]
    fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    fn required_skills(&self) -> &str {
        &self.required_skills
    }
}

/// A candidate captured for one ranking call: its id and normalized skill text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<K> {
    pub id: K,
    pub normalized: String,
}

impl<K> Document<K> {
    pub fn from_candidate<C>(candidate: &C) -> Self
    where
        C: Candidate<Id = K>,
    {
        Self {
            id: candidate.id(),
            normalized: normalize(candidate.required_skills()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_candidate() {
        let c = ("job-1".to_string(), "Rust, Go");
        assert_eq!(c.id(), "job-1");
        assert_eq!(c.required_skills(), "Rust, Go");
    }

    #[test]
    fn job_posting_from_json_fills_defaults() {
        let job: JobPosting =
            serde_json::from_str(r#"{"id": 7, "title": "Backend Dev", "required_skills": "Python,  Django ,"}"#)
                .unwrap();
        assert_eq!(job.company, "Not Specified");
        assert!(job.is_active);
        assert_eq!(job.skills_list(), vec!["python", "django"]);
        assert_eq!(job.skills_display(), "Python, Django");

        let job: JobPosting = serde_json::from_str(r#"{"id": 8, "title": "Intern"}"#).unwrap();
        assert_eq!(job.required_skills(), "");
    }

    #[test]
    fn job_posting_reads_inactive_flag() {
        let job: JobPosting = serde_json::from_str(
            r#"{"id": 9, "title": "Ops", "required_skills": "AWS", "is_active": false}"#,
        )
        .unwrap();
        assert!(!job.is_active);
    }

    #[test]
    fn document_keeps_id_and_normalized_text() {
        let doc = Document::from_candidate(&(3u32, "SQL, Excel"));
        assert_eq!(doc.id, 3);
        assert_eq!(doc.normalized, "sql  excel");
    }
}

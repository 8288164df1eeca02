/// Conversion of raw skill text into the normalized document form.
///
/// Implemented for `&str`, `String` and `Option<T>` so that a missing
/// skills field normalizes to the empty string instead of failing.
pub trait IntoNormalizedSkills {
    /// lower-case, trim, and turn every comma into a single space
    fn into_normalized_skills(self) -> String;
}

impl IntoNormalizedSkills for &str {
    #[inline]
    fn into_normalized_skills(self) -> String {
        self.to_lowercase().trim().replace(',', " ")
    }
}

impl IntoNormalizedSkills for &String {
    #[inline]
    fn into_normalized_skills(self) -> String {
        self.as_str().into_normalized_skills()
    }
}

impl IntoNormalizedSkills for String {
    #[inline]
    fn into_normalized_skills(self) -> String {
        self.as_str().into_normalized_skills()
    }
}

impl<T> IntoNormalizedSkills for Option<T>
where
    T: IntoNormalizedSkills,
{
    #[inline]
    fn into_normalized_skills(self) -> String {
        self.map(IntoNormalizedSkills::into_normalized_skills)
            .unwrap_or_default()
    }
}

/// Normalize a raw comma separated skill string.
///
/// # Examples
/// ```
/// use skill_match::utils::normalizer::normalize;
/// assert_eq!(normalize("  Python, Django,REST API "), "python  django rest api");
/// assert_eq!(normalize(None::<&str>), "");
/// ```
#[inline]
pub fn normalize<T: IntoNormalizedSkills>(raw: T) -> String {
    raw.into_normalized_skills()
}

/// Split a comma separated skill string into trimmed, lower-cased skills.
/// Empty entries are dropped, duplicates keep their first position.
///
/// # Examples
/// ```
/// use skill_match::utils::normalizer::skill_list;
/// assert_eq!(skill_list("Python, , django,PYTHON"), vec!["python", "django"]);
/// ```
pub fn skill_list(raw: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in raw.split(',') {
        let skill = skill.trim().to_lowercase();
        if !skill.is_empty() && !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills
}

/// Comma separated display form, keeping the original casing.
pub fn skills_display(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_replaces_commas() {
        assert_eq!(normalize("Rust,Go"), "rust go");
        assert_eq!(normalize("\tMachine Learning, SQL\n"), "machine learning  sql");
    }

    #[test]
    fn normalize_empty_and_missing() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(" \n\t "), "");
        assert_eq!(normalize(None::<String>), "");
        assert_eq!(normalize(Some("A,B")), "a b");
    }

    #[test]
    fn normalize_trims_before_comma_replacement() {
        // trailing comma becomes a trailing space, not trimmed away
        assert_eq!(normalize(" java, "), "java ");
    }

    #[test]
    fn skill_list_drops_empties() {
        assert!(skill_list("").is_empty());
        assert!(skill_list(" , ,").is_empty());
        assert_eq!(skill_list("REST API, Docker"), vec!["rest api", "docker"]);
    }

    #[test]
    fn skills_display_rejoins() {
        assert_eq!(skills_display("Python,Django ,  , SQL"), "Python, Django, SQL");
    }
}

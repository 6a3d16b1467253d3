//! Pure logic for the GitHub-to-portfolio bulk importer.
//!
//! The importer pipeline is: list repositories per account, drop forks,
//! send the aggregate to the AI for structuring, then merge each
//! structured draft back with the authoritative URLs and creation date
//! from the raw repository data. The merge matches drafts to
//! repositories by case-insensitive name first and falls back to
//! positional correspondence. This fallback is a documented
//! best-effort: if the AI renames a project beyond recognition the
//! wrong original metadata may attach, and we accept that rather than
//! pretend the match is exact.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::project::{dedup_tags, Category};
use crate::types::{ProjectId, Timestamp};

/// Cover image attached to imported drafts. Repository metadata carries
/// no image, so every draft starts with the same placeholder.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1618401471353-b98afee0b2eb?auto=format&fit=crop&w=800&q=80";

/// A repository as returned by the source-hosting API. Transient import
/// staging data, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// One AI-structured portfolio entry, before the merge step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredProject {
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

/// A project draft staged for review before being committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDraft {
    /// Locally generated id, used only for selection before commit; the
    /// store assigns the authoritative id on insert.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub image_url: String,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub created_at: NaiveDate,
}

/// Drop forked repositories; only original work is eligible for import.
pub fn exclude_forks(repos: Vec<RepoSummary>) -> Vec<RepoSummary> {
    repos.into_iter().filter(|r| !r.fork).collect()
}

/// Merge AI-structured entries with the authoritative repository data.
///
/// For each structured entry, the matching repository is found by
/// case-insensitive name comparison against the draft title, falling
/// back to the entry's position in the aggregate. The repository's
/// `html_url`, `homepage`, and creation date win over whatever the AI
/// produced; a draft with no matching repository at all keeps the AI's
/// URLs and today's date.
pub fn merge_drafts(
    structured: Vec<StructuredProject>,
    repos: &[RepoSummary],
    today: NaiveDate,
) -> Vec<ProjectDraft> {
    structured
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let original = repos
                .iter()
                .find(|r| r.name.eq_ignore_ascii_case(&s.title))
                .or_else(|| repos.get(i));

            let (repo_url, demo_url, created_at) = match original {
                Some(repo) => (
                    Some(repo.html_url.clone()),
                    repo.homepage.clone().filter(|h| !h.is_empty()),
                    repo.created_at.map(|t| t.date_naive()).unwrap_or(today),
                ),
                None => (s.repo_url.clone(), s.demo_url.clone(), today),
            };

            ProjectDraft {
                id: Uuid::new_v4(),
                title: s.title,
                description: s.description,
                category: s.category,
                tags: dedup_tags(s.tags),
                image_url: PLACEHOLDER_IMAGE_URL.to_string(),
                demo_url,
                repo_url,
                created_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_repo(name: &str, fork: bool) -> RepoSummary {
        RepoSummary {
            name: name.to_string(),
            description: Some(format!("{name} description")),
            html_url: format!("https://github.com/user/{name}"),
            homepage: Some(format!("https://{name}.dev")),
            language: Some("Rust".to_string()),
            topics: vec!["web".to_string()],
            fork,
            created_at: Some(Utc.with_ymd_and_hms(2023, 4, 2, 12, 30, 0).unwrap()),
        }
    }

    fn make_structured(title: &str) -> StructuredProject {
        StructuredProject {
            title: title.to_string(),
            description: "AI summary".to_string(),
            category: Category::Utility,
            tags: vec!["Rust".to_string()],
            repo_url: None,
            demo_url: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    // -- exclude_forks tests --

    #[test]
    fn test_forks_are_excluded() {
        let repos = vec![
            make_repo("mine", false),
            make_repo("forked", true),
            make_repo("also-mine", false),
        ];
        let kept = exclude_forks(repos);
        let names: Vec<_> = kept.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["mine", "also-mine"]);
    }

    // -- merge_drafts tests --

    #[test]
    fn test_name_match_attaches_matching_repo_metadata() {
        // Structured entries arrive in a different order than the
        // repository list; the name match must still pair them.
        let repos = vec![make_repo("alpha", false), make_repo("beta", false)];
        let structured = vec![make_structured("Beta"), make_structured("Alpha")];

        let drafts = merge_drafts(structured, &repos, today());

        assert_eq!(drafts[0].repo_url.as_deref(), Some("https://github.com/user/beta"));
        assert_eq!(drafts[1].repo_url.as_deref(), Some("https://github.com/user/alpha"));
        assert_eq!(
            drafts[0].created_at,
            NaiveDate::from_ymd_opt(2023, 4, 2).unwrap()
        );
    }

    #[test]
    fn test_positional_fallback_when_title_renamed() {
        let repos = vec![make_repo("my-shop-engine", false)];
        let structured = vec![make_structured("Neon Commerce Platform")];

        let drafts = merge_drafts(structured, &repos, today());

        // The AI renamed the project; position 0 pairs with repo 0.
        assert_eq!(
            drafts[0].repo_url.as_deref(),
            Some("https://github.com/user/my-shop-engine")
        );
    }

    #[test]
    fn test_no_match_at_all_keeps_ai_urls_and_today() {
        let repos: Vec<RepoSummary> = vec![];
        let mut s = make_structured("Orphan");
        s.repo_url = Some("https://github.com/ai/guess".to_string());
        let drafts = merge_drafts(vec![s], &repos, today());

        assert_eq!(drafts[0].repo_url.as_deref(), Some("https://github.com/ai/guess"));
        assert_eq!(drafts[0].created_at, today());
    }

    #[test]
    fn test_empty_homepage_becomes_none() {
        let mut repo = make_repo("site", false);
        repo.homepage = Some(String::new());
        let drafts = merge_drafts(vec![make_structured("site")], &[repo], today());
        assert_eq!(drafts[0].demo_url, None);
    }

    #[test]
    fn test_drafts_get_placeholder_image_and_fresh_ids() {
        let repos = vec![make_repo("a", false), make_repo("b", false)];
        let drafts = merge_drafts(
            vec![make_structured("a"), make_structured("b")],
            &repos,
            today(),
        );
        assert_eq!(drafts[0].image_url, PLACEHOLDER_IMAGE_URL);
        assert_ne!(drafts[0].id, drafts[1].id);
    }

    #[test]
    fn test_merge_dedups_ai_tags() {
        let mut s = make_structured("a");
        s.tags = vec!["Rust".to_string(), "Rust".to_string(), "Axum".to_string()];
        let drafts = merge_drafts(vec![s], &[make_repo("a", false)], today());
        assert_eq!(drafts[0].tags, vec!["Rust", "Axum"]);
    }
}

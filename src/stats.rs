use crate::github::{RepoSummary, UserProfile};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const TOP_REPOS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopRepo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub url: Option<String>,
}

/// The record written to `github_stats.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub total_stars: u64,
    pub total_forks: u64,
    pub languages: BTreeMap<String, u64>,
    pub top_repos: Vec<TopRepo>,
    /// Always 0 with the REST profile endpoint; kept so existing readers of the
    /// file keep working.
    pub contributions: u64,
    pub last_updated: NaiveDateTime,
}

impl StatsSnapshot {
    /// Build a snapshot purely from the two API responses.
    pub fn aggregate(
        profile: &UserProfile,
        repos: &[RepoSummary],
        last_updated: NaiveDateTime,
    ) -> Self {
        let total_stars = repos.iter().map(|r| r.stargazers_count).sum();
        let total_forks = repos.iter().map(|r| r.forks_count).sum();

        let mut languages = BTreeMap::new();
        let named = repos
            .iter()
            .filter_map(|r| r.language.as_deref())
            .filter(|lang| !lang.is_empty());
        for lang in named {
            *languages.entry(lang.to_string()).or_insert(0) += 1;
        }

        Self {
            public_repos: profile.public_repos,
            followers: profile.followers,
            following: profile.following,
            total_stars,
            total_forks,
            languages,
            top_repos: top_repos(repos),
            contributions: profile.contributions,
            last_updated,
        }
    }
}

/// Highest-starred repositories, ties kept in provider order.
fn top_repos(repos: &[RepoSummary]) -> Vec<TopRepo> {
    let mut sorted: Vec<&RepoSummary> = repos.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));

    sorted
        .into_iter()
        .take(TOP_REPOS)
        .map(|r| TopRepo {
            name: r.name.clone(),
            description: r.description.clone(),
            stars: r.stargazers_count,
            forks: r.forks_count,
            url: r.html_url.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn repo(name: &str, stars: u64, language: Option<&str>) -> RepoSummary {
        RepoSummary {
            name: Some(name.to_string()),
            description: None,
            stargazers_count: stars,
            forks_count: stars / 5,
            language: language.map(str::to_string),
            html_url: Some(format!("https://github.com/octocat/{name}")),
        }
    }

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn empty_repo_list() {
        let profile = UserProfile {
            public_repos: 0,
            followers: 7,
            following: 2,
            contributions: 0,
        };
        let snap = StatsSnapshot::aggregate(&profile, &[], stamp());

        assert_eq!(snap.total_stars, 0);
        assert_eq!(snap.total_forks, 0);
        assert!(snap.languages.is_empty());
        assert!(snap.top_repos.is_empty());
        assert_eq!(snap.followers, 7);
        assert_eq!(snap.following, 2);
    }

    #[test]
    fn no_languages_means_empty_map() {
        let repos = vec![repo("a", 1, None), repo("b", 2, None)];
        let snap = StatsSnapshot::aggregate(&UserProfile::default(), &repos, stamp());
        assert!(snap.languages.is_empty());
        assert_eq!(snap.total_stars, 3);
    }

    #[test]
    fn top_repos_capped_at_five() {
        let repos: Vec<RepoSummary> = (0..1000)
            .map(|i| repo(&format!("r{i}"), i % 37, Some("Rust")))
            .collect();
        let snap = StatsSnapshot::aggregate(&UserProfile::default(), &repos, stamp());

        assert_eq!(snap.top_repos.len(), 5);
        assert!(snap.top_repos.windows(2).all(|w| w[0].stars >= w[1].stars));
        assert_eq!(snap.top_repos[0].stars, 36);
        assert_eq!(snap.languages["Rust"], 1000);
        assert_eq!(
            snap.total_stars,
            repos.iter().map(|r| r.stargazers_count).sum::<u64>()
        );
    }

    #[test]
    fn mixed_stars_and_languages() {
        let repos = vec![
            repo("ten", 10, Some("Python")),
            repo("fifty-a", 50, Some("Go")),
            repo("five", 5, Some("Python")),
            repo("fifty-b", 50, None),
            repo("zero", 0, Some("JS")),
        ];
        let snap = StatsSnapshot::aggregate(&UserProfile::default(), &repos, stamp());

        assert_eq!(snap.total_stars, 115);
        let names: Vec<&str> = snap
            .top_repos
            .iter()
            .filter_map(|r| r.name.as_deref())
            .collect();
        assert_eq!(names, ["fifty-a", "fifty-b", "ten", "five", "zero"]);

        let expected: BTreeMap<String, u64> = [("Python", 2), ("Go", 1), ("JS", 1)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(snap.languages, expected);
    }

    #[test]
    fn top_repo_projection() {
        let mut r = repo("site", 4, Some("TypeScript"));
        r.description = Some("personal site".to_string());
        r.forks_count = 9;
        let snap = StatsSnapshot::aggregate(&UserProfile::default(), &[r], stamp());

        assert_eq!(
            snap.top_repos,
            vec![TopRepo {
                name: Some("site".to_string()),
                description: Some("personal site".to_string()),
                stars: 4,
                forks: 9,
                url: Some("https://github.com/octocat/site".to_string()),
            }]
        );
    }

    #[test]
    fn empty_language_string_is_not_counted() {
        let repos = vec![repo("blank", 2, Some("")), repo("none", 1, None)];
        let snap = StatsSnapshot::aggregate(&UserProfile::default(), &repos, stamp());
        assert!(snap.languages.is_empty());
    }

    #[test]
    fn repo_without_name_or_url_is_kept() {
        let mut r = repo("anon", 8, Some("C"));
        r.name = None;
        r.html_url = None;
        let snap = StatsSnapshot::aggregate(&UserProfile::default(), &[r], stamp());

        assert_eq!(snap.top_repos.len(), 1);
        assert_eq!(snap.top_repos[0].name, None);
        assert_eq!(snap.top_repos[0].url, None);
        assert_eq!(snap.top_repos[0].stars, 8);
    }
}

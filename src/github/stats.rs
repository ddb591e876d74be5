use super::{FetchError, FetchState, GithubApi, Profile, RepoQuery, Repository};
use crate::config::SiteConfig;

/// Commits credited per repository. GitHub has no cheap total-commit
/// endpoint, so the summary multiplies instead of asking every repository.
pub const COMMITS_PER_REPO_ESTIMATE: u32 = 20;

/// Numbers shown on the About card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSummary {
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub total_stars: u32,
    /// Not a real count: `repositories fetched × COMMITS_PER_REPO_ESTIMATE`.
    pub estimated_commits: u32,
}

impl StatsSummary {
    /// Shown whenever either request fails.
    pub const FALLBACK: StatsSummary = StatsSummary {
        public_repos: 8,
        followers: 15,
        following: 25,
        total_stars: 12,
        estimated_commits: 150,
    };
}

pub fn summarize(profile: &Profile, repos: &[Repository]) -> StatsSummary {
    let repo_count = u32::try_from(repos.len()).unwrap_or(u32::MAX);
    StatsSummary {
        public_repos: profile.public_repos,
        followers: profile.followers,
        following: profile.following,
        total_stars: repos
            .iter()
            .fold(0u32, |acc, r| acc.saturating_add(r.stargazers_count)),
        estimated_commits: repo_count.saturating_mul(COMMITS_PER_REPO_ESTIMATE),
    }
}

async fn fetch_summary<A: GithubApi>(
    api: &A,
    user: &str,
    per_page: u32,
) -> Result<StatsSummary, FetchError> {
    let profile = api.profile(user).await?;
    let repos = api.repos(user, RepoQuery::unsorted(per_page)).await?;
    Ok(summarize(&profile, &repos))
}

/// Profile then repositories, in that order. Any failure yields
/// [`StatsSummary::FALLBACK`] in full alongside the error message.
pub async fn load_stats<A: GithubApi>(
    api: &A,
    user: &str,
    config: &SiteConfig,
) -> FetchState<Option<StatsSummary>> {
    match fetch_summary(api, user, config.stats_page_size).await {
        Ok(summary) => FetchState::ready(Some(summary)),
        Err(e) => {
            log::error!("error fetching GitHub stats for {user}: {e}");
            FetchState::failed(Some(StatsSummary::FALLBACK), &e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::{profile_fixture, repo, FakeApi};

    fn repos() -> Vec<Repository> {
        vec![
            repo(1, "site", Some("TypeScript"), &[], 5),
            repo(2, "bot", Some("Python"), &["discord"], 0),
            repo(3, "game", Some("Lua"), &["mta"], 9),
        ]
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(&profile_fixture(), &repos());
        assert_eq!(
            summary,
            StatsSummary {
                public_repos: 3,
                followers: 40,
                following: 7,
                total_stars: 14,
                estimated_commits: 60,
            }
        );
    }

    #[test]
    fn test_summarize_without_repositories() {
        let summary = summarize(&profile_fixture(), &[]);
        assert_eq!(summary.total_stars, 0);
        assert_eq!(summary.estimated_commits, 0);
    }

    #[tokio::test]
    async fn test_load_stats() {
        let api = FakeApi::new()
            .with_profile(Ok(profile_fixture()))
            .with_repos(Ok(repos()));
        let state = load_stats(&api, "al7arthy", &SiteConfig::default()).await;

        assert!(!state.loading);
        assert_eq!(state.error, None);
        let summary = state.data.expect("stats should be present");
        assert_eq!(summary.total_stars, 5 + 9);
        assert_eq!(summary.estimated_commits, 3 * 20);
        assert_eq!(*api.queries.borrow(), vec![RepoQuery::unsorted(100)]);
    }

    #[tokio::test]
    async fn test_profile_failure_uses_fallback() {
        let api = FakeApi::new()
            .with_profile(Err(FetchError::Status(403)))
            .with_repos(Ok(repos()));
        let state = load_stats(&api, "al7arthy", &SiteConfig::default()).await;

        assert_eq!(state.data, Some(StatsSummary::FALLBACK));
        assert_eq!(state.error.as_deref(), Some("GitHub API error: 403"));
        // the repository request is never made
        assert_eq!(api.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_repos_failure_discards_profile() {
        let api = FakeApi::new()
            .with_profile(Ok(profile_fixture()))
            .with_repos(Err(FetchError::Parse("invalid type".to_string())));
        let state = load_stats(&api, "al7arthy", &SiteConfig::default()).await;

        assert!(!state.loading);
        assert_eq!(
            state.data,
            Some(StatsSummary {
                public_repos: 8,
                followers: 15,
                following: 25,
                total_stars: 12,
                estimated_commits: 150,
            })
        );
        assert!(state.is_err());
    }
}

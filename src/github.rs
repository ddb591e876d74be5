//! Public GitHub data behind the About stats, the hero profile and the
//! projects grid.
//!
//! Every loader settles into a [`FetchState`] with a defined value on both
//! paths, so the page never has to special-case a half-loaded state. Errors
//! reach the page only as a message string.

mod profile;
mod projects;
mod stats;
mod types;

pub use profile::load_profile;
pub use projects::{
    card_gradient, classify, load_projects, process_repositories, Project, ProjectFilter,
    ProjectKind, CARD_GRADIENTS,
};
pub use stats::{load_stats, summarize, StatsSummary, COMMITS_PER_REPO_ESTIMATE};
pub use types::{Profile, Repository};

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("GitHub API error: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("GitHub data is only fetched from the browser")]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoSort {
    Updated,
}

/// Query parameters for `/users/{id}/repos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoQuery {
    pub sort: Option<RepoSort>,
    pub per_page: u32,
}

impl RepoQuery {
    pub fn recently_updated(per_page: u32) -> Self {
        Self {
            sort: Some(RepoSort::Updated),
            per_page,
        }
    }

    pub fn unsorted(per_page: u32) -> Self {
        Self {
            sort: None,
            per_page,
        }
    }

    fn to_query_string(self) -> String {
        match self.sort {
            Some(RepoSort::Updated) => format!("sort=updated&per_page={}", self.per_page),
            None => format!("per_page={}", self.per_page),
        }
    }
}

/// The two GitHub reads the site needs.
#[allow(async_fn_in_trait)]
pub trait GithubApi {
    async fn profile(&self, user: &str) -> Result<Profile, FetchError>;

    async fn repos(&self, user: &str, query: RepoQuery) -> Result<Vec<Repository>, FetchError>;
}

/// HTTP implementation rooted at either the GitHub REST API or a
/// same-origin route that mirrors its paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubClient {
    base: String,
}

impl GithubClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn profile_url(&self, user: &str) -> String {
        format!("{}/users/{user}", self.base)
    }

    pub fn repos_url(&self, user: &str, query: RepoQuery) -> String {
        format!("{}/users/{user}/repos?{}", self.base, query.to_query_string())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(FetchError::Status(resp.status()));
            }
            resp.json::<T>()
                .await
                .map_err(|e| FetchError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(FetchError::Unavailable)
        }
    }
}

impl GithubApi for GithubClient {
    async fn profile(&self, user: &str) -> Result<Profile, FetchError> {
        self.get_json(&self.profile_url(user)).await
    }

    async fn repos(&self, user: &str, query: RepoQuery) -> Result<Vec<Repository>, FetchError> {
        self.get_json(&self.repos_url(user, query)).await
    }
}

/// What a loader hands back to the page.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> FetchState<T> {
    pub fn pending() -> Self {
        Self {
            data: T::default(),
            loading: true,
            error: None,
        }
    }

    /// Settled without a request having been made.
    pub fn idle() -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    pub fn ready(data: T) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    pub fn failed(data: T, error: &FetchError) -> Self {
        Self {
            data,
            loading: false,
            error: Some(error.to_string()),
        }
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

/// Hands out tickets so that only the most recently started request may
/// commit its result.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    latest: Arc<AtomicU64>,
    id: u64,
}

impl RequestGeneration {
    pub fn next(&self) -> RequestTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            latest: self.latest.clone(),
            id,
        }
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }

    /// Stores `next` in `slot` if no newer request has started since this
    /// ticket was issued. Returns whether it was stored.
    pub fn commit<T>(&self, slot: &mut FetchState<T>, next: FetchState<T>) -> bool {
        if !self.is_current() {
            return false;
        }
        *slot = next;
        true
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};

    use serde_json::json;

    use super::*;

    /// Canned responses plus a record of the requests made.
    #[derive(Default)]
    pub struct FakeApi {
        pub profile: Option<Result<Profile, FetchError>>,
        pub repos: Option<Result<Vec<Repository>, FetchError>>,
        pub calls: Cell<usize>,
        pub queries: RefCell<Vec<RepoQuery>>,
    }

    impl FakeApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_profile(mut self, profile: Result<Profile, FetchError>) -> Self {
            self.profile = Some(profile);
            self
        }

        pub fn with_repos(mut self, repos: Result<Vec<Repository>, FetchError>) -> Self {
            self.repos = Some(repos);
            self
        }
    }

    impl GithubApi for FakeApi {
        async fn profile(&self, _user: &str) -> Result<Profile, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.profile.clone().unwrap_or(Err(FetchError::Status(404)))
        }

        async fn repos(&self, _user: &str, query: RepoQuery) -> Result<Vec<Repository>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.queries.borrow_mut().push(query);
            self.repos.clone().unwrap_or(Err(FetchError::Status(404)))
        }
    }

    pub fn profile_fixture() -> Profile {
        serde_json::from_value(json!({
            "login": "al7arthy",
            "avatar_url": "https://avatars.githubusercontent.com/u/1",
            "name": "Ahmed Alharthi",
            "bio": "Developer",
            "public_repos": 3,
            "followers": 40,
            "following": 7,
            "hireable": true,
            "location": "Taif",
            "company": null
        }))
        .expect("profile fixture should parse")
    }

    pub fn repo(id: u64, name: &str, language: Option<&str>, topics: &[&str], stars: u32) -> Repository {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "description": format!("{name} description"),
            "html_url": format!("https://github.com/al7arthy/{name}"),
            "homepage": null,
            "language": language,
            "topics": topics,
            "stargazers_count": stars,
            "forks_count": 1,
            "updated_at": "2024-03-05T10:20:30Z",
            "created_at": "2023-01-01T00:00:00Z"
        }))
        .expect("repository fixture should parse")
    }
}

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A GitHub user as returned by `/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub login: String,
    pub avatar_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub hireable: Option<bool>,
    pub location: Option<String>,
    pub company: Option<String>,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }

    pub fn is_hireable(&self) -> bool {
        self.hireable.unwrap_or(false)
    }
}

/// One entry of `/users/{id}/repos`, kept as received.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_display_name() {
        let mut profile: Profile = serde_json::from_str(
            r#"{
                "login": "octocat",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231",
                "name": "The Octocat",
                "bio": null,
                "public_repos": 8,
                "followers": 20,
                "following": 9,
                "hireable": null,
                "location": "San Francisco",
                "company": "@github"
            }"#,
        )
        .expect("profile should parse");
        assert_eq!(profile.display_name(), "The Octocat");
        assert!(!profile.is_hireable());

        profile.name = None;
        assert_eq!(profile.display_name(), "octocat");
    }

    #[test]
    fn test_repository_ignores_unknown_fields() {
        let repo: Repository = serde_json::from_str(
            r#"{
                "id": 42,
                "node_id": "R_kgDO",
                "name": "dotfiles",
                "full_name": "octocat/dotfiles",
                "description": null,
                "html_url": "https://github.com/octocat/dotfiles",
                "homepage": "",
                "language": null,
                "stargazers_count": 0,
                "forks_count": 0,
                "updated_at": "2024-11-02T08:00:00Z",
                "created_at": "2020-01-01T00:00:00Z"
            }"#,
        )
        .expect("repository should parse");
        assert_eq!(repo.id, 42);
        assert!(repo.topics.is_empty());
        assert_eq!(repo.homepage.as_deref(), Some(""));
    }
}

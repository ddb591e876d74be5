use serde::{Deserialize, Serialize};

pub const DEFAULT_GITHUB_USER: &str = "al7arthy";
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Site-wide settings handed to the component tree through context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub github_user: String,
    pub api_base: String,
    /// Root for `/users/{id}`. Point it at a same-origin mirror of the
    /// GitHub paths to keep profile reads off the rate limit.
    pub profile_base: String,
    /// Repositories requested for the projects grid, most recently updated first.
    pub projects_page_size: u32,
    /// Repositories requested when summing stars for the stats card.
    pub stats_page_size: u32,
    pub project_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            github_user: DEFAULT_GITHUB_USER.to_string(),
            api_base: GITHUB_API_BASE.to_string(),
            profile_base: GITHUB_API_BASE.to_string(),
            projects_page_size: 20,
            stats_page_size: 100,
            project_limit: 6,
        }
    }
}

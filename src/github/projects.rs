use super::{FetchError, FetchState, GithubApi, RepoQuery, Repository};
use crate::config::SiteConfig;

/// Card backgrounds, picked by `repository id % len` so a project keeps its
/// colour across reloads.
pub const CARD_GRADIENTS: [&str; 10] = [
    "from-blue-500 to-purple-600",
    "from-green-500 to-blue-600",
    "from-purple-500 to-pink-600",
    "from-indigo-500 to-blue-600",
    "from-red-500 to-orange-600",
    "from-teal-500 to-cyan-600",
    "from-orange-500 to-red-600",
    "from-emerald-500 to-teal-600",
    "from-violet-500 to-purple-600",
    "from-cyan-500 to-blue-600",
];

const NO_DESCRIPTION: &str = "No description available";
const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Broad category of a project, which decides its card icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    Game,
    Bot,
    Model3d,
    Tool,
    Mobile,
    Web,
    Markup,
    Database,
    Generic,
}

impl ProjectKind {
    /// Font Awesome classes for the card icon.
    pub fn icon_class(self) -> &'static str {
        match self {
            ProjectKind::Game => "fa-solid fa-gamepad",
            ProjectKind::Bot => "fa-solid fa-robot",
            ProjectKind::Model3d => "fa-solid fa-cube",
            ProjectKind::Tool => "fa-solid fa-screwdriver-wrench",
            ProjectKind::Mobile => "fa-solid fa-mobile-screen-button",
            ProjectKind::Web | ProjectKind::Generic => "fa-solid fa-laptop-code",
            ProjectKind::Markup => "fa-solid fa-code",
            ProjectKind::Database => "fa-solid fa-database",
        }
    }
}

// Checked in order; the first rule with a matching topic wins.
const TOPIC_RULES: [(&[&str], ProjectKind); 5] = [
    (&["game", "gaming", "mta"], ProjectKind::Game),
    (&["bot", "discord"], ProjectKind::Bot),
    (&["3d", "blender", "modeling"], ProjectKind::Model3d),
    (&["automation", "tool", "script"], ProjectKind::Tool),
    (&["mobile", "react-native", "ui"], ProjectKind::Mobile),
];

/// Topic rules first, then the primary language. Case-insensitive.
pub fn classify(language: Option<&str>, topics: &[String]) -> ProjectKind {
    let topics = topics
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>();
    let by_topic = TOPIC_RULES.iter().find_map(|(names, kind)| {
        names
            .iter()
            .any(|name| topics.iter().any(|t| t == name))
            .then_some(*kind)
    });
    if let Some(kind) = by_topic {
        return kind;
    }

    match language.map(str::to_lowercase).as_deref() {
        Some("javascript" | "typescript" | "react") => ProjectKind::Web,
        Some("python") => ProjectKind::Tool,
        Some("lua") => ProjectKind::Game,
        Some("java" | "kotlin") => ProjectKind::Mobile,
        Some("sql" | "mysql") => ProjectKind::Database,
        Some("html" | "css") => ProjectKind::Markup,
        _ => ProjectKind::Generic,
    }
}

pub fn card_gradient(id: u64) -> &'static str {
    CARD_GRADIENTS[(id % CARD_GRADIENTS.len() as u64) as usize]
}

/// A repository prepared for a project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub github: String,
    pub homepage: Option<String>,
    pub language: String,
    pub tags: Vec<String>,
    pub stars: u32,
    pub forks: u32,
    /// `DD/MM/YYYY`, UTC.
    pub updated: String,
    pub kind: ProjectKind,
    pub gradient: &'static str,
}

impl Project {
    /// `my-cool-repo` reads as `my cool repo`.
    pub fn display_name(&self) -> String {
        self.name.replace('-', " ")
    }
}

impl From<Repository> for Project {
    fn from(repo: Repository) -> Self {
        let kind = classify(repo.language.as_deref(), &repo.topics);
        let tags = repo
            .language
            .iter()
            .chain(repo.topics.iter())
            .filter(|t| !t.is_empty())
            .cloned()
            .collect();
        Project {
            id: repo.id,
            description: repo
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            github: repo.html_url,
            homepage: repo.homepage.filter(|h| !h.trim().is_empty()),
            language: repo
                .language
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
            tags,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated: repo.updated_at.format("%d/%m/%Y").to_string(),
            kind,
            gradient: card_gradient(repo.id),
            name: repo.name,
        }
    }
}

/// Drops dotfile repositories and the `user/user` profile repository, keeps
/// at most `limit` in the order given, and maps the rest to cards.
pub fn process_repositories(repos: Vec<Repository>, user: &str, limit: usize) -> Vec<Project> {
    repos
        .into_iter()
        .filter(|repo| !repo.name.starts_with('.') && repo.name != user)
        .take(limit)
        .map(Project::from)
        .collect()
}

async fn fetch_projects<A: GithubApi>(
    api: &A,
    user: &str,
    config: &SiteConfig,
) -> Result<Vec<Project>, FetchError> {
    let repos = api
        .repos(user, RepoQuery::recently_updated(config.projects_page_size))
        .await?;
    Ok(process_repositories(repos, user, config.project_limit))
}

/// Most recently updated repositories as cards. On failure the list is empty.
pub async fn load_projects<A: GithubApi>(
    api: &A,
    user: &str,
    config: &SiteConfig,
) -> FetchState<Vec<Project>> {
    match fetch_projects(api, user, config).await {
        Ok(projects) => {
            log::debug!("loaded {} projects for {user}", projects.len());
            FetchState::ready(projects)
        }
        Err(e) => {
            log::error!("failed to fetch projects for {user}: {e}");
            FetchState::failed(Vec::new(), &e)
        }
    }
}

/// Tag filters above the projects grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Web,
    Games,
    Tools,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Web,
        ProjectFilter::Games,
        ProjectFilter::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Web => "Web",
            ProjectFilter::Games => "Games",
            ProjectFilter::Tools => "Tools",
        }
    }

    fn tag(self) -> Option<&'static str> {
        match self {
            ProjectFilter::All => None,
            ProjectFilter::Web => Some("web"),
            ProjectFilter::Games => Some("games"),
            ProjectFilter::Tools => Some("tools"),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self.tag() {
            None => true,
            Some(tag) => project.tags.iter().any(|t| t == tag),
        }
    }
}

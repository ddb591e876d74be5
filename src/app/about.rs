use leptos::prelude::*;

use super::{
    hooks::{use_github_stats, use_reveal},
    reveal_class,
};
use crate::{config::SiteConfig, github::StatsSummary};

const SKILLS: [&str; 15] = [
    "Node.js",
    "React",
    "React Native",
    "Next.js",
    "Supabase",
    "Python",
    "Lua",
    "MySQL",
    "MongoDB",
    "SQLite",
    "Godot",
    "Blender",
    "Figma",
    "Discord Bots",
    "Ubuntu",
];

const BADGE_COLORS: [&str; 7] = [
    "bg-blue-100 dark:bg-blue-900 text-blue-800 dark:text-blue-200",
    "bg-green-100 dark:bg-green-900 text-green-800 dark:text-green-200",
    "bg-yellow-100 dark:bg-yellow-900 text-yellow-800 dark:text-yellow-200",
    "bg-purple-100 dark:bg-purple-900 text-purple-800 dark:text-purple-200",
    "bg-red-100 dark:bg-red-900 text-red-800 dark:text-red-200",
    "bg-indigo-100 dark:bg-indigo-900 text-indigo-800 dark:text-indigo-200",
    "bg-pink-100 dark:bg-pink-900 text-pink-800 dark:text-pink-200",
];

#[component]
pub fn About() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let stats = use_github_stats(Signal::stored(config.github_user));
    let (title_ref, title_visible) = use_reveal();
    let (left_ref, left_visible) = use_reveal();
    let (right_ref, right_visible) = use_reveal();

    view! {
        <section id="about" class="py-20 bg-gray-100 dark:bg-slate-800">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div
                    node_ref=title_ref
                    class=move || reveal_class("text-center mb-12 fade-in-up", title_visible.get())
                >
                    <h2 class="text-3xl font-bold">"About Me"</h2>
                </div>
                <div class="flex flex-col md:flex-row gap-12">
                    <div
                        node_ref=left_ref
                        class=move || reveal_class("md:w-1/2 fade-in-left", left_visible.get())
                    >
                        <h3 class="text-2xl font-semibold mb-4">"Who I am"</h3>
                        <p class="text-gray-600 dark:text-gray-300 mb-6">
                            "A developer who enjoys building for the web, games and the tools in between."
                        </p>
                        <h3 class="text-2xl font-semibold mb-4">"Education"</h3>
                        <div class="bg-white dark:bg-slate-700 p-6 rounded-lg shadow-md">
                            <div class="flex justify-between items-center mb-2">
                                <h4 class="text-lg font-medium">"Taif University"</h4>
                                <span class="text-sm text-gray-500 dark:text-gray-400">
                                    "2023 - Present"
                                </span>
                            </div>
                            <p class="text-gray-600 dark:text-gray-300">"Computer Science"</p>
                        </div>
                    </div>
                    <div
                        node_ref=right_ref
                        class=move || reveal_class("md:w-1/2 fade-in-right", right_visible.get())
                    >
                        <h3 class="text-2xl font-semibold mb-4">"Skills"</h3>
                        <div class="flex flex-wrap gap-3 mb-8">
                            {SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    let class = format!(
                                        "skill-badge px-4 py-2 rounded-full text-sm font-medium {}",
                                        BADGE_COLORS[i % BADGE_COLORS.len()],
                                    );
                                    view! { <span class=class>{*skill}</span> }
                                })
                                .collect_view()}
                        </div>
                        <h3 class="text-2xl font-semibold mb-4">"GitHub Stats"</h3>
                        <div class="bg-white dark:bg-slate-700 p-6 rounded-lg shadow-md">
                            <div class="flex justify-between items-center">
                                <Stat
                                    label="Repositories"
                                    loading=Signal::derive(move || stats.with(|s| s.loading))
                                    value=Signal::derive(move || {
                                        stats.with(|s| s.data.map(|d| d.public_repos.to_string()))
                                    })
                                />
                                <Stat
                                    label="Commits"
                                    loading=Signal::derive(move || stats.with(|s| s.loading))
                                    value=Signal::derive(move || {
                                        stats.with(|s| s.data.map(commits_label))
                                    })
                                />
                                <Stat
                                    label="Stars"
                                    loading=Signal::derive(move || stats.with(|s| s.loading))
                                    value=Signal::derive(move || {
                                        stats.with(|s| s.data.map(|d| d.total_stars.to_string()))
                                    })
                                />
                                <Stat
                                    label="Followers"
                                    loading=Signal::derive(move || stats.with(|s| s.loading))
                                    value=Signal::derive(move || {
                                        stats.with(|s| s.data.map(|d| d.followers.to_string()))
                                    })
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Commits are an estimate, so the count reads as a lower bound.
fn commits_label(stats: StatsSummary) -> String {
    format!("{}+", stats.estimated_commits)
}

#[component]
fn Stat(
    label: &'static str,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-3xl font-bold">
                {move || {
                    if loading.get() {
                        view! { <i class="fa-solid fa-spinner fa-spin text-blue-600"></i> }
                            .into_any()
                    } else {
                        value.get().unwrap_or_else(|| "0".to_string()).into_any()
                    }
                }}
            </div>
            <div class="text-gray-500 dark:text-gray-400">{label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commits_label_marks_estimate() {
        assert_eq!(commits_label(StatsSummary::FALLBACK), "150+");
    }
}

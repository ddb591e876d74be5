use leptos::prelude::*;

use super::{
    hooks::{use_github_projects, use_reveal},
    reveal_class,
};
use crate::{
    config::SiteConfig,
    github::{Project, ProjectFilter},
};

const FILTER_BUTTON: &str = "px-4 py-2 mx-1 rounded-full transition-colors duration-300";

#[component]
pub fn Projects() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let projects = use_github_projects(Signal::stored(config.github_user.clone()));
    let (filter, set_filter) = signal(ProjectFilter::default());
    let (title_ref, title_visible) = use_reveal();
    let (grid_ref, grid_visible) = use_reveal();

    let visible_projects = move || {
        let filter = filter.get();
        projects.with(|s| {
            s.data
                .iter()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section id="projects" class="py-20 bg-gray-100 dark:bg-slate-800">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div
                    node_ref=title_ref
                    class=move || reveal_class("text-center mb-8 fade-in-up", title_visible.get())
                >
                    <h2 class="text-3xl font-bold mb-12">"Projects"</h2>
                    <div class="flex justify-center">
                        {ProjectFilter::ALL
                            .into_iter()
                            .map(|f| {
                                view! {
                                    <button
                                        class=move || {
                                            if filter.get() == f {
                                                format!("{FILTER_BUTTON} bg-blue-600 text-white")
                                            } else {
                                                format!("{FILTER_BUTTON} bg-white dark:bg-slate-700")
                                            }
                                        }
                                        on:click=move |_| set_filter.set(f)
                                    >
                                        {f.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div
                    node_ref=grid_ref
                    class=move || reveal_class("fade-in-up", grid_visible.get())
                >
                    {move || {
                        let (loading, error) = projects.with(|s| (s.loading, s.error.clone()));
                        if loading {
                            view! {
                                <div class="flex justify-center py-12">
                                    <i class="fa-solid fa-spinner fa-spin text-4xl text-blue-600"></i>
                                </div>
                            }
                                .into_any()
                        } else if let Some(error) = error {
                            view! {
                                <p class="text-center text-red-600 dark:text-red-400">
                                    "Could not load projects: " {error}
                                </p>
                            }
                                .into_any()
                        } else {
                            let cards = visible_projects();
                            if cards.is_empty() {
                                view! {
                                    <p class="text-center text-gray-500">"No projects to show yet."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                                        {cards
                                            .into_iter()
                                            .map(|project| view! { <ProjectCard project /> })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let banner = format!(
        "h-48 bg-gradient-to-r {} flex items-center justify-center",
        project.gradient
    );
    let icon = format!("{} text-6xl text-white", project.kind.icon_class());
    let name = project.display_name();

    view! {
        <div class="project-card bg-white dark:bg-slate-700 rounded-lg shadow-md overflow-hidden">
            <div class=banner>
                <i class=icon></i>
            </div>
            <div class="p-6">
                <div class="flex justify-between items-start mb-2">
                    <h3 class="text-xl font-semibold capitalize">{name}</h3>
                    <div class="flex gap-3 text-sm text-gray-500 dark:text-gray-400">
                        {(project.stars > 0)
                            .then(|| {
                                view! {
                                    <span>
                                        <i class="fa-solid fa-star mr-1"></i>
                                        {project.stars}
                                    </span>
                                }
                            })}
                        {(project.forks > 0)
                            .then(|| {
                                view! {
                                    <span>
                                        <i class="fa-solid fa-code-branch mr-1"></i>
                                        {project.forks}
                                    </span>
                                }
                            })}
                    </div>
                </div>
                <p class="text-gray-600 dark:text-gray-300 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 rounded text-xs bg-blue-100 dark:bg-blue-900 text-blue-800 dark:text-blue-200">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex justify-between items-center">
                    <div class="flex gap-4">
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-blue-600 dark:text-blue-400"
                        >
                            <i class="fa-brands fa-github mr-1"></i>
                            "Code"
                        </a>
                        {project
                            .homepage
                            .map(|homepage| {
                                view! {
                                    <a
                                        href=homepage
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-blue-600 dark:text-blue-400"
                                    >
                                        <i class="fa-solid fa-up-right-from-square mr-1"></i>
                                        "Demo"
                                    </a>
                                }
                            })}
                    </div>
                    <span class="text-xs text-gray-500 dark:text-gray-400">
                        "Updated: " {project.updated}
                    </span>
                </div>
            </div>
        </div>
    }
}

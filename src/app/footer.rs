use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::{contact::EMAIL, hooks::use_reveal, reveal_class};
use crate::config::SiteConfig;

const BUILD_TIME: &str = env!("BUILD_TIME");

fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (footer_ref, footer_visible) = use_reveal();

    view! {
        <footer class="bg-gray-100 dark:bg-slate-800 py-8">
            <div
                node_ref=footer_ref
                class=move || {
                    reveal_class(
                        "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row justify-between items-center fade-in-up",
                        footer_visible.get(),
                    )
                }
            >
                <p class="mb-4 md:mb-0 text-gray-600 dark:text-gray-300 text-center md:text-start">
                    {format!("© {} Ahmed Alharthi. All rights reserved.", copyright_year())}
                </p>
                <div class="flex gap-6 text-2xl text-gray-600 dark:text-gray-300">
                    <a
                        href=format!("https://github.com/{}", config.github_user)
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub"
                    >
                        <i class="fa-brands fa-github"></i>
                    </a>
                    <a href=format!("mailto:{EMAIL}") aria-label="Email">
                        <i class="fa-solid fa-envelope"></i>
                    </a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year_from_build_time() {
        assert!(copyright_year() >= 2024);
    }
}

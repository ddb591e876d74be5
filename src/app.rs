mod about;
mod contact;
mod footer;
pub mod hooks;
mod navbar;
mod projects;
mod services;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{config::SiteConfig, prefs::BrowserPreferences};

use about::About;
use contact::Contact;
use footer::Footer;
use hooks::{use_github_profile, use_reveal};
use navbar::Navbar;
use projects::Projects;
use services::Services;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" dir="ltr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-white text-slate-900 dark:bg-slate-900 dark:text-gray-100 transition-colors duration-300">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::default());
    provide_context(BrowserPreferences::default());

    view! {
        <Title formatter=|title| format!("Ahmed Alharthi - {title}") />
        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Services />
        <Projects />
        <Contact />
    }
}

/// `base` plus `visible` once the element has scrolled into view.
pub(crate) fn reveal_class(base: &'static str, visible: bool) -> String {
    if visible {
        format!("{base} visible")
    } else {
        base.to_string()
    }
}

#[component]
fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let user = Signal::stored(config.github_user.clone());
    let profile = use_github_profile(user);
    let (left_ref, left_visible) = use_reveal();
    let (right_ref, right_visible) = use_reveal();

    view! {
        <section id="home" class="min-h-screen flex items-center pt-16">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col-reverse md:flex-row items-center gap-12">
                <div
                    node_ref=left_ref
                    class=move || reveal_class("md:w-1/2 fade-in-left", left_visible.get())
                >
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">
                        "Hi, I'm "
                        <span class="gradient-text">
                            {move || {
                                profile
                                    .with(|s| {
                                        s.data.as_ref().map(|p| p.display_name().to_string())
                                    })
                                    .unwrap_or_else(|| "Ahmed Alharthi".to_string())
                            }}
                        </span>
                    </h1>
                    <p class="text-xl text-gray-600 dark:text-gray-300 mb-8">
                        {move || {
                            profile
                                .with(|s| s.data.as_ref().and_then(|p| p.bio.clone()))
                                .unwrap_or_else(|| {
                                    "Developer building web apps, games, bots and tools.".to_string()
                                })
                        }}
                    </p>
                    {move || {
                        profile
                            .with(|s| s.data.as_ref().is_some_and(|p| p.is_hireable()))
                            .then(|| {
                                view! {
                                    <span class="inline-block mb-6 px-3 py-1 rounded-full text-sm bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200">
                                        "Available for hire"
                                    </span>
                                }
                            })
                    }}
                    <div class="flex gap-4">
                        <a href="#projects" class="px-6 py-3 rounded-lg bg-blue-600 text-white hover:bg-blue-700">
                            "View my work"
                        </a>
                        <a href="#contact" class="px-6 py-3 rounded-lg border border-blue-600 text-blue-600 dark:text-blue-400">
                            "Get in touch"
                        </a>
                    </div>
                </div>
                <div
                    node_ref=right_ref
                    class=move || reveal_class("md:w-1/2 flex justify-center fade-in-right", right_visible.get())
                >
                    {move || {
                        profile
                            .with(|s| s.data.as_ref().map(|p| p.avatar_url.clone()))
                            .map(|src| {
                                view! {
                                    <img
                                        src=src
                                        alt="Profile picture"
                                        class="w-64 h-64 rounded-full shadow-xl object-cover"
                                    />
                                }
                            })
                    }}
                </div>
            </div>
        </section>
    }
}

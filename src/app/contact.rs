use leptos::prelude::*;

use super::{hooks::use_reveal, reveal_class};
use crate::config::SiteConfig;

pub(crate) const EMAIL: &str = "alharthy.ahmed@outlook.sa";
const WEBSITE: &str = "https://al7arthy.dev";

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let github = format!("https://github.com/{}", config.github_user);
    let (title_ref, title_visible) = use_reveal();
    let (body_ref, body_visible) = use_reveal();

    view! {
        <section id="contact" class="py-20">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div
                    node_ref=title_ref
                    class=move || reveal_class("text-center mb-12 fade-in-up", title_visible.get())
                >
                    <h2 class="text-3xl font-bold">"Get In Touch"</h2>
                </div>
                <div
                    node_ref=body_ref
                    class=move || reveal_class("fade-in-up", body_visible.get())
                >
                    <p class="text-center text-gray-600 dark:text-gray-300 mb-8">
                        "Have a project in mind or just want to say hi? My inbox is open."
                    </p>
                    <div class="grid md:grid-cols-3 gap-6">
                        <ContactCard
                            icon="fa-solid fa-envelope"
                            label="Email"
                            href=format!("mailto:{EMAIL}")
                            text=EMAIL.to_string()
                        />
                        <ContactCard
                            icon="fa-solid fa-globe"
                            label="Website"
                            href=WEBSITE.to_string()
                            text="al7arthy.dev".to_string()
                        />
                        <ContactCard
                            icon="fa-brands fa-github"
                            label="GitHub"
                            href=github
                            text=config.github_user
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(icon: &'static str, label: &'static str, href: String, text: String) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="flex flex-col items-center p-6 rounded-lg bg-gray-100 dark:bg-slate-800 hover:shadow-lg transition-shadow duration-300"
        >
            <i class=format!("{icon} text-3xl text-blue-600 dark:text-blue-400 mb-3")></i>
            <span class="font-semibold">{label}</span>
            <span class="text-sm text-gray-600 dark:text-gray-300">{text}</span>
        </a>
    }
}

use leptos::prelude::*;

use super::{hooks::use_reveal, reveal_class};

struct Service {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    color: &'static str,
}

static SERVICES: [Service; 6] = [
    Service {
        icon: "fa-solid fa-code text-blue-600 dark:text-blue-400",
        title: "Web Development",
        text: "Responsive sites and web apps with modern frameworks.",
        color: "bg-blue-100 dark:bg-blue-900",
    },
    Service {
        icon: "fa-solid fa-gamepad text-green-600 dark:text-green-400",
        title: "Game Development",
        text: "Game modes, scripts and prototypes for multiplayer servers and Godot.",
        color: "bg-green-100 dark:bg-green-900",
    },
    Service {
        icon: "fa-solid fa-cube text-yellow-600 dark:text-yellow-400",
        title: "3D Modeling",
        text: "Models and scenes built in Blender.",
        color: "bg-yellow-100 dark:bg-yellow-900",
    },
    Service {
        icon: "fa-solid fa-paintbrush text-purple-600 dark:text-purple-400",
        title: "UI Design",
        text: "Interfaces designed in Figma, ready to hand off.",
        color: "bg-purple-100 dark:bg-purple-900",
    },
    Service {
        icon: "fa-solid fa-robot text-red-600 dark:text-red-400",
        title: "Discord Bots",
        text: "Moderation, utility and community bots.",
        color: "bg-red-100 dark:bg-red-900",
    },
    Service {
        icon: "fa-solid fa-server text-indigo-600 dark:text-indigo-400",
        title: "Databases",
        text: "Schemas and queries for MySQL, MongoDB, SQLite and Supabase.",
        color: "bg-indigo-100 dark:bg-indigo-900",
    },
];

#[component]
pub fn Services() -> impl IntoView {
    let (title_ref, title_visible) = use_reveal();
    let (grid_ref, grid_visible) = use_reveal();

    view! {
        <section id="services" class="py-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div
                    node_ref=title_ref
                    class=move || reveal_class("text-center mb-12 fade-in-up", title_visible.get())
                >
                    <h2 class="text-3xl font-bold">"Services"</h2>
                </div>
                <div
                    node_ref=grid_ref
                    class=move || {
                        reveal_class(
                            "grid md:grid-cols-2 lg:grid-cols-3 gap-8 fade-in-up",
                            grid_visible.get(),
                        )
                    }
                >
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="bg-white dark:bg-slate-800 p-6 rounded-lg shadow-md hover:shadow-lg transition-shadow duration-300">
                                    <div class=format!(
                                        "w-14 h-14 {} rounded-full flex items-center justify-center mb-4",
                                        service.color,
                                    )>
                                        <i class=format!("{} text-2xl", service.icon)></i>
                                    </div>
                                    <h3 class="text-xl font-semibold mb-2">{service.title}</h3>
                                    <p class="text-gray-600 dark:text-gray-300">{service.text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

use super::hooks::{use_active_section, use_language, use_theme};
use crate::scroll::Section;

const DESKTOP_LINK: &str = "nav-link px-3 py-2 transition-all duration-300";
const MOBILE_LINK: &str =
    "block px-3 py-2 rounded-md text-base font-medium transition-all duration-300";

fn desktop_link_class(section: Section, active: Section) -> String {
    if section == active {
        format!("{DESKTOP_LINK} active")
    } else {
        DESKTOP_LINK.to_string()
    }
}

fn mobile_link_class(section: Section, active: Section) -> String {
    if section == active {
        format!("{MOBILE_LINK} text-blue-600 dark:text-blue-400")
    } else {
        format!("{MOBILE_LINK} hover:text-blue-600 dark:hover:text-blue-400")
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let language = use_language();
    let active = use_active_section();
    let (menu_open, set_menu_open) = signal(false);

    let toggle_theme = move |_| theme.update(|t| t.toggle());
    let toggle_language = move |_| language.update(|l| l.toggle());
    let theme_icon = move || {
        if theme.get().is_dark() {
            "fa-solid fa-sun"
        } else {
            "fa-solid fa-moon"
        }
    };

    view! {
        <nav class="fixed w-full bg-white/80 dark:bg-slate-900/80 backdrop-blur-md z-50 shadow-sm">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <a href="#home" class="text-xl font-bold gradient-text">
                            "Ahmed Alharthi"
                        </a>
                    </div>
                    <div class="hidden md:flex items-center space-x-4">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        class=move || desktop_link_class(section, active.get())
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button
                            class="lang-switch px-2 py-1 rounded hover:bg-gray-200 dark:hover:bg-slate-700 font-bold"
                            on:click=toggle_language
                        >
                            <i class="fa-solid fa-language mx-2"></i>
                            {move || language.get().switch_label()}
                        </button>
                        <button
                            class="p-2 rounded-full hover:bg-gray-200 dark:hover:bg-slate-700"
                            aria-label="Toggle theme"
                            on:click=toggle_theme
                        >
                            <i class=theme_icon></i>
                        </button>
                    </div>
                    <div class="md:hidden flex items-center space-x-4">
                        <button
                            class="lang-switch px-2 py-1 rounded hover:bg-gray-200 dark:hover:bg-slate-700 font-bold"
                            on:click=toggle_language
                        >
                            {move || language.get().switch_label()}
                        </button>
                        <button
                            class="p-2 rounded-md hover:bg-gray-200 dark:hover:bg-slate-700"
                            aria-label="Menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <i class="fa-solid fa-bars"></i>
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white dark:bg-slate-800 shadow-lg">
                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        class=move || mobile_link_class(section, active.get())
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <div class="px-3 py-2">
                            <button
                                class="w-full flex items-center p-2 rounded-md hover:bg-gray-100 dark:hover:bg-slate-700"
                                on:click=toggle_theme
                            >
                                <i class=move || format!("{} mr-2", theme_icon())></i>
                                <span>"Toggle Theme"</span>
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_classes() {
        assert!(desktop_link_class(Section::About, Section::About).ends_with(" active"));
        assert!(!desktop_link_class(Section::Home, Section::About).contains("active"));
        assert!(mobile_link_class(Section::Contact, Section::Contact).contains("text-blue-600"));
        assert!(mobile_link_class(Section::Home, Section::Contact).contains("hover:text-blue-600"));
    }
}

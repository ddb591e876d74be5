//! Reactive wrappers that connect the page to preferences, scroll position
//! and GitHub data.
//!
//! Effects only run in the browser, so during server rendering every hook
//! reports its initial value: `home`, light/English, and pending fetches.

use std::future::Future;

use leptos::{html, prelude::*, task::spawn_local};
use leptos_use::use_element_visibility;

use crate::{
    config::SiteConfig,
    github::{
        load_profile, load_projects, load_stats, FetchState, GithubClient, Profile, Project,
        RequestGeneration, StatsSummary,
    },
    prefs::{BrowserPreferences, Environment, Language, Preference, Theme},
    scroll::Section,
};

/// A persisted preference as a signal. Writes go through the store and the
/// matching document attributes are applied immediately.
pub struct PreferenceHandle<P: Send + Sync + 'static> {
    value: RwSignal<P>,
    prefs: StoredValue<BrowserPreferences>,
}

impl<P: Send + Sync + 'static> Clone for PreferenceHandle<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Send + Sync + 'static> Copy for PreferenceHandle<P> {}

impl<P> PreferenceHandle<P>
where
    P: Preference + Send + Sync + 'static,
{
    pub fn get(&self) -> P {
        self.value.get()
    }

    pub fn set(&self, next: P) {
        self.prefs.with_value(|p| p.set(next)).apply();
        self.value.set(next);
    }

    pub fn update(&self, f: impl FnOnce(P) -> P) {
        self.set(f(self.value.get_untracked()));
    }
}

fn use_preference<P>(resolve: fn(&BrowserPreferences, &Environment) -> P) -> PreferenceHandle<P>
where
    P: Preference + Default + Send + Sync + 'static,
{
    let prefs = StoredValue::new(expect_context::<BrowserPreferences>());
    let value = RwSignal::new(P::default());

    // Resolved on mount rather than during render so the server-rendered
    // markup and the first client render agree.
    Effect::new(move |_| {
        let initial = prefs.with_value(|p| resolve(p, &Environment::detect()));
        initial.document_attrs().apply();
        value.set(initial);
    });

    PreferenceHandle { value, prefs }
}

pub fn use_theme() -> PreferenceHandle<Theme> {
    use_preference(|prefs, env| prefs.theme(env))
}

pub fn use_language() -> PreferenceHandle<Language> {
    use_preference(|prefs, env| prefs.language(env))
}

/// Section currently under the navbar; starts at [`Section::Home`].
pub fn use_active_section() -> ReadSignal<Section> {
    let (active, set_active) = signal(Section::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::scroll::ScrollSpy;

        let spy = StoredValue::new(ScrollSpy::new());
        let on_scroll = move || {
            let scroll_y = window().scroll_y().unwrap_or_default();
            let mut next = spy.get_value();
            let section = next.update(scroll_y, section_top);
            spy.set_value(next);
            if active.get_untracked() != section {
                set_active.set(section);
            }
        };

        Effect::new(move |_| on_scroll());
        let handle = window_event_listener(leptos::ev::scroll, move |_| on_scroll());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_active;
    }

    active
}

#[cfg(feature = "hydrate")]
fn section_top(section: Section) -> Option<f64> {
    use wasm_bindgen::JsCast;

    let el = document()
        .get_element_by_id(section.id())?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(f64::from(el.offset_top()))
}

/// Reruns `load` whenever `user` changes. Only the newest request may
/// commit; earlier ones that finish late are dropped.
fn use_fetch<T, F, Fut>(user: Signal<String>, load: F) -> ReadSignal<FetchState<T>>
where
    T: Default + Send + Sync + 'static,
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = FetchState<T>> + 'static,
{
    let state = RwSignal::new(FetchState::<T>::pending());
    let generation = RequestGeneration::default();

    Effect::new(move |_| {
        let user = user.get();
        let ticket = generation.next();
        state.update(|s| s.loading = true);
        let pending = load(user);
        spawn_local(async move {
            let next = pending.await;
            state.maybe_update(|s| {
                let committed = ticket.commit(s, next);
                if !committed {
                    log::debug!("discarding superseded response");
                }
                committed
            });
        });
    });

    state.read_only()
}

pub fn use_github_profile(user: Signal<String>) -> ReadSignal<FetchState<Option<Profile>>> {
    let config = expect_context::<SiteConfig>();
    let api = GithubClient::new(config.profile_base);
    use_fetch(user, move |user| {
        let api = api.clone();
        async move {
            load_profile(&api, &user)
                .await
                .unwrap_or_else(FetchState::idle)
        }
    })
}

pub fn use_github_stats(user: Signal<String>) -> ReadSignal<FetchState<Option<StatsSummary>>> {
    let config = expect_context::<SiteConfig>();
    let api = GithubClient::new(config.api_base.clone());
    use_fetch(user, move |user| {
        let api = api.clone();
        let config = config.clone();
        async move { load_stats(&api, &user, &config).await }
    })
}

pub fn use_github_projects(user: Signal<String>) -> ReadSignal<FetchState<Vec<Project>>> {
    let config = expect_context::<SiteConfig>();
    let api = GithubClient::new(config.api_base.clone());
    use_fetch(user, move |user| {
        let api = api.clone();
        let config = config.clone();
        async move { load_projects(&api, &user, &config).await }
    })
}

/// Element ref plus a flag that turns on the first time the element is
/// in view and stays on.
pub fn use_reveal() -> (NodeRef<html::Div>, Signal<bool>) {
    let node = NodeRef::<html::Div>::new();
    let in_view = use_element_visibility(node);
    let seen = RwSignal::new(false);
    Effect::new(move |_| {
        if in_view.get() && !seen.get_untracked() {
            seen.set(true);
        }
    });
    (node, seen.into())
}

use dioxus::{prelude::*, signals::Signal};
use tracing::{info, warn};

use crate::{
    domain::AppState,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{GalleryPage, PreviewPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/gallery")]
    Gallery {},
    #[route("/preview")]
    Preview {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let mut state = use_signal(AppState::default);
    use_hook(move || {
        if let Some(saved) = load_persisted_state() {
            info!(pinned = saved.recent_labels.len(), "restored settings");
            state.with_mut(|st| st.apply_persisted(saved));
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Writes the current settings to disk. Failures are logged and surfaced as a
/// toast; returns whether the write succeeded.
pub fn persist_user_state(state: &Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) -> bool {
    let snapshot = state.with(|st| st.to_persisted());
    match save_persisted_state(&snapshot) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "failed to persist settings");
            push_toast(toasts, ToastKind::Error, format!("Failed to save settings: {err}"));
            false
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    rsx! { Shell { GalleryPage {} } }
}

#[component]
pub fn Preview() -> Element {
    rsx! { Shell { PreviewPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}

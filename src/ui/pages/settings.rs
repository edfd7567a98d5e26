use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::AppState,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::{
        persistence::settings_file,
        version::{version_label, APP_NAME},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (show_classes, pinned_count) = state.with(|st| (st.show_classes, st.recent_labels.len()));
    let settings_path = settings_file()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());
    let about = format!("{APP_NAME} {}", version_label());
    let clear_class = format!("mt-4 {}", theme::BTN_WARNING);
    let path_class = format!("mt-1 {}", theme::TEXT_MUTED);

    let on_toggle_classes = move |_| {
        let mut state = state;
        state.with_mut(|st| st.show_classes = !st.show_classes);
        persist_user_state(&state, toasts);
    };

    let on_clear_pinned = move |_| {
        let mut state = state;
        state.with_mut(|st| st.clear_recent());
        if persist_user_state(&state, toasts) {
            push_toast(toasts, ToastKind::Info, "Cleared pinned labels.");
        }
    };

    rsx! {
        div { class: "space-y-8",
            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Gallery" }
                label { class: "mt-4 flex items-center gap-3 text-sm text-slate-300",
                    input {
                        r#type: "checkbox",
                        checked: show_classes,
                        onchange: on_toggle_classes,
                    }
                    "Show resolved class under each badge"
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Pinned Labels" }
                p { class: "mt-2 text-sm text-slate-400", "{pinned_count} pinned" }
                button { class: "{clear_class}", onclick: on_clear_pinned, "Clear Pinned" }
            }

            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "About" }
                p { class: "mt-2 text-sm text-slate-300", "{about}" }
                p { class: "{path_class}", "Settings file: {settings_path}" }
            }
        }
    }
}

use dioxus::prelude::*;
use tracing::debug;

use crate::{
    app::persist_user_state,
    domain::{rank, AppState},
    ui::{
        components::{
            badge_markup,
            toast::{push_toast, ToastKind, ToastMessage},
            RankBadge,
        },
        theme,
    },
};

#[component]
pub fn PreviewPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.recent_labels.first().cloned().unwrap_or_else(|| "S".to_string()));
    let mut label_input = use_signal(|| initial);

    let label = label_input();
    let badge = rank::render(&label);
    let resolution = badge.resolution.describe();
    let fallback = badge.resolution.is_fallback();
    let markup = badge_markup(&label);
    let recent = state.with(|st| st.recent_labels.clone());

    let on_pin = move |_| {
        let mut state = state;
        let label = label_input();
        debug!(label = %label, "pinning preview label");
        state.with_mut(|st| st.pin_label(&label));
        if persist_user_state(&state, toasts) {
            push_toast(toasts, ToastKind::Success, format!("Pinned \"{label}\"."));
        }
    };
    let field_label = format!("mt-4 {}", theme::LABEL);

    rsx! {
        div { class: "space-y-8",
            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Preview" }
                div { class: "mt-4 grid gap-6 sm:grid-cols-2",
                    div {
                        label { class: theme::LABEL, "Rank label" }
                        input {
                            class: theme::INPUT,
                            value: "{label}",
                            placeholder: "S, A+, A, B, C, D or anything else",
                            oninput: move |evt| label_input.set(evt.value()),
                        }
                        div { class: "mt-4 flex gap-3",
                            button { class: theme::BTN_PRIMARY, onclick: on_pin, "Pin" }
                        }
                    }
                    div { class: "flex flex-col items-start gap-3",
                        RankBadge { rank: label.clone() }
                        span { class: theme::resolution_tag(fallback), "{resolution}" }
                    }
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Output" }
                label { class: "{field_label}", "Class" }
                code { class: theme::CODE, "{badge.class}" }
                label { class: "{field_label}", "HTML" }
                code { class: theme::CODE, "{markup}" }
            }

            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Pinned" }
                PinnedLabels {
                    labels: recent,
                    on_select: move |pinned: String| label_input.set(pinned),
                }
            }
        }
    }
}

/// Pinned labels as clickable badges; clicking one hands its label to `on_select`.
#[component]
fn PinnedLabels(labels: Vec<String>, on_select: EventHandler<String>) -> Element {
    if labels.is_empty() {
        return rsx! {
            p { class: "mt-3 text-sm text-slate-400", "Nothing pinned yet." }
        };
    }

    rsx! {
        div { class: "mt-3 flex flex-wrap gap-3",
            for pinned in labels {
                button {
                    class: "rounded-lg border border-slate-800 bg-slate-900/60 p-1 hover:border-slate-600",
                    title: "Load into preview",
                    onclick: {
                        let load = pinned.clone();
                        move |_| on_select.call(load.clone())
                    },
                    RankBadge { rank: pinned.clone() }
                }
            }
        }
    }
}

use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const TOAST_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn theme(self) -> &'static str {
        match self {
            ToastKind::Info => "border-sky-500/40 bg-sky-500/10 text-sky-100",
            ToastKind::Success => "border-emerald-500/40 bg-emerald-500/10 text-emerald-100",
            ToastKind::Error => "border-rose-500/40 bg-rose-500/10 text-rose-100",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

fn push_bounded(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= TOAST_LIMIT {
        entries.remove(0);
    }
    entries.push(message);
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| push_bounded(entries, message));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "space-y-3",
                for message in messages {
                    ToastCard { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let id = timer_id.clone();
        let mut toasts = toasts;
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let dismiss_id = message.id.clone();
    let theme = message.kind.theme();
    let icon = message.kind.icon();
    rsx! {
        li {
            class: "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {theme}",
            span { class: "text-lg", "{icon}" }
            p { class: "text-sm font-medium", "{message.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| {
                    let target = dismiss_id.clone();
                    let mut toasts = toasts;
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toast_is_dropped_past_limit() {
        let mut entries = Vec::new();
        for i in 0..(TOAST_LIMIT + 2) {
            push_bounded(&mut entries, ToastMessage::new(ToastKind::Info, format!("t{i}")));
        }
        assert_eq!(entries.len(), TOAST_LIMIT);
        assert_eq!(entries[0].text, "t2");
        assert_eq!(entries.last().unwrap().text, format!("t{}", TOAST_LIMIT + 1));
    }
}

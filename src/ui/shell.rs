use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::components::RankBadge;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        RankBadge { rank: "S".to_string() }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "{version}" }
                        }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton { active: matches!(current_route, Route::Gallery {}), onclick: move |_| { nav.push(Route::Gallery {}); }, label: "Gallery" }
                        NavButton { active: matches!(current_route, Route::Preview {}), onclick: move |_| { nav.push(Route::Preview {}); }, label: "Preview" }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

use dioxus::prelude::*;

use crate::{
    domain::{badge_class, AppState, Rank},
    ui::{
        components::{RankBadge, RankLegend},
        theme,
    },
};

/// Labels outside the known set, shown to demonstrate the fallback.
pub const UNKNOWN_SAMPLES: [&str; 3] = ["Z", "s", "?"];

#[component]
pub fn GalleryPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let show_classes = state.with(|st| st.show_classes);

    rsx! {
        div { class: "space-y-8",
            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Known Ranks" }
                BadgeRow {
                    labels: Rank::ALL.iter().map(|rank| rank.label().to_string()).collect::<Vec<_>>(),
                    show_classes,
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Unknown Labels" }
                p { class: "mt-2 text-sm text-slate-400", "Anything outside the known set renders with the fallback style." }
                BadgeRow {
                    labels: UNKNOWN_SAMPLES.iter().map(|label| label.to_string()).collect::<Vec<_>>(),
                    show_classes,
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Legend" }
                div { class: "mt-4", RankLegend {} }
            }
        }
    }
}

#[component]
fn BadgeRow(labels: Vec<String>, show_classes: bool) -> Element {
    let entries = labels
        .iter()
        .map(|label| (label.clone(), badge_class(label)))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "mt-4 flex flex-wrap items-start gap-4",
            for (label, class) in entries {
                div { class: "flex flex-col items-center gap-1",
                    RankBadge { rank: label }
                    if show_classes {
                        code { class: theme::TEXT_MUTED, "{class}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FALLBACK_STYLE;

    #[test]
    fn samples_are_all_unknown() {
        for label in UNKNOWN_SAMPLES {
            assert!(Rank::from_label(label).is_none(), "{label}");
        }
    }

    #[test]
    fn badge_row_shows_classes_on_request() {
        let labels = vec!["S".to_string(), "Z".to_string()];
        let hidden = dioxus_ssr::render_element(rsx! {
            BadgeRow { labels: labels.clone(), show_classes: false }
        });
        assert!(!hidden.contains("<code"));

        let shown = dioxus_ssr::render_element(rsx! {
            BadgeRow { labels, show_classes: true }
        });
        assert_eq!(shown.matches("<code").count(), 2);
        assert!(shown.contains(FALLBACK_STYLE));
    }
}

use dioxus::prelude::*;

use crate::domain::{Rank, FALLBACK_STYLE};
use crate::ui::components::rank_badge::RankBadge;
use crate::ui::theme;

#[derive(Clone, PartialEq)]
struct LegendRow {
    label: &'static str,
    style: &'static str,
    mapped: bool,
}

fn legend_rows() -> Vec<LegendRow> {
    Rank::ALL
        .iter()
        .rev()
        .map(|rank| LegendRow {
            label: rank.label(),
            style: rank.style(),
            mapped: true,
        })
        .chain(std::iter::once(LegendRow {
            label: "?",
            style: FALLBACK_STYLE,
            mapped: false,
        }))
        .collect()
}

/// Table of every known rank, highest first, followed by the fallback row.
#[component]
pub fn RankLegend() -> Element {
    let rows = legend_rows();

    rsx! {
        table {
            class: "w-full text-left text-sm",
            thead {
                class: "border-b border-slate-800 text-xs uppercase text-slate-500",
                tr {
                    th { class: "px-3 py-2", "Badge" }
                    th { class: "px-3 py-2", "Style" }
                    th { class: "px-3 py-2", "Source" }
                }
            }
            tbody {
                class: "divide-y divide-slate-800",
                for row in rows {
                    tr {
                        td { class: "px-3 py-2", RankBadge { rank: row.label.to_string() } }
                        td { class: "px-3 py-2 font-mono text-xs text-slate-300", "{row.style}" }
                        td { class: "px-3 py-2",
                            span {
                                class: theme::resolution_tag(!row.mapped),
                                if row.mapped { "mapped" } else { "fallback" }
                            }
                        }
                    }
                }
            }
        }
    }
}

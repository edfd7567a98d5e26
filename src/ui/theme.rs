//! Shared class strings for the app chrome around the badges.

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400";

pub const BTN_WARNING: &str =
    "rounded-lg border border-amber-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-amber-200 hover:bg-amber-500/10";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub const INPUT: &str =
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none";

// ============================================
// PANEL / TEXT STYLES
// ============================================

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40 p-6";

pub const SECTION_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

pub const TEXT_MUTED: &str = "text-xs text-slate-500";

pub const CODE: &str =
    "mt-1 block overflow-x-auto rounded-lg border border-slate-800 bg-slate-950 px-3 py-2 font-mono text-xs text-slate-300";

pub fn resolution_tag(fallback: bool) -> &'static str {
    if fallback {
        "rounded-full border px-2 py-0.5 text-xs font-medium bg-slate-700/40 text-slate-300 border-slate-600/60"
    } else {
        "rounded-full border px-2 py-0.5 text-xs font-medium bg-emerald-500/10 text-emerald-300 border-emerald-500/40"
    }
}

//! Rank labels and their badge styles.
//!
//! A rank label is any string; the six known labels map to a background
//! style, everything else falls back to a neutral default. Resolution never
//! fails.

use std::{collections::HashMap, fmt, sync::LazyLock};

/// Style used for labels that are not in [`STYLE_MAPPING`].
pub const FALLBACK_STYLE: &str = "bg-gray-300";

/// Tokens applied to every badge: text color, padding, width, shape, alignment.
pub const STRUCTURAL_TOKENS: &str = "text-white px-2 py-1 w-10 inline-block rounded text-center";

/// Label -> rank for the known ranks; the style comes from [`Rank::style`].
/// Built on first access, read-only after.
pub static STYLE_MAPPING: LazyLock<HashMap<&'static str, Rank>> =
    LazyLock::new(|| Rank::ALL.into_iter().map(|rank| (rank.label(), rank)).collect());

/// Known rank tiers, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    D,
    C,
    B,
    A,
    APlus,
    S,
}

impl Rank {
    pub const ALL: [Rank; 6] = [Rank::D, Rank::C, Rank::B, Rank::A, Rank::APlus, Rank::S];

    pub fn label(&self) -> &'static str {
        match self {
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::APlus => "A+",
            Rank::S => "S",
        }
    }

    pub fn style(&self) -> &'static str {
        match self {
            Rank::D => "bg-gray-400",
            Rank::C => "bg-green-500",
            Rank::B => "bg-blue-500",
            Rank::A => "bg-purple-500",
            Rank::APlus => "bg-yellow-500",
            Rank::S => "bg-red-600 font-bold",
        }
    }

    /// Exact, case-sensitive match against the canonical labels.
    pub fn from_label(label: &str) -> Option<Rank> {
        STYLE_MAPPING.get(label).copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which branch of the lookup produced a badge's style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleResolution {
    Mapped(Rank),
    Fallback,
}

impl StyleResolution {
    pub fn is_fallback(&self) -> bool {
        matches!(self, StyleResolution::Fallback)
    }

    pub fn describe(&self) -> String {
        match self {
            StyleResolution::Mapped(rank) => format!("mapped as {rank}"),
            StyleResolution::Fallback => "fallback".to_string(),
        }
    }
}

/// Output of a single render. Not cached; recomputed on every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedBadge {
    pub text: String,
    pub class: String,
    pub resolution: StyleResolution,
}

pub fn resolve_style(label: &str) -> (&'static str, StyleResolution) {
    match Rank::from_label(label) {
        Some(rank) => (rank.style(), StyleResolution::Mapped(rank)),
        None => (FALLBACK_STYLE, StyleResolution::Fallback),
    }
}

pub fn badge_class(label: &str) -> String {
    render(label).class
}

pub fn render(label: &str) -> RenderedBadge {
    let (style, resolution) = resolve_style(label);
    RenderedBadge {
        text: label.to_string(),
        class: format!("{style} {STRUCTURAL_TOKENS}"),
        resolution,
    }
}

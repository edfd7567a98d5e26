pub mod rank_badge;
pub mod rank_legend;
pub mod toast;

pub use rank_badge::{badge_markup, RankBadge};
pub use rank_legend::RankLegend;

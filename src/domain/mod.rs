//! Rank resolution and app state live here.

pub mod app_state;
pub mod rank;

pub use app_state::{AppState, PersistedState};
pub use rank::{badge_class, Rank, FALLBACK_STYLE};

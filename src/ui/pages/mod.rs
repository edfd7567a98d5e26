pub mod gallery;
pub mod preview;
pub mod settings;

pub use gallery::GalleryPage;
pub use preview::PreviewPage;
pub use settings::SettingsPage;

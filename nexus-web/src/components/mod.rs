// Reusable widgets shared across the page

mod details_modal;
mod fullscreen;
mod loader;
mod preview_host;
mod typewriter;

pub use details_modal::DetailsModal;
pub use fullscreen::FullScreenPreview;
pub use loader::Loader;
pub use preview_host::PreviewHost;
pub use typewriter::use_typewriter;

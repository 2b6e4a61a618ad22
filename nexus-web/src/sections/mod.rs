// Storefront page sections

mod carousel;
mod details;
mod footer;
mod hero;
mod nav;
mod process;
mod services;
mod testimonials;

pub use carousel::Carousel;
pub use details::DetailsPanel;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use process::Process;
pub use services::Services;
pub use testimonials::Testimonials;

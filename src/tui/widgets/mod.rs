//! Custom widget components

mod float_icon;
mod footer;
mod header;
mod home;
mod projects;
pub(crate) mod text;

pub use float_icon::FloatIcon;
pub use footer::Footer;
pub use header::NavBar;
pub use home::HomeView;
pub use projects::ProjectsView;

//! The views module contains the page-level components of the app.
//!
//! [`Layout`] is the shell every page renders inside; [`Home`] is the dashboard page and owns
//! the sample data it displays.

mod layout;
pub use layout::Layout;

mod home;
pub use home::Home;

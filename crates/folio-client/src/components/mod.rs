//! UI components for the folio client.

mod animated_background;
mod contact;
mod custom_cursor;
mod education;
mod experience;
mod footer;
mod github_contributions;
mod hero;
mod icon;
mod motion;
mod navbar;
mod projects;
mod skills;
mod theme_toggle;

pub use animated_background::AnimatedBackground;
pub use contact::Contact;
pub use custom_cursor::CustomCursor;
pub use education::Education;
pub use experience::Experience;
pub use footer::Footer;
pub use github_contributions::GithubContributions;
pub use hero::Hero;
pub use icon::ContentIcon;
pub use motion::{ProximityBox, RevealBox};
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;
pub use theme_toggle::ThemeToggle;

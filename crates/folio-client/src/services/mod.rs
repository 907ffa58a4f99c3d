//! Browser implementations of the core seams.

pub mod frame;
pub mod github;
pub mod tween;

pub use frame::RafScheduler;
pub use github::{fetch_contributions, github_config};
pub use tween::{CssTweener, NodeTarget};

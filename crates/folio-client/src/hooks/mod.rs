mod use_contributions;
mod use_localstorage;
mod use_pointer;
mod use_proximity;
mod use_reduced_motion;
mod use_reveal;
mod use_scroll;

pub use use_contributions::*;
pub use use_localstorage::use_localstorage;
pub use use_pointer::*;
pub use use_proximity::*;
pub use use_reduced_motion::*;
pub use use_reveal::use_reveal;
pub use use_scroll::*;

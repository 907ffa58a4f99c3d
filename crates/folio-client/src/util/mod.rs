mod dom;

pub use dom::*;

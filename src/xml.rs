//! Generic XML element tree
//!
//! The tree keeps local names only, so `sdl:seg` and `seg` are the same
//! element to everything built on top of it.

pub mod model;
pub mod parser;

pub use model::{Content, Document, Element};
pub use parser::Parser;

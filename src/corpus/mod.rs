//! Corpus data: the on-disk model and the background loader.

pub mod loader;
pub mod model;

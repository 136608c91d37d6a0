pub mod core;
pub mod sampling;

pub use core::{Language, SnippetPool, SnippetSet, MIXED_KEY};

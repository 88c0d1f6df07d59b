pub mod engine;
pub mod index;
pub mod scoring;
pub mod shared;
pub mod tokenizer;

pub use engine::{ScoredDocument, SearchEngine};
pub use index::{DocId, Document, InvertedIndex};
pub use shared::SharedEngine;

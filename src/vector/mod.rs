pub mod dto;
pub mod engine;
pub mod implementation;

pub use dto::{Document, Match, UpsertVector};
pub use engine::{QueryEngine, VectorQueryEngine};
pub use implementation::PineconeIndex;

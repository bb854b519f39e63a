pub mod generator;

pub use generator::{GenerationRequest, GeneratorError, HistoryEntry, TextGenerator};

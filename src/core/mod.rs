// src/core/mod.rs
pub mod counter;
pub mod engine;
pub mod extractors;
pub mod formatter;
pub mod reducers;
pub mod tokenizer;
pub mod types;
pub mod vocabulary;

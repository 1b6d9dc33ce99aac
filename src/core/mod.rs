// LogSift - core/mod.rs
//
// Core scan engine: parsing, filtering, pipeline, sinks.
// Accepts readers and writers, never opens paths itself — the CLI layer
// owns the filesystem.

pub mod filter;
pub mod model;
pub mod parser;
pub mod scan;
pub mod sink;

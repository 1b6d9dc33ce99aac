// LogSift - lib.rs
//
// Library entry point, exposing the scan engine and utilities for
// integration testing and potential future programmatic use.
//
// The CLI wrapper lives in `main.rs` and is not part of the library surface.

pub mod core;
pub mod util;

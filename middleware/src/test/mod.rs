//! Unit test module
//!
//! Tests live here, separate from source files, and use the crate's public API.
